//! Info panel: the aligned key/value column beside the logo

use pulsefetch_types::{DisplayRow, FactRecord, Field, ToggleSet};

use super::style::PanelStyle;

/// Spaces between the label column and the values
const LABEL_GAP: usize = 2;

/// Title plus the ordered rows that survived filtering
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoPanel {
    pub title: Option<String>,
    pub rows: Vec<DisplayRow>,
}

impl InfoPanel {
    /// Build the panel from the toggles and collected facts.
    ///
    /// Rows always follow the canonical field order, whatever order the
    /// facts were collected in. A row appears only when its toggle is on
    /// and at least one of its values is non-empty.
    pub fn build(toggles: &ToggleSet, facts: &FactRecord) -> Self {
        let rows = Field::ALL
            .iter()
            .filter(|field| toggles.is_enabled(**field))
            .filter_map(|field| {
                let value = facts.field(*field)?;
                DisplayRow::new(field.label(), value.values())
            })
            .collect();

        Self {
            title: title_for(facts.user(), facts.hostname()),
            rows,
        }
    }

    /// Width of the longest included label
    pub fn max_label_width(&self) -> usize {
        self.rows.iter().map(DisplayRow::label_width).max().unwrap_or(0)
    }

    /// Rendered lines, top to bottom
    pub fn lines(&self, style: &PanelStyle) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        if let Some(title) = &self.title {
            lines.push(style.title(title));
            lines.push(style.separator(&"-".repeat(title.chars().count())));
        }

        let width = self.max_label_width();
        let continuation = " ".repeat(width + LABEL_GAP);

        for row in &self.rows {
            let key = format!("{:<width$}{}", row.label, " ".repeat(LABEL_GAP), width = width);
            let key = style.key(&key);

            let mut values = row.values.iter();
            if let Some(first) = values.next() {
                lines.push(format!("{}{}", key, style.value(first)));
            }
            for value in values {
                lines.push(format!("{}{}", continuation, style.value(value)));
            }
        }

        lines
    }

    /// The panel as one block, lines joined with `\n` and no trailing newline
    pub fn render(&self, style: &PanelStyle) -> String {
        self.lines(style).join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.rows.is_empty()
    }
}

/// `user@hostname` when both are known, the bare hostname when only it is
pub fn title_for(user: &str, hostname: &str) -> Option<String> {
    match (user.is_empty(), hostname.is_empty()) {
        (false, false) => Some(format!("{}@{}", user, hostname)),
        (true, false) => Some(hostname.to_string()),
        _ => None,
    }
}

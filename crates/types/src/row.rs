//! Info panel rows

use serde::{Deserialize, Serialize};

/// One labelled entry of the info panel.
///
/// `values` always holds at least one non-empty string; the first shares the
/// label line and the rest become continuation lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub label: String,
    pub values: Vec<String>,
}

impl DisplayRow {
    /// Build a row, or `None` if no value is worth showing
    pub fn new<I, S>(label: impl Into<String>, values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values
            .into_iter()
            .map(Into::into)
            .filter(|value: &String| !value.is_empty())
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(Self {
                label: label.into(),
                values,
            })
        }
    }

    /// Label length in characters
    pub fn label_width(&self) -> usize {
        self.label.chars().count()
    }
}

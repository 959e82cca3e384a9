//! Terminal compositor: places the logo and the info panel side by side
//!
//! Two strategies, picked by the logo kind:
//! - text logos are joined line by line with the panel, padded to a common
//!   width and separated by a fixed gutter;
//! - raster logos are written verbatim, then the cursor is moved back up and
//!   each panel line is drawn to the right of the image.
//!
//! Rendering is stateless: the same inputs always produce the same bytes.

use crossterm::cursor::{MoveDown, MoveRight, MoveUp};
use crossterm::queue;
use pulsefetch_types::{LogoBlock, LogoKind};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

use super::style::PanelStyle;

/// Columns between a text logo and the panel
pub const TEXT_GUTTER: usize = 4;

/// Columns between a raster image and the panel
pub const RASTER_GUTTER: u16 = 2;

/// Write the logo and the info block to `out`.
///
/// `info_block` is the rendered panel, one line per `\n`. Any write error
/// is returned as is.
pub fn render<W: Write>(
    out: &mut W,
    logo: &LogoBlock,
    info_block: &str,
    style: &PanelStyle,
) -> io::Result<()> {
    match logo.kind {
        LogoKind::Raster => render_raster(out, logo, info_block),
        LogoKind::Text => render_text(out, logo, info_block, style),
    }
}

fn render_raster<W: Write>(out: &mut W, logo: &LogoBlock, info_block: &str) -> io::Result<()> {
    out.write_all(logo.content.as_bytes())?;

    let height = logo.height_cells;
    if height > 0 {
        queue!(out, MoveUp(height))?;
    }

    let offset = logo.width_cells.saturating_add(RASTER_GUTTER);
    let mut printed: usize = 0;
    for line in info_block.lines() {
        queue!(out, MoveRight(offset))?;
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        printed += 1;
    }

    let height = usize::from(height);
    if printed < height {
        let remaining = u16::try_from(height - printed).unwrap_or(u16::MAX);
        queue!(out, MoveDown(remaining))?;
    }

    Ok(())
}

fn render_text<W: Write>(
    out: &mut W,
    logo: &LogoBlock,
    info_block: &str,
    style: &PanelStyle,
) -> io::Result<()> {
    let info: Vec<&str> = info_block.lines().collect();

    let art: Vec<&str> = logo.content.lines().collect();
    let width = art.iter().map(|line| line.width()).max().unwrap_or(0);
    let blank = " ".repeat(width + TEXT_GUTTER);

    for row in 0..art.len().max(info.len()) {
        match art.get(row) {
            Some(line) => {
                let padded = format!("{}{}", line, " ".repeat(width - line.width()));
                write!(out, "{}{}", style.logo(&padded), " ".repeat(TEXT_GUTTER))?;
            }
            None => out.write_all(blank.as_bytes())?,
        }
        writeln!(out, "{}", info.get(row).copied().unwrap_or(""))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsefetch_types::GridSize;

    fn render_to_string(logo: &LogoBlock, info_block: &str, style: &PanelStyle) -> String {
        let mut out = Vec::new();
        render(&mut out, logo, info_block, style).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn info_lines(count: usize) -> String {
        (1..=count)
            .map(|n| format!("line {}", n))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_raster_taller_than_panel() {
        let payload = "\x1b_Gimage\x1b\\\n".repeat(20);
        let logo = LogoBlock::raster(payload.clone(), GridSize::RASTER_DEFAULT);

        let output = render_to_string(&logo, &info_lines(15), &PanelStyle::default());

        let mut expected = payload;
        expected.push_str("\x1b[20A");
        for n in 1..=15 {
            expected.push_str(&format!("\x1b[42Cline {}\n", n));
        }
        expected.push_str("\x1b[5B");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_raster_shorter_than_panel() {
        let logo = LogoBlock::raster("px\n".repeat(3), GridSize::new(10, 3));
        let output = render_to_string(&logo, &info_lines(5), &PanelStyle::plain());

        assert!(output.starts_with("px\npx\npx\n\x1b[3A"));
        assert_eq!(output.matches("\x1b[12C").count(), 5);
        assert!(!output.contains('B'));
        assert!(output.ends_with("line 5\n"));
    }

    #[test]
    fn test_raster_without_line_breaks() {
        let logo = LogoBlock::raster("\x1b_Gdata\x1b\\", GridSize::RASTER_DEFAULT);
        assert_eq!(logo.height_cells, 0);

        let output = render_to_string(&logo, "a\nb", &PanelStyle::plain());
        assert_eq!(output, "\x1b_Gdata\x1b\\\x1b[42Ca\n\x1b[42Cb\n");
    }

    #[test]
    fn test_text_pads_logo_and_keeps_gutter() {
        let logo = LogoBlock::text("\n /\\\n/__\\\n");
        let output = render_to_string(&logo, "OS  Arch\nCPU x", &PanelStyle::plain());

        assert_eq!(output, "        OS  Arch\n /\\     CPU x\n/__\\    \n");
    }

    #[test]
    fn test_text_height_is_max_of_both() {
        let logo = LogoBlock::text("\nab\n");
        let output = render_to_string(&logo, &info_lines(4), &PanelStyle::plain());

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "      line 1");
        assert_eq!(lines[1], "ab    line 2");
        assert_eq!(lines[3], "      line 4");
        for line in &lines {
            assert_eq!(line.find("line"), Some(6));
        }
    }

    #[test]
    fn test_text_uniform_logo_width() {
        let logo = LogoBlock::text("\n    _/|\n   /_ |\n  |_____|\n");
        let output = render_to_string(&logo, "", &PanelStyle::plain());

        for line in output.lines() {
            assert_eq!(line.width(), 9 + TEXT_GUTTER);
        }
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_wide_glyph_logo_matches_declared_width() {
        let logo = LogoBlock::text("\n日本\nab\n");
        let output = render_to_string(&logo, "x", &PanelStyle::plain());

        assert_eq!(output, "        x\n日本    \nab      \n");
        for line in output.lines().skip(1) {
            assert_eq!(line.width(), logo.width_cells as usize + TEXT_GUTTER);
        }
    }

    #[test]
    fn test_empty_logo_keeps_gutter() {
        let output = render_to_string(&LogoBlock::empty(), "user@host\n---------", &PanelStyle::plain());
        assert_eq!(output, "    user@host\n    ---------\n");
        assert_eq!(render_to_string(&LogoBlock::empty(), "", &PanelStyle::plain()), "");
    }

    #[test]
    fn test_render_is_idempotent() {
        let style = PanelStyle::default();
        let text = LogoBlock::text("\n /\\\n/__\\\n");
        let raster = LogoBlock::raster("x\n".repeat(20), GridSize::RASTER_DEFAULT);
        let info = info_lines(7);

        for logo in [text, raster] {
            assert_eq!(
                render_to_string(&logo, &info, &style),
                render_to_string(&logo, &info, &style)
            );
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_propagated() {
        let logo = LogoBlock::raster("x\n", GridSize::RASTER_DEFAULT);
        let err = render(&mut BrokenPipe, &logo, "a", &PanelStyle::plain()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}

//! Desktop environment, window manager and WM theme

use crate::util::{env_nonempty, run_command};
use anyhow::Result;
use pulsefetch_core::{CollectorMetadata, FactCollector};
use pulsefetch_types::{FactRecord, Field, ToggleSet};
use std::path::{Path, PathBuf};

/// Sessions that are really a bare window manager; reported as WM, not DE
const STANDALONE_WMS: &[&str] = &["i3", "bspwm", "sway", "dwm", "awesome", "xmonad", "openbox"];

/// Window manager process names and how to show them
const WM_PROCESSES: &[(&str, &str)] = &[
    ("kwin_wayland", "KWin"),
    ("kwin_x11", "KWin"),
    ("gnome-shell", "Mutter"),
    ("mutter", "Mutter"),
    ("xfwm4", "Xfwm4"),
    ("muffin", "Muffin"),
    ("marco", "Marco"),
    ("Hyprland", "Hyprland"),
    ("sway", "sway"),
    ("river", "river"),
    ("niri", "niri"),
    ("labwc", "labwc"),
    ("wayfire", "Wayfire"),
    ("i3", "i3"),
    ("bspwm", "bspwm"),
    ("openbox", "Openbox"),
    ("fluxbox", "Fluxbox"),
    ("icewm", "IceWM"),
    ("herbstluftwm", "herbstluftwm"),
    ("awesome", "awesome"),
    ("xmonad", "xmonad"),
    ("dwm", "dwm"),
];

/// Desktop collector
pub struct DesktopCollector {
    metadata: CollectorMetadata,
    proc_root: PathBuf,
}

impl DesktopCollector {
    pub fn new() -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "desktop",
                "Desktop",
                "Desktop environment, window manager and its theme",
                &[Field::De, Field::Wm, Field::WmTheme],
            ),
            proc_root: PathBuf::from("/proc"),
        }
    }
}

impl Default for DesktopCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for DesktopCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        let session = env_nonempty("XDG_CURRENT_DESKTOP").or_else(|| env_nonempty("DESKTOP_SESSION"));
        let (de, wm) = split_session(session.as_deref().unwrap_or(""));

        if toggles.is_enabled(Field::De) {
            if let Some(de) = de {
                facts.set(Field::De, de);
            }
        }

        if toggles.is_enabled(Field::Wm) {
            if let Some(wm) = wm.or_else(|| detect_wm_process(&self.proc_root)) {
                facts.set(Field::Wm, wm);
            }
        }

        if toggles.is_enabled(Field::WmTheme) {
            let output = run_command("gsettings", &["get", "org.gnome.desktop.wm.preferences", "theme"])?;
            facts.set(Field::WmTheme, unquote_gsettings(&output));
        }

        Ok(())
    }
}

/// Split a session name into (DE, WM). Standalone window managers occupy
/// the WM slot and leave the DE empty.
pub fn split_session(session: &str) -> (Option<String>, Option<String>) {
    if session.is_empty() {
        (None, None)
    } else if STANDALONE_WMS.contains(&session.to_lowercase().as_str()) {
        (None, Some(session.to_string()))
    } else {
        (Some(session.to_string()), None)
    }
}

/// Scan `/proc/*/comm` for a known window manager
pub fn detect_wm_process(proc_root: &Path) -> Option<String> {
    let entries = match std::fs::read_dir(proc_root) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Cannot list {}: {}", proc_root.display(), e);
            return None;
        }
    };

    let running: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.file_name().to_string_lossy().chars().all(|c| c.is_ascii_digit()))
        .filter_map(|entry| std::fs::read_to_string(entry.path().join("comm")).ok())
        .map(|comm| comm.trim().to_string())
        .collect();

    WM_PROCESSES
        .iter()
        .find(|(process, _)| running.iter().any(|comm| comm == process))
        .map(|(_, name)| name.to_string())
}

/// gsettings prints strings quoted, e.g. `'Adwaita'`
fn unquote_gsettings(output: &str) -> String {
    output.trim().trim_matches('\'').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_session() {
        assert_eq!(split_session("GNOME"), (Some("GNOME".to_string()), None));
        assert_eq!(split_session("sway"), (None, Some("sway".to_string())));
        assert_eq!(split_session("i3"), (None, Some("i3".to_string())));
        assert_eq!(split_session(""), (None, None));
    }

    #[test]
    fn test_detect_wm_process() {
        let proc_root = tempfile::tempdir().unwrap();
        for (pid, comm) in [("1", "systemd"), ("812", "kwin_wayland"), ("900", "plasmashell")] {
            let dir = proc_root.path().join(pid);
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join("comm"), format!("{}\n", comm)).unwrap();
        }
        // Non-pid directories are ignored
        std::fs::create_dir_all(proc_root.path().join("sys")).unwrap();

        assert_eq!(detect_wm_process(proc_root.path()).as_deref(), Some("KWin"));
    }

    #[test]
    fn test_detect_wm_process_none() {
        let proc_root = tempfile::tempdir().unwrap();
        assert_eq!(detect_wm_process(proc_root.path()), None);
        assert_eq!(detect_wm_process(&proc_root.path().join("missing")), None);
    }

    #[test]
    fn test_unquote_gsettings() {
        assert_eq!(unquote_gsettings("'Adwaita'\n"), "Adwaita");
    }
}

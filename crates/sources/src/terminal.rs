//! Terminal emulator identification

use crate::util::{env_nonempty, read_trimmed};
use anyhow::{anyhow, Result};
use pulsefetch_core::{CollectorMetadata, FactCollector, TerminalResolver};
use pulsefetch_types::{FactRecord, Field, ToggleSet};
use std::path::PathBuf;

/// Environment variables that give the terminal away, checked in order
const TERMINAL_ENV_HINTS: &[(&str, &str)] = &[
    ("KITTY_PID", "kitty"),
    ("GNOME_TERMINAL_SCREEN", "gnome-terminal"),
    ("GNOME_TERMINAL_SERVICE", "gnome-terminal"),
    ("ALACRITTY_SOCKET", "alacritty"),
    ("ALACRITTY_LOG", "alacritty"),
];

/// Process names folded to a canonical terminal name
const KNOWN_TERMINALS: &[&str] = &["gnome-terminal", "alacritty", "kitty", "termite", "urxvt"];

/// Resolves the terminal from the environment, then by walking the process
/// tree in procfs (pulsefetch -> shell -> terminal), then `$TERM`.
pub struct ProcTerminalResolver {
    proc_root: PathBuf,
}

impl ProcTerminalResolver {
    pub fn new() -> Self {
        Self::with_proc_root("/proc")
    }

    pub fn with_proc_root(proc_root: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: proc_root.into(),
        }
    }

    /// Terminal name for a shell: the `comm` of the shell's parent process
    pub fn terminal_of_shell(&self, shell_pid: u32) -> Result<String> {
        let stat = read_trimmed(self.proc_root.join(shell_pid.to_string()).join("stat"))?;
        let terminal_pid =
            parse_stat_ppid(&stat).ok_or_else(|| anyhow!("bad stat format for pid {}", shell_pid))?;
        let name = read_trimmed(self.proc_root.join(terminal_pid.to_string()).join("comm"))?;
        Ok(normalize_terminal_name(&name))
    }

    #[cfg(unix)]
    fn from_process_tree(&self) -> Option<String> {
        let shell_pid = std::os::unix::process::parent_id();
        match self.terminal_of_shell(shell_pid) {
            Ok(name) if !name.is_empty() => Some(name),
            Ok(_) => None,
            Err(e) => {
                log::debug!("Process tree walk failed: {}", e);
                None
            }
        }
    }

    #[cfg(not(unix))]
    fn from_process_tree(&self) -> Option<String> {
        None
    }
}

impl Default for ProcTerminalResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalResolver for ProcTerminalResolver {
    fn resolve_terminal_name(&self) -> String {
        terminal_from_env(env_nonempty)
            .or_else(|| self.from_process_tree())
            .or_else(|| env_nonempty("TERM"))
            .unwrap_or_default()
    }
}

/// Terminal name from `TERM_PROGRAM` or terminal-specific variables
pub fn terminal_from_env<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(program) = lookup("TERM_PROGRAM") {
        return Some(program);
    }

    TERMINAL_ENV_HINTS
        .iter()
        .find(|(key, _)| lookup(*key).is_some())
        .map(|(_, name)| name.to_string())
}

/// Parent PID from the contents of `/proc/<pid>/stat`.
///
/// The command name is wrapped in parentheses and may itself contain spaces
/// or parentheses, so fields are counted from the last `)`.
pub fn parse_stat_ppid(stat: &str) -> Option<u32> {
    let rest = &stat[stat.rfind(')')? + 1..];
    // state, then ppid
    rest.split_whitespace().nth(1)?.parse().ok()
}

/// Fold process names such as "gnome-terminal-server" to a canonical name
pub fn normalize_terminal_name(name: &str) -> String {
    let name = name.trim_end_matches('-');
    KNOWN_TERMINALS
        .iter()
        .find(|known| name.contains(*known))
        .map(|known| known.to_string())
        .unwrap_or_else(|| name.to_string())
}

/// Terminal collector, delegates to a `TerminalResolver`
pub struct TerminalCollector {
    metadata: CollectorMetadata,
    resolver: Box<dyn TerminalResolver>,
}

impl TerminalCollector {
    pub fn new() -> Self {
        Self::with_resolver(Box::new(ProcTerminalResolver::new()))
    }

    pub fn with_resolver(resolver: Box<dyn TerminalResolver>) -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "terminal",
                "Terminal",
                "Terminal emulator running the shell",
                &[Field::Terminal],
            ),
            resolver,
        }
    }
}

impl Default for TerminalCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for TerminalCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        if toggles.is_enabled(Field::Terminal) {
            facts.set(Field::Terminal, self.resolver.resolve_terminal_name());
        }
        Ok(())
    }
}

//! Installed package counts

use crate::util::run_command;
use anyhow::{bail, Result};
use pulsefetch_core::{CollectorMetadata, FactCollector};
use pulsefetch_types::{FactRecord, Field, ToggleSet};

/// A package manager query
struct PackageManager {
    name: &'static str,
    program: &'static str,
    args: &'static [&'static str],
    /// Header lines to discount from the output
    header_lines: usize,
}

const PACKAGE_MANAGERS: &[PackageManager] = &[
    PackageManager { name: "pacman", program: "pacman", args: &["-Qq"], header_lines: 0 },
    PackageManager {
        name: "dpkg",
        program: "dpkg-query",
        args: &["-f", "${binary:Package}\n", "-W"],
        header_lines: 0,
    },
    PackageManager { name: "rpm", program: "rpm", args: &["-qa"], header_lines: 0 },
    PackageManager { name: "snap", program: "snap", args: &["list"], header_lines: 1 },
    PackageManager { name: "flatpak", program: "flatpak", args: &["list", "--app"], header_lines: 0 },
];

/// Packages collector
///
/// Every manager is queried; missing managers are skipped silently.
pub struct PackagesCollector {
    metadata: CollectorMetadata,
}

impl PackagesCollector {
    pub fn new() -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "packages",
                "Packages",
                "Package counts per installed package manager",
                &[Field::Packages],
            ),
        }
    }
}

impl Default for PackagesCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for PackagesCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        if !toggles.is_enabled(Field::Packages) {
            return Ok(());
        }

        let mut counts = Vec::new();
        for manager in PACKAGE_MANAGERS {
            match run_command(manager.program, manager.args) {
                Ok(output) => {
                    let count = count_packages(&output, manager.header_lines);
                    log::debug!("{}: {} packages", manager.name, count);
                    counts.push((count, manager.name));
                }
                Err(e) => log::trace!("Skipping {}: {}", manager.name, e),
            }
        }

        let summary = format_counts(&counts);
        if summary.is_empty() {
            bail!("no package manager reported any packages");
        }
        facts.set(Field::Packages, summary);
        Ok(())
    }
}

/// Number of package lines in a manager's output
pub fn count_packages(output: &str, header_lines: usize) -> usize {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count()
        .saturating_sub(header_lines)
}

/// "1432 (pacman), 12 (flatpak)"; managers with no packages are left out
pub fn format_counts(counts: &[(usize, &str)]) -> String {
    counts
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, name)| format!("{} ({})", count, name))
        .collect::<Vec<_>>()
        .join(", ")
}

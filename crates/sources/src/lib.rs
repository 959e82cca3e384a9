//! pulsefetch-sources: Fact collector implementations for pulsefetch.

mod battery;
mod cpu;
mod desktop;
mod disk;
mod gpu;
mod identity;
mod memory;
mod model;
mod network;
mod os;
mod packages;
mod resolution;
mod sensors;
mod shell;
mod terminal;
mod theme;
mod util;

pub use battery::BatteryCollector;
pub use cpu::CpuCollector;
pub use desktop::{detect_wm_process, split_session, DesktopCollector};
pub use disk::{format_disk, DiskCollector};
pub use gpu::{parse_lspci, GpuCollector};
pub use identity::IdentityCollector;
pub use memory::{format_memory, MemoryCollector};
pub use model::ModelCollector;
pub use network::{parse_ip_addr, NetworkCollector};
pub use os::{format_uptime, OsCollector};
pub use packages::{count_packages, format_counts, PackagesCollector};
pub use resolution::{parse_xrandr, ResolutionCollector};
pub use sensors::{pick_sensor, SensorsCollector};
pub use shell::{shell_name, ShellCollector};
pub use terminal::{
    normalize_terminal_name, parse_stat_ppid, terminal_from_env, ProcTerminalResolver,
    TerminalCollector,
};
pub use theme::{parse_gtk_setting, GtkThemeCollector};

use pulsefetch_core::{register_collector, CollectorRegistry};

/// Register all built-in collectors, in the order the pipeline runs them
pub fn register_all(registry: &mut CollectorRegistry) {
    register_collector!(registry, "identity", "Identity", IdentityCollector);
    register_collector!(registry, "os", "Operating System", OsCollector);
    register_collector!(registry, "model", "Hardware Model", ModelCollector);
    register_collector!(registry, "packages", "Packages", PackagesCollector);
    register_collector!(registry, "shell", "Shell", ShellCollector);
    register_collector!(registry, "resolution", "Resolution", ResolutionCollector);
    register_collector!(registry, "desktop", "Desktop", DesktopCollector);
    register_collector!(registry, "gtk_theme", "GTK Theme", GtkThemeCollector);
    register_collector!(registry, "terminal", "Terminal", TerminalCollector);
    register_collector!(registry, "cpu", "CPU", CpuCollector);
    register_collector!(registry, "gpu", "GPU", GpuCollector);
    register_collector!(registry, "memory", "Memory", MemoryCollector);
    register_collector!(registry, "disk", "Disk", DiskCollector);
    register_collector!(registry, "network", "Network", NetworkCollector);
    register_collector!(registry, "battery", "Battery", BatteryCollector);
    register_collector!(registry, "sensors", "Sensors", SensorsCollector);
}

/// Registry pre-filled with every built-in collector
pub fn default_registry() -> CollectorRegistry {
    let mut registry = CollectorRegistry::new();
    register_all(&mut registry);
    registry
}

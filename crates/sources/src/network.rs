//! Primary IPv4 address

use crate::util::run_command;
use anyhow::{anyhow, Result};
use pulsefetch_core::{CollectorMetadata, FactCollector};
use pulsefetch_types::{FactRecord, Field, ToggleSet};

/// Network collector, reports the first non-loopback IPv4 address (with
/// prefix length) from iproute2
pub struct NetworkCollector {
    metadata: CollectorMetadata,
}

impl NetworkCollector {
    pub fn new() -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "network",
                "Network",
                "First non-loopback IPv4 address",
                &[Field::Network],
            ),
        }
    }
}

impl Default for NetworkCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for NetworkCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        if toggles.is_enabled(Field::Network) {
            let output = run_command("ip", &["-o", "-4", "addr", "show"])?;
            let address = parse_ip_addr(&output).ok_or_else(|| anyhow!("no IPv4 address"))?;
            facts.set(Field::Network, address);
        }
        Ok(())
    }
}

/// Parse `ip -o -4 addr show`, one interface address per line:
/// `2: wlp3s0    inet 192.168.1.23/24 brd 192.168.1.255 scope global ...`
pub fn parse_ip_addr(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let interface = fields.get(1)?;
        if *interface == "lo" {
            return None;
        }

        let inet = fields.iter().position(|field| *field == "inet")?;
        let address = fields.get(inet + 1)?;
        if address.starts_with("127.") {
            None
        } else {
            Some(address.to_string())
        }
    })
}

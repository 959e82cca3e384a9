//! Built-in ASCII art logos

use serde::{Deserialize, Serialize};

/// Outline pulse
const OUTLINE_LOGO: &str = r"
      ____
     /    \
    |      |
   _|      |_
  / |      | \
 |  |      |  |
 |__|      |__|
    |      |
    |______|
";

/// Pulse wave lettering
const PULSE_LOGO: &str = r"
       _
      | |
 _____| |__
|  _  | '_ \
| | | | | | |
| ||_||_|_|_|
|___|
";

/// Electric bolt, the fallback logo
const ELECTRIC_LOGO: &str = r"
       __
      /  /
     /  /
    /  /____
   /_______/
      /  /
     /__/
";

/// Small stylized bolt
const BOLT_LOGO: &str = r"
    _/|
   /_ |
    | |
    | |
   _| |_
  |_____|
";

/// Selectable ASCII art
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AsciiLogo {
    Outline,
    Pulse,
    #[default]
    Electric,
    Bolt,
}

impl AsciiLogo {
    pub fn art(&self) -> &'static str {
        match self {
            AsciiLogo::Outline => OUTLINE_LOGO,
            AsciiLogo::Pulse => PULSE_LOGO,
            AsciiLogo::Electric => ELECTRIC_LOGO,
            AsciiLogo::Bolt => BOLT_LOGO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logos_end_with_newline() {
        for logo in [AsciiLogo::Outline, AsciiLogo::Pulse, AsciiLogo::Electric, AsciiLogo::Bolt] {
            let art = logo.art();
            assert!(art.ends_with('\n'), "{:?}", logo);
            assert_eq!(art.matches('\n').count(), art.lines().count(), "{:?}", logo);
        }
    }
}

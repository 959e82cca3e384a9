use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use pulsefetch::config::{AppConfig, ImageMode};
use pulsefetch::fetch::collect_facts;
use pulsefetch::ui::{self, AsciiLogo, ChafaRasterizer, InfoPanel, LogoResolver, PanelStyle};
use pulsefetch_core::TerminalResolver;
use pulsefetch_sources::{default_registry, ProcTerminalResolver};
use std::io::Write;
use std::path::PathBuf;

/// pulsefetch - system information beside an ASCII or image logo
#[derive(Parser, Debug, Clone)]
#[command(name = "pulsefetch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the default search paths
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Image to show as the logo (overrides image_path)
    #[arg(short = 'i', long = "image", value_name = "PATH")]
    image: Option<PathBuf>,

    /// Logo mode (overrides image_mode)
    #[arg(short = 'm', long = "image-mode", value_enum, value_name = "MODE")]
    image_mode: Option<ImageMode>,

    /// Built-in ASCII logo (overrides ascii_logo)
    #[arg(short = 'l', long = "logo", value_enum, value_name = "NAME")]
    logo: Option<AsciiLogo>,

    /// Disable colors (also honoured via NO_COLOR)
    #[arg(long = "no-color")]
    no_color: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long = "print-config")]
    print_config: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();

    // Level 0 (default): warn only, so stdout and stderr stay clean
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting pulsefetch v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    apply_overrides(&mut config, &cli);

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let toggles = config.toggles();
    let facts = collect_facts(&default_registry(), &toggles);

    let style = if cli.no_color || no_color_env() {
        PanelStyle::plain()
    } else {
        PanelStyle::from_config(&config.colors)
    };
    let info_block = InfoPanel::build(&toggles, &facts).render(&style);

    let terminal_name = if !facts.terminal().is_empty() {
        facts.terminal().to_string()
    } else if config.image_path.is_some() && config.image_mode != ImageMode::None {
        // Terminal row is switched off but the encoding still depends on it
        ProcTerminalResolver::new().resolve_terminal_name()
    } else {
        String::new()
    };
    debug!("Terminal for graphics: '{}'", terminal_name);

    let rasterizer = ChafaRasterizer::new();
    let logo = LogoResolver::new(&rasterizer).resolve(&config, &terminal_name);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ui::render(&mut out, &logo, &info_block, &style).context("failed to write output")?;
    out.flush().context("failed to write output")?;

    Ok(())
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(image) = &cli.image {
        config.image_path = Some(image.clone());
    }
    if let Some(mode) = cli.image_mode {
        config.image_mode = mode;
    }
    if let Some(logo) = cli.logo {
        config.ascii_logo = logo;
    }
}

/// NO_COLOR convention: any non-empty value disables colors
fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use platform_blueprint_core::{ConvertConfig, ResizeFilter, convert_file, to_json};
use serde::Deserialize;
use tracing::{debug, info};

mod clipboard;

#[derive(Parser, Debug)]
#[command(
    name = "platform-blueprint",
    about = "Convert an image into a space-platform foundation blueprint string",
    version,
    author
)]
struct Cli {
    // Input/Output
    /// Path to image
    #[arg(help_heading = "Input/Output")]
    file_path: PathBuf,
    /// YAML config file path (width/height/invert/threshold/filter); CLI flags take precedence
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,
    /// Print the blueprint string to stdout instead of copying it to the clipboard
    #[arg(long, default_value_t = false, help_heading = "Input/Output")]
    stdout: bool,
    /// Print the uncompressed blueprint JSON and exit
    #[arg(long, default_value_t = false, help_heading = "Input/Output")]
    dump_json: bool,
    /// Print the merged configuration (after YAML/CLI) and exit
    #[arg(long, default_value_t = false, help_heading = "Input/Output")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Input/Output")]
    print_config_format: String,

    // Image Processing
    /// Width of the image for conversion
    #[arg(short = 'W', long, help_heading = "Image Processing")]
    width: Option<u32>,
    /// Height of the image for conversion
    #[arg(short = 'H', long, help_heading = "Image Processing")]
    height: Option<u32>,
    /// Invert the colors of the image
    #[arg(short = 'I', long, default_value_t = false, help_heading = "Image Processing")]
    invert: bool,
    /// Threshold value for grayscale conversion (0-255), default is 128
    #[arg(short = 'T', long, allow_negative_numbers = true, help_heading = "Image Processing")]
    threshold: Option<i64>,
    /// Resize filter: triangle | catmull-rom | gaussian | lanczos3
    #[arg(long, help_heading = "Image Processing")]
    filter: Option<String>,

    // Logging/UX
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, help_heading = "Logging/UX")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cfg = build_config(cli)?;

    if cli.print_config {
        match cli.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }

    let out = convert_file(&cli.file_path, &cfg)
        .with_context(|| format!("convert {}", cli.file_path.display()))?;
    debug!(len = out.blueprint_string.len(), "encoded blueprint string");

    if cli.dump_json {
        println!("{}", to_json(&out.document)?);
        return Ok(());
    }

    if cli.stdout {
        println!("{}", out.blueprint_string);
        return Ok(());
    }

    clipboard::copy_text(&out.blueprint_string)?;
    info!(tiles = out.stats().tiles, "copied to clipboard");
    println!("Blueprint string is copied to clipboard.");
    Ok(())
}

/// Defaults, then the YAML file (if any), then explicit CLI flags.
fn build_config(cli: &Cli) -> anyhow::Result<ConvertConfig> {
    let mut cfg = ConvertConfig::default();
    if let Some(path) = &cli.config {
        let file =
            fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg = y.into_convert_config(cfg)?;
    }
    if let Some(v) = cli.width {
        cfg.width = Some(v);
    }
    if let Some(v) = cli.height {
        cfg.height = Some(v);
    }
    if cli.invert {
        cfg.invert = true;
    }
    if let Some(v) = cli.threshold {
        cfg.threshold = v;
    }
    if let Some(v) = &cli.filter {
        cfg.filter = parse_filter(v)?;
    }
    Ok(cfg)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    // stdout is reserved for the blueprint string / JSON
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    width: Option<u32>,
    height: Option<u32>,
    invert: Option<bool>,
    threshold: Option<i64>,
    filter: Option<String>,
}

impl YamlConfig {
    fn into_convert_config(self, mut cfg: ConvertConfig) -> anyhow::Result<ConvertConfig> {
        if let Some(v) = self.width {
            cfg.width = Some(v);
        }
        if let Some(v) = self.height {
            cfg.height = Some(v);
        }
        if let Some(v) = self.invert {
            cfg.invert = v;
        }
        if let Some(v) = self.threshold {
            cfg.threshold = v;
        }
        if let Some(v) = self.filter {
            cfg.filter = parse_filter(&v)?;
        }
        Ok(cfg)
    }
}

fn parse_filter(s: &str) -> anyhow::Result<ResizeFilter> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("unknown resize filter: {}", s))
}

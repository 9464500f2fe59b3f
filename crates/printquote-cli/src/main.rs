//! printquote CLI - quote 3D-printed parts from the terminal
//!
//! Prices a part from its base volume and print settings, lists the pricing
//! catalogs, and checks pricing config files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use printquote::{PricingEngine, QuoteRequest, RawQuoteRequest};
use printquote_catalog::PricingConfig;

mod report;

#[derive(Parser)]
#[command(name = "printquote")]
#[command(about = "Cost estimation and pricing for 3D-printed parts", long_about = None)]
struct Cli {
    /// Pricing config file (TOML). Uses the built-in catalog when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote a part from command-line settings
    Quote {
        /// Material (pla, petg, abs, tpu, nylon)
        #[arg(short, long)]
        material: String,
        /// Color (black, white, natural, ...)
        #[arg(long)]
        color: String,
        /// Quality tier (draft, standard, high, ultra)
        #[arg(short, long, default_value = "standard")]
        quality: String,
        /// Purpose (prototype, functional, aesthetic)
        #[arg(short, long, default_value = "prototype")]
        purpose: String,
        /// Base model volume (cm3)
        #[arg(long)]
        volume: f64,
        /// Infill density (percent)
        #[arg(short, long, default_value_t = 20.0)]
        infill: f64,
        /// Number of parts
        #[arg(short = 'n', long, default_value_t = 1)]
        quantity: i64,
        /// Flat delivery fee
        #[arg(long, default_value_t = 0.0)]
        delivery_fee: f64,
        /// Printer name (default printer when omitted)
        #[arg(long)]
        printer: Option<String>,
        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },
    /// Quote a part from a JSON request ("-" reads stdin)
    QuoteJson {
        /// Request file
        input: PathBuf,
        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },
    /// List materials, qualities, purposes and printers
    Catalog,
    /// Load and validate a pricing config file
    CheckConfig {
        /// Config file (TOML)
        file: PathBuf,
    },
    /// Print the built-in pricing config as TOML
    DumpConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Quote {
            material,
            color,
            quality,
            purpose,
            volume,
            infill,
            quantity,
            delivery_fee,
            printer,
            json,
        } => {
            let engine = load_engine(cli.config.as_deref())?;
            let raw = RawQuoteRequest {
                material,
                color,
                quality,
                purpose,
                base_volume_cm3: volume,
                infill_percent: infill,
                quantity,
                delivery_fee,
                printer,
            };
            run_quote(&engine, raw, json)?;
        }
        Commands::QuoteJson { input, json } => {
            let engine = load_engine(cli.config.as_deref())?;
            let raw = read_raw_request(&input)?;
            run_quote(&engine, raw, json)?;
        }
        Commands::Catalog => {
            let engine = load_engine(cli.config.as_deref())?;
            print!("{}", report::CatalogReport(engine.catalogs()));
        }
        Commands::CheckConfig { file } => {
            check_config(&file)?;
        }
        Commands::DumpConfig => {
            print!("{}", PricingConfig::builtin().to_toml_string()?);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_engine(config: Option<&Path>) -> Result<PricingEngine> {
    match config {
        Some(path) => {
            let config = PricingConfig::load(path)
                .with_context(|| format!("loading pricing config {}", path.display()))?;
            Ok(PricingEngine::from_config(config)?)
        }
        None => {
            debug!("Using built-in pricing config");
            Ok(PricingEngine::builtin())
        }
    }
}

fn read_raw_request(input: &Path) -> Result<RawQuoteRequest> {
    let text = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("reading request {}", input.display()))?
    };
    serde_json::from_str(&text).context("parsing quote request JSON")
}

fn run_quote(engine: &PricingEngine, raw: RawQuoteRequest, json: bool) -> Result<()> {
    let request = QuoteRequest::try_from(raw)?;
    let quote = engine.estimate(&request)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print!(
            "{}",
            report::QuoteReport {
                request: &request,
                quote: &quote,
            }
        );
    }
    Ok(())
}

fn check_config(file: &Path) -> Result<()> {
    let config = PricingConfig::load(file)
        .with_context(|| format!("checking pricing config {}", file.display()))?;
    println!("{}: ok", file.display());
    println!("  Version: {}", config.version);
    println!("  Materials: {}", config.materials.len());
    println!(
        "  Colors: {}",
        config.materials.iter().map(|m| m.colors.len()).sum::<usize>()
    );
    println!("  Qualities: {}", config.qualities.len());
    println!("  Purposes: {}", config.purposes.len());
    println!("  Printers: {}", config.printers.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quote() {
        let cli = Cli::try_parse_from([
            "printquote",
            "quote",
            "--material",
            "pla",
            "--color",
            "black",
            "--quality",
            "draft",
            "--volume",
            "10",
            "--infill",
            "10",
        ])
        .unwrap();
        match cli.command {
            Commands::Quote {
                material,
                volume,
                quantity,
                purpose,
                json,
                ..
            } => {
                assert_eq!(material, "pla");
                assert_eq!(volume, 10.0);
                assert_eq!(quantity, 1);
                assert_eq!(purpose, "prototype");
                assert!(!json);
            }
            _ => panic!("expected quote"),
        }
    }

    #[test]
    fn test_quote_requires_volume() {
        assert!(Cli::try_parse_from([
            "printquote",
            "quote",
            "--material",
            "pla",
            "--color",
            "black"
        ])
        .is_err());
    }

    #[test]
    fn test_unknown_material_is_rejected() {
        let engine = PricingEngine::builtin();
        let raw = RawQuoteRequest {
            material: "Titanium".into(),
            color: "black".into(),
            quality: "draft".into(),
            purpose: "prototype".into(),
            base_volume_cm3: 10.0,
            infill_percent: 10.0,
            quantity: 1,
            delivery_fee: 0.0,
            printer: None,
        };
        let err = run_quote(&engine, raw, true).unwrap_err();
        assert_eq!(err.to_string(), "unknown material: Titanium");
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["printquote", "catalog", "--config", "shop.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("shop.toml")));
    }
}

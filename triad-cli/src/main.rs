//! Triad CLI - CIA-triad security posture and business-impact assessment

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output
// - Logs go to stderr; stdout carries only the report

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use triad_core::config::{self, ClassificationConfig, TriadConfig};
use triad_core::report::{
    render_compliance_text, render_impact_text, render_list_text, render_metrics_text,
    render_timeline_text,
};
use triad_core::{render_json, AggregationMode, BusinessValueFacade, Rating, SecurityPosture};

#[derive(Parser)]
#[command(name = "triad")]
#[command(about = "Security posture assessment across availability, integrity, and confidentiality")]
#[command(version = env!("TRIAD_VERSION"))]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Path to config file (default: auto-discover)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log engine fallbacks and config resolution to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cost bundle, ROI, risk level, and classification for a posture
    Metrics {
        #[command(flatten)]
        posture: PostureArgs,

        /// Pin the overall rating instead of aggregating
        #[arg(long)]
        pin: Option<String>,

        /// Capex boundary between basic and comprehensive (overrides config file)
        #[arg(long)]
        basic_capex_max: Option<f64>,
    },
    /// Detailed description for a dimension and rating
    Describe {
        dimension: String,
        rating: String,
    },
    /// Ordered recommendations for a dimension and rating
    Recommend {
        dimension: String,
        rating: String,
    },
    /// Business impact and technical implementation for a dimension and rating
    Impact {
        dimension: String,
        rating: String,
    },
    /// Phased implementation timeline for a posture
    Timeline {
        #[command(flatten)]
        posture: PostureArgs,
    },
    /// Framework compliance status for a posture
    Compliance {
        #[command(flatten)]
        posture: PostureArgs,
    },
    /// Validate or inspect a configuration file
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
struct PostureArgs {
    /// Availability rating (None, Low, Moderate, High, Very High)
    #[arg(short, long, default_value = "None")]
    availability: String,

    /// Integrity rating
    #[arg(short, long, default_value = "None")]
    integrity: String,

    /// Confidentiality rating
    #[arg(short, long, default_value = "None")]
    confidentiality: String,
}

impl PostureArgs {
    fn posture(&self) -> SecurityPosture {
        SecurityPosture::from_raw(&self.availability, &self.integrity, &self.confidentiality)
    }
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file without running an assessment
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Metrics {
            posture,
            pin,
            basic_capex_max,
        } => {
            let facade = load_facade(cli.config.as_deref(), basic_capex_max)?;
            let mode = match pin {
                Some(raw) => AggregationMode::manual(parse_pin(&raw)),
                None => AggregationMode::Auto,
            };
            let metrics = facade.security_metrics_with_mode(&posture.posture(), mode);
            match cli.format {
                OutputFormat::Json => println!("{}", render_json(&metrics)),
                OutputFormat::Text => print!("{}", render_metrics_text(&metrics)),
            }
        }
        Commands::Describe { dimension, rating } => {
            let facade = load_facade(cli.config.as_deref(), None)?;
            let description = facade.detailed_description(&dimension, &rating);
            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    render_json(&serde_json::json!({ "description": description }))
                ),
                OutputFormat::Text => println!("{}", description),
            }
        }
        Commands::Recommend { dimension, rating } => {
            let facade = load_facade(cli.config.as_deref(), None)?;
            let recommendations = facade.recommendations(&dimension, &rating);
            match cli.format {
                OutputFormat::Json => println!("{}", render_json(&recommendations)),
                OutputFormat::Text if recommendations.is_empty() => {
                    println!("No recommendations.")
                }
                OutputFormat::Text => print!("{}", render_list_text(&recommendations)),
            }
        }
        Commands::Impact { dimension, rating } => {
            let facade = load_facade(cli.config.as_deref(), None)?;
            let report = facade
                .impact_report(&dimension, &rating)
                .context("invalid impact selection")?;
            match cli.format {
                OutputFormat::Json => println!("{}", render_json(&report)),
                OutputFormat::Text => print!("{}", render_impact_text(&report)),
            }
        }
        Commands::Timeline { posture } => {
            let facade = load_facade(cli.config.as_deref(), None)?;
            let timeline =
                facade.implementation_timeline_with_mode(&posture.posture(), AggregationMode::Auto);
            match cli.format {
                OutputFormat::Json => println!("{}", render_json(&timeline)),
                OutputFormat::Text => print!("{}", render_timeline_text(&timeline)),
            }
        }
        Commands::Compliance { posture } => {
            let facade = load_facade(cli.config.as_deref(), None)?;
            let status = facade.compliance_status(&posture.posture());
            match cli.format {
                OutputFormat::Json => println!("{}", render_json(&status)),
                OutputFormat::Text => print!("{}", render_compliance_text(&status)),
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let project_root = std::env::current_dir()?;
                let path = path.or(cli.config);
                let resolved = config::load_and_resolve(&project_root, path.as_deref());

                match resolved {
                    Ok(config) => {
                        if let Some(ref p) = config.config_path {
                            println!("Config valid: {}", p.display());
                        } else {
                            println!("No config file found. Using defaults.");
                        }
                    }
                    Err(e) => {
                        eprintln!("Config validation failed: {:#}", e);
                        std::process::exit(1);
                    }
                }
            }
            ConfigAction::Show { path } => {
                let project_root = std::env::current_dir()?;
                let path = path.or(cli.config);
                let resolved = config::load_and_resolve(&project_root, path.as_deref())
                    .context("failed to load configuration")?;
                let settings = &resolved.settings;

                println!("Configuration:");
                if let Some(ref p) = resolved.config_path {
                    println!("  Source: {}", p.display());
                } else {
                    println!("  Source: defaults (no config file found)");
                }
                println!();
                println!("Classification:");
                println!("  basic_capex_max: {}", settings.cost.basic_capex_max);
                println!();
                println!("Timeline (weeks per overall rating):");
                for (rating, weeks) in Rating::ALL.iter().zip(settings.timeline.weeks()) {
                    println!("  {}: {}", rating, weeks);
                }
            }
        },
    }

    Ok(())
}

/// Install the stderr log subscriber; `RUST_LOG` wins unless --verbose is set
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolve config from the working directory and apply CLI overrides
fn load_facade(
    config_path: Option<&Path>,
    basic_capex_max: Option<f64>,
) -> anyhow::Result<BusinessValueFacade> {
    let project_root = std::env::current_dir()?;
    let resolved = config::load_and_resolve(&project_root, config_path)
        .context("failed to load configuration")?;

    if let Some(ref path) = resolved.config_path {
        tracing::info!(path = %path.display(), "using config");
    }

    let mut settings = resolved.settings;
    if let Some(max) = basic_capex_max {
        // Same bounds as the config file
        TriadConfig {
            classification: Some(ClassificationConfig {
                basic_capex_max: Some(max),
            }),
            timeline: None,
        }
        .validate()
        .context("invalid --basic-capex-max")?;
        settings.cost.basic_capex_max = max;
    }

    Ok(BusinessValueFacade::new(settings))
}

fn parse_pin(raw: &str) -> Rating {
    Rating::parse_lenient(raw).unwrap_or_else(|| {
        tracing::warn!(input = raw, "unrecognized --pin rating, pinning None");
        Rating::None
    })
}

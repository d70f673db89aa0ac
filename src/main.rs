use clap::{Parser, Subcommand};
use log::LevelFilter;
use utx::config::Config;
use utx::presets;

#[derive(Parser)]
#[command(name = "utx")]
#[command(about = "Split a number into unit-labeled segments", long_about = None)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a value with a preset or configured unit system
    Format {
        /// Value expressed in the ground unit (e.g. milliseconds for "clock")
        value: u64,

        /// Unit system name
        #[arg(short, long, default_value = "clock")]
        system: String,

        /// TOML file declaring extra unit systems
        #[arg(short, long)]
        config: Option<String>,

        /// Omit zero-valued segments
        #[arg(long)]
        no_zero: bool,

        /// Separator placed between segments
        #[arg(long)]
        separator: Option<String>,

        /// Print segments as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// List available unit systems
    List {
        /// TOML file declaring extra unit systems
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Format {
            value,
            system,
            config,
            no_zero,
            separator,
            json,
        } => format_value(
            value,
            &system,
            config.as_deref(),
            no_zero,
            separator.as_deref(),
            json,
        ),
        Commands::List { config } => list_systems(config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_from_file(path)?),
        None => Ok(Config::empty()),
    }
}

fn format_value(
    value: u64,
    system: &str,
    config_path: Option<&str>,
    no_zero: bool,
    separator: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;

    let resolved = config.resolve(system)?;
    println!("{}", resolved.render(value, no_zero, separator, json)?);

    Ok(())
}

fn list_systems(config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;

    println!("Presets:");
    for name in presets::PRESET_NAMES {
        println!("  - {}", name);
    }

    let names = config.system_names();
    if !names.is_empty() {
        println!("\nConfigured ({}):", names.len());
        for name in names {
            let system = config.system(name)?;
            println!(
                "  - {} ({} units, {})",
                name,
                system.units.len(),
                if system.consecutive {
                    "consecutive"
                } else {
                    "absolute"
                }
            );
        }
    }

    Ok(())
}

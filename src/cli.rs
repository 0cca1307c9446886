use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dcm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a docker-compose.yaml and .env from a catalog of self-hosted services")]
#[command(
    long_about = "Pick services from the built-in catalog (or your own catalog files), and dcm assembles a single valid docker-compose.yaml plus a matching .env file: service snippets are reindented into one canonical document, placeholders can be interpolated inline, and host port collisions between services are detected and repaired automatically."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a TOML settings file (missing keys keep their defaults)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Additional catalog files (JSON arrays of service definitions)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Vec<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the services available in the catalog
    List {
        /// Also list services flagged as unsupported
        #[arg(long)]
        unsupported: bool,
    },

    /// Generate docker-compose.yaml and .env for the selected services
    Generate {
        /// Service ids to include, in the order they should appear
        #[arg(value_name = "SERVICE", required = true)]
        services: Vec<String>,

        /// Output directory for the generated files
        #[arg(short, long, value_name = "OUTPUT_DIR")]
        output: Option<PathBuf>,

        /// Substitute ${...} placeholders inline instead of leaving them
        /// for the .env file
        #[arg(long)]
        interpolate: bool,

        /// Print the generated files to stdout without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Overwrite existing output files
        #[arg(long)]
        force: bool,
    },

    /// Validate generated compose files with `docker compose config`
    Validate {
        /// Service ids to validate (defaults to every supported service)
        #[arg(value_name = "SERVICE")]
        services: Vec<String>,
    },
}

impl Cli {
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

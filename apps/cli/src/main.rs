use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use cm_core::config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod domains;

use domains::list::ListArgs;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	Human,
	Json,
}

#[derive(Parser, Debug)]
#[command(name = "classmine", about = "List Classmine and Bordermine records")]
struct Cli {
	/// Path to the classmine data directory
	#[arg(long, env = "CLASSMINE_DATA_DIR")]
	data_dir: Option<PathBuf>,

	/// Output format
	#[arg(long, value_enum, default_value = "human")]
	format: OutputFormat,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// List one page of records owned by a tenant
	List(ListArgs),
	/// Show the effective configuration
	Config,
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	let config = match &cli.data_dir {
		Some(dir) => AppConfig::load_from(dir)?,
		None => AppConfig::load()?,
	};
	init_tracing(&config.log_level);

	match cli.command {
		Commands::List(args) => domains::list::run(&config, cli.format, args).await,
		Commands::Config => domains::config::run(&config, cli.format),
	}
}

/// `RUST_LOG` wins over the configured level
fn init_tracing(level: &str) {
	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(level))
		.unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr))
		.init();
}

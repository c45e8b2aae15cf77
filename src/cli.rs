use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "agent-roster",
    version,
    about = "Agent list validation and taxonomy coverage tooling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Validate(ValidateArgs),
    Taxonomy(TaxonomyArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(long, default_value = "agents.csv")]
    pub csv_path: PathBuf,

    #[arg(long)]
    pub taxonomy_path: Option<PathBuf>,

    #[arg(long, default_value_t = 50)]
    pub min_records: usize,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub attempts: u32,

    #[arg(long, default_value_t = 1000)]
    pub retry_delay_ms: u64,
}

#[derive(Args, Debug, Clone)]
pub struct TaxonomyArgs {
    #[arg(long)]
    pub taxonomy_path: Option<PathBuf>,

    #[arg(long, default_value = "agent_taxonomy.json")]
    pub output_path: PathBuf,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rfptally")]
#[command(about = "Summarize GPU inventory across vendor RFP proposals", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Proposal YAML files to summarize
    pub files: Vec<PathBuf>,

    /// Scan a directory for proposal documents (*.yaml, *.yml)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Reference tier-1 price each proposal is scaled against
    #[arg(long, default_value_t = 1.7)]
    pub target_price: f64,

    /// Output CSV path (default: summary_tp<target-price>.csv)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Print summaries as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Skip the CSV file and only print to stdout
    #[arg(long)]
    pub no_csv: bool,
}

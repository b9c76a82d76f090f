use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "sitecheck")]
#[clap(about = "AI-assisted phishing site evaluation", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Check {
        /// Site to evaluate (https:// is assumed when the scheme is missing)
        url: String,
        /// Pre-captured page screenshot for the visual analyzer
        #[clap(short, long)]
        screenshot: Option<String>,
        /// Print the raw report JSON instead of the human summary
        #[clap(long)]
        json: bool,
        /// Hide the technical details section
        #[clap(long)]
        no_verbose: bool,
        /// Fusion weight override as "content,visual,reputation"
        #[clap(long)]
        weights: Option<String>,
        /// Per-analyzer deadline override in seconds
        #[clap(long)]
        analyzer_timeout: Option<u64>,
        /// Whole-pipeline deadline override in seconds
        #[clap(long)]
        deadline: Option<u64>,
    },
    Init,
    Validate,
}

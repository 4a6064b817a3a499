use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Write a sample config file to ~/velocityiq/config.toml
    Init,
    /// Serve the JSON API
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        host: Option<String>,
        /// Open the health endpoint in a browser once listening
        #[clap(long)]
        open: bool,
    },
    /// Print the risk-ranked tech-debt items as JSON
    TechDebt,
    /// Print suggested dependencies as JSON
    Dependencies {
        #[clap(short, long)]
        seed: Option<u64>,
    },
    /// Check the SonarQube connection
    Check,
}

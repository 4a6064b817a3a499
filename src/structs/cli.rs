use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "velocityiq")]
#[clap(about = "Technical-debt risk scoring from SonarQube and GitHub data", long_about = None)]
#[clap(version)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

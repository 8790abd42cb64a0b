//! Command line interface

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON rules file
    #[clap(short, long, default_value = "rules.json")]
    pub config: PathBuf,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the current public IP and exit
    Ip,
    /// Allow the current public IP on every configured port
    Open,
    /// Remove the current public IP from every configured port
    Close,
}

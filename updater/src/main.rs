#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;

use crate::cli::Args;
use crate::cli::Command;
use crate::config::Config;
use crate::firewall::FirewallManager;

mod cli;
mod config;
mod firewall;
mod public_ip;
#[cfg(test)]
mod tests;

const DEFAULT_RUST_LOG: &str = "ip_updater=info";

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();

    let args = Args::parse();
    let config = Config::from_file(&args.config)?;

    match args.command {
        Command::Ip => {
            let public_ip = public_ip::fetch(&config.ip_server).await?;

            println!("{public_ip}");
        }
        Command::Open => {
            let firewall = FirewallManager::new(&config).await?;

            for change in firewall.open_ports(&config.rules).await? {
                println!("{change}");
            }
        }
        Command::Close => {
            let firewall = FirewallManager::new(&config).await?;

            for change in firewall.close_ports(&config.rules).await? {
                println!("{change}");
            }
        }
    }

    Ok(())
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::registry;

    // an empty `RUST_LOG` counts as unset
    let filter = std::env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| String::from(DEFAULT_RUST_LOG));

    registry()
        .with(EnvFilter::new(filter))
        .with(fmt::layer())
        .init();
}

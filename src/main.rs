#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
// the runtime's service contract wants an async handler, even one that never awaits
#![allow(clippy::unused_async)]

use lambda_runtime::Error;
use lambda_runtime::service_fn;

use crate::handler::handle;

mod handler;
mod request;
mod response;
#[cfg(test)]
mod tests;

// the crate is named after the binary target, `bootstrap`
const DEFAULT_RUST_LOG: &str = "bootstrap=info";

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    tracing::info!("Waiting for invocations");

    lambda_runtime::run(service_fn(handle)).await
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

    // the platform's log sink stamps every line itself
    registry()
        .with(EnvFilter::new(filter))
        .with(fmt::layer().without_time())
        .init();
}

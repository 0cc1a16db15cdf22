use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pizza_ordering::config::AppConfig;
use pizza_ordering::console::Session;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the console menus.
    // Default to WARN, override with RUST_LOG.
    // Example: RUST_LOG=pizza_ordering=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        customer = %config.customer_name,
        currency = %config.currency,
        "Starting pizza ordering session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config)?;
    session.run()?;

    tracing::info!(
        loyalty_points = session.profile().loyalty_points(),
        "Session finished"
    );
    Ok(())
}

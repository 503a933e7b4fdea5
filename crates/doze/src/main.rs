//! doze: pause for a number of seconds given on the command line.

mod cli;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let seconds = doze_core::seconds_or_zero(cli.seconds.as_deref());
    doze_core::pause(seconds);

    Ok(())
}

/// Install the diagnostic subscriber. Emits nothing unless `RUST_LOG`
/// asks for output, so the command stays silent by default.
fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;

    Ok(())
}

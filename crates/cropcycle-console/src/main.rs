//! Operator console for the crop cycle reactor.
//!
//! Runs the reactor against an in-memory farm and reads commands from
//! stdin, one per line. It stands in for a game server host: clicks are
//! delivered as interaction events, the host's default break runs when the
//! reactor does not suppress it, and the `autofarm` admin command is
//! executed as the console player.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Resolve the config path (first argument, `CROPCYCLE_CONFIG`, or
//!    `cropcycle-config.yaml`) and write the default file if missing
//! 3. Load the configuration context and build the reactor
//! 4. Plant the demo farm and create the operator player
//! 5. Read and run commands until `quit` or end of input

mod command;
mod error;
mod session;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cropcycle_actors::{Actor, DEFAULT_NAMESPACE, PermissionGate};
use cropcycle_core::admin::AdminSurface;
use cropcycle_core::config::{DEFAULT_CONFIG_FILE, FileSettingsSource};
use cropcycle_core::context::ConfigurationContext;
use cropcycle_core::reactor::Reactor;

use crate::command::ConsoleCommand;
use crate::session::{Reply, Session, demo_world};

/// Environment variable naming the configuration file.
const CONFIG_ENV: &str = "CROPCYCLE_CONFIG";

/// Application entry point for the console.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the demo farm
/// cannot be planted, or stdin/stdout fail.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("cropcycle-console starting");

    // 2. Resolve and seed the configuration file.
    let source = FileSettingsSource::new(config_path());
    source
        .write_default_if_missing()
        .with_context(|| format!("writing default config to {}", source.path().display()))?;

    // 3. Load the context and build the reactor.
    let context = Arc::new(
        ConfigurationContext::load(source).context("loading configuration")?,
    );
    let gate = PermissionGate::new(DEFAULT_NAMESPACE);
    let reactor = Reactor::new(Arc::clone(&context), gate.clone());
    let admin = AdminSurface::new(context, gate, DEFAULT_NAMESPACE);
    reactor.on_enable();

    // 4. Plant the demo farm.
    let world = demo_world().context("planting demo farm")?;
    info!(cells = world.cell_count(), "Demo farm planted");
    let player = Actor::operator("Console");
    let mut session = Session::new(reactor, admin, world, player);

    // 5. Command loop.
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    stdout.write_all(b"type `help` for commands\n").await?;
    while let Some(line) = lines.next_line().await? {
        let reply = match line.parse::<ConsoleCommand>() {
            Ok(command) => session.handle(command),
            Err(err) => {
                warn!(input = %line, error = %err, "Rejected console input");
                Reply::Lines(vec![err.to_string()])
            }
        };
        match reply {
            Reply::Quit => break,
            Reply::Lines(out) => {
                for text in out {
                    stdout.write_all(text.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                }
                stdout.flush().await?;
            }
        }
    }

    session.shutdown();
    info!(
        items = session.player().inventory().total_items(),
        experience = session.player().experience(),
        pickups = session.world().pickups().len(),
        "cropcycle-console stopped"
    );
    Ok(())
}

/// Config path from the first argument, then the environment, then the
/// default file name in the working directory.
fn config_path() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV))
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from)
}

use anyhow::Context;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medware_core::config::{SYMPTOM_TABLE_ENV, USER_ENV, path_from_env_value};
use medware_core::{CoreConfig, PredictorSession};

mod repl;

/// Main entry point for the Medware predictor session
///
/// Resolves configuration once, loads the symptom table and then runs an interactive
/// session on stdin/stdout. Logs go to stderr.
///
/// # Environment Variables
/// - `MEDWARE_SYMPTOM_TABLE`: YAML symptom table to use instead of the embedded one
/// - `MEDWARE_USER`: name of the user the session belongs to
/// - `RUST_LOG`: log filter (default: "medware=info")
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medware=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cfg = CoreConfig::new(
        path_from_env_value(std::env::var(SYMPTOM_TABLE_ENV).ok()),
        std::env::var(USER_ENV).ok(),
    )
    .context("invalid configuration")?;
    let table = cfg.load_table().context("failed to load symptom table")?;

    tracing::info!("++ Starting Medware predictor session");

    let mut session =
        PredictorSession::new(table).with_user(cfg.user_name().map(str::to_string));
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut session, stdin.lock(), &mut stdout)?;

    Ok(())
}

//! `karma`: feed chat lines on stdin, read bot replies on stdout.
//!
//! ```bash
//! KARMA_CONFIG=karma.toml KARMA_USER=alice karma
//! echo "karma delete foo" | KARMA_USER=root KARMA_ADMIN=1 karma
//! ```
//!
//! Store failures are logged and the loop moves on to the next line.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use karma_commands::{Dispatcher, Invocation};
use karma_core::{KarmaConfig, KarmaContext};
use karma_observability::{init_tracing, message_span, startup_span};
use karma_storage::SqliteScoreStore;

const CONFIG_ENV: &str = "KARMA_CONFIG";
const USER_ENV: &str = "KARMA_USER";
const ADMIN_ENV: &str = "KARMA_ADMIN";

fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = KarmaConfig::load(config_path.as_deref()).context("failed to load configuration")?;
    init_tracing(&config.observability);

    let invocation = invocation_from_env();
    tracing::info!(
        version = karma_core::constants::VERSION,
        user = %invocation.user,
        privileged = invocation.privileged,
        "karma starting"
    );

    let db_path = config.storage.db_path.clone();
    let ctx = {
        let _span = startup_span!(db_path).entered();
        let store = SqliteScoreStore::open(Path::new(&db_path), &config.storage)
            .with_context(|| format!("failed to open score store at {db_path}"))?;
        KarmaContext::new(config, Arc::new(store))
    };
    let dispatcher = Dispatcher::new(&ctx).context("failed to start dispatcher")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let _span = message_span!(invocation.user).entered();
        match dispatcher.handle(&line, &invocation) {
            Ok(replies) => {
                for reply in replies {
                    writeln!(stdout, "{reply}")?;
                }
                stdout.flush()?;
            }
            Err(e) => tracing::error!(error = %e, "command failed"),
        }
    }
    Ok(())
}

fn invocation_from_env() -> Invocation {
    let user = std::env::var(USER_ENV)
        .or_else(|_| std::env::var("USER"))
        .unwrap_or_else(|_| "anonymous".to_string());
    let privileged = std::env::var(ADMIN_ENV)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);
    Invocation { user, privileged }
}

//! Tracing setup for the `teamdeal` binary.
//!
//! teamdeal is interactive: stdout carries the prompts ("Enter role: ", ...)
//! and, at the end, the team tables or JSON report. A user piping the report
//! into a file or into `jq` must get only that, so every log line is written
//! to stderr instead. Malformed input is reported on stderr as well, by the
//! binary's error exit, never by this subscriber.
//!
//! The default level is chosen by the binary (`WARN`, `DEBUG` with `-v`);
//! `RUST_LOG` overrides it, e.g. `RUST_LOG=teamdeal_core=debug` shows every
//! round of the deal.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber, writing to stderr.
///
/// `json` switches to one JSON object per log line; `level` applies when
/// `RUST_LOG` is unset. Later calls are ignored.
pub fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}

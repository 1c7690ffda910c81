//! teamdeal - split a pool of people into teams by role quota
//!
//! Interactive: asks for the roles, how many of each role a team needs, and
//! then the members one by one (an empty answer ends member entry). Members
//! are shuffled within their role and dealt round by round into teams; the
//! final incomplete team is dropped.
//!
//! Exit status is 0 on success. Malformed numbers and unreadable input end
//! the process with a diagnostic on stderr and a non-zero status.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};

use teamdeal_core::{form_teams, render, OutputFormat, RoleOrder, SetupReader};

#[derive(Parser, Debug)]
#[command(name = "teamdeal")]
#[command(author = "Stevedores Org")]
#[command(version = teamdeal_core::VERSION)]
#[command(about = "Split people into balanced teams by role quota", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,

    /// Seed for the shuffle (random when omitted)
    #[arg(long, env = "TEAMDEAL_SEED")]
    seed: Option<u64>,

    /// Order in which roles are dealt within a team
    #[arg(long, value_enum, default_value_t = RoleOrderArg::Declared)]
    role_order: RoleOrderArg,

    /// Report format
    #[arg(long, value_enum, default_value_t = FormatArg::Table)]
    format: FormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RoleOrderArg {
    /// Order the roles were entered in
    Declared,
    /// Alphabetical by role name
    Sorted,
    /// Random order every round
    Shuffled,
}

impl From<RoleOrderArg> for RoleOrder {
    fn from(arg: RoleOrderArg) -> Self {
        match arg {
            RoleOrderArg::Declared => RoleOrder::Declared,
            RoleOrderArg::Sorted => RoleOrder::Sorted,
            RoleOrderArg::Shuffled => RoleOrder::Shuffled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// One fixed-width table per team
    Table,
    /// Pretty-printed JSON report
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut reader = SetupReader::new(stdin.lock(), stdout.lock());
    let setup = reader.read_setup().context("Failed to read setup")?;
    let (_, mut out) = reader.into_inner();

    info!(
        roles = setup.quotas.len(),
        members = setup.members.len(),
        seed = ?cli.seed,
        role_order = %RoleOrder::from(cli.role_order),
        "setup complete"
    );

    let mut rng = rng_from_seed(cli.seed);
    let outcome = form_teams(setup, cli.role_order.into(), &mut rng);

    if outcome.teams.is_empty() {
        return Ok(());
    }
    let report = render(&outcome.teams, cli.format.into()).context("Failed to render teams")?;
    out.write_all(report.as_bytes())
        .and_then(|_| out.flush())
        .context("Failed to write report")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    teamdeal_core::init_tracing(cli.json, level);

    run(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_comes_from_core() {
        assert_eq!(Cli::command().get_version(), Some(teamdeal_core::VERSION));
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["teamdeal"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.json);
        assert_eq!(cli.role_order, RoleOrderArg::Declared);
        assert_eq!(cli.format, FormatArg::Table);
    }

    #[test]
    fn parses_seed_order_and_format() {
        let cli = Cli::try_parse_from([
            "teamdeal",
            "--seed",
            "42",
            "--role-order",
            "sorted",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(RoleOrder::from(cli.role_order), RoleOrder::Sorted);
        assert_eq!(OutputFormat::from(cli.format), OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_unknown_role_order() {
        assert!(Cli::try_parse_from(["teamdeal", "--role-order", "random"]).is_err());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        use rand::Rng;
        let a: u64 = rng_from_seed(Some(5)).gen();
        let b: u64 = rng_from_seed(Some(5)).gen();
        assert_eq!(a, b);
    }
}

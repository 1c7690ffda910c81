//! teamdeal core library
//!
//! Splits a pool of members into teams by per-role quota: members are grouped
//! into one shuffled [`RoleStack`] per role, then dealt round by round until
//! some role runs dry. The last, incomplete round is discarded.

pub mod assigner;
pub mod distributor;
pub mod domain;
pub mod obs;
pub mod pipeline;
pub mod reporter;
pub mod role_stack;
pub mod setup;
pub mod telemetry;

pub use assigner::{assign, RoleOrder};
pub use distributor::{distribute, RolePools};
pub use domain::{normalize_role, Member, QuotaTable, Result, Team, TeamDealError};
pub use obs::{
    emit_dealing_finished, emit_member_unassigned, emit_pools_distributed, emit_round_completed,
    emit_round_terminal, DealSpan,
};
pub use pipeline::{form_teams, DealOutcome, DealSummary, RoleLeftover};
pub use reporter::{render, render_table, OutputFormat, TeamEntry, TeamReport};
pub use role_stack::RoleStack;
pub use setup::{Setup, SetupReader};
pub use telemetry::init_tracing;

/// teamdeal version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

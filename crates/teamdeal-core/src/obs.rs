//! Structured observability hooks for a dealing pass.
//!
//! Events are emitted under the `event` field so they can be filtered with
//! `RUST_LOG`. Round-level events are `debug!`; pass-level ones are `info!`.

use tracing::{debug, info, warn};

/// RAII guard that enters a deal-scoped tracing span.
///
/// ```ignore
/// let _span = DealSpan::enter(3, 12);
/// // events below carry roles = 3, members = 12
/// ```
pub struct DealSpan {
    _span: tracing::span::EnteredSpan,
}

impl DealSpan {
    pub fn enter(roles: usize, members: usize) -> Self {
        let span = tracing::info_span!("teamdeal.deal", roles = roles, members = members);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: members grouped into per-role pools and shuffled.
pub fn emit_pools_distributed(pools: usize, pooled: usize, unassigned: usize) {
    info!(
        event = "pools.distributed",
        pools = pools,
        pooled = pooled,
        unassigned = unassigned,
    );
}

/// Emit event: a member named a role that was never declared.
pub fn emit_member_unassigned(name: &str, role: &str) {
    warn!(event = "member.unassigned", name = %name, role = %role, "role was not declared; member will not be dealt");
}

/// Emit event: a round filled every quota and produced a team.
pub fn emit_round_completed(round: usize, team_size: usize) {
    debug!(event = "round.completed", round = round, team_size = team_size);
}

/// Emit event: a round stopped and its partial team was discarded.
///
/// `role` is the role whose pool was already empty, or `None` when the round
/// dealt nobody at all.
pub fn emit_round_terminal(round: usize, role: Option<&str>, discarded: usize) {
    debug!(
        event = "round.terminal",
        round = round,
        role = role.unwrap_or("-"),
        discarded = discarded,
    );
}

/// Emit event: dealing finished.
pub fn emit_dealing_finished(teams: usize, dealt: usize, left_over: usize) {
    info!(
        event = "dealing.finished",
        teams = teams,
        dealt = dealt,
        left_over = left_over,
    );
}

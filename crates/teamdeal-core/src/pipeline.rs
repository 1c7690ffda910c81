//! End-to-end dealing: distribute, assign, summarize.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::assigner::{assign, RoleOrder};
use crate::distributor::distribute;
use crate::domain::Team;
use crate::obs::{self, DealSpan};
use crate::setup::Setup;

/// Members a role still had when dealing stopped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleLeftover {
    pub role: String,
    pub remaining: usize,
}

/// What happened during a deal, beyond the teams themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealSummary {
    pub teams_formed: usize,
    pub members_dealt: usize,
    /// Per declared role, in declaration order.
    pub leftovers: Vec<RoleLeftover>,
    /// Members whose role was never declared.
    pub unassigned: usize,
    /// Members popped into the final, discarded round.
    pub discarded: usize,
}

/// Result of [`form_teams`].
#[derive(Debug, Clone, PartialEq)]
pub struct DealOutcome {
    pub teams: Vec<Team>,
    pub summary: DealSummary,
}

/// Shuffle `setup`'s members into role pools and deal them into teams.
pub fn form_teams<R: Rng + ?Sized>(setup: Setup, order: RoleOrder, rng: &mut R) -> DealOutcome {
    let Setup { quotas, members } = setup;
    let total = members.len();
    let _span = DealSpan::enter(quotas.len(), total);

    let mut pools = distribute(&quotas, members, rng);
    let teams = assign(&mut pools, &quotas, order, rng);

    let leftovers: Vec<RoleLeftover> = quotas
        .roles()
        .iter()
        .map(|role| RoleLeftover {
            role: role.clone(),
            remaining: pools.remaining(role),
        })
        .collect();
    let members_dealt: usize = teams.iter().map(Team::len).sum();
    let unassigned = pools.unassigned().len();
    let summary = DealSummary {
        teams_formed: teams.len(),
        members_dealt,
        leftovers,
        unassigned,
        discarded: total - members_dealt - unassigned - pools.total_remaining(),
    };

    obs::emit_dealing_finished(
        summary.teams_formed,
        summary.members_dealt,
        pools.total_remaining(),
    );
    DealOutcome { teams, summary }
}

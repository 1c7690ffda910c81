//! Round-based dealing of pooled members into teams.
//!
//! Each round starts an empty team and visits every declared role. A role
//! whose pool is already empty ends the deal and the round's partial team is
//! discarded. Otherwise up to `quota` members are popped from that pool.
//!
//! The emptiness check happens once per role per round, before popping. A
//! pool holding fewer members than its quota still contributes what it has
//! to the current team; the following round then finds it empty and is
//! dropped.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distributor::RolePools;
use crate::domain::{QuotaTable, Team};
use crate::obs;

/// Order in which roles are visited inside a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoleOrder {
    /// Declaration order.
    #[default]
    Declared,
    /// Lexicographic by role name.
    Sorted,
    /// A fresh random order every round.
    Shuffled,
}

impl RoleOrder {
    fn arrange<'a, R: Rng + ?Sized>(self, roles: &'a [String], rng: &mut R) -> Vec<&'a str> {
        let mut ordered: Vec<&str> = roles.iter().map(String::as_str).collect();
        match self {
            RoleOrder::Declared => {}
            RoleOrder::Sorted => ordered.sort_unstable(),
            RoleOrder::Shuffled => ordered.shuffle(rng),
        }
        ordered
    }
}

impl std::fmt::Display for RoleOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RoleOrder::Declared => "declared",
            RoleOrder::Sorted => "sorted",
            RoleOrder::Shuffled => "shuffled",
        };
        write!(f, "{s}")
    }
}

/// Deal members from `pools` into teams until a round hits an empty pool.
///
/// `rng` is only consulted for [`RoleOrder::Shuffled`].
///
/// A round that completes without dealing anyone (every quota is 0) also
/// ends the deal and is discarded; it could only ever repeat itself.
pub fn assign<R: Rng + ?Sized>(
    pools: &mut RolePools,
    table: &QuotaTable,
    order: RoleOrder,
    rng: &mut R,
) -> Vec<Team> {
    let mut teams = Vec::new();

    for round in 1.. {
        let mut team = Team::new();
        let mut exhausted: Option<&str> = None;

        for role in order.arrange(table.roles(), rng) {
            let Some(stack) = pools.stack_mut(role) else {
                continue;
            };
            if stack.is_empty() {
                exhausted = Some(role);
                break;
            }
            for _ in 0..table.quota(role) {
                match stack.pop() {
                    Some(member) => team.push(member),
                    None => break,
                }
            }
        }

        if exhausted.is_some() || team.is_empty() {
            obs::emit_round_terminal(round, exhausted, team.len());
            break;
        }

        obs::emit_round_completed(round, team.len());
        teams.push(team);
    }

    teams
}

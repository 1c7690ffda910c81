//! Grouping members into per-role pools and shuffling each pool.

use std::collections::HashMap;

use rand::Rng;

use crate::domain::{Member, QuotaTable};
use crate::obs;
use crate::role_stack::RoleStack;

/// One shuffled [`RoleStack`] per declared role, plus the members whose role
/// was never declared.
#[derive(Debug, Clone, Default)]
pub struct RolePools {
    stacks: HashMap<String, RoleStack>,
    unassigned: Vec<Member>,
}

impl RolePools {
    pub fn stack(&self, role: &str) -> Option<&RoleStack> {
        self.stacks.get(role)
    }

    pub fn stack_mut(&mut self, role: &str) -> Option<&mut RoleStack> {
        self.stacks.get_mut(role)
    }

    /// Members still waiting in `role`'s pool; 0 for unknown roles.
    pub fn remaining(&self, role: &str) -> usize {
        self.stacks.get(role).map_or(0, RoleStack::len)
    }

    /// Members left across every pool.
    pub fn total_remaining(&self) -> usize {
        self.stacks.values().map(RoleStack::len).sum()
    }

    /// Members excluded because their role was not declared.
    pub fn unassigned(&self) -> &[Member] {
        &self.unassigned
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}

/// Group `members` by role and shuffle every pool.
///
/// Every declared role gets a pool, even one nobody joins: an empty pool is
/// what ends dealing on the first round. Members naming an undeclared role
/// are set aside in [`RolePools::unassigned`] and never dealt.
///
/// Pools are shuffled in declaration order so a seeded `rng` reproduces the
/// same pools run after run.
pub fn distribute<R, I>(table: &QuotaTable, members: I, rng: &mut R) -> RolePools
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = Member>,
{
    let mut pools = RolePools {
        stacks: table
            .roles()
            .iter()
            .map(|role| (role.clone(), RoleStack::new()))
            .collect(),
        unassigned: Vec::new(),
    };

    for member in members {
        match pools.stacks.get_mut(&member.role) {
            Some(stack) => stack.push(member),
            None => {
                obs::emit_member_unassigned(&member.name, &member.role);
                pools.unassigned.push(member);
            }
        }
    }

    for role in table.roles() {
        if let Some(stack) = pools.stacks.get_mut(role) {
            stack.shuffle(rng);
        }
    }

    obs::emit_pools_distributed(
        pools.len(),
        pools.total_remaining(),
        pools.unassigned.len(),
    );
    pools
}

//! `RoleStack`: the per-role pool that gets shuffled and then drained.
//!
//! A plain `Vec` with the tail as the top of the stack. Popping removes from
//! the tail, so after [`RoleStack::shuffle`] members come out in the shuffled
//! order read back to front.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::Member;

/// LIFO pool of one role's members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleStack {
    members: Vec<Member>,
}

impl RoleStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `member` onto the top of the stack.
    pub fn push(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Remove and return the top member.
    ///
    /// `None` means the pool is drained; callers treat it as the end of
    /// dealing for this role, not as a failure.
    pub fn pop(&mut self) -> Option<Member> {
        self.members.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Members from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    /// Apply a uniform random permutation in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.members.shuffle(rng);
    }
}

impl FromIterator<Member> for RoleStack {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RoleStack {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

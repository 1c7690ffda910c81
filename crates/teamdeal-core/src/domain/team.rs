//! `Team`: a finalized group of members.

use serde::{Deserialize, Serialize};

use super::member::Member;

/// One team produced by a full dealing round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team {
    members: Vec<Member>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members in this team holding `role`.
    pub fn count_role(&self, role: &str) -> usize {
        self.members.iter().filter(|m| m.role == role).count()
    }
}

impl FromIterator<Member> for Team {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Team {
    type Item = Member;
    type IntoIter = std::vec::IntoIter<Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_role() {
        let team: Team = [
            Member::new("A", "driver", 1),
            Member::new("B", "driver", 2),
            Member::new("C", "navigator", 3),
        ]
        .into_iter()
        .collect();

        assert_eq!(team.len(), 3);
        assert_eq!(team.count_role("driver"), 2);
        assert_eq!(team.count_role("navigator"), 1);
        assert_eq!(team.count_role("pilot"), 0);
    }
}

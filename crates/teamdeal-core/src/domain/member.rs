//! `Member`: the unit being dealt into teams.

use serde::{Deserialize, Serialize};

/// A person in the pool.
///
/// Identity is structural: two members with identical fields are
/// indistinguishable and both valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub role: String,
    pub proficiency: i64,
}

impl Member {
    pub fn new(name: impl Into<String>, role: impl Into<String>, proficiency: i64) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            proficiency,
        }
    }
}

impl std::fmt::Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.role, self.proficiency)
    }
}

//! Role vocabulary: name normalization and the per-team quota table.

use std::collections::HashMap;

/// Normalize a raw role name: every space becomes `_`.
pub fn normalize_role(raw: &str) -> String {
    raw.replace(' ', "_")
}

/// Declared roles, in declaration order, with the number of members of each
/// role a team needs.
///
/// Declaring a role twice keeps its first position and the latest quota.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotaTable {
    order: Vec<String>,
    quotas: HashMap<String, usize>,
}

impl QuotaTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `role` with no quota yet (reads as 0 until [`set_quota`](Self::set_quota)).
    pub fn declare(&mut self, role: impl Into<String>) {
        let role = role.into();
        if !self.quotas.contains_key(&role) {
            self.order.push(role.clone());
            self.quotas.insert(role, 0);
        }
    }

    /// Declare `role` if needed and set its quota.
    pub fn set_quota(&mut self, role: impl Into<String>, quota: usize) {
        let role = role.into();
        self.declare(role.clone());
        self.quotas.insert(role, quota);
    }

    /// Quota for `role`; undeclared roles read as 0.
    pub fn quota(&self, role: &str) -> usize {
        self.quotas.get(role).copied().unwrap_or(0)
    }

    pub fn is_declared(&self, role: &str) -> bool {
        self.quotas.contains_key(role)
    }

    /// Declared roles in declaration order.
    pub fn roles(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for QuotaTable {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut table = QuotaTable::new();
        for (role, quota) in iter {
            table.set_quota(role, quota);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_role_replaces_every_space() {
        assert_eq!(normalize_role("team lead"), "team_lead");
        assert_eq!(normalize_role(" a  b "), "_a__b_");
        assert_eq!(normalize_role("driver"), "driver");
    }

    #[test]
    fn test_redeclared_role_keeps_position_and_latest_quota() {
        let mut table = QuotaTable::new();
        table.set_quota("driver", 1);
        table.set_quota("navigator", 2);
        table.set_quota("driver", 3);

        assert_eq!(table.roles(), ["driver", "navigator"]);
        assert_eq!(table.quota("driver"), 3);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_undeclared_role_reads_zero() {
        let table: QuotaTable = [("driver", 2)].into_iter().collect();
        assert_eq!(table.quota("pilot"), 0);
        assert!(!table.is_declared("pilot"));
        assert!(table.is_declared("driver"));
    }

    #[test]
    fn test_declare_without_quota_reads_zero() {
        let mut table = QuotaTable::new();
        table.declare("driver");
        assert!(table.is_declared("driver"));
        assert_eq!(table.quota("driver"), 0);
    }
}

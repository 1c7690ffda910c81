//! Domain models for teamdeal.
//!
//! Canonical definitions for the core entities:
//! - `Member`: a person with a role and a proficiency score
//! - `QuotaTable`: declared roles and how many of each a team needs
//! - `Team`: one finalized group of members

pub mod error;
pub mod member;
pub mod role;
pub mod team;

// Re-export main types and errors
pub use error::{Result, TeamDealError};
pub use member::Member;
pub use role::{normalize_role, QuotaTable};
pub use team::Team;

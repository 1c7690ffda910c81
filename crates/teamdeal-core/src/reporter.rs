//! Team report rendering.
//!
//! Two output artifacts:
//! - a fixed-width text table per team (the interactive default)
//! - `TeamReport` — machine-readable JSON of the same teams

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Member, Result, Team};

/// Output format for the final report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

// ── text table ────────────────────────────────────────────────────────────

fn write_row(out: &mut String, name: &str, role: &str, proficiency: &str) {
    out.push_str(&format!("{name:<20} | {role:<20} | {proficiency:<10}\n"));
}

/// Render one table per team, numbered from 1, each followed by a blank line.
///
/// Returns an empty string when `teams` is empty.
pub fn render_table(teams: &[Team]) -> String {
    let mut out = String::new();
    for (index, team) in teams.iter().enumerate() {
        out.push_str(&format!("Team {}\n", index + 1));
        write_row(&mut out, "Name", "Role", "Proficiency");
        for member in team.members() {
            write_row(
                &mut out,
                &member.name,
                &member.role,
                &member.proficiency.to_string(),
            );
        }
        out.push('\n');
    }
    out
}

// ── JSON report ───────────────────────────────────────────────────────────

/// One team in a [`TeamReport`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamEntry {
    /// 1-based position in production order.
    pub index: usize,
    pub members: Vec<Member>,
}

/// Serializable report of every team produced by a deal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamReport {
    pub generated_at: DateTime<Utc>,
    pub team_count: usize,
    pub teams: Vec<TeamEntry>,
}

impl TeamReport {
    pub fn new(teams: &[Team]) -> Self {
        Self {
            generated_at: Utc::now(),
            team_count: teams.len(),
            teams: teams
                .iter()
                .enumerate()
                .map(|(i, team)| TeamEntry {
                    index: i + 1,
                    members: team.members().to_vec(),
                })
                .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render `teams` in the requested format.
pub fn render(teams: &[Team], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(teams)),
        OutputFormat::Json => {
            let mut json = TeamReport::new(teams).to_json_pretty()?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Vec<Team> {
        vec![
            [
                Member::new("Ada", "driver", 7),
                Member::new("Grace", "navigator", 9),
            ]
            .into_iter()
            .collect(),
            [
                Member::new("Linus", "driver", 4),
                Member::new("Ken", "navigator", -1),
            ]
            .into_iter()
            .collect(),
        ]
    }

    #[test]
    fn test_render_table_layout() {
        let text = render_table(&teams()[..1]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Team 1");
        assert_eq!(
            lines[1],
            format!("{:<20} | {:<20} | {:<10}", "Name", "Role", "Proficiency")
        );
        assert_eq!(
            lines[2],
            format!("{:<20} | {:<20} | {:<10}", "Ada", "driver", 7)
        );
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "");
    }

    #[test]
    fn test_render_table_numbers_teams_in_order() {
        let text = render_table(&teams());
        let team1 = text.find("Team 1").unwrap();
        let team2 = text.find("Team 2").unwrap();
        assert!(team1 < team2);
        assert!(text.contains("\n\nTeam 2\n"));
        assert!(text.contains("Ken                  | navigator            | -1"));
    }

    #[test]
    fn test_render_table_is_idempotent() {
        let teams = teams();
        assert_eq!(render_table(&teams), render_table(&teams));
    }

    #[test]
    fn test_no_teams_renders_nothing() {
        assert_eq!(render_table(&[]), "");
        assert_eq!(render(&[], OutputFormat::Table).unwrap(), "");
    }

    #[test]
    fn test_json_report_round_trips_members() {
        let json = render(&teams(), OutputFormat::Json).unwrap();
        let report: TeamReport = serde_json::from_str(&json).unwrap();

        assert_eq!(report.team_count, 2);
        assert_eq!(report.teams[1].index, 2);
        assert_eq!(report.teams[1].members[1], Member::new("Ken", "navigator", -1));
    }
}

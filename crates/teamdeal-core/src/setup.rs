//! Interactive, line-oriented collection of roles, quotas and members.
//!
//! [`SetupReader`] works over any `BufRead`/`Write` pair so the binary can
//! hand it stdin/stdout and tests can hand it a `Cursor` and a `Vec<u8>`.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::domain::{normalize_role, Member, QuotaTable, Result, TeamDealError};

/// Everything collected before dealing starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Setup {
    pub quotas: QuotaTable,
    pub members: Vec<Member>,
}

/// Strip one trailing `\n` or `\r\n`.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn parse_number<T>(field: &'static str, input: &str) -> Result<T>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    input
        .parse::<T>()
        .map_err(|source| TeamDealError::InvalidNumber {
            field,
            input: input.to_string(),
            source,
        })
}

/// Prompts on `output` and reads answers from `input`, one per line.
pub struct SetupReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> SetupReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Run the whole dialogue: role count, role names, quotas, then members
    /// until an empty answer. Running out of input at any prompt is an error.
    pub fn read_setup(&mut self) -> Result<Setup> {
        let count = self.read_role_count()?;
        let roles = self.read_roles(count)?;
        let quotas = self.read_quotas(&roles)?;
        let members = self.read_members()?;
        Ok(Setup { quotas, members })
    }

    /// Print `text`, then read one line without its line ending.
    ///
    /// `None` on end of input. A last line cut off without `\n` counts as
    /// end of input too: only a terminated line is an answer.
    fn ask(&mut self, text: &str) -> Result<Option<String>> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        if !line.ends_with('\n') {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&line).to_string()))
    }

    fn ask_required(&mut self, text: &str) -> Result<String> {
        self.ask(text)?.ok_or_else(|| TeamDealError::UnexpectedEof {
            prompt: text.trim_end_matches([':', ' ']).to_string(),
        })
    }

    fn read_role_count(&mut self) -> Result<usize> {
        let answer = self.ask_required("Enter how many roles: ")?;
        let count: i64 = parse_number("role count", &answer)?;
        if count <= 0 {
            return Err(TeamDealError::InvalidRoleCount(count));
        }
        usize::try_from(count).map_err(|_| TeamDealError::InvalidRoleCount(count))
    }

    fn read_roles(&mut self, count: usize) -> Result<Vec<String>> {
        let mut roles = Vec::with_capacity(count);
        for _ in 0..count {
            let answer = self.ask_required("Enter role: ")?;
            roles.push(normalize_role(&answer));
        }
        Ok(roles)
    }

    fn read_quotas(&mut self, roles: &[String]) -> Result<QuotaTable> {
        let mut table = QuotaTable::new();
        for role in roles {
            let prompt = format!("Enter maximum number of people required for {role}: ");
            let answer = self.ask_required(&prompt)?;
            let quota: usize = parse_number("quota", &answer)?;
            debug!(role = %role, quota, "quota set");
            table.set_quota(role.clone(), quota);
        }
        Ok(table)
    }

    fn read_members(&mut self) -> Result<Vec<Member>> {
        let mut members = Vec::new();
        loop {
            let name = self.ask_required("Enter name: ")?;
            if name.is_empty() {
                break;
            }
            let role = self.ask_required("Enter role: ")?;
            if role.is_empty() {
                break;
            }
            let proficiency = self.ask_required("Enter profiency: ")?;
            if proficiency.is_empty() {
                break;
            }
            let proficiency: i64 = parse_number("proficiency", &proficiency)?;

            let member = Member::new(name, normalize_role(&role), proficiency);
            debug!(member = %member, "member entered");
            members.push(member);
        }
        Ok(members)
    }
}

//! Presentation layer: terminal output

use std::io::Write;

use crate::{domain::TeamManager, error::Result, repository::MemberRepository};

/// Prints domain results, one line each
pub struct TerminalPresentation<R, W> {
    domain: TeamManager<R>,
    out: W,
}

impl<R: MemberRepository, W: Write> TerminalPresentation<R, W> {
    pub fn new(domain: TeamManager<R>, out: W) -> Self {
        Self { domain, out }
    }

    pub fn add_member(&mut self, name: &str) -> Result<()> {
        let message = self.domain.add_member_to_team(name)?;
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    pub fn remove_member(&mut self, name: &str) -> Result<()> {
        let message = self.domain.remove_member_from_team(name)?;
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    /// Print the roster, or a note that it is empty
    pub fn show_team_members(&mut self) -> Result<()> {
        let members = self.domain.get_team_members()?;
        if members.is_empty() {
            writeln!(self.out, "The team is currently empty.")?;
        } else {
            writeln!(self.out, "Team Members: {}", members.join(", "))?;
        }
        Ok(())
    }

    /// Add Alice and Bob, then show the roster
    pub fn run_demo(&mut self) -> Result<()> {
        self.add_member("Alice")?;
        self.add_member("Bob")?;
        self.show_team_members()
    }
}

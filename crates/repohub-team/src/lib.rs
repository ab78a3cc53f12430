//! Team roster demo in three layers
//!
//! - [`repository`]: the member list as a JSON array in a file
//! - [`domain`]: add/remove rules and user-facing messages
//! - [`presentation`]: terminal output
//!
//! Each layer only talks to the one below it.

pub mod domain;
pub mod error;
pub mod presentation;
pub mod repository;

pub use domain::TeamManager;
pub use error::{Result, TeamError};
pub use presentation::TerminalPresentation;
pub use repository::{MemberRepository, TeamData, DEFAULT_TEAM_FILE};

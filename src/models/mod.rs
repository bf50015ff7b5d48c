// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Address, Driver, ScoreEntry, Assignment, ScoringWeights};
pub use requests::{NewAddress, NewDriver};
pub use responses::{AssignmentReport, MatchReport};

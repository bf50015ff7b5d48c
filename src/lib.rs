//! Courier Match - greedy assignment of delivery drivers to addresses
//!
//! Each (address, driver) pair is scored from the letters of the driver's name
//! and the prime factors of both name lengths; pairs are then accepted greedily
//! from the highest score down. Prime factors come from a memoized 6k±1 oracle.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, PrimeCache, PrimeError, Resolution, factors_of, is_prime, build_scores, resolve};
pub use error::{AppError, Result};
pub use models::{Address, Driver, ScoreEntry, Assignment, ScoringWeights, MatchReport, AssignmentReport};

// Core algorithm exports
pub mod matcher;
pub mod primes;
pub mod scoring;

pub use matcher::{Matcher, Resolution, rank_scores, resolve};
pub use primes::{factors_of, is_prime, FactorSet, PrimeCache, PrimeError};
pub use scoring::{build_scores, pair_score};

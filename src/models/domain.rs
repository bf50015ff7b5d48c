use serde::{Deserialize, Serialize};

use crate::core::primes::{factors_of, FactorSet, PrimeCache, PrimeError};
use crate::services::text::{count_consonants, count_vowels, name_length};

/// Delivery address, reduced to its street name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub name: String,
    #[serde(default)]
    pub assigned: bool,
}

impl Address {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assigned: false,
        }
    }

    /// Street name length in characters
    #[inline]
    pub fn name_length(&self) -> u64 {
        name_length(&self.name)
    }
}

/// Delivery driver with the name attributes used for scoring
///
/// Everything except `assigned` is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    #[serde(rename = "vowelCount")]
    pub vowel_count: u32,
    #[serde(rename = "consonantCount")]
    pub consonant_count: u32,
    #[serde(rename = "lengthFactors")]
    pub length_factors: FactorSet,
    #[serde(default)]
    pub assigned: bool,
}

impl Driver {
    /// Build a driver from pre-computed letter counts
    ///
    /// The prime factors of the name length come from the shared cache.
    pub fn new(
        name: impl Into<String>,
        vowel_count: u32,
        consonant_count: u32,
        cache: &mut PrimeCache,
    ) -> Result<Self, PrimeError> {
        let name = name.into();
        let length_factors = factors_of(name_length(&name), cache)?;

        Ok(Self {
            name,
            vowel_count,
            consonant_count,
            length_factors,
            assigned: false,
        })
    }

    /// Build a driver, counting vowels and consonants in the name
    pub fn from_name(name: impl Into<String>, cache: &mut PrimeCache) -> Result<Self, PrimeError> {
        let name = name.into();
        let vowels = count_vowels(&name);
        let consonants = count_consonants(&name);
        Self::new(name, vowels, consonants, cache)
    }
}

/// Score of one (address, driver) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: f64,
    #[serde(rename = "addressRef")]
    pub address_ref: usize,
    #[serde(rename = "driverRef")]
    pub driver_ref: usize,
}

/// A pair accepted by the greedy resolver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "addressRef")]
    pub address_ref: usize,
    #[serde(rename = "driverRef")]
    pub driver_ref: usize,
    pub score: f64,
}

impl From<&ScoreEntry> for Assignment {
    fn from(entry: &ScoreEntry) -> Self {
        Self {
            address_ref: entry.address_ref,
            driver_ref: entry.driver_ref,
            score: entry.score,
        }
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Applied to the vowel count when the street name length is even
    pub vowel_multiplier: f64,
    /// Applied once when the name lengths share a prime factor
    pub factor_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            vowel_multiplier: 1.5,
            factor_bonus: 1.5,
        }
    }
}

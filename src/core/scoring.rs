use crate::core::primes::{factors_of, FactorSet, PrimeCache, PrimeError};
use crate::models::{Address, Driver, ScoreEntry, ScoringWeights};

/// Attributes of an address computed once before scoring
#[derive(Debug, Clone)]
struct AddressProfile {
    even_length: bool,
    length_factors: FactorSet,
}

/// Score a single (address, driver) pair
///
/// Scoring formula:
/// base  = driver.vowel_count * vowel_multiplier   # street name length even
///       = driver.consonant_count                  # street name length odd
/// score = base * factor_bonus                     # name lengths share a prime
///
/// The bonus applies once, however many primes are shared.
#[inline]
pub fn pair_score(
    even_length: bool,
    address_factors: &FactorSet,
    driver: &Driver,
    weights: &ScoringWeights,
) -> f64 {
    let base = if even_length {
        driver.vowel_count as f64 * weights.vowel_multiplier
    } else {
        driver.consonant_count as f64
    };

    if address_factors.is_disjoint(&driver.length_factors) {
        base
    } else {
        base * weights.factor_bonus
    }
}

/// Build the dense score matrix, address-major then driver-minor
///
/// Reads entity attributes only; assignment flags are left untouched.
/// Zero addresses or zero drivers yield an empty list.
///
/// # Errors
/// Returns [`PrimeError::InvalidArgument`] if an address has an empty name.
pub fn build_scores(
    addresses: &[Address],
    drivers: &[Driver],
    cache: &mut PrimeCache,
    weights: &ScoringWeights,
) -> Result<Vec<ScoreEntry>, PrimeError> {
    let profiles = addresses
        .iter()
        .map(|address| -> Result<AddressProfile, PrimeError> {
            let length = address.name_length();
            Ok(AddressProfile {
                even_length: length % 2 == 0,
                length_factors: factors_of(length, cache)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let scores: Vec<ScoreEntry> = profiles
        .iter()
        .enumerate()
        .flat_map(|(address_ref, profile)| {
            drivers
                .iter()
                .enumerate()
                .map(move |(driver_ref, driver)| ScoreEntry {
                    score: pair_score(profile.even_length, &profile.length_factors, driver, weights),
                    address_ref,
                    driver_ref,
                })
        })
        .collect();

    tracing::debug!(
        "Built {} score entries for {} addresses x {} drivers",
        scores.len(),
        addresses.len(),
        drivers.len()
    );

    Ok(scores)
}

use std::cmp::Ordering;

use crate::core::primes::{PrimeCache, PrimeError};
use crate::core::scoring::build_scores;
use crate::models::{Address, Assignment, AssignmentReport, Driver, MatchReport, ScoreEntry, ScoringWeights};

/// Output of the greedy resolver
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub assignments: Vec<Assignment>,
    pub total_score: f64,
}

/// Rank score entries high to low
///
/// The sort is stable, so equal scores keep their matrix order.
pub fn rank_scores(scores: &[ScoreEntry]) -> Vec<ScoreEntry> {
    let mut ranked = scores.to_vec();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}

/// Greedily assign addresses to drivers
///
/// Walks the ranked entries once and accepts each entry whose address and
/// driver are both still free, flipping their `assigned` flags. Skipped
/// entries are never revisited and accepted ones are never undone, so the
/// result is not guaranteed to be a maximum-weight matching.
pub fn resolve(scores: &[ScoreEntry], addresses: &mut [Address], drivers: &mut [Driver]) -> Resolution {
    let mut resolution = Resolution::default();

    for entry in rank_scores(scores) {
        let (Some(address), Some(driver)) = (
            addresses.get_mut(entry.address_ref),
            drivers.get_mut(entry.driver_ref),
        ) else {
            tracing::warn!(
                "Score entry references unknown address {} or driver {}",
                entry.address_ref,
                entry.driver_ref
            );
            continue;
        };

        if address.assigned || driver.assigned {
            tracing::trace!(
                "Skipping address {} / driver {} ({})",
                entry.address_ref,
                entry.driver_ref,
                entry.score
            );
            continue;
        }

        address.assigned = true;
        driver.assigned = true;
        resolution.total_score += entry.score;
        resolution.assignments.push(Assignment::from(&entry));

        tracing::trace!("Assigning {} to {}: {}", driver.name, address.name, entry.score);
    }

    resolution
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Score matrix (prime factors via the shared cache)
/// 2. Ranking, high to low
/// 3. Greedy one-to-one selection
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Run the full pipeline and flip the flags of every matched entity
    pub fn assign(
        &self,
        addresses: &mut [Address],
        drivers: &mut [Driver],
        cache: &mut PrimeCache,
    ) -> Result<Resolution, PrimeError> {
        let scores = build_scores(addresses, drivers, cache, &self.weights)?;
        let resolution = resolve(&scores, addresses, drivers);

        let unmatched_addresses = addresses.iter().filter(|a| !a.assigned).count();
        let unmatched_drivers = drivers.iter().filter(|d| !d.assigned).count();
        if unmatched_addresses > 0 || unmatched_drivers > 0 {
            tracing::debug!(
                "Left unmatched: {} addresses, {} drivers",
                unmatched_addresses,
                unmatched_drivers
            );
        }

        tracing::info!(
            "Assigned {} pairs, total score {}",
            resolution.assignments.len(),
            resolution.total_score
        );

        Ok(resolution)
    }

    /// Run the pipeline and name each assignment for presentation
    pub fn report(
        &self,
        addresses: &mut [Address],
        drivers: &mut [Driver],
        cache: &mut PrimeCache,
    ) -> Result<MatchReport, PrimeError> {
        let resolution = self.assign(addresses, drivers, cache)?;

        let assignments = resolution
            .assignments
            .iter()
            .map(|a| AssignmentReport {
                driver_name: drivers[a.driver_ref].name.clone(),
                address_name: addresses[a.address_ref].name.clone(),
                score: a.score,
            })
            .collect();

        Ok(MatchReport {
            assignments,
            total_score: resolution.total_score,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: f64, address_ref: usize, driver_ref: usize) -> ScoreEntry {
        ScoreEntry {
            score,
            address_ref,
            driver_ref,
        }
    }

    fn fixtures(count: usize) -> (Vec<Address>, Vec<Driver>) {
        let mut cache = PrimeCache::new();
        let addresses = (0..count).map(|i| Address::new(format!("Street {}", i))).collect();
        let drivers = (0..count)
            .map(|i| Driver::from_name(format!("Driver {}", i), &mut cache).unwrap())
            .collect();
        (addresses, drivers)
    }

    #[test]
    fn test_rank_is_descending_and_stable() {
        let scores = vec![entry(1.0, 0, 0), entry(3.0, 0, 1), entry(1.0, 1, 0), entry(3.0, 1, 1)];

        let ranked = rank_scores(&scores);

        let refs: Vec<(usize, usize)> = ranked.iter().map(|e| (e.address_ref, e.driver_ref)).collect();
        assert_eq!(refs, vec![(0, 1), (1, 1), (0, 0), (1, 0)]);
        // Input is left untouched
        assert_eq!(scores[0], entry(1.0, 0, 0));
    }

    #[test]
    fn test_resolve_empty() {
        let (mut addresses, mut drivers) = fixtures(2);
        let resolution = resolve(&[], &mut addresses, &mut drivers);

        assert!(resolution.assignments.is_empty());
        assert_eq!(resolution.total_score, 0.0);
    }

    #[test]
    fn test_greedy_is_not_optimal() {
        // Optimal is (0,1) + (1,0) = 16, greedy takes (0,0) first
        let (mut addresses, mut drivers) = fixtures(2);
        let scores = vec![entry(10.0, 0, 0), entry(8.0, 0, 1), entry(8.0, 1, 0), entry(1.0, 1, 1)];

        let resolution = resolve(&scores, &mut addresses, &mut drivers);

        assert_eq!(
            resolution.assignments,
            vec![
                Assignment { address_ref: 0, driver_ref: 0, score: 10.0 },
                Assignment { address_ref: 1, driver_ref: 1, score: 1.0 },
            ]
        );
        assert_eq!(resolution.total_score, 11.0);
        assert!(addresses.iter().all(|a| a.assigned));
        assert!(drivers.iter().all(|d| d.assigned));
    }

    #[test]
    fn test_surplus_left_unassigned() {
        let (mut addresses, mut drivers) = fixtures(3);
        drivers.truncate(1);
        let scores = vec![entry(2.0, 0, 0), entry(5.0, 1, 0), entry(4.0, 2, 0)];

        let resolution = resolve(&scores, &mut addresses, &mut drivers);

        assert_eq!(resolution.assignments.len(), 1);
        assert_eq!(resolution.assignments[0].address_ref, 1);
        assert_eq!(resolution.total_score, 5.0);
        assert!(!addresses[0].assigned && !addresses[2].assigned);
    }

    #[test]
    fn test_unknown_references_are_skipped() {
        let (mut addresses, mut drivers) = fixtures(1);
        let scores = vec![entry(9.0, 4, 0), entry(1.0, 0, 0)];

        let resolution = resolve(&scores, &mut addresses, &mut drivers);

        assert_eq!(resolution.assignments.len(), 1);
        assert_eq!(resolution.total_score, 1.0);
    }

    #[test]
    fn test_matcher_report_names_pairs() {
        let mut cache = PrimeCache::new();
        let mut addresses = vec![Address::new("Elm")];
        let mut drivers = vec![Driver::from_name("Ann", &mut cache).unwrap()];

        let report = Matcher::default().report(&mut addresses, &mut drivers, &mut cache).unwrap();

        assert_eq!(report.assignments.len(), 1);
        assert_eq!(report.assignments[0].driver_name, "Ann");
        assert_eq!(report.assignments[0].address_name, "Elm");
        assert_eq!(report.assignments[0].score, 3.0);
        assert_eq!(report.total_score, 3.0);
    }
}

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::matrix::MatchMatrix;

/// Fills a [`MatchMatrix`] with random but legal results.
///
/// Each unordered pair is played with probability `completion`; a played
/// match is won by either side with equal odds and the loser takes a
/// uniformly random number of sets below the target.
#[derive(Debug, Clone)]
pub struct RandomResultsGenerator {
    completion: f64,
    /// Optional seeded RNG for deterministic generation
    seeded_rng: Option<StdRng>,
}

impl RandomResultsGenerator {
    pub fn new(completion: f64) -> Self {
        Self {
            completion: completion.clamp(0.0, 1.0),
            seeded_rng: None,
        }
    }

    /// Create a new generator with a specific seed for deterministic results
    pub fn with_seed(completion: f64, seed: u64) -> Self {
        Self {
            completion: completion.clamp(0.0, 1.0),
            seeded_rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    /// Overwrite every pair of `matrix` with a fresh random outcome.
    pub fn fill(&mut self, matrix: &mut MatchMatrix) {
        match self.seeded_rng.as_mut() {
            Some(seeded) => fill_with(seeded, self.completion, matrix),
            None => fill_with(&mut rand::rng(), self.completion, matrix),
        }
    }
}

fn fill_with<R: Rng>(rng: &mut R, completion: f64, matrix: &mut MatchMatrix) {
    let target = matrix.target_wins();
    let pairs: Vec<_> = matrix.matches().map(|(a, b, _)| (a, b)).collect();

    for (a, b) in pairs {
        let (score_for, score_against) = if rng.random_bool(completion) {
            let loser_sets = rng.random_range(0..target);
            if rng.random_bool(0.5) {
                (target, loser_sets)
            } else {
                (loser_sets, target)
            }
        } else {
            (0, 0)
        };

        // Both ids come straight from the roster and are distinct.
        if let Err(e) = matrix.record_match(a, b, score_for, score_against) {
            tracing::warn!(%a, %b, error = %e, "Random result rejected");
        }
    }
}

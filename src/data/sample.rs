//! Built-in demo scenario and synthetic observation generation.
//!
//! The demo scenario is a small government-curve snapshot: five observed
//! points from 1y to 25y with an upward-sloping shape. It doubles as the
//! default input for `nss fit` and as a known-good fixture in tests.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::domain::{MarketObservations, NssParams};
use crate::error::AppError;

/// The built-in observed market points.
pub fn demo_observations() -> MarketObservations {
    MarketObservations {
        tenors: vec![1.0, 2.0, 5.0, 10.0, 25.0],
        yields: vec![0.0039, 0.0061, 0.0166, 0.0258, 0.0332],
    }
}

/// Default starting point for the parameter search.
pub fn demo_initial_guess() -> NssParams {
    NssParams::new(0.1, 0.1, 0.1, 0.1, 1.0, 1.0)
}

/// Default maturities at which the fitted curve is published.
///
/// Includes the observed tenors plus 30y/31y extrapolation points.
pub fn demo_targets() -> Vec<f64> {
    vec![1.0, 2.0, 5.0, 10.0, 25.0, 30.0, 31.0]
}

/// Return a copy of `observations` with seeded Gaussian noise added to each
/// yield.
///
/// `noise_bp` is the standard deviation in basis points; zero or negative
/// noise returns the observations unchanged.
pub fn with_noise(
    observations: &MarketObservations,
    noise_bp: f64,
    seed: u64,
) -> Result<MarketObservations, AppError> {
    if noise_bp <= 0.0 {
        return Ok(observations.clone());
    }

    let normal = Normal::new(0.0, noise_bp / 10_000.0)
        .map_err(|e| AppError::new(2, format!("Invalid noise level {noise_bp}bp: {e}")))?;
    let mut rng = StdRng::seed_from_u64(seed);

    Ok(MarketObservations {
        tenors: observations.tenors.clone(),
        yields: observations
            .yields
            .iter()
            .map(|y| y + normal.sample(&mut rng))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scenario_is_aligned() {
        let obs = demo_observations();
        assert_eq!(obs.tenors.len(), obs.yields.len());
        assert!(obs.tenors.iter().all(|&t| t > 0.0));
    }

    #[test]
    fn noise_is_seeded_and_bounded() {
        let obs = demo_observations();
        let a = with_noise(&obs, 5.0, 7).unwrap();
        let b = with_noise(&obs, 5.0, 7).unwrap();
        assert_eq!(a.yields, b.yields);

        // 5bp sigma: every draw should stay well inside 10 sigma.
        for (noisy, clean) in a.yields.iter().zip(obs.yields.iter()) {
            assert!((noisy - clean).abs() < 50.0 / 10_000.0);
        }
    }

    #[test]
    fn zero_noise_is_identity() {
        let obs = demo_observations();
        let same = with_noise(&obs, 0.0, 1).unwrap();
        assert_eq!(same.yields, obs.yields);
    }
}

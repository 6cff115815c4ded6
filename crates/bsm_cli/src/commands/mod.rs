//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod dist;
pub mod option;
pub mod strategy;

use bsm_models::profile::{evaluate_profile, spot_ladder, ProfilePoint};
use bsm_models::traits::Valuation;
use tracing::debug;

use crate::config::CliConfig;
use crate::Result;

/// Evaluates a spot ladder around `spot` using the configured width and steps.
pub(crate) fn ladder_profile<V>(
    valuation: &V,
    spot: f64,
    config: &CliConfig,
) -> Result<Vec<ProfilePoint<f64>>>
where
    V: Valuation<f64> + Sync,
{
    let spots = spot_ladder(spot, spot * config.ladder_width, config.ladder_steps)?;
    debug!(
        steps = spots.len(),
        low = ?spots.first(),
        high = ?spots.last(),
        "Evaluating spot ladder"
    );
    Ok(evaluate_profile(valuation, &spots))
}

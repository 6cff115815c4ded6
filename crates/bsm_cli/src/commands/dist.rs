//! Dist command implementation
//!
//! Evaluates the standard normal density, distribution and quantile.

use bsm_core::math::distributions::{inverse_norm_cdf, norm_cdf, norm_pdf};
use clap::Subcommand;
use tracing::debug;

use crate::output::DistributionReport;
use crate::Result;

/// Standard normal function to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Subcommand)]
pub enum DistCommand {
    /// Density φ(x)
    Pdf {
        /// Point of evaluation
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
    /// Cumulative distribution Φ(x)
    Cdf {
        /// Point of evaluation
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
    /// Quantile Φ⁻¹(p), p in (0, 1)
    Quantile {
        /// Probability
        #[arg(allow_negative_numbers = true)]
        p: f64,
    },
}

/// Run the dist command
pub fn run(command: DistCommand) -> Result<DistributionReport> {
    let report = match command {
        DistCommand::Pdf { x } => DistributionReport {
            function: "pdf",
            input: x,
            value: norm_pdf(x),
        },
        DistCommand::Cdf { x } => DistributionReport {
            function: "cdf",
            input: x,
            value: norm_cdf(x),
        },
        DistCommand::Quantile { p } => DistributionReport {
            function: "quantile",
            input: p,
            value: inverse_norm_cdf(p)?,
        },
    };

    debug!(function = report.function, input = report.input, value = report.value, "Evaluated");
    Ok(report)
}

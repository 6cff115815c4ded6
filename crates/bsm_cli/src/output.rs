//! Rendering of command results as tables or JSON.

use bsm_models::greeks::Greeks;
use bsm_models::profile::ProfilePoint;
use bsm_models::traits::Measure;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// Valuation of one option or strategy at a spot, with an optional ladder.
#[derive(Debug, Clone, Serialize)]
pub struct ValuationReport {
    /// Human-readable description of the valued entity.
    pub label: String,
    /// Spot price.
    pub spot: f64,
    /// Measures at `spot`.
    pub greeks: Greeks<f64>,
    /// Measures across a spot ladder, empty unless requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profile: Vec<ProfilePoint<f64>>,
}

/// Single distribution function evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionReport {
    /// Function name.
    pub function: &'static str,
    /// Argument.
    pub input: f64,
    /// Result.
    pub value: f64,
}

/// Renders a valuation report.
pub fn render_valuation(report: &ValuationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => Ok(valuation_table(report)),
    }
}

/// Renders a distribution report.
pub fn render_distribution(report: &DistributionReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => Ok(format!(
            "{}({}) = {:.12}",
            report.function, report.input, report.value
        )),
    }
}

fn valuation_table(report: &ValuationReport) -> String {
    let mut lines = vec![
        format!("{} @ spot {}", report.label, report.spot),
        "┌────────────┬──────────────────┐".to_string(),
        "│ Measure    │ Value            │".to_string(),
        "├────────────┼──────────────────┤".to_string(),
    ];
    for measure in Measure::ALL {
        lines.push(format!(
            "│ {:<10} │ {:>16.6} │",
            measure.name(),
            report.greeks.get(measure)
        ));
    }
    lines.push("└────────────┴──────────────────┘".to_string());

    if !report.profile.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "{:>12} {:>14} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "spot", "price", "delta", "gamma", "vega", "theta", "rho"
        ));
        for point in &report.profile {
            let g = &point.greeks;
            lines.push(format!(
                "{:>12.4} {:>14.6} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
                point.spot, g.price, g.delta, g.gamma, g.vega, g.theta, g.rho
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsm_models::instruments::VanillaOption;
    use bsm_models::traits::Valuation;

    fn report() -> ValuationReport {
        let call = VanillaOption::new(0.8, 0.1, 0.5, 110.0, true).unwrap();
        ValuationReport {
            label: "vanilla call K=110".to_string(),
            spot: 100.0,
            greeks: call.greeks(100.0),
            profile: Vec::new(),
        }
    }

    #[test]
    fn test_table_lists_every_measure() {
        let table = render_valuation(&report(), OutputFormat::Table).unwrap();
        assert!(table.starts_with("vanilla call K=110 @ spot 100"));
        for measure in Measure::ALL {
            assert!(table.contains(measure.name()), "missing {}", measure);
        }
        assert!(table.contains("20.539"));
    }

    #[test]
    fn test_json_round_trips_greeks() {
        let json = render_valuation(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["spot"], 100.0);
        assert!(value["greeks"]["price"].as_f64().unwrap() > 20.5);
        // Empty profiles are omitted
        assert!(value.get("profile").is_none());
    }

    #[test]
    fn test_distribution_table() {
        let report = DistributionReport {
            function: "cdf",
            input: 0.0,
            value: 0.5,
        };
        assert_eq!(
            render_distribution(&report, OutputFormat::Table).unwrap(),
            "cdf(0) = 0.500000000000"
        );
    }
}

//! Strategy command implementation
//!
//! Values a named multi-leg strategy.

use bsm_models::instruments::validate_spot;
use bsm_models::strategies::{Direction, Strategy};
use bsm_models::traits::Valuation;
use clap::{Args, ValueEnum};
use tracing::{debug, info};

use super::ladder_profile;
use crate::config::CliConfig;
use crate::output::ValuationReport;
use crate::{CliError, Result};

/// Named strategy recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyChoice {
    /// Put and call at one strike
    Straddle,
    /// Put at the first strike, call at the second
    Strangle,
    /// Two same-type legs at two strikes
    Spread,
    /// Put at the first strike against a call at the second
    RiskReversal,
    /// Three same-type legs weighted 1, -2, 1
    Butterfly,
}

/// Arguments of `bsm strategy`
#[derive(Debug, Clone, Args)]
pub struct StrategyArgs {
    /// Strategy recipe
    #[arg(long, value_enum)]
    pub kind: StrategyChoice,

    /// Volatility per leg, comma separated (one value is reused for every leg)
    #[arg(long, value_delimiter = ',', required = true)]
    pub vols: Vec<f64>,

    /// Strike per leg, comma separated, in leg order
    #[arg(long, value_delimiter = ',', required = true)]
    pub strikes: Vec<f64>,

    /// Continuously compounded risk-free rate
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Time to expiry in years
    #[arg(long)]
    pub expiry: f64,

    /// Use puts for spreads and butterflies
    #[arg(long)]
    pub put: bool,

    /// Take the bearish side of spreads and risk reversals
    #[arg(long)]
    pub bearish: bool,

    /// Spot price
    #[arg(long)]
    pub spot: f64,

    /// Also evaluate a spot ladder around the spot
    #[arg(long)]
    pub ladder: bool,
}

impl StrategyArgs {
    fn direction(&self) -> Direction {
        if self.bearish {
            Direction::Bearish
        } else {
            Direction::Bullish
        }
    }

    fn vols<const N: usize>(&self) -> Result<[f64; N]> {
        match self.vols.as_slice() {
            [vol] => Ok([*vol; N]),
            vols => fixed_length("volatilities", vols),
        }
    }

    fn strikes<const N: usize>(&self) -> Result<[f64; N]> {
        fixed_length("strikes", &self.strikes)
    }
}

fn fixed_length<const N: usize>(name: &str, values: &[f64]) -> Result<[f64; N]> {
    values.try_into().map_err(|_| {
        CliError::InvalidArgument(format!("expected {} {}, got {}", N, name, values.len()))
    })
}

/// Run the strategy command
pub fn run(args: &StrategyArgs, config: &CliConfig) -> Result<ValuationReport> {
    let spot = validate_spot(args.spot)?;
    let direction = args.direction();
    let is_call = !args.put;

    match args.kind {
        StrategyChoice::Straddle => {
            let [vol] = args.vols::<1>()?;
            let [strike] = args.strikes::<1>()?;
            let strategy = Strategy::straddle(vol, args.rate, args.expiry, strike)?;
            report(&strategy, args, spot, config)
        }
        StrategyChoice::Strangle => {
            let strategy =
                Strategy::strangle(args.vols()?, args.rate, args.expiry, args.strikes()?)?;
            report(&strategy, args, spot, config)
        }
        StrategyChoice::Spread => {
            let strategy = Strategy::spread(
                args.vols()?,
                args.rate,
                args.expiry,
                args.strikes()?,
                is_call,
                direction,
            )?;
            report(&strategy, args, spot, config)
        }
        StrategyChoice::RiskReversal => {
            let strategy = Strategy::risk_reversal(
                args.vols()?,
                args.rate,
                args.expiry,
                args.strikes()?,
                direction,
            )?;
            report(&strategy, args, spot, config)
        }
        StrategyChoice::Butterfly => {
            let strategy = Strategy::butterfly(
                args.vols()?,
                args.rate,
                args.expiry,
                args.strikes()?,
                is_call,
            )?;
            report(&strategy, args, spot, config)
        }
    }
}

fn report<const N: usize>(
    strategy: &Strategy<f64, N>,
    args: &StrategyArgs,
    spot: f64,
    config: &CliConfig,
) -> Result<ValuationReport> {
    info!(kind = %strategy.kind(), legs = N, spot, "Valuing strategy");

    for (i, leg) in strategy.legs().iter().enumerate() {
        let contract = leg.option.contract();
        debug!(
            leg = i,
            weight = leg.weight,
            strike = contract.strike(),
            is_call = contract.is_call(),
            "Strategy leg"
        );
    }

    let profile = if args.ladder {
        ladder_profile(strategy, spot, config)?
    } else {
        Vec::new()
    };

    let strikes: Vec<String> = args.strikes.iter().map(|k| k.to_string()).collect();
    Ok(ValuationReport {
        label: format!("{} K={}", strategy.kind(), strikes.join("/")),
        spot,
        greeks: strategy.greeks(spot),
        profile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsm_models::instruments::VanillaOption;

    fn args(kind: StrategyChoice, vols: Vec<f64>, strikes: Vec<f64>) -> StrategyArgs {
        StrategyArgs {
            kind,
            vols,
            strikes,
            rate: 0.1,
            expiry: 0.5,
            put: false,
            bearish: false,
            spot: 100.0,
            ladder: false,
        }
    }

    #[test]
    fn test_straddle_report() {
        let report = run(
            &args(StrategyChoice::Straddle, vec![0.8], vec![100.0]),
            &CliConfig::default(),
        )
        .unwrap();
        let put = VanillaOption::new(0.8, 0.1, 0.5, 100.0, false).unwrap();
        let call = VanillaOption::new(0.8, 0.1, 0.5, 100.0, true).unwrap();
        assert_eq!(report.label, "straddle K=100");
        assert_eq!(report.greeks.price, put.price(100.0) + call.price(100.0));
    }

    #[test]
    fn test_single_vol_is_broadcast() {
        let single = run(
            &args(StrategyChoice::Butterfly, vec![0.3], vec![90.0, 100.0, 110.0]),
            &CliConfig::default(),
        )
        .unwrap();
        let explicit = run(
            &args(StrategyChoice::Butterfly, vec![0.3, 0.3, 0.3], vec![90.0, 100.0, 110.0]),
            &CliConfig::default(),
        )
        .unwrap();
        assert_eq!(single.greeks, explicit.greeks);
        assert_eq!(single.label, "butterfly K=90/100/110");
    }

    #[test]
    fn test_bearish_spread_negates_bullish() {
        let bull_args = args(StrategyChoice::Spread, vec![0.3], vec![90.0, 110.0]);
        let mut bear_args = bull_args.clone();
        bear_args.bearish = true;

        let bull = run(&bull_args, &CliConfig::default()).unwrap();
        let bear = run(&bear_args, &CliConfig::default()).unwrap();
        assert_eq!(bull.greeks.price, -bear.greeks.price);
    }

    #[test]
    fn test_wrong_strike_count() {
        let result = run(
            &args(StrategyChoice::RiskReversal, vec![0.3], vec![90.0]),
            &CliConfig::default(),
        );
        match result {
            Err(CliError::InvalidArgument(msg)) => assert_eq!(msg, "expected 2 strikes, got 1"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_vol_count() {
        let result = run(
            &args(StrategyChoice::Strangle, vec![0.3, 0.3, 0.3], vec![90.0, 110.0]),
            &CliConfig::default(),
        );
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_every_choice_has_help() {
        for variant in StrategyChoice::value_variants() {
            let value = variant.to_possible_value().unwrap();
            assert!(value.get_help().is_some(), "no help for {}", value.get_name());
        }
    }
}

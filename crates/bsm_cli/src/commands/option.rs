//! Option command implementation
//!
//! Values a single vanilla or digital option.

use bsm_models::instruments::{validate_spot, DigitalOption, OptionInstrument, VanillaOption};
use bsm_models::traits::Valuation;
use clap::{Args, ValueEnum};
use tracing::info;

use super::ladder_profile;
use crate::config::CliConfig;
use crate::output::ValuationReport;
use crate::Result;

/// Payoff family
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptionStyle {
    /// European call or put
    Vanilla,
    /// Cash-or-nothing, pays 1 in the money
    Digital,
}

/// Arguments of `bsm option`
#[derive(Debug, Clone, Args)]
pub struct OptionArgs {
    /// Payoff family
    #[arg(long, value_enum, default_value = "vanilla")]
    pub style: OptionStyle,

    /// Annualised volatility
    #[arg(long)]
    pub vol: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Time to expiry in years
    #[arg(long)]
    pub expiry: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Value a put instead of a call
    #[arg(long)]
    pub put: bool,

    /// Spot price
    #[arg(long)]
    pub spot: f64,

    /// Also evaluate a spot ladder around the spot
    #[arg(long)]
    pub ladder: bool,
}

/// Builds the instrument described by the arguments.
pub fn build_instrument(args: &OptionArgs) -> Result<OptionInstrument<f64>> {
    let is_call = !args.put;
    let instrument = match args.style {
        OptionStyle::Vanilla => {
            VanillaOption::new(args.vol, args.rate, args.expiry, args.strike, is_call)?.into()
        }
        OptionStyle::Digital => {
            DigitalOption::new(args.vol, args.rate, args.expiry, args.strike, is_call)?.into()
        }
    };
    Ok(instrument)
}

/// Run the option command
pub fn run(args: &OptionArgs, config: &CliConfig) -> Result<ValuationReport> {
    let spot = validate_spot(args.spot)?;
    let instrument = build_instrument(args)?;
    let side = if args.put { "put" } else { "call" };

    info!(
        style = instrument.type_name(),
        side,
        strike = args.strike,
        spot,
        "Valuing option"
    );

    let profile = if args.ladder {
        ladder_profile(&instrument, spot, config)?
    } else {
        Vec::new()
    };

    Ok(ValuationReport {
        label: format!("{} {} K={}", instrument.type_name(), side, args.strike),
        spot,
        greeks: instrument.greeks(spot),
        profile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn args(style: OptionStyle, put: bool) -> OptionArgs {
        OptionArgs {
            style,
            vol: 0.8,
            rate: 0.1,
            expiry: 0.5,
            strike: 110.0,
            put,
            spot: 100.0,
            ladder: false,
        }
    }

    #[test]
    fn test_vanilla_call_report() {
        let report = run(&args(OptionStyle::Vanilla, false), &CliConfig::default()).unwrap();
        assert_eq!(report.label, "vanilla call K=110");
        assert_abs_diff_eq!(report.greeks.price, 20.539885, epsilon = 1e-4);
        assert!(report.profile.is_empty());
    }

    #[test]
    fn test_digital_put_instrument() {
        let instrument = build_instrument(&args(OptionStyle::Digital, true)).unwrap();
        assert!(instrument.is_digital());
        assert!(!instrument.contract().is_call());
    }

    #[test]
    fn test_ladder_uses_config() {
        let mut option_args = args(OptionStyle::Vanilla, false);
        option_args.ladder = true;
        let config = CliConfig {
            ladder_steps: 5,
            ladder_width: 0.2,
            ..Default::default()
        };
        let report = run(&option_args, &config).unwrap();
        assert_eq!(report.profile.len(), 5);
        assert_abs_diff_eq!(report.profile[0].spot, 80.0, epsilon = 1e-12);
        assert_abs_diff_eq!(report.profile[4].spot, 120.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut option_args = args(OptionStyle::Vanilla, false);
        option_args.spot = -1.0;
        assert!(run(&option_args, &CliConfig::default()).is_err());

        let mut option_args = args(OptionStyle::Digital, false);
        option_args.vol = 0.0;
        assert!(build_instrument(&option_args).is_err());
    }

    #[test]
    fn test_every_style_has_help() {
        for variant in OptionStyle::value_variants() {
            let value = variant.to_possible_value().unwrap();
            assert!(value.get_help().is_some(), "no help for {}", value.get_name());
        }
    }
}

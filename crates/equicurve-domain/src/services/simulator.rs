use crate::value_objects::equity_point::EquityPoint;
use crate::value_objects::observation::Observation;

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    InvalidInput(String),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {}

/// Absolute and relative gain of a finished simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentResult {
    pub absolute: f64,
    pub relative: f64,
}

/// Rounds a monetary amount to one decimal place. Presentation only: the
/// running balances fed back into the recurrence are never rounded.
pub fn round_usd(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Runs the all-in/all-out rebalancing fold over a signal series.
///
/// Signal 1 liquidates all cash into the asset, signal 0 liquidates all
/// asset into cash; both trades execute at the previous observation's close.
/// The first observation never trades: the portfolio starts as
/// `cash = initial_investment`, `asset = 0` whatever its signal says.
/// Total value marks the position to the current close.
pub fn simulate(
    observations: &[Observation],
    initial_investment: f64,
) -> Result<Vec<EquityPoint>, SimulationError> {
    validate_inputs(observations, initial_investment)?;

    let mut points = Vec::with_capacity(observations.len());
    let first = &observations[0];
    let mut cash = initial_investment;
    let mut asset = 0.0_f64;
    let mut prev_close = first.close;

    points.push(EquityPoint {
        timestamp: first.timestamp,
        cash_usd: round_usd(cash),
        asset_qty: asset,
        total_value_usd: round_usd(cash + asset * first.close),
    });

    for obs in &observations[1..] {
        let signal = obs.signal;
        let next_cash = cash - (signal * cash - (1.0 - signal) * asset * prev_close);
        let next_asset = asset - ((1.0 - signal) * asset - signal * (cash / prev_close));
        cash = next_cash;
        asset = next_asset;
        prev_close = obs.close;

        points.push(EquityPoint {
            timestamp: obs.timestamp,
            cash_usd: round_usd(cash),
            asset_qty: asset,
            total_value_usd: round_usd(cash + asset * obs.close),
        });
    }

    Ok(points)
}

/// Final gain over the initial investment, absolute and relative.
///
/// Rejects `initial_investment <= 0`: the relative result divides by it.
pub fn investment_result(
    equity: &[EquityPoint],
    initial_investment: f64,
) -> Result<InvestmentResult, SimulationError> {
    let last = equity.last().ok_or_else(|| {
        SimulationError::InvalidInput("equity series is empty".to_string())
    })?;
    if !initial_investment.is_finite() || initial_investment <= 0.0 {
        return Err(SimulationError::InvalidInput(format!(
            "initial_investment must be finite and > 0 for result computation, got {initial_investment}"
        )));
    }
    let absolute = last.total_value_usd - initial_investment;
    Ok(InvestmentResult {
        absolute,
        relative: absolute / initial_investment,
    })
}

fn validate_inputs(
    observations: &[Observation],
    initial_investment: f64,
) -> Result<(), SimulationError> {
    if observations.is_empty() {
        return Err(SimulationError::InvalidInput(
            "observation sequence is empty".to_string(),
        ));
    }
    if !initial_investment.is_finite() || initial_investment < 0.0 {
        return Err(SimulationError::InvalidInput(format!(
            "initial_investment must be finite and >= 0, got {initial_investment}"
        )));
    }
    for obs in observations {
        if !obs.close.is_finite() || obs.close <= 0.0 {
            return Err(SimulationError::InvalidInput(format!(
                "close price must be finite and > 0, got {} at timestamp {}",
                obs.close, obs.timestamp
            )));
        }
        // The recurrence is written generically over the signal, but it only
        // means all-in/all-out for exactly 0 or 1; anything else would
        // extrapolate past full liquidation.
        if obs.signal != 0.0 && obs.signal != 1.0 {
            return Err(SimulationError::InvalidInput(format!(
                "signal must be 0 or 1, got {} at timestamp {}",
                obs.signal, obs.timestamp
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{investment_result, round_usd, simulate, SimulationError};
    use crate::value_objects::observation::Observation;

    fn obs(ts: i64, close: f64, signal: f64) -> Observation {
        Observation {
            timestamp: ts,
            open: close,
            close,
            signal,
        }
    }

    #[test]
    fn buy_then_sell_scenario() {
        let observations = vec![obs(0, 100.0, 1.0), obs(1, 110.0, 1.0), obs(2, 90.0, 0.0)];
        let equity = simulate(&observations, 1000.0).expect("simulate");

        assert_eq!(equity.len(), 3);
        assert_eq!(equity[0].total_value_usd, 1000.0);
        assert_eq!(equity[0].cash_usd, 1000.0);
        assert_eq!(equity[0].asset_qty, 0.0);

        // Buys at the previous close (100): 10 units, marked at 110.
        assert_eq!(equity[1].cash_usd, 0.0);
        assert_eq!(equity[1].asset_qty, 10.0);
        assert_eq!(equity[1].total_value_usd, 1100.0);

        // Sells at the previous close (110), unaffected by the drop to 90.
        assert_eq!(equity[2].cash_usd, 1100.0);
        assert_eq!(equity[2].asset_qty, 0.0);
        assert_eq!(equity[2].total_value_usd, 1100.0);
    }

    #[test]
    fn all_zero_signals_never_buy() {
        let observations: Vec<_> = (0..5).map(|i| obs(i, 50.0 + i as f64, 0.0)).collect();
        let equity = simulate(&observations, 2500.0).expect("simulate");
        for point in &equity {
            assert_eq!(point.cash_usd, 2500.0);
            assert_eq!(point.asset_qty, 0.0);
            assert_eq!(point.total_value_usd, 2500.0);
        }
    }

    #[test]
    fn all_one_signals_at_constant_price_hold_value() {
        let observations: Vec<_> = (0..6).map(|i| obs(i, 200.0, 1.0)).collect();
        let equity = simulate(&observations, 1000.0).expect("simulate");
        assert_eq!(equity[1].asset_qty, 5.0);
        for point in &equity {
            assert_eq!(point.total_value_usd, 1000.0);
        }
    }

    #[test]
    fn single_observation_returns_seed_state() {
        let equity = simulate(&[obs(7, 42.0, 1.0)], 300.0).expect("simulate");
        assert_eq!(equity.len(), 1);
        assert_eq!(equity[0].timestamp, 7);
        assert_eq!(equity[0].cash_usd, 300.0);
        assert_eq!(equity[0].asset_qty, 0.0);
        assert_eq!(equity[0].total_value_usd, 300.0);
    }

    #[test]
    fn recurrence_consumes_unrounded_state() {
        // Buy at 3 -> 333.333... units; sell at 7. Rounding the intermediate
        // cash/asset would land at 2333.1 instead of 2333.3.
        let observations = vec![obs(0, 3.0, 0.0), obs(1, 7.0, 1.0), obs(2, 5.0, 0.0)];
        // Step 1 buys at the previous close (3.0).
        let equity = simulate(&observations, 1000.0).expect("simulate");
        assert_eq!(equity[2].cash_usd, 2333.3);
        assert_eq!(equity[2].total_value_usd, 2333.3);
    }

    #[test]
    fn rounding_is_idempotent() {
        let observations = vec![obs(0, 3.0, 0.0), obs(1, 7.0, 1.0), obs(2, 5.0, 0.0)];
        let equity = simulate(&observations, 1000.0).expect("simulate");
        for point in &equity {
            assert_eq!(round_usd(point.cash_usd), point.cash_usd);
            assert_eq!(round_usd(point.total_value_usd), point.total_value_usd);
        }
    }

    #[test]
    fn empty_observations_are_rejected() {
        let err = simulate(&[], 1000.0).expect_err("should fail");
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }

    #[test]
    fn out_of_domain_signal_is_rejected() {
        let observations = vec![obs(0, 100.0, 1.0), obs(1, 100.0, 2.0)];
        let err = simulate(&observations, 1000.0).expect_err("should fail");
        let SimulationError::InvalidInput(msg) = err;
        assert!(msg.contains("signal must be 0 or 1"));
    }

    #[test]
    fn fractional_signal_is_rejected() {
        let err = simulate(&[obs(0, 100.0, 0.5)], 1000.0).expect_err("should fail");
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }

    #[test]
    fn non_positive_close_is_rejected() {
        for close in [0.0, -1.0, f64::NAN] {
            let err = simulate(&[obs(0, close, 0.0)], 1000.0).expect_err("should fail");
            assert!(matches!(err, SimulationError::InvalidInput(_)));
        }
    }

    #[test]
    fn negative_initial_investment_is_rejected() {
        let err = simulate(&[obs(0, 100.0, 0.0)], -1.0).expect_err("should fail");
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }

    #[test]
    fn zero_initial_investment_simulates_to_zero_curve() {
        let observations = vec![obs(0, 100.0, 1.0), obs(1, 120.0, 0.0)];
        let equity = simulate(&observations, 0.0).expect("simulate");
        assert!(equity.iter().all(|p| p.total_value_usd == 0.0));
    }

    #[test]
    fn investment_result_reports_gain() {
        let observations = vec![obs(0, 100.0, 1.0), obs(1, 110.0, 1.0), obs(2, 90.0, 0.0)];
        let equity = simulate(&observations, 1000.0).expect("simulate");
        let result = investment_result(&equity, 1000.0).expect("result");
        assert_eq!(result.absolute, 100.0);
        assert!((result.relative - 0.1).abs() < 1e-12);
    }

    #[test]
    fn investment_result_rejects_zero_investment() {
        let equity = simulate(&[obs(0, 100.0, 0.0)], 0.0).expect("simulate");
        let err = investment_result(&equity, 0.0).expect_err("should fail");
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }
}

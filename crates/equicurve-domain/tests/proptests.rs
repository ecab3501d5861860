use equicurve_domain::services::simulator::{round_usd, simulate};
use equicurve_domain::value_objects::observation::Observation;
use proptest::prelude::*;

fn observations_from(prices: &[(f64, bool)]) -> Vec<Observation> {
    prices
        .iter()
        .enumerate()
        .map(|(idx, (close, buy))| Observation {
            timestamp: idx as i64 * 3600,
            open: *close,
            close: *close,
            signal: if *buy { 1.0 } else { 0.0 },
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    #[test]
    fn result_preserves_length_and_order(
        rows in prop::collection::vec((0.01f64..10_000.0, any::<bool>()), 1..100),
        initial in 0.0f64..1_000_000.0,
    ) {
        let observations = observations_from(&rows);
        let equity = simulate(&observations, initial).expect("simulate");
        prop_assert_eq!(equity.len(), observations.len());
        for (point, obs) in equity.iter().zip(&observations) {
            prop_assert_eq!(point.timestamp, obs.timestamp);
        }
        prop_assert_eq!(equity[0].total_value_usd, round_usd(initial));
    }

    #[test]
    fn exactly_one_side_holds_value(
        rows in prop::collection::vec((0.01f64..10_000.0, any::<bool>()), 2..100),
        initial in 1.0f64..1_000_000.0,
    ) {
        let observations = observations_from(&rows);
        let equity = simulate(&observations, initial).expect("simulate");
        for (point, obs) in equity.iter().zip(&observations).skip(1) {
            if obs.signal == 1.0 {
                prop_assert_eq!(point.cash_usd, 0.0);
            } else {
                prop_assert_eq!(point.asset_qty, 0.0);
            }
        }
    }

    #[test]
    fn balances_stay_finite_and_non_negative(
        rows in prop::collection::vec((0.01f64..10_000.0, any::<bool>()), 1..100),
        initial in 0.0f64..1_000_000.0,
    ) {
        let observations = observations_from(&rows);
        let equity = simulate(&observations, initial).expect("simulate");
        for point in &equity {
            prop_assert!(point.cash_usd.is_finite() && point.cash_usd >= 0.0);
            prop_assert!(point.asset_qty.is_finite() && point.asset_qty >= 0.0);
            prop_assert!(point.total_value_usd.is_finite() && point.total_value_usd >= 0.0);
        }
    }

    #[test]
    fn all_cash_signals_leave_the_balance_untouched(
        prices in prop::collection::vec(0.01f64..10_000.0, 1..100),
        initial in 0.0f64..1_000_000.0,
    ) {
        let rows: Vec<(f64, bool)> = prices.iter().map(|p| (*p, false)).collect();
        let observations = observations_from(&rows);
        let equity = simulate(&observations, initial).expect("simulate");
        for point in &equity {
            prop_assert_eq!(point.cash_usd, round_usd(initial));
            prop_assert_eq!(point.asset_qty, 0.0);
        }
    }

    #[test]
    fn simulation_is_deterministic(
        rows in prop::collection::vec((0.01f64..10_000.0, any::<bool>()), 1..100),
        initial in 0.0f64..1_000_000.0,
    ) {
        let observations = observations_from(&rows);
        let first = simulate(&observations, initial).expect("simulate");
        let second = simulate(&observations, initial).expect("simulate");
        prop_assert_eq!(first, second);
    }
}

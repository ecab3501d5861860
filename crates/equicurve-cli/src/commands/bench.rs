use equicurve_domain::services::markers::markers_from_observations;
use equicurve_domain::services::simulator::{investment_result, simulate};
use equicurve_domain::value_objects::observation::Observation;
use std::time::Instant;

pub(super) fn run_bench(observations: usize, json: bool) -> Result<(), String> {
    if observations == 0 {
        return Err("--observations must be > 0".to_string());
    }

    let synthetic = synthetic_observations(observations);

    let start = Instant::now();
    let equity = simulate(&synthetic, 10_000.0).map_err(|err| err.to_string())?;
    let markers = markers_from_observations(&synthetic);
    let result = investment_result(&equity, 10_000.0).map_err(|err| err.to_string())?;
    let elapsed = start.elapsed();

    metrics::histogram!("equicurve.bench.fold_ms").record(elapsed.as_millis() as f64);

    let elapsed_ms = elapsed.as_millis() as u64;
    let per_sec = if elapsed.as_secs_f64() > 0.0 {
        equity.len() as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    if json {
        let line = serde_json::json!({
            "observations": equity.len(),
            "elapsed_ms": elapsed_ms,
            "observations_per_sec": per_sec,
            "markers": markers.len(),
            "final_value": equity.last().map(|p| p.total_value_usd),
            "result_abs": result.absolute,
        });
        println!("{}", line);
    } else {
        println!(
            "bench: observations={} elapsed_ms={} observations_per_sec={:.2}",
            equity.len(),
            elapsed_ms,
            per_sec
        );
        println!(
            "bench: markers={} final_value={:.1} result_abs={:.1} result_rel={:.4}",
            markers.len(),
            equity.last().map(|p| p.total_value_usd).unwrap_or(0.0),
            result.absolute,
            result.relative
        );
    }

    Ok(())
}

fn synthetic_observations(count: usize) -> Vec<Observation> {
    let start_ts = 1_700_000_000i64;
    let step_seconds = 3600i64;

    let mut synthetic = Vec::with_capacity(count);
    let mut price = 100.0f64;
    for i in 0..count {
        // Deterministic, non-random "market" dynamics and signal flips.
        let drift = ((i as f64) * 0.000001).sin() * 0.05;
        let shock = ((i as f64) * 0.001).cos() * 0.01;
        let open = price;
        let close = (price * (1.0 + drift + shock)).max(0.01);
        let signal = if ((i as f64) * 0.0005).sin() > 0.0 { 1.0 } else { 0.0 };
        synthetic.push(Observation {
            timestamp: start_ts + (i as i64) * step_seconds,
            open,
            close,
            signal,
        });
        price = close;
    }
    synthetic
}

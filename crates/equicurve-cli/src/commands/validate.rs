use equicurve_application::config::load_config;
use std::path::PathBuf;

pub(super) fn run_validate(config_path: PathBuf, strict: bool) -> Result<(), String> {
    let config = load_config(&config_path)?;
    super::common::print_config_summary("validate", &config, None);

    let crate::infra::ValidateDeps {
        market_data,
        predictions,
    } = crate::infra::build_validate_deps();

    let outcome = equicurve_application::validation::validate_inputs(
        &config,
        strict,
        market_data.as_ref(),
        predictions.as_ref(),
    )?;

    let report = &outcome.candle_report;
    println!(
        "candle report: rows={}, duplicates={}, gaps={}, out_of_order={}, invalid_close={}",
        report.rows, report.duplicates, report.gaps, report.out_of_order, report.invalid_close
    );
    println!("prediction rows: {}", outcome.prediction_rows);
    Ok(())
}

use equicurve_application::config::load_config_with_source;
use equicurve_application::meta::engine_name;
use std::path::PathBuf;

pub(super) fn run_simulate(config_path: PathBuf, out: Option<PathBuf>) -> Result<(), String> {
    let (config, config_toml) = load_config_with_source(&config_path)?;
    super::common::print_config_summary("simulate", &config, out.as_ref());

    let overall_start = std::time::Instant::now();

    let crate::infra::SimulationDeps {
        market_data,
        predictions,
        artifacts,
    } = crate::infra::build_simulation_deps();

    let run_dir = equicurve_application::simulation::run_simulation(
        &config,
        &config_toml,
        out,
        market_data.as_ref(),
        predictions.as_ref(),
        artifacts.as_ref(),
    )?;

    println!("run output: {}", run_dir.display());
    println!(
        "{} cli: simulate total_ms={}",
        engine_name(),
        overall_start.elapsed().as_millis()
    );
    Ok(())
}

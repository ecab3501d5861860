use equicurve_application::meta::engine_name;
use std::path::PathBuf;

pub(super) fn run_report(input: PathBuf) -> Result<(), String> {
    let crate::infra::ReportingDeps { reader, writer } = crate::infra::build_reporting_deps();

    let result =
        equicurve_application::reporting::generate_report(&input, reader.as_ref(), writer.as_ref())?;

    println!(
        "{} cli: report run_id={} final_value={} result_abs={:.1} result_rel={:.2}%",
        engine_name(),
        result.run_id,
        result.final_value,
        result.result.absolute,
        result.result.relative * 100.0
    );
    Ok(())
}

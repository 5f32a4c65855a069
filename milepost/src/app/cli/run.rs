use super::CliArgs;
use crate::app::{route_writer, summary_writer, AppConfig, MilepostApp, MilepostAppError};
use log::info;
use milepost_core::model::network::GraphConfig;
use std::path::Path;

/// runs one shortest-path query from the command line: load the layered
/// configuration, parse the dataset, execute the requested algorithm(s),
/// and write the route (and optional JSON summary).
///
/// # Arguments
/// * `args` - command line arguments for this run
///
/// # Returns
/// Nothing on success; "no path exists" is a success with an empty
/// route. Any configuration, parse, or argument error is returned for
/// the binary to report and exit non-zero.
pub fn command_line_runner(args: &CliArgs) -> Result<(), MilepostAppError> {
    args.validate()?;

    let config = AppConfig::load(args.config.as_deref())?;
    let algorithm = args.parse_algorithm()?;
    let graph_config = GraphConfig::new(args.basename.clone());

    info!("loading road network {}", args.basename);
    let app = MilepostApp::new(config, &graph_config)?;

    let (source, target) = app.endpoints(args.source, args.target)?;
    let results = app.run(algorithm, source, target)?;

    // in `both` mode the a* run comes first and owns the route file
    let (_, primary) = results.first().ok_or_else(|| {
        MilepostAppError::BuildFailure(String::from("search produced no result"))
    })?;
    route_writer::write_route(Path::new(&args.output), app.graph(), primary)?;

    if let Some(summary_path) = &args.summary {
        summary_writer::write_summary(Path::new(summary_path), args.source, args.target, &results)?;
    }
    Ok(())
}

use crate::app::MilepostAppError;
use clap::Parser;
use milepost_core::algorithm::search::SearchAlgorithm;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// 1-based id of the source vertex
    pub source: u64,

    /// 1-based id of the target vertex
    pub target: u64,

    /// dataset basename; arcs are read from <BASENAME>.gr and
    /// coordinates from <BASENAME>.co, either optionally gzipped
    pub basename: String,

    /// path the route line is written to
    pub output: String,

    /// search algorithm: astar, dijkstra, or both
    #[arg(long, default_value = "astar")]
    pub algorithm: String,

    /// TOML file overriding the heuristic calibration and queue sizing
    #[arg(short, long, value_name = "*.toml")]
    pub config: Option<String>,

    /// write a JSON run summary to this path
    #[arg(long, value_name = "*.json")]
    pub summary: Option<String>,
}

impl CliArgs {
    pub fn validate(&self) -> Result<(), MilepostAppError> {
        if self.source == 0 || self.target == 0 {
            return Err(MilepostAppError::ArgError(String::from(
                "vertex ids are 1-based; 0 is not a valid id",
            )));
        }
        self.parse_algorithm()?;
        Ok(())
    }

    pub fn parse_algorithm(&self) -> Result<SearchAlgorithm, MilepostAppError> {
        SearchAlgorithm::from_str(&self.algorithm)
            .map_err(|e| MilepostAppError::ArgError(e.to_string()))
    }
}

mod backtrack;
mod bucket_queue;
mod cost_estimate;
mod search_algorithm;
mod search_engine;
mod search_error;
mod search_summary;


pub use backtrack::route_cost;
pub use bucket_queue::BucketQueue;
pub use cost_estimate::{CostEstimate, Equirectangular, HeuristicConfig, ZeroEstimate};
pub use search_algorithm::SearchAlgorithm;
pub use search_engine::SearchEngine;
pub use search_error::SearchError;
pub use search_summary::SearchSummary;

mod arc_loader;
mod graph;
mod graph_config;
mod graph_loader;
mod network_error;
mod vertex_id;
mod vertex_loader;

pub use graph::Graph;
pub use graph_config::GraphConfig;
pub use graph_loader::graph_from_basename;
pub use network_error::NetworkError;
pub use vertex_id::VertexId;

pub use crate::util::geo::MicroCoord;

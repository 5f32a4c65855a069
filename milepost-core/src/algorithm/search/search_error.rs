use crate::model::network::VertexId;

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("search endpoint {0} outside the graph vertex range [0, {1})")]
    VertexOutOfBounds(VertexId, usize),
    #[error("failure building search: {0}")]
    BuildError(String),
    #[error("internal error due to search logic: {0}")]
    InternalError(String),
}

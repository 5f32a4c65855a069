#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("could not open {path}: {source}")]
    IoOpenFailed {
        path: String,
        source: std::io::Error,
    },
    #[error("no problem ('p') line found before graph data in {0}")]
    HeaderMissing(String),
    #[error("malformed header in {path}: {detail}")]
    HeaderMalformed { path: String, detail: String },
    #[error("{path} declares {declared} {kind} but the stream contained {observed}")]
    CountMismatch {
        path: String,
        kind: &'static str,
        declared: usize,
        observed: usize,
    },
    #[error("vertex id {id} outside the valid range [1, {n}] in {path}")]
    VertexOutOfRange { path: String, id: u64, n: usize },
    #[error("arc weight {weight} in {path} does not fit in 32 bits")]
    WeightOverflow { path: String, weight: u64 },
    #[error("coordinate for vertex {id} in {path} does not fit in 32 bits")]
    CoordinateOverflow { path: String, id: u64 },
    #[error("invalid graph topology: {0}")]
    InvalidTopology(String),
    #[error("failure reading graph data from file: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

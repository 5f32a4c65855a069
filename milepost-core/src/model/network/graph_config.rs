use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// names a DIMACS dataset by its shared basename: the arc table is read
/// from `<basename>.gr` and the coordinate table from `<basename>.co`,
/// either of which may carry an additional `.gz` suffix on disk.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GraphConfig {
    pub basename: String,
}

impl GraphConfig {
    pub fn new<S: Into<String>>(basename: S) -> Self {
        GraphConfig {
            basename: basename.into(),
        }
    }

    pub fn gr_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.gr", self.basename))
    }

    pub fn co_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.co", self.basename))
    }
}

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevdistConfig {
    pub version: u32,

    /// Metric used when no metric is requested on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,

    /// Glob patterns a changed path must match to be reported.
    /// An empty list accepts every path.
    #[serde(default)]
    pub include: Vec<String>,

    /// Glob patterns that always drop a changed path.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Show one row per file instead of the total only.
    #[serde(default)]
    pub per_file: bool,
}

impl Default for RevdistConfig {
    fn default() -> Self {
        Self {
            version: 1,
            metric: None,
            include: Vec::new(),
            exclude: Vec::new(),
            per_file: false,
        }
    }
}

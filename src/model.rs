mod config;
mod pair;
mod report;
mod value;

pub use self::config::RevdistConfig;
pub use self::pair::ContentPair;
pub use self::report::{MetricResult, Report};
pub use self::value::MetricValue;

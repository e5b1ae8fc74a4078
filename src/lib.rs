pub mod config;
pub mod evaluate;
pub mod git;
pub mod metrics;
pub mod model;
pub mod select;

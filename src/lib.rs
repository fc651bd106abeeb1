pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod planner;

pub use config::Config;
pub use planner::{Plan, Planner, Revision, Snapshot, plan};

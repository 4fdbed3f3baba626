//! Common types and sequencing for fill-db populators.
//!
//! This crate is store agnostic. It owns the CLI arguments shared by every
//! populator, the [`SeedSink`] trait a store implements, and [`run_fill`],
//! which drives the user phase, the max-id check and the message phase.

pub mod args;
pub mod error;
pub mod metrics;
pub mod progress;
pub mod seeder;
pub mod sink;

pub use args::CommonFillArgs;
pub use error::FillError;
pub use metrics::{FillReport, PhaseMetrics};
pub use progress::ProgressLog;
pub use seeder::{run_fill, FillPlan};
pub use sink::SeedSink;

// Library surface shared by the binary and the integration tests.
pub mod config;
pub mod engine;
pub mod error;
pub mod games;
pub mod path;
pub mod session;
pub mod trace;

pub use engine::{AdaptiveEngine, Adjustment, DifficultyPolicy, PerformanceWindow};
pub use error::{Error, Result};
pub use path::{CareerPath, PathSession};

//! Scaffold execution engine
//!
//! This module holds the ordered step executor, the execution context,
//! and the steps that copy, update, and set up a new project.

pub mod command;
pub mod context;
pub mod copy;
pub mod pipeline;
pub mod steps;
pub mod substitute;

// Re-export main types
pub use command::*;
pub use context::*;
pub use copy::*;
pub use pipeline::*;
pub use steps::*;
pub use substitute::*;

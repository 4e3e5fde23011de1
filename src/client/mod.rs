//! Client side orchestration
//!
//! Turns a URL into a target, connects, sends one request and streams the
//! response into a sink.

pub mod connector;
pub mod driver;
pub mod outcome;
pub mod target;

pub use connector::connect;
pub use driver::{run, run_with_sink};
pub use outcome::Outcome;
pub use target::Target;

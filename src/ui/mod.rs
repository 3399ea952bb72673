//! User interface module.
//!
//! Everything here writes to stderr. The computed version and the rendered
//! history are printed to stdout by the binary without decoration.

pub mod formatter;

pub use formatter::{display_error, display_version_change};

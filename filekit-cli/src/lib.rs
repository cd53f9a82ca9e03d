//! Command-line front ends for the filekit tools.
//!
//! Each binary under `src/bin/` parses one of the argument structs in
//! [`cli`], converts it into a validated `filekit::config` record and runs
//! the matching library operation.

#![warn(missing_docs)]

pub mod cli;
pub mod logging;

//! Find which symlink aliases point at a given file.
//!
//! The core of the crate is [`find_links_to`]: scan a directory for
//! symbolic links whose resolved destination is a given target file.
//! The [`device`] module supplies the evdev side of the `lsevdev` binary,
//! enumerating `/dev/input` nodes and querying their kernel-reported names.

pub mod device;

mod error;
mod links;

pub use error::{Error, Result};
pub use links::find_links_to;

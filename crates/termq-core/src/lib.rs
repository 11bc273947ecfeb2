#![forbid(unsafe_code)]

//! Core: capability query wire types and XTGETTCAP response decoding.

pub mod event;
pub mod logging;
pub mod termcap;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};

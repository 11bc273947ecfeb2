#![forbid(unsafe_code)]

//! Runtime command model and capability negotiation commands.

pub mod capability;
pub mod command;

pub use capability::request_capability;
pub use command::Cmd;

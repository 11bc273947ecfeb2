#![forbid(unsafe_code)]

//! Terminal capability queries as scheduler commands.
//!
//! Capability discovery is a two-leg exchange. This module builds the
//! outbound leg: a command whose execution yields one message carrying
//! the capability name. The output driver encodes that message into the
//! XTGETTCAP wire sequence; the reply comes back through the input
//! pipeline as a `ControlReply` and is decoded in `termq-core`.

use termq_core::termcap::CapabilityRequest;

use crate::command::Cmd;

/// Build a command that asks the terminal for a named capability.
///
/// Construction is pure and side-effect-free; nothing touches the
/// terminal until the scheduler runs the task, and the task itself only
/// produces the message — writing the query is the driver's job. Unknown
/// capability names are harmless: terminals ignore them.
///
/// Note that some terminals (Apple's Terminal.app among them) answer
/// XTGETTCAP incorrectly; the decoder drops what it cannot read.
///
/// When the detected color profile is not true color, query `"RGB"` and
/// `"Tc"` and upgrade the profile if the terminal confirms either:
///
/// ```
/// use termq_core::termcap::CapabilityRequest;
/// use termq_runtime::{Cmd, request_capability};
///
/// #[derive(Debug)]
/// enum Msg {
///     QueryCapability(CapabilityRequest),
/// }
///
/// impl From<CapabilityRequest> for Msg {
///     fn from(request: CapabilityRequest) -> Self {
///         Self::QueryCapability(request)
///     }
/// }
///
/// let cmd: Cmd<Msg> = Cmd::batch(vec![
///     request_capability("RGB"),
///     request_capability("Tc"),
/// ]);
/// ```
pub fn request_capability<M>(name: impl Into<String>) -> Cmd<M>
where
    M: From<CapabilityRequest> + Send + 'static,
{
    let request = CapabilityRequest::new(name);
    Cmd::task(move || {
        tracing::debug!(capability = %request, "requesting terminal capability");
        M::from(request)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Msg {
        QueryCapability(CapabilityRequest),
    }

    impl From<CapabilityRequest> for Msg {
        fn from(request: CapabilityRequest) -> Self {
            Self::QueryCapability(request)
        }
    }

    fn run(cmd: Cmd<Msg>) -> Msg {
        match cmd {
            Cmd::Task(f) => f(),
            other => panic!("expected Task, got {}", other.type_name()),
        }
    }

    #[test]
    fn request_yields_one_message_carrying_the_name() {
        let msg = run(request_capability("RGB"));
        assert_eq!(msg, Msg::QueryCapability(CapabilityRequest::new("RGB")));
    }

    #[test]
    fn unknown_names_pass_through_unvalidated() {
        let msg = run(request_capability("definitely-not-a-capability"));
        let Msg::QueryCapability(request) = msg;
        assert_eq!(request.name(), "definitely-not-a-capability");
    }

    #[test]
    fn construction_has_no_side_effects() {
        // Building the command must not produce the message; only the
        // scheduler's execution does.
        let cmd: Cmd<Msg> = request_capability("Tc");
        assert_eq!(cmd.type_name(), "Task");
        assert_eq!(cmd.count(), 1);
    }
}

#![forbid(unsafe_code)]

//! Inbound control-reply routing.
//!
//! The input pipeline recognizes terminal control replies, strips their
//! escape-sequence envelope, and surfaces the raw payload as a tagged
//! variant. Decoding dispatches on the variant exhaustively, so adding a
//! reply kind forces every consumer to handle it.

use crate::termcap::{CapabilityResponse, parse_capability_response};

/// A raw control reply surfaced by the input pipeline.
///
/// Payloads are envelope-stripped: for a capability reply this is the
/// `hexname[=hexvalue][;...]` body of the DCS response, not the full
/// escape sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlReply {
    /// Payload of an XTGETTCAP capability reply.
    Capability(Vec<u8>),
}

/// A decoded reply delivered to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyEvent {
    /// Canonical capability response. The runtime inspects it to decide
    /// whether to upgrade the active color profile; that policy lives
    /// outside this crate.
    Capability(CapabilityResponse),
}

impl ControlReply {
    /// Decode this reply into its event form. Total: malformed payloads
    /// decode to an empty (but valid) event.
    #[must_use]
    pub fn decode(&self) -> ReplyEvent {
        match self {
            Self::Capability(payload) => {
                ReplyEvent::Capability(parse_capability_response(payload))
            }
        }
    }
}

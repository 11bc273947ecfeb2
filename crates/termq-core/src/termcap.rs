#![forbid(unsafe_code)]

//! XTGETTCAP capability negotiation: query encoding and response decoding.
//!
//! Terminals answer an XTGETTCAP query with a DCS reply whose payload is a
//! `;`-separated list of `name[=value]` fields, each component encoded as
//! two hex digits per source byte (either case). The input pipeline strips
//! the DCS envelope before handing the payload to [`parse_capability_response`].
//!
//! # Fail-Open Guarantee
//!
//! Replies come from a highly non-uniform population of terminal emulators,
//! and capability discovery is optional: a malformed field is dropped
//! silently and decoding never fails. The decoder is a total, pure function
//! of its input — same bytes in, same string out, no retained state.

use std::fmt;

#[cfg(feature = "tracing")]
use tracing::trace;

#[cfg(not(feature = "tracing"))]
use crate::trace;

/// A named terminal capability to query (e.g. `"RGB"`, `"Tc"`).
///
/// The name is opaque at this layer: unknown capabilities are harmless
/// because terminals ignore unrecognized XTGETTCAP names.
///
/// Capabilities relevant to color-profile upgrades:
/// - `"RGB"` — xterm direct color
/// - `"Tc"` — true color support
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CapabilityRequest(String);

impl CapabilityRequest {
    /// Wrap a capability name. No validation is performed.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The capability name as originally given.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CapabilityRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CapabilityRequest {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Canonical decoded form of a capability reply.
///
/// `;`-joined `name` or `name=value` fields, original field order
/// preserved, malformed fields omitted. May be empty when the terminal
/// sent no usable reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityResponse(String);

impl CapabilityResponse {
    /// The canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the reply carried no decodable field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the decoded `name` / `name=value` fields in reply order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.split(';').filter(|f| !f.is_empty())
    }
}

impl fmt::Display for CapabilityResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- XTGETTCAP wire encoding ---
//
// Query:    DCS + q <hex-name> ST   (ESC P + q ... ESC \)
// Response: DCS 1 + r <hex-name>[=<hex-value>] ST  on success

const DCS: &[u8] = b"\x1bP";
const ST: &[u8] = b"\x1b\\";

/// Build the XTGETTCAP wire query for a capability request.
///
/// Produces `DCS + q <hex-name> ST`. Sending the query and reading the
/// reply belong to the output driver and input pipeline respectively.
#[must_use]
pub fn xtgettcap_query(request: &CapabilityRequest) -> Vec<u8> {
    let name = hex::encode(request.name());
    let mut seq = Vec::with_capacity(DCS.len() + 2 + name.len() + ST.len());
    seq.extend_from_slice(DCS);
    seq.extend_from_slice(b"+q");
    seq.extend_from_slice(name.as_bytes());
    seq.extend_from_slice(ST);
    seq
}

/// Decode an envelope-stripped XTGETTCAP reply payload.
///
/// Total function: any byte sequence yields a response, possibly empty.
/// Fields are processed in order; a field is dropped when its name fails
/// to hex-decode, decodes to zero bytes, or its value fails to hex-decode.
/// A field whose value decodes to zero bytes emits the bare name.
#[must_use]
pub fn parse_capability_response(payload: &[u8]) -> CapabilityResponse {
    if payload.is_empty() {
        return CapabilityResponse::default();
    }

    let mut out = String::new();
    for field in payload.split(|&b| b == b';') {
        let mut parts = field.splitn(2, |&b| b == b'=');
        let raw_name = parts.next().unwrap_or_default();
        let raw_value = parts.next();

        let Some(name) = decode_name(raw_name) else {
            trace!("dropping capability field: malformed or empty name");
            continue;
        };

        let value = match raw_value.map(decode_component) {
            Some(Some(value)) => value,
            Some(None) => {
                // Reference consumers drop the whole field on a malformed
                // value rather than emitting the bare name.
                trace!(capability = %name, "dropping capability field: malformed value");
                continue;
            }
            None => String::new(),
        };

        if !out.is_empty() {
            out.push(';');
        }
        out.push_str(&name);
        if !value.is_empty() {
            out.push('=');
            out.push_str(&value);
        }
    }

    CapabilityResponse(out)
}

/// Decode a hex-encoded capability name.
///
/// Some terminals NUL-terminate the reported name; trailing NULs are
/// trimmed before the emptiness check. Returns `None` for non-hex input
/// or a name that decodes to zero bytes.
fn decode_name(raw: &[u8]) -> Option<String> {
    let mut bytes = hex::decode(raw).ok()?;
    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    if bytes.is_empty() {
        return None;
    }
    String::from_utf8(bytes).ok()
}

/// Decode a hex-encoded field component into a UTF-8 string.
fn decode_component(raw: &[u8]) -> Option<String> {
    let bytes = hex::decode(raw).ok()?;
    String::from_utf8(bytes).ok()
}

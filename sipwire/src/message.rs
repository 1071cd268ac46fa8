#![deny(missing_docs)]
//! SIP Message types
//!
//! The module provides the [`Message`] trait implemented by every SIP
//! message kind and the [`Request`] struct that represents a request from
//! a client to a server.

use std::fmt;

use tracing::Span;

use crate::headers::{CSeq, CallId, From, Header, Headers, To};

mod method;
mod params;
mod transport;
mod uri;

pub use method::*;
pub use params::*;
pub use transport::*;
pub use uri::*;

/// The protocol version emitted by this crate, `"SIP/2.0"`.
pub const SIPV2: &str = "SIP/2.0";

/// Capability interface shared by SIP message kinds.
///
/// Exposes the state every message carries (protocol version, header
/// collection, body), the typed header lookups, and the textual renderings
/// of RFC 3261. [`Request`] implements it by delegating to its owned
/// message state; a response kind would implement it the same way.
pub trait Message {
    /// Returns the SIP protocol version, e.g. `"SIP/2.0"`.
    fn sip_version(&self) -> &str;

    /// Replaces the SIP protocol version.
    ///
    /// The value is stored verbatim, malformed versions are a caller
    /// concern and simply serialize as given.
    fn set_sip_version(&mut self, version: String);

    /// Returns the header collection.
    fn headers(&self) -> &Headers;

    /// Returns the header collection for mutation.
    fn headers_mut(&mut self) -> &mut Headers;

    /// Returns the message body, empty when the message has none.
    fn body(&self) -> &str;

    /// Replaces the message body.
    fn set_body(&mut self, body: String);

    /// Returns the span this message is traced under.
    fn span(&self) -> &Span;

    /// Replaces the tracing span.
    fn set_span(&mut self, span: Span);

    /// Renders the start line of the message, without a line terminator.
    fn start_line(&self) -> String;

    /// Returns the first `CSeq` header, if any.
    fn cseq(&self) -> Option<&CSeq> {
        self.headers().find_map(|header| match header {
            Header::CSeq(cseq) => Some(cseq),
            _ => None,
        })
    }

    /// Returns the first `Call-ID` header, if any.
    fn call_id(&self) -> Option<&CallId> {
        self.headers().find_map(|header| match header {
            Header::CallId(call_id) => Some(call_id),
            _ => None,
        })
    }

    /// Returns the first `From` header, if any.
    fn from(&self) -> Option<&From> {
        self.headers().find_map(|header| match header {
            Header::From(from) => Some(from),
            _ => None,
        })
    }

    /// Returns the first `To` header, if any.
    fn to(&self) -> Option<&To> {
        self.headers().find_map(|header| match header {
            Header::To(to) => Some(to),
            _ => None,
        })
    }

    /// Compact single-line summary for diagnostics.
    ///
    /// Renders the start line followed by the CSeq, Call-ID, From and To
    /// headers that are present, each in parentheses, always in that
    /// order. Absent headers are skipped. This is not the wire form.
    fn short(&self) -> String {
        let mut buffer = self.start_line();

        if let Some(cseq) = self.cseq() {
            buffer.push_str(&format!(" ({cseq})"));
        }
        if let Some(call_id) = self.call_id() {
            buffer.push_str(&format!(" ({call_id})"));
        }
        if let Some(from) = self.from() {
            buffer.push_str(&format!(" ({from})"));
        }
        if let Some(to) = self.to() {
            buffer.push_str(&format!(" ({to})"));
        }

        buffer
    }
}

/// State common to every message kind.
#[derive(Debug, Clone)]
struct Parts {
    sip_version: String,
    headers: Headers,
    body: String,
    span: Span,
}

/// A SIP Request, RFC 3261 section 7.1.
///
/// A request targets a recipient URI with a [`Method`] and carries the
/// shared message state of the [`Message`] trait. It is a passive value
/// with single-writer ownership: one logical owner mutates it, and
/// sharing with a concurrent consumer goes through [`Clone`], which
/// produces a fully independent copy (new header collection, new
/// recipient URI, copied scalars). Only the tracing span is shared
/// between a request and its clones.
///
/// # Examples
///
/// ```
/// use sipwire::headers::{CSeq, CallId, Header, Headers};
/// use sipwire::message::{Message, Method, Request, SIPV2};
///
/// let recipient = "sip:bob@biloxi.com".parse().unwrap();
/// let headers = Headers::from([
///     Header::CSeq(CSeq::new(1, Method::Invite)),
///     Header::CallId(CallId::new("abc")),
/// ]);
/// let request = Request::new(Method::Invite, recipient, SIPV2, headers, "");
///
/// assert_eq!(request.start_line(), "INVITE sip:bob@biloxi.com SIP/2.0");
/// assert!(request.is_invite());
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    recipient: Uri,
    parts: Parts,
}

impl Request {
    /// Creates a new `Request`.
    ///
    /// All inputs are accepted as-is: no validation is performed on the
    /// method, recipient or version, and malformed state simply
    /// serializes to a malformed string. The one normalization applied is
    /// on the body, a body that is blank after trimming surrounding
    /// whitespace is stored as empty.
    pub fn new(
        method: Method,
        recipient: Uri,
        sip_version: impl Into<String>,
        headers: impl Into<Headers>,
        body: &str,
    ) -> Self {
        let span = tracing::debug_span!("request", method = %method, recipient = %recipient);
        let body = if body.trim().is_empty() {
            String::new()
        } else {
            body.to_owned()
        };

        Request {
            method,
            recipient,
            parts: Parts {
                sip_version: sip_version.into(),
                headers: headers.into(),
                body,
                span,
            },
        }
    }

    /// Returns the request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Sets the request method.
    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// Returns the Request-URI this request targets.
    pub fn recipient(&self) -> &Uri {
        &self.recipient
    }

    /// Replaces the Request-URI.
    pub fn set_recipient(&mut self, recipient: Uri) {
        self.recipient = recipient;
    }

    /// Returns `true` if the request method is `INVITE`.
    pub fn is_invite(&self) -> bool {
        self.method.is_invite()
    }

    /// Returns `true` if the request method is `ACK`.
    pub fn is_ack(&self) -> bool {
        self.method.is_ack()
    }
}

impl Message for Request {
    fn sip_version(&self) -> &str {
        &self.parts.sip_version
    }

    fn set_sip_version(&mut self, version: String) {
        self.parts.sip_version = version;
    }

    fn headers(&self) -> &Headers {
        &self.parts.headers
    }

    fn headers_mut(&mut self) -> &mut Headers {
        &mut self.parts.headers
    }

    fn body(&self) -> &str {
        &self.parts.body
    }

    fn set_body(&mut self, body: String) {
        self.parts.body = body;
    }

    fn span(&self) -> &Span {
        &self.parts.span
    }

    fn set_span(&mut self, span: Span) {
        self.parts.span = span;
    }

    /// Renders the Request-Line, RFC 3261 section 7.1: method,
    /// Request-URI and protocol version separated by single spaces.
    fn start_line(&self) -> String {
        format!("{} {} {}", self.method, self.recipient, self.parts.sip_version)
    }
}

impl fmt::Display for Request {
    /// Serializes the full wire form.
    ///
    /// Request-Line CRLF, every header CRLF-terminated, then the blank
    /// line that separates headers from the (possibly empty) body. Peers
    /// reject messages that deviate from this CRLF framing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\r\n{}\r\n{}",
            self.start_line(),
            self.parts.headers,
            self.parts.body
        )
    }
}

use std::fmt;

use crate::message::{Params, SipUri};

/// The `From` SIP header.
///
/// Indicates the initiator of the request.
///
/// # Examples
/// ```
/// # use sipwire::headers::From;
/// # use sipwire::message::SipUri;
/// let uri = SipUri::NameAddr("<sip:alice@client.atlanta.example.com>".parse().unwrap());
///
/// let f = From::new(uri);
///
/// assert_eq!(
///     "From: <sip:alice@client.atlanta.example.com>",
///     f.to_string()
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct From {
    uri: SipUri,
    tag: Option<String>,
    params: Option<Params>,
}

impl From {
    /// The canonical name of the `From` header.
    pub const NAME: &'static str = "From";

    /// Create a new `From` instance.
    pub fn new(uri: SipUri) -> Self {
        Self {
            uri,
            tag: None,
            params: None,
        }
    }

    /// Create a new `From` instance carrying a tag parameter.
    pub fn with_tag(uri: SipUri, tag: impl Into<String>) -> Self {
        Self {
            uri,
            tag: Some(tag.into()),
            params: None,
        }
    }

    /// Get the URI of the `From` header.
    pub fn uri(&self) -> &SipUri {
        &self.uri
    }

    /// Returns the tag parameter.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

impl fmt::Display for From {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", From::NAME, self.uri)?;
        if let Some(tag) = &self.tag {
            write!(f, ";tag={}", tag)?;
        }
        if let Some(params) = &self.params {
            write!(f, ";{}", params)?;
        }

        Ok(())
    }
}

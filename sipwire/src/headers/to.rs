use std::fmt;

use crate::message::{Params, SipUri};

/// The `To` SIP header.
///
/// Specifies the logical recipient of the request.
///
/// # Examples
/// ```
/// # use sipwire::headers::To;
/// # use sipwire::message::SipUri;
/// let uri = SipUri::NameAddr("Bob <sip:bob@biloxi.com>".parse().unwrap());
/// let t = To::new(uri);
///
/// assert_eq!(
///     "To: Bob <sip:bob@biloxi.com>",
///     t.to_string()
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct To {
    uri: SipUri,
    tag: Option<String>,
    params: Option<Params>,
}

impl To {
    /// The canonical name of the `To` header.
    pub const NAME: &'static str = "To";

    /// Create a new `To` instance.
    pub fn new(uri: SipUri) -> Self {
        Self {
            uri,
            tag: None,
            params: None,
        }
    }

    /// Get the URI of the `To` header.
    pub fn uri(&self) -> &SipUri {
        &self.uri
    }

    /// Returns the tag parameter.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Set the tag parameter.
    pub fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag;
    }
}

impl fmt::Display for To {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", To::NAME, self.uri)?;
        if let Some(tag) = &self.tag {
            write!(f, ";tag={}", tag)?;
        }
        if let Some(params) = &self.params {
            write!(f, ";{}", params)?;
        }

        Ok(())
    }
}

use std::fmt;

/// The `Call-ID` SIP header.
///
/// Uniquely identifies a particular invitation or all registrations of
/// a particular client.
///
/// # Examples
///
/// ```
/// # use sipwire::headers::CallId;
/// let cid = CallId::new("bs9ki9iqbee8k5kal8mpqb");
///
/// assert_eq!(
///     "Call-ID: bs9ki9iqbee8k5kal8mpqb",
///     cid.to_string()
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
#[repr(transparent)]
pub struct CallId(String);

impl std::convert::From<&str> for CallId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl CallId {
    /// The canonical name of the `Call-ID` header.
    pub const NAME: &'static str = "Call-ID";

    /// Creates a new `CallId` instance with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the internal `CallId` identifier.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", CallId::NAME, self.0)
    }
}

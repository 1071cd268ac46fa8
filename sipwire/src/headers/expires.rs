use std::fmt;

/// The `Expires` SIP header.
///
/// Gives the relative time after which the message (or content)
/// expires.
///
/// # Examples
/// ```
/// # use sipwire::headers::Expires;
/// let expires = Expires::new(3600);
///
/// assert_eq!(
///     "Expires: 3600",
///     expires.to_string()
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(transparent)]
pub struct Expires(u32);

impl Expires {
    /// The canonical name of the `Expires` header.
    pub const NAME: &'static str = "Expires";

    /// Creates a new `Expires` header with the given expiration time.
    pub fn new(expires: u32) -> Self {
        Self(expires)
    }

    /// Returns the `Expires` value as a `u32`.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Expires {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Expires::NAME, self.0)
    }
}

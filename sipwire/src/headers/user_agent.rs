use std::fmt;

/// The `User-Agent` SIP header.
///
/// Contains information about the `UAC` originating the request.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UserAgent(String);

impl UserAgent {
    /// The canonical name of the `User-Agent` header.
    pub const NAME: &'static str = "User-Agent";

    /// Creates a new `UserAgent` header.
    pub fn new(agent: impl Into<String>) -> Self {
        Self(agent.into())
    }

    /// Returns the agent string.
    pub fn agent(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", UserAgent::NAME, self.0)
    }
}

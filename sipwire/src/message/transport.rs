use std::fmt;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// The transport protocol token that appears in `Via` headers.
pub enum TransportKind {
    /// UDP transport.
    #[default]
    Udp,
    /// TCP transport.
    Tcp,
    /// TLS transport.
    Tls,
    /// WebSocket transport.
    Ws,
}

impl TransportKind {
    /// Returns the canonical token, as written on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Udp => "UDP",
            TransportKind::Tcp => "TCP",
            TransportKind::Tls => "TLS",
            TransportKind::Ws => "WS",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use std::fmt;
use std::net::IpAddr;

use crate::message::{HostPort, Params, TransportKind, SIPV2};

/// The `Via` SIP header.
///
/// Indicates the path taken by the request so far and the path that
/// should be followed in routing responses.
///
/// # Examples
/// ```
/// # use sipwire::headers::Via;
///
/// let via = Via::new_udp(
///     "server10.biloxi.com".parse().unwrap(),
///     Some("z9hG4bKnashds8"),
/// );
///
/// assert_eq!(
///     "Via: SIP/2.0/UDP server10.biloxi.com;branch=z9hG4bKnashds8",
///     via.to_string()
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct Via {
    transport: TransportKind,
    sent_by: HostPort,
    received: Option<IpAddr>,
    branch: Option<String>,
    rport: Option<u16>,
    params: Option<Params>,
}

impl Via {
    /// The canonical name of the `Via` header.
    pub const NAME: &'static str = "Via";

    /// Creates a new `Via` header with UDP transport and optional
    /// branch.
    ///
    /// # Arguments
    /// * `sent_by` - The host and optional port to which responses should be sent.
    /// * `branch` - Optional branch parameter to identify the transaction.
    pub fn new_udp(sent_by: HostPort, branch: Option<&str>) -> Self {
        Self {
            transport: TransportKind::Udp,
            sent_by,
            received: None,
            branch: branch.map(str::to_owned),
            rport: None,
            params: None,
        }
    }

    /// Set the `received` parameter.
    pub fn set_received(&mut self, received: IpAddr) {
        self.received = Some(received);
    }

    /// Returns the `received` parameter.
    pub fn received(&self) -> Option<IpAddr> {
        self.received
    }

    /// Returns the `transport`.
    pub fn transport(&self) -> TransportKind {
        self.transport
    }

    /// Returns the `rport`.
    pub fn rport(&self) -> Option<u16> {
        self.rport
    }

    /// Set the sent_by field.
    pub fn set_sent_by(&mut self, sent_by: HostPort) {
        self.sent_by = sent_by;
    }

    /// Returns the branch parameter.
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Returns the sent_by field.
    pub fn sent_by(&self) -> &HostPort {
        &self.sent_by
    }
}

impl fmt::Display for Via {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}/{} {}", Via::NAME, SIPV2, self.transport, self.sent_by)?;

        if let Some(rport) = self.rport {
            write!(f, ";rport={}", rport)?;
        }
        if let Some(received) = &self.received {
            write!(f, ";received={received}")?;
        }
        if let Some(branch) = &self.branch {
            write!(f, ";branch={branch}")?;
        }
        if let Some(params) = &self.params {
            write!(f, ";{params}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_received_is_rendered_before_branch() {
        let mut via = Via::new_udp(
            "pc33.atlanta.com".parse().unwrap(),
            Some("z9hG4bK776asdhds"),
        );
        via.set_received("192.0.2.1".parse().unwrap());

        assert_eq!(
            via.to_string(),
            "Via: SIP/2.0/UDP pc33.atlanta.com;received=192.0.2.1;branch=z9hG4bK776asdhds"
        );
    }
}

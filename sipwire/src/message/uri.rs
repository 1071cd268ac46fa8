use std::{
    borrow::Cow,
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    str::FromStr,
    sync::Arc,
};

use itertools::Itertools;

use crate::error::{Error, Result};

use super::Params;

#[derive(Debug, PartialEq, Eq, Clone)]
/// A SIP URI.
///
/// Represents a Uniform Resource Identifier(URI) used in SIP messages,
/// which can either be a plain `Uri` or a `NameAddr` (a named address
/// with optional display name).
///
/// # Examples
/// ```
/// use sipwire::message::{NameAddr, SipUri, Uri};
///
/// let uri: Uri = "sip:alice@example.com".parse().unwrap();
/// let sip_uri = SipUri::Uri(uri);
///
/// let name_addr: NameAddr = "\"Alice\" <sip:alice@example.com>".parse().unwrap();
/// let named = SipUri::NameAddr(name_addr);
/// ```
pub enum SipUri {
    /// A plain SIP URI (e.g. `sip:user@example.com`)
    Uri(Uri),
    /// A named address (e.g. `"Alice" <sip:user@example.com>`)
    NameAddr(NameAddr),
}

impl fmt::Display for SipUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SipUri::Uri(uri) => write!(f, "{}", uri),
            SipUri::NameAddr(name_addr) => write!(f, "{}", name_addr),
        }
    }
}

impl SipUri {
    /// Returns a reference to the [`Uri`] if this is a [`SipUri::Uri`]
    /// variant.
    pub fn uri(&self) -> Option<&Uri> {
        if let SipUri::Uri(uri) = self {
            Some(uri)
        } else {
            None
        }
    }

    /// Returns a reference to the [`NameAddr`] if this is a
    /// [`SipUri::NameAddr`] variant.
    pub fn name_addr(&self) -> Option<&NameAddr> {
        if let SipUri::NameAddr(addr) = self {
            Some(addr)
        } else {
            None
        }
    }

    /// Returns the scheme of the uri.
    pub fn scheme(&self) -> Scheme {
        match self {
            SipUri::Uri(uri) => uri.scheme,
            SipUri::NameAddr(name_addr) => name_addr.uri.scheme,
        }
    }

    /// Returns the user part of the uri.
    pub fn user(&self) -> Option<&UriUser> {
        match self {
            SipUri::Uri(uri) => uri.user.as_ref(),
            SipUri::NameAddr(name_addr) => name_addr.uri.user.as_ref(),
        }
    }

    /// Returns a reference to the [`HostPort`] of the uri.
    pub fn host_port(&self) -> &HostPort {
        match self {
            SipUri::Uri(uri) => &uri.host_port,
            SipUri::NameAddr(name_addr) => &name_addr.uri.host_port,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Copy)]
/// A SIP URI scheme, either `sip` or `sips`.
pub enum Scheme {
    #[default]
    /// An Sip uri scheme.
    Sip,
    /// An Sips uri scheme.
    Sips,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Sip => f.write_str("sip"),
            Scheme::Sips => f.write_str("sips"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Default, Clone)]
/// An SIP uri.
///
/// The canonical textual form is produced by `Display` and embedded
/// verbatim in the Request-Line; [`FromStr`] parses it back.
pub struct Uri {
    /// The uri scheme.
    pub scheme: Scheme,

    /// Optional user part of uri.
    pub user: Option<UriUser>,

    /// The uri host.
    pub host_port: HostPort,

    /// Other parameters.
    pub params: Option<Params>,

    /// Optional header parameters.
    pub hdr_params: Option<Params>,
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;

        if let Some(user) = &self.user {
            write!(f, "{}", user.user)?;
            if let Some(pass) = &user.pass {
                write!(f, ":{}", pass)?;
            }
            write!(f, "@")?;
        }
        write!(f, "{}", self.host_port)?;

        if let Some(params) = &self.params {
            write!(f, ";{}", params)?;
        }
        if let Some(hdr_params) = &self.hdr_params {
            let formatter = Itertools::format_with(hdr_params.iter(), "&", |param, f| {
                f(&format_args!(
                    "{}={}",
                    param.name,
                    param.value.as_deref().unwrap_or("")
                ))
            });
            write!(f, "?{}", formatter)?;
        }

        Ok(())
    }
}

impl Uri {
    /// Creates an `Uri` instance without parameters.
    pub fn without_params(scheme: Scheme, user: Option<UriUser>, host_port: HostPort) -> Self {
        Uri {
            scheme,
            user,
            host_port,
            ..Default::default()
        }
    }
}

fn parse_params(src: &str, sep: char) -> Result<Params> {
    src.split(sep).map(|param| param.parse()).collect()
}

impl FromStr for Uri {
    type Err = Error;

    /*
     * SIP-URI  =  "sip:" [ userinfo ] hostport
     *             uri-parameters [ headers ]
     */
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || Error::InvalidUri(s.to_owned());

        let (scheme, rest) = match s.split_once(':') {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("sip") => (Scheme::Sip, rest),
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("sips") => (Scheme::Sips, rest),
            _ => return Err(invalid()),
        };

        let (rest, hdr_params) = match rest.split_once('?') {
            Some((rest, raw)) => (rest, Some(parse_params(raw, '&')?)),
            None => (rest, None),
        };
        let (addr, params) = match rest.split_once(';') {
            Some((addr, raw)) => (addr, Some(parse_params(raw, ';')?)),
            None => (rest, None),
        };

        let (user, host) = match addr.rsplit_once('@') {
            Some((user, host)) => {
                if user.is_empty() {
                    return Err(invalid());
                }
                let user = match user.split_once(':') {
                    Some((user, pass)) => UriUser {
                        user: user.to_owned(),
                        pass: Some(pass.to_owned()),
                    },
                    None => UriUser {
                        user: user.to_owned(),
                        pass: None,
                    },
                };
                (Some(user), host)
            }
            None => (None, addr),
        };

        Ok(Uri {
            scheme,
            user,
            host_port: host.parse()?,
            params,
            hdr_params,
        })
    }
}

#[derive(Default)]
/// Builder for creating a new SIP URI.
pub struct UriBuilder {
    uri: Uri,
}

impl UriBuilder {
    /// Returns a builder to create an `UriBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the uri scheme.
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.uri.scheme = scheme;
        self
    }

    /// Sets the user part of the uri.
    pub fn user(mut self, user: UriUser) -> Self {
        self.uri.user = Some(user);
        self
    }

    /// Sets the host of the uri.
    pub fn host(mut self, host_port: HostPort) -> Self {
        self.uri.host_port = host_port;
        self
    }

    /// Set generic parameter of the uri.
    pub fn param(mut self, name: &str, value: Option<&str>) -> Self {
        self.uri
            .params
            .get_or_insert_with(Params::new)
            .push(super::Param {
                name: name.to_owned(),
                value: value.map(str::to_owned),
            });
        self
    }

    /// Set header parameter of the uri.
    pub fn header_param(mut self, name: &str, value: &str) -> Self {
        self.uri
            .hdr_params
            .get_or_insert_with(Params::new)
            .push(super::Param {
                name: name.to_owned(),
                value: Some(value.to_owned()),
            });
        self
    }

    /// Finalize the builder into a `Uri`.
    pub fn get(self) -> Uri {
        self.uri
    }
}

/// Represents an SIP `name-addr`.
///
/// Typically appear in `From`, `To`, and `Contact` header. Contains an
/// sip uri and a optional display part.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NameAddr {
    /// The optional display part.
    pub display: Option<String>,
    /// The uri of the `name-addr`.
    pub uri: Uri,
}

impl fmt::Display for NameAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(display) = &self.display {
            write!(f, "{} ", display)?;
        }
        write!(f, "<{}>", self.uri)?;

        Ok(())
    }
}

impl FromStr for NameAddr {
    type Err = Error;

    /// Parses `display <uri>`, `<uri>` or a bare uri. A quoted display
    /// part is stored without the quotes.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();

        match s.split_once('<') {
            Some((display, rest)) => {
                let uri = rest
                    .strip_suffix('>')
                    .ok_or_else(|| Error::InvalidUri(s.to_owned()))?;
                let display = display.trim().trim_matches('"');

                Ok(NameAddr {
                    display: (!display.is_empty()).then(|| display.to_owned()),
                    uri: uri.parse()?,
                })
            }
            None => Ok(NameAddr {
                display: None,
                uri: s.parse()?,
            }),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
/// Represents the user information component of a URI.
pub struct UriUser {
    /// The username part of the URI.
    pub user: String,

    /// The optional password associated with the user.
    pub pass: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
/// Represents the host part of a URI, which can be either a domain name
/// or an IP address.
pub enum Host {
    /// A domain name, such as `example.com`.
    DomainName(Arc<str>),

    /// An IP address, either IPv4 or IPv6.
    IpAddr(IpAddr),
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::DomainName(domain) => write!(f, "{domain}"),
            Host::IpAddr(IpAddr::V6(ip_addr)) => write!(f, "[{ip_addr}]"),
            Host::IpAddr(ip_addr) => write!(f, "{ip_addr}"),
        }
    }
}

impl Host {
    /// Returns `true` if the host is an IP address (IPv4 or IPv6).
    pub fn is_ip_addr(&self) -> bool {
        matches!(self, Host::IpAddr(_))
    }

    /// Returns the string representation of the host as a `Cow<str>`.
    ///
    /// If the host is a domain name, this returns a borrowed string. If
    /// the host is an IP address, this returns an owned string created
    /// via formatting.
    pub fn as_str(&self) -> Cow<'_, str> {
        match self {
            Host::DomainName(host) => Cow::Borrowed(host),
            Host::IpAddr(host) => Cow::Owned(host.to_string()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
/// Represents a combination of a host (domain or IP address) and an
/// optional port.
pub struct HostPort {
    /// The host part, which may be a domain name or an IP address.
    pub host: Host,

    /// The optional port number.
    pub port: Option<u16>,
}

impl FromStr for HostPort {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || Error::InvalidUri(format!("invalid host: {s}"));

        if let Some(rest) = s.strip_prefix('[') {
            let (ip, rest) = rest.split_once(']').ok_or_else(invalid)?;
            let ip: Ipv6Addr = ip.parse().map_err(|_| invalid())?;
            let port = match rest.strip_prefix(':') {
                Some(port) => Some(port.parse::<u16>().map_err(|_| invalid())?),
                None if rest.is_empty() => None,
                None => return Err(invalid()),
            };
            return Ok(HostPort {
                host: Host::IpAddr(IpAddr::V6(ip)),
                port,
            });
        }

        let (host, port) = match s.split_once(':') {
            Some((host, port)) => (host, Some(port.parse::<u16>().map_err(|_| invalid())?)),
            None => (s, None),
        };
        if host.is_empty() {
            return Err(invalid());
        }
        let host = match host.parse::<IpAddr>() {
            Ok(ip_addr) => Host::IpAddr(ip_addr),
            Err(_) => Host::DomainName(Arc::from(host)),
        };

        Ok(HostPort { host, port })
    }
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

impl From<Host> for HostPort {
    fn from(host: Host) -> Self {
        Self { host, port: None }
    }
}

impl HostPort {
    /// Creates a new `HostPort` from a host and optional port.
    pub fn new(host: Host, port: Option<u16>) -> Self {
        Self { host, port }
    }

    /// Returns the IP address if the host is an IP address, otherwise
    /// `None`.
    pub fn ip_addr(&self) -> Option<IpAddr> {
        match self.host {
            Host::DomainName(_) => None,
            Host::IpAddr(ip_addr) => Some(ip_addr),
        }
    }

    /// Returns `true` if the host is a domain name.
    pub fn is_domain(&self) -> bool {
        matches!(self.host, Host::DomainName(_))
    }

    /// Returns the string representation of the host.
    pub fn host_as_str(&self) -> Cow<'_, str> {
        self.host.as_str()
    }
}

impl Default for HostPort {
    fn default() -> Self {
        Self {
            host: Host::IpAddr(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))),
            port: Some(5060),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_uri() {
        let uri: Uri = "sip:bob@biloxi.com".parse().unwrap();

        assert_eq!(uri.scheme, Scheme::Sip);
        assert_eq!(uri.user.as_ref().unwrap().user, "bob");
        assert_eq!(
            uri.host_port,
            HostPort {
                host: Host::DomainName("biloxi.com".into()),
                port: None
            }
        );
        assert_eq!(uri.to_string(), "sip:bob@biloxi.com");
    }

    #[test]
    fn test_parses_full_uri() {
        let uri: Uri = "sips:alice:secret@atlanta.com:5061;transport=tls;lr?subject=project"
            .parse()
            .unwrap();

        assert_eq!(uri.scheme, Scheme::Sips);
        assert_matches!(&uri.user, Some(UriUser { user, pass: Some(pass) }) => {
            assert_eq!(user, "alice");
            assert_eq!(pass, "secret");
        });
        assert_eq!(uri.host_port.port, Some(5061));
        assert_eq!(
            uri.params.as_ref().unwrap().get("transport"),
            Some(Some("tls"))
        );
        assert_eq!(uri.params.as_ref().unwrap().get("lr"), Some(None));
        assert_eq!(
            uri.to_string(),
            "sips:alice:secret@atlanta.com:5061;transport=tls;lr?subject=project"
        );
    }

    #[test]
    fn test_parses_ip_hosts() {
        let v4: Uri = "sip:192.0.2.4:5060".parse().unwrap();
        assert!(v4.host_port.is_ip_addr());
        assert_eq!(v4.to_string(), "sip:192.0.2.4:5060");

        let v6: Uri = "sip:[2001:db8::10]:5070".parse().unwrap();
        assert!(v6.host_port.is_ip_addr());
        assert_eq!(v6.to_string(), "sip:[2001:db8::10]:5070");
    }

    #[test]
    fn test_rejects_malformed_uris() {
        assert_matches!("bob@biloxi.com".parse::<Uri>(), Err(Error::InvalidUri(_)));
        assert_matches!("http:bob@biloxi.com".parse::<Uri>(), Err(Error::InvalidUri(_)));
        assert_matches!("sip:@biloxi.com".parse::<Uri>(), Err(Error::InvalidUri(_)));
        assert_matches!("sip:bob@".parse::<Uri>(), Err(Error::InvalidUri(_)));
        assert_matches!("sip:bob@biloxi.com:port".parse::<Uri>(), Err(Error::InvalidUri(_)));
    }

    #[test]
    fn test_parses_name_addr() {
        let addr: NameAddr = "\"A. G. Bell\" <sip:agb@bell-telephone.com>".parse().unwrap();

        assert_eq!(addr.display.as_deref(), Some("A. G. Bell"));
        assert_eq!(addr.uri.user.as_ref().unwrap().user, "agb");
        assert_eq!(addr.to_string(), "A. G. Bell <sip:agb@bell-telephone.com>");

        let bare: NameAddr = "sip:c8oqz84zk7z@privacy.org".parse().unwrap();
        assert_eq!(bare.display, None);
        assert_eq!(bare.to_string(), "<sip:c8oqz84zk7z@privacy.org>");
    }

    #[test]
    fn test_builder_assembles_uri() {
        let uri = UriBuilder::new()
            .scheme(Scheme::Sip)
            .user(UriUser {
                user: "alice".to_owned(),
                pass: None,
            })
            .host(HostPort::from(Host::DomainName("atlanta.com".into())))
            .param("transport", Some("udp"))
            .get();

        assert_eq!(uri.to_string(), "sip:alice@atlanta.com;transport=udp");
    }
}

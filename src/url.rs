/// Absolute server base URL split into the parts a transport needs.
/// Supports `scheme://host[:port][/path]` with scheme `http` or `https`.
/// Examples: "https://plants.example.com", "http://192.168.1.20:5000/greenhouse"
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ServerUrl<'a> {
    pub scheme: Scheme,
    pub host: &'a str,
    pub port: u16,
    /// Base path without trailing slash, empty for the root
    pub path: &'a str,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Scheme {
    Http,
    Https,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    MissingScheme,
    UnknownScheme,
    UserInfo,
    EmptyHost,
    InvalidHost,
    InvalidPort,
    QueryOrFragment,
}

impl Scheme {
    fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("http") {
            Some(Scheme::Http)
        } else if s.eq_ignore_ascii_case("https") {
            Some(Scheme::Https)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }
}

impl<'a> ServerUrl<'a> {
    pub fn parse(url: &'a str) -> Result<Self, Error> {
        let url = url.trim();

        let (scheme, rest) = url.split_once("://").ok_or(Error::MissingScheme)?;
        let scheme = Scheme::parse(scheme).ok_or(Error::UnknownScheme)?;

        // A base URL carries neither query nor fragment, endpoints are appended to it
        if rest.contains(|c: char| c == '?' || c == '#') {
            return Err(Error::QueryOrFragment);
        }

        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, ""),
        };

        if authority.contains('@') {
            return Err(Error::UserInfo);
        }

        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) => (host, parse_port(port)?),
            None => (authority, scheme.default_port()),
        };

        if host.is_empty() {
            return Err(Error::EmptyHost);
        }

        // Hostnames and IPv4 literals only
        let valid_host = host
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'.');
        if !valid_host || host.starts_with('.') || host.ends_with('.') {
            return Err(Error::InvalidHost);
        }

        Ok(ServerUrl {
            scheme,
            host,
            port,
            path: path.trim_end_matches('/'),
        })
    }

    /// True when the port is the scheme's default and can be left out
    pub fn has_default_port(&self) -> bool {
        self.port == self.scheme.default_port()
    }
}

fn parse_port(s: &str) -> Result<u16, Error> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidPort);
    }
    match s.parse::<u16>() {
        Ok(0) | Err(_) => Err(Error::InvalidPort),
        Ok(port) => Ok(port),
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Error::MissingScheme => "missing `scheme://` prefix",
            Error::UnknownScheme => "scheme must be http or https",
            Error::UserInfo => "credentials in the URL are not supported",
            Error::EmptyHost => "host is empty",
            Error::InvalidHost => "host must be a hostname or IPv4 address",
            Error::InvalidPort => "port must be a number between 1 and 65535",
            Error::QueryOrFragment => "base URL must not contain a query or fragment",
        };
        f.write_str(msg)
    }
}

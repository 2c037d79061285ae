//! Connection URL parser.

use super::{ConnectionError, ConnectionResult};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;
use url::Url;

/// Prefix every Hazelcast JDBC URL starts with (compared case-insensitively).
pub const URL_PREFIX: &str = "jdbc:hazelcast://";

/// Generic JDBC prefix stripped before the remainder is handed to the URI parser.
pub const JDBC_URL_PREFIX: &str = "jdbc:";

/// A parsed Hazelcast connection URL.
///
/// Property values are kept exactly as they appeared in the query string;
/// percent-decoding happens when the values are mapped onto a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionUrl {
    authority: String,
    properties: HashMap<String, String>,
    original: String,
}

impl ConnectionUrl {
    /// Parse a connection URL.
    ///
    /// Returns `Ok(None)` when the URL does not use the `jdbc:hazelcast://`
    /// scheme, and an error when it does but the remainder is not a valid URI.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hazelcast_jdbc_config::connection::ConnectionUrl;
    ///
    /// let url = ConnectionUrl::parse("JDBC:Hazelcast://node1:5701").unwrap().unwrap();
    /// assert_eq!(url.authority(), "node1:5701");
    ///
    /// assert!(ConnectionUrl::parse("not-a-url").unwrap().is_none());
    /// assert!(ConnectionUrl::parse("jdbc:hazelcast://node1:port").is_err());
    /// ```
    pub fn parse(raw: &str) -> ConnectionResult<Option<Self>> {
        if !has_hazelcast_prefix(raw) {
            debug!(url_len = raw.len(), "URL does not use the hazelcast scheme");
            return Ok(None);
        }

        let invalid = |message: String| ConnectionError::InvalidUrl {
            url: raw.to_string(),
            message,
        };

        if let Some((index, c)) = raw.char_indices().find(|&(_, c)| !is_uri_char(c)) {
            return Err(invalid(format!("illegal character {:?} at index {}", c, index)));
        }

        let (authority, query) = split_remainder(&raw[URL_PREFIX.len()..]);
        if authority.is_empty() {
            return Err(invalid("expected authority".to_string()));
        }

        // Syntax check only; the WHATWG parser normalises components, so the
        // authority and query are taken from the raw text.
        Url::parse(&raw[JDBC_URL_PREFIX.len()..]).map_err(|e| invalid(e.to_string()))?;

        let authority = authority.to_string();
        let properties = query.map(parse_query).unwrap_or_default();

        debug!(
            authority = %authority,
            properties = properties.len(),
            "ConnectionUrl parsed"
        );

        Ok(Some(Self {
            authority,
            properties,
            original: raw.to_string(),
        }))
    }

    /// Parse a URL that may be absent.
    ///
    /// A missing URL is a hard error, unlike a URL for another driver.
    pub fn parse_nullable(raw: Option<&str>) -> ConnectionResult<Option<Self>> {
        match raw {
            Some(raw) => Self::parse(raw),
            None => Err(ConnectionError::NullUrl),
        }
    }

    /// Parse a URL that must use the hazelcast scheme.
    pub fn parse_required(raw: &str) -> ConnectionResult<Self> {
        Self::parse(raw)?.ok_or_else(|| ConnectionError::UnsupportedUrl(raw.to_string()))
    }

    /// Layer a caller-supplied property bag underneath the URL query.
    ///
    /// Properties already present in the URL keep their URL value.
    pub fn with_info<I, K, V>(mut self, info: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in info {
            self.properties.entry(key.into()).or_insert_with(|| value.into());
        }
        self
    }

    /// Get the original URL string.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Get the authority: `host[:port]` or a cloud cluster name.
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Get a raw (still percent-encoded) property value.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|s| s.as_str())
    }

    /// Get all properties.
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// Render the URL, including properties merged from a property bag.
    ///
    /// Properties are written in name order so the output is stable.
    pub fn to_url(&self) -> String {
        let mut url = format!("{}{}", URL_PREFIX, self.authority);

        if !self.properties.is_empty() {
            let mut params: Vec<_> = self.properties.iter().collect();
            params.sort();
            url.push('?');
            let params: Vec<_> = params
                .into_iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            url.push_str(&params.join("&"));
        }

        url
    }
}

impl FromStr for ConnectionUrl {
    type Err = ConnectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_required(s)
    }
}

impl std::fmt::Display for ConnectionUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.original)
    }
}

fn has_hazelcast_prefix(raw: &str) -> bool {
    raw.get(..URL_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(URL_PREFIX))
}

/// Split `authority[/path][?query][#fragment]` into authority and raw query.
fn split_remainder(rest: &str) -> (&str, Option<&str>) {
    let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
    let end = rest.find(['/', '?']).unwrap_or(rest.len());
    let query = rest.split_once('?').map(|(_, query)| query);
    (&rest[..end], query)
}

/// Characters allowed to appear literally in a URI. Non-ASCII text is
/// accepted unless it is whitespace or a control character.
fn is_uri_char(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || "-._~:/?#[]@!$&'()*+,;=%".contains(c)
    } else {
        !c.is_whitespace() && !c.is_control()
    }
}

fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key).unwrap_or_else(|| key.to_string());
            (key, value.to_string())
        })
        .collect()
}

/// Percent-decode a URL component using form encoding rules (`+` is a space).
///
/// Returns `None` when an escape is truncated or not hexadecimal. Decoded
/// bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn decode_component(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = s.get(i + 1..i + 3)?;
                if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return None;
                }
                let byte = u8::from_str_radix(hex, 16).ok()?;
                decoded.push(byte);
                i += 3;
            }
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b => {
                decoded.push(b);
                i += 1;
            }
        }
    }

    Some(String::from_utf8_lossy(&decoded).into_owned())
}

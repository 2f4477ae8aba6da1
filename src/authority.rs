//! Authority Component
//!
//! See [[RFC3986, Section 3.2](https://tools.ietf.org/html/rfc3986#section-3.2)].

use std::fmt::{self, Display, Formatter};

use crate::utility::{percent_decode, percent_encode};

/// A map of byte characters that are emitted literally when encoding the user
/// and host components (unreserved characters plus sub-delimiters). The colon
/// is absent: a port colon is appended by the serializer, and the
/// conventional first colon of a `user:password` pair is special-cased there
/// as well.
#[rustfmt::skip]
pub(crate) const AUTHORITY_CHAR_MAP: [u8; 256] = [
 // 0     1     2     3     4     5     6     7     8     9     A     B     C     D     E     F
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // 0
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // 1
    0, b'!',    0,    0, b'$',    0, b'&',b'\'', b'(', b')', b'*', b'+', b',', b'-', b'.',    0, // 2
 b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',    0, b';',    0, b'=',    0,    0, // 3
    0, b'A', b'B', b'C', b'D', b'E', b'F', b'G', b'H', b'I', b'J', b'K', b'L', b'M', b'N', b'O', // 4
 b'P', b'Q', b'R', b'S', b'T', b'U', b'V', b'W', b'X', b'Y', b'Z',    0,    0,    0,    0, b'_', // 5
    0, b'a', b'b', b'c', b'd', b'e', b'f', b'g', b'h', b'i', b'j', b'k', b'l', b'm', b'n', b'o', // 6
 b'p', b'q', b'r', b's', b't', b'u', b'v', b'w', b'x', b'y', b'z',    0,    0,    0, b'~',    0, // 7
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // 8
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // 9
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // A
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // B
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // C
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // D
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // E
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // F
];

/// The authority component: user, host, and port.
///
/// All three are stored as plain strings with an empty string meaning
/// "absent". The user and host are kept percent-decoded; the port keeps its
/// exact source text, so leading zeros survive a round trip. A user may
/// contain a literal `':'` separating a `name:password` pair and is not
/// decomposed any further.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Authority {
    user: String,
    host: String,
    port: String,
}

impl Authority {
    /// Parses an authority string of the form `user@host:port`, where both
    /// the user and the port are optional. This never fails: the text before
    /// the *last* `'@'` (if any) is the user, and within the remainder the
    /// text after the *first* `':'` (if any) is the port.
    ///
    /// # Examples
    ///
    /// ```
    /// use weburi::Authority;
    ///
    /// let authority = Authority::parse("user%3b@example.com:8080");
    /// assert_eq!(authority.user(), "user;");
    /// assert_eq!(authority.host(), "example.com");
    /// assert_eq!(authority.port(), "8080");
    /// ```
    pub fn parse(value: &str) -> Self {
        let (user, host_and_port) = match value.rfind('@') {
            Some(index) => (&value[..index], &value[index + 1..]),
            None => ("", value),
        };

        let (host, port) = match host_and_port.split_once(':') {
            Some((host, port)) => (host, port),
            None => (host_and_port, ""),
        };

        Authority {
            user: percent_decode(user, false),
            host: percent_decode(host, false),
            port: port.to_owned(),
        }
    }

    /// The decoded user, or an empty string if absent.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The decoded host, or an empty string if absent.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port exactly as written in the source text, or an empty string if
    /// absent.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Whether all three parts are absent.
    pub fn is_empty(&self) -> bool {
        self.user.is_empty() && self.host.is_empty() && self.port.is_empty()
    }

    pub(crate) fn write_encoded(&self, output: &mut String, encode_host: bool) {
        if !self.user.is_empty() {
            // The first colon of a user:password pair stays readable; any
            // further colon in either half is escaped.
            match self.user.split_once(':') {
                Some((name, password)) => {
                    output.push_str(&percent_encode(name, &AUTHORITY_CHAR_MAP));
                    output.push(':');
                    output.push_str(&percent_encode(password, &AUTHORITY_CHAR_MAP));
                }
                None => output.push_str(&percent_encode(&self.user, &AUTHORITY_CHAR_MAP)),
            }

            output.push('@');
        }

        if encode_host {
            output.push_str(&percent_encode(&self.host, &AUTHORITY_CHAR_MAP));
        } else {
            output.push_str(&self.host);
        }

        if !self.port.is_empty() {
            output.push(':');
            output.push_str(&self.port);
        }
    }

    pub(crate) fn write_decoded(&self, output: &mut String) {
        if !self.user.is_empty() {
            output.push_str(&self.user);
            output.push('@');
        }

        output.push_str(&self.host);

        if !self.port.is_empty() {
            output.push(':');
            output.push_str(&self.port);
        }
    }
}

impl Display for Authority {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let mut output = String::new();
        self.write_encoded(&mut output, true);
        formatter.write_str(&output)
    }
}

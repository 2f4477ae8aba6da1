//! Query Component
//!
//! See [[RFC3986, Section 3.4](https://tools.ietf.org/html/rfc3986#section-3.4)],
//! with `application/x-www-form-urlencoded` conventions layered on top: `'+'`
//! decodes to a space, and `';'` is accepted as a separator interchangeably
//! with `'&'`.

use std::fmt::{self, Display, Formatter, Write};

use crate::utility::{eq_ignore_case, percent_decode, percent_encode};

/// A map of byte characters that are emitted literally when encoding a query
/// key, a query value, or a fragment. This is the RFC query set minus the
/// characters that carry structure on the way back in: the pair separators
/// `'&'` and `';'`, the key/value separator `'='`, `'+'` (an encoded space),
/// and `'#'`.
#[rustfmt::skip]
pub(crate) const QUERY_COMPONENT_CHAR_MAP: [u8; 256] = [
 // 0     1     2     3     4     5     6     7     8     9     A     B     C     D     E     F
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // 0
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // 1
    0, b'!',    0,    0, b'$',    0,    0,b'\'', b'(', b')', b'*',    0, b',', b'-', b'.', b'/', // 2
 b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b':',    0,    0,    0,    0, b'?', // 3
 b'@', b'A', b'B', b'C', b'D', b'E', b'F', b'G', b'H', b'I', b'J', b'K', b'L', b'M', b'N', b'O', // 4
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

/// The query component: an ordered key/value store with dictionary semantics.
///
/// Keys and values are held percent-decoded (with `'+'` read as a space). A
/// value is never absent: a key parsed without `'='` gets an empty value.
/// Serialization order always equals parse/insertion order, and setting an
/// existing key overwrites its value in place, keeping the original position.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Query {
    parameters: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Query::default()
    }

    /// Parses query text. Pairs are split on runs of `'&'` and `';'` (either
    /// separator works, and consecutive separators collapse), then each pair
    /// splits on its first `'='`: later `'='` characters stay in the value. A
    /// pair with an empty key is dropped entirely; a duplicate key overwrites
    /// the earlier value in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use weburi::Query;
    ///
    /// let query = Query::parse("id=my+folder;web=1&&flag");
    /// assert_eq!(query.get("id"), Some("my folder"));
    /// assert_eq!(query.get("web"), Some("1"));
    /// assert_eq!(query.get("flag"), Some(""));
    /// assert_eq!(query.to_string(), "id=my%20folder&web=1&flag=");
    /// ```
    pub fn parse(value: &str) -> Self {
        let mut query = Query::new();

        for part in value.split(['&', ';']) {
            if part.is_empty() {
                continue;
            }

            let (key, part_value) = match part.split_once('=') {
                Some((key, part_value)) => (key, part_value),
                None => (part, ""),
            };

            if key.is_empty() {
                continue;
            }

            query.set(percent_decode(key, true), percent_decode(part_value, true));
        }

        query
    }

    /// Looks up a value by exact key match.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Looks up a value by exact key match first, then by a case-insensitive
    /// scan over all keys.
    pub fn get_ignore_case(&self, key: &str) -> Option<&str> {
        if let Some(value) = self.get(key) {
            return Some(value);
        }

        self.parameters
            .iter()
            .find(|(existing, _)| eq_ignore_case(existing, key))
            .map(|(_, value)| value.as_str())
    }

    /// Sets a key to a value, overwriting in place if the key already exists
    /// and appending otherwise.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let value = value.into();

        match self
            .parameters
            .iter_mut()
            .find(|(existing, _)| *existing == key)
        {
            Some((_, slot)) => *slot = value,
            None => self.parameters.push((key, value)),
        }
    }

    /// Removes a key, reporting whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        match self
            .parameters
            .iter()
            .position(|(existing, _)| existing == key)
        {
            Some(index) => {
                self.parameters.remove(index);
                true
            }
            None => false,
        }
    }

    /// The decoded pairs in serialization order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.parameters
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn clear(&mut self) {
        self.parameters.clear();
    }

    /// The decoded `key=value` join, for display only. The result is not
    /// safe to re-parse.
    pub fn to_decoded_string(&self) -> String {
        let mut output = String::new();

        for (index, (key, value)) in self.parameters.iter().enumerate() {
            if index > 0 {
                output.push('&');
            }

            output.push_str(key);
            output.push('=');
            output.push_str(value);
        }

        output
    }

    /// Order-independent comparison of lowercase-folded pairs.
    pub fn equivalent(&self, other: &Query) -> bool {
        if self.parameters.len() != other.parameters.len() {
            return false;
        }

        let folded = |parameters: &[(String, String)]| {
            let mut pairs = parameters
                .iter()
                .map(|(key, value)| (key.to_lowercase(), value.to_lowercase()))
                .collect::<Vec<(String, String)>>();
            pairs.sort();
            pairs
        };

        folded(&self.parameters) == folded(&other.parameters)
    }
}

impl Display for Query {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        for (index, (key, value)) in self.parameters.iter().enumerate() {
            if index > 0 {
                formatter.write_char('&')?;
            }

            formatter.write_str(&percent_encode(key, &QUERY_COMPONENT_CHAR_MAP))?;
            formatter.write_char('=')?;
            formatter.write_str(&percent_encode(value, &QUERY_COMPONENT_CHAR_MAP))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_grammar() {
        let query = Query::parse("a=1;b=2&&c&=dropped&d=");
        assert_eq!(query.get("a"), Some("1"));
        assert_eq!(query.get("b"), Some("2"));
        assert_eq!(query.get("c"), Some(""));
        assert_eq!(query.get("d"), Some(""));
        assert_eq!(query.len(), 4);
        assert_eq!(query.to_string(), "a=1&b=2&c=&d=");
    }

    #[test]
    fn test_value_keeps_later_equals_signs() {
        let query = Query::parse("expr=a=b=c");
        assert_eq!(query.get("expr"), Some("a=b=c"));
        assert_eq!(query.to_string(), "expr=a%3Db%3Dc");
    }

    #[test]
    fn test_duplicate_keys_overwrite_in_place() {
        let query = Query::parse("a=1&b=2&a=3");
        assert_eq!(query.get("a"), Some("3"));
        assert_eq!(query.to_string(), "a=3&b=2");
    }

    #[test]
    fn test_plus_and_escape_decoding() {
        let query = Query::parse("name=my+folder%2Fsub");
        assert_eq!(query.get("name"), Some("my folder/sub"));
        assert_eq!(query.to_string(), "name=my%20folder/sub");
    }

    #[test]
    fn test_malformed_escape_falls_back_to_original_text() {
        let query = Query::parse("key=%1");
        assert_eq!(query.get("key"), Some("%1"));
        assert_eq!(query.to_string(), "key=%251");
    }

    #[test]
    fn test_get_ignore_case_prefers_exact_match() {
        let mut query = Query::new();
        query.set("Key", "upper");
        query.set("key", "lower");
        assert_eq!(query.get_ignore_case("key"), Some("lower"));
        assert_eq!(query.get_ignore_case("KEY"), Some("upper"));
        assert_eq!(query.get("KEY"), None);
    }

    #[test]
    fn test_equivalent_ignores_order_and_case() {
        let left = Query::parse("A=One&b=two");
        let right = Query::parse("b=TWO&a=ONE");
        assert!(left.equivalent(&right));
        assert!(left != right);
        assert!(!left.equivalent(&Query::parse("a=one")));
    }

    #[test]
    fn test_remove() {
        let mut query = Query::parse("a=1&b=2");
        assert!(query.remove("a"));
        assert!(!query.remove("a"));
        assert_eq!(query.to_string(), "b=2");
    }
}

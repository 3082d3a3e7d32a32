//! Borrowed URI components.

use core::{hash, str};
use ref_cast::{ref_cast_custom, RefCastCustom};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// A component of a URI, borrowed from the parsed input.
///
/// A `Component` is a plain view over the bytes between two delimiters.
/// The bytes are neither validated against any character class nor
/// percent-decoded.
///
/// # Comparison
///
/// `Component`s are compared by their byte values, and may be compared
/// directly against `str` and `[u8]`.
///
/// # Examples
///
/// ```
/// use uri_split::{parse_uri, Param};
///
/// let mut params = [Param::EMPTY; 4];
/// let uri = parse_uri("http://example.com/caf%C3%A9", &mut params)?;
/// let path = uri.path().unwrap();
/// assert_eq!(path, "/caf%C3%A9");
/// assert_eq!(path.to_str(), Ok("/caf%C3%A9"));
/// # Ok::<_, uri_split::ParseError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Component {
    inner: [u8],
}

impl Component {
    #[ref_cast_custom]
    pub(crate) const fn from_bytes(bytes: &[u8]) -> &Component;

    /// An empty component.
    pub const EMPTY: &'static Component = Component::from_bytes(b"");

    /// Views a byte or string slice as a `Component`.
    #[inline]
    #[must_use]
    pub fn new<S: AsRef<[u8]> + ?Sized>(s: &S) -> &Component {
        Component::from_bytes(s.as_ref())
    }

    /// Returns the underlying bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    /// Converts the component to a string slice without copying.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the bytes are not valid UTF-8.
    #[inline]
    pub fn to_str(&self) -> Result<&str, str::Utf8Error> {
        str::from_utf8(&self.inner)
    }

    /// Returns the length of the component in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks whether the component is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl AsRef<[u8]> for Component {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl Default for &Component {
    #[inline]
    fn default() -> Self {
        Component::EMPTY
    }
}

impl PartialEq for Component {
    #[inline]
    fn eq(&self, other: &Component) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Component {}

impl PartialEq<[u8]> for Component {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        &self.inner == other
    }
}

impl PartialEq<Component> for [u8] {
    #[inline]
    fn eq(&self, other: &Component) -> bool {
        self == &other.inner
    }
}

impl PartialEq<str> for Component {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &self.inner == other.as_bytes()
    }
}

impl PartialEq<Component> for str {
    #[inline]
    fn eq(&self, other: &Component) -> bool {
        self.as_bytes() == &other.inner
    }
}

impl hash::Hash for Component {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state)
    }
}

/// A query parameter, made of a name and an optional value.
///
/// The value is `None` when the parameter has no `'='` at all, as in `"flag"`,
/// and `Some` empty component when `'='` is followed directly by the end of
/// the parameter, as in `"flag="`.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Param<'a> {
    name: &'a Component,
    value: Option<&'a Component>,
}

impl<'a> Param<'a> {
    /// A parameter with an empty name and no value.
    ///
    /// Useful for initializing an output array: `[Param::EMPTY; 8]`.
    pub const EMPTY: Param<'static> = Param {
        name: Component::EMPTY,
        value: None,
    };

    /// Creates a new parameter from its parts.
    #[inline]
    #[must_use]
    pub const fn new(name: &'a Component, value: Option<&'a Component>) -> Param<'a> {
        Param { name, value }
    }

    /// Splits a non-empty query segment on its first `'='`.
    pub(crate) fn from_segment(seg: &'a [u8]) -> Param<'a> {
        match seg.iter().position(|&x| x == b'=') {
            Some(i) => Param {
                name: Component::from_bytes(&seg[..i]),
                value: Some(Component::from_bytes(&seg[i + 1..])),
            },
            None => Param {
                name: Component::from_bytes(seg),
                value: None,
            },
        }
    }

    /// Returns the parameter name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'a Component {
        self.name
    }

    /// Returns the parameter value, if `'='` was present.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&'a Component> {
        self.value
    }
}

impl Default for Param<'_> {
    #[inline]
    fn default() -> Self {
        Param::EMPTY
    }
}

#[cfg(feature = "serde")]
impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_str() {
            Ok(s) => serializer.serialize_str(s),
            Err(_) => serializer.serialize_bytes(&self.inner),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Param<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Param", 2)?;
        s.serialize_field("name", self.name)?;
        s.serialize_field("value", &self.value)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_split() {
        let p = Param::from_segment(b"hello=world!");
        assert_eq!(p.name(), "hello");
        assert_eq!(p.value(), Some(Component::new("world!")));

        let p = Param::from_segment(b"eeee");
        assert_eq!(p.name(), "eeee");
        assert_eq!(p.value(), None);

        let p = Param::from_segment(b"bar=");
        assert_eq!(p.name(), "bar");
        assert_eq!(p.value(), Some(Component::EMPTY));

        let p = Param::from_segment(b"=x=y");
        assert_eq!(p.name(), "");
        assert_eq!(p.value(), Some(Component::new("x=y")));
    }

    #[test]
    fn compare() {
        let c = Component::new(b"a\xffb");
        assert_eq!(c, &b"a\xffb"[..]);
        assert!(c.to_str().is_err());
        assert_eq!(c.len(), 3);
        assert!(Component::EMPTY.is_empty());
        assert_eq!(<&Component>::default(), Component::EMPTY);
        assert_eq!(Param::default(), Param::EMPTY);
    }
}

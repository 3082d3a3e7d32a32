
use crate::{
    component::{Component, Param},
    error::ParseError,
    log::trace,
    parser, query,
};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Component bounds of a path, query and fragment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) struct PathMeta {
    pub(crate) path_bounds: (usize, usize),
    // Excludes the leading '?'.
    pub(crate) query_bounds: Option<(usize, usize)>,
    // One byte past the '#'. The fragment always runs to the end of input.
    pub(crate) fragment_start: Option<usize>,
}

/// Component bounds of a full URI.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) struct UriMeta {
    // The index of the ':' in "://".
    pub(crate) scheme_end: usize,
    pub(crate) host_bounds: (usize, usize),
    pub(crate) port: Option<u16>,
    // One byte past the host or port.
    pub(crate) auth_end: usize,
    pub(crate) path: Option<PathMeta>,
}

impl PathMeta {
    fn query<'a>(&self, bytes: &'a [u8]) -> Option<&'a [u8]> {
        self.query_bounds.map(|(start, end)| &bytes[start..end])
    }

    fn scan_params<'a>(&self, bytes: &'a [u8], out: &mut [Param<'a>]) -> Result<usize, ParseError> {
        let Some((start, end)) = self.query_bounds else {
            return Ok(0);
        };
        query::scan(&bytes[start..end], out).map_err(|e| {
            let e = e.shift(start);
            trace!("too many query parameters at index {}", e.index());
            e
        })
    }

    #[cfg(feature = "alloc")]
    fn collect_params<'a>(&self, bytes: &'a [u8]) -> Vec<Param<'a>> {
        match self.query(bytes) {
            Some(query) => query::scan_to_vec(query),
            None => Vec::new(),
        }
    }
}

/// A path with an optional query and fragment, borrowed from the parsed input.
///
/// The input has the form `/path[?query][#fragment]`. The query parameters are
/// held in `P`, which is either a prefix of a caller-supplied slice
/// (`&[Param<'a>]`, see [`parse`]) or a `Vec` (see [`parse_vec`]).
///
/// [`parse`]: Self::parse
/// [`parse_vec`]: Self::parse_vec
///
/// # Examples
///
/// ```
/// use uri_split::{Component, Param, UriPath};
///
/// let mut params = [Param::EMPTY; 4];
/// let p = UriPath::parse("/reddit?hello=world!&eeee&bar=#top", &mut params)?;
/// assert_eq!(p.path(), "/reddit");
/// assert_eq!(p.query(), Some(Component::new("hello=world!&eeee&bar=")));
/// assert_eq!(p.params().len(), 3);
/// assert_eq!(p.param("eeee").unwrap().value(), None);
/// assert_eq!(p.param("bar").unwrap().value(), Some(Component::EMPTY));
/// assert_eq!(p.fragment(), Some(Component::new("top")));
/// # Ok::<_, uri_split::ParseError>(())
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct UriPath<'a, P> {
    bytes: &'a [u8],
    meta: PathMeta,
    params: P,
}

impl<'a, 'p> UriPath<'a, &'p [Param<'a>]> {
    /// Parses a path with an optional query and fragment.
    ///
    /// Query parameters are written to the front of `params`, and the
    /// returned value borrows the filled part. Nothing is allocated.
    ///
    /// # Errors
    ///
    /// Returns [`Malformed`] if the input does not start with `'/'`, and
    /// [`TooManyParams`] if the query has more parameters than `params`
    /// can hold.
    ///
    /// [`Malformed`]: crate::ParseErrorKind::Malformed
    /// [`TooManyParams`]: crate::ParseErrorKind::TooManyParams
    pub fn parse<S: AsRef<[u8]> + ?Sized>(
        input: &'a S,
        params: &'p mut [Param<'a>],
    ) -> Result<Self, ParseError> {
        let bytes = input.as_ref();
        let meta = parser::parse_path(bytes)?;
        let n = meta.scan_params(bytes, params)?;
        Ok(UriPath {
            bytes,
            meta,
            params: &params[..n],
        })
    }
}

#[cfg(feature = "alloc")]
impl<'a> UriPath<'a, Vec<Param<'a>>> {
    /// Parses a path with an optional query and fragment, collecting the
    /// query parameters into a `Vec`.
    ///
    /// This never fails with [`TooManyParams`].
    ///
    /// [`TooManyParams`]: crate::ParseErrorKind::TooManyParams
    ///
    /// # Errors
    ///
    /// Returns [`Malformed`] if the input does not start with `'/'`.
    ///
    /// [`Malformed`]: crate::ParseErrorKind::Malformed
    pub fn parse_vec<S: AsRef<[u8]> + ?Sized>(input: &'a S) -> Result<Self, ParseError> {
        let bytes = input.as_ref();
        let meta = parser::parse_path(bytes)?;
        Ok(UriPath {
            bytes,
            params: meta.collect_params(bytes),
            meta,
        })
    }
}

impl<'a, P> UriPath<'a, P> {
    /// Returns the whole input as bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the path component.
    ///
    /// The path always starts with `'/'`.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &'a Component {
        let (start, end) = self.meta.path_bounds;
        Component::from_bytes(&self.bytes[start..end])
    }

    /// Returns the raw query component, without the leading `'?'`.
    ///
    /// Returns `Some` empty component for a bare trailing `'?'`,
    /// and `None` when there is no `'?'` at all.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&'a Component> {
        self.meta.query(self.bytes).map(Component::from_bytes)
    }

    /// Returns the fragment component, without the leading `'#'`.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&'a Component> {
        self.meta
            .fragment_start
            .map(|start| Component::from_bytes(&self.bytes[start..]))
    }

    /// Consumes this `UriPath` and yields the parameter storage.
    #[inline]
    #[must_use]
    pub fn into_params(self) -> P {
        self.params
    }
}

impl<'a, P: AsRef<[Param<'a>]>> UriPath<'a, P> {
    /// Returns the query parameters in order of appearance.
    #[inline]
    #[must_use]
    pub fn params(&self) -> &[Param<'a>] {
        self.params.as_ref()
    }

    /// Returns the first query parameter with the given name.
    #[must_use]
    pub fn param<S: AsRef<[u8]> + ?Sized>(&self, name: &S) -> Option<Param<'a>> {
        find_param(self.params(), name.as_ref())
    }
}

fn find_param<'a>(params: &[Param<'a>], name: &[u8]) -> Option<Param<'a>> {
    params.iter().find(|p| p.name() == name).copied()
}

/// A URI of the form `scheme://host[:port][/path][?query][#fragment]`,
/// borrowed from the parsed input.
///
/// As with [`UriPath`], the query parameters are held in `P`.
///
/// # Examples
///
/// ```
/// use uri_split::{Component, Param, Uri};
///
/// let mut params = [Param::EMPTY; 4];
/// let uri = Uri::parse("http://hello.com:1/justbar/eeee?key=val#fragment", &mut params)?;
/// assert_eq!(uri.scheme(), "http");
/// assert_eq!(uri.host(), "hello.com");
/// assert_eq!(uri.port(), Some(1));
/// assert_eq!(uri.authority(), "hello.com:1");
/// assert_eq!(uri.path(), Some(Component::new("/justbar/eeee")));
/// assert_eq!(uri.param("key").unwrap().value(), Some(Component::new("val")));
/// assert_eq!(uri.fragment(), Some(Component::new("fragment")));
/// # Ok::<_, uri_split::ParseError>(())
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Uri<'a, P> {
    bytes: &'a [u8],
    meta: UriMeta,
    params: P,
}

impl<'a, 'p> Uri<'a, &'p [Param<'a>]> {
    /// Parses a URI.
    ///
    /// Query parameters are written to the front of `params`, and the
    /// returned value borrows the filled part. Nothing is allocated.
    ///
    /// # Errors
    ///
    /// Returns [`Malformed`] if the input does not match the grammar, and
    /// [`TooManyParams`] if the query has more parameters than `params`
    /// can hold.
    ///
    /// [`Malformed`]: crate::ParseErrorKind::Malformed
    /// [`TooManyParams`]: crate::ParseErrorKind::TooManyParams
    pub fn parse<S: AsRef<[u8]> + ?Sized>(
        input: &'a S,
        params: &'p mut [Param<'a>],
    ) -> Result<Self, ParseError> {
        let bytes = input.as_ref();
        let meta = parser::parse_uri(bytes)?;
        let n = match &meta.path {
            Some(path) => path.scan_params(bytes, params)?,
            None => 0,
        };
        Ok(Uri {
            bytes,
            meta,
            params: &params[..n],
        })
    }
}

#[cfg(feature = "alloc")]
impl<'a> Uri<'a, Vec<Param<'a>>> {
    /// Parses a URI, collecting the query parameters into a `Vec`.
    ///
    /// This never fails with [`TooManyParams`].
    ///
    /// [`TooManyParams`]: crate::ParseErrorKind::TooManyParams
    ///
    /// # Errors
    ///
    /// Returns [`Malformed`] if the input does not match the grammar.
    ///
    /// [`Malformed`]: crate::ParseErrorKind::Malformed
    pub fn parse_vec<S: AsRef<[u8]> + ?Sized>(input: &'a S) -> Result<Self, ParseError> {
        let bytes = input.as_ref();
        let meta = parser::parse_uri(bytes)?;
        let params = match &meta.path {
            Some(path) => path.collect_params(bytes),
            None => Vec::new(),
        };
        Ok(Uri {
            bytes,
            meta,
            params,
        })
    }
}

impl<'a, P> Uri<'a, P> {
    /// Returns the whole input as bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the scheme component, without the trailing `"://"`.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> &'a Component {
        Component::from_bytes(&self.bytes[..self.meta.scheme_end])
    }

    /// Returns the authority component, that is, the host and the optional port.
    #[inline]
    #[must_use]
    pub fn authority(&self) -> &'a Component {
        let start = self.meta.host_bounds.0;
        Component::from_bytes(&self.bytes[start..self.meta.auth_end])
    }

    /// Returns the host subcomponent.
    ///
    /// The host may be empty, as in `file:///etc/hosts`.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &'a Component {
        let (start, end) = self.meta.host_bounds;
        Component::from_bytes(&self.bytes[start..end])
    }

    /// Returns the port, or `None` if the URI has no `":port"`.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.meta.port
    }

    /// Returns the path component, or `None` if nothing follows the authority.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&'a Component> {
        let (start, end) = self.meta.path.as_ref()?.path_bounds;
        Some(Component::from_bytes(&self.bytes[start..end]))
    }

    /// Returns the raw query component, without the leading `'?'`.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&'a Component> {
        self.meta
            .path
            .as_ref()?
            .query(self.bytes)
            .map(Component::from_bytes)
    }

    /// Returns the fragment component, without the leading `'#'`.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&'a Component> {
        let start = self.meta.path.as_ref()?.fragment_start?;
        Some(Component::from_bytes(&self.bytes[start..]))
    }

    /// Consumes this `Uri` and yields the parameter storage.
    #[inline]
    #[must_use]
    pub fn into_params(self) -> P {
        self.params
    }
}

impl<'a, P: AsRef<[Param<'a>]>> Uri<'a, P> {
    /// Returns the query parameters in order of appearance.
    ///
    /// The slice is empty when the URI has no query.
    #[inline]
    #[must_use]
    pub fn params(&self) -> &[Param<'a>] {
        self.params.as_ref()
    }

    /// Returns the first query parameter with the given name.
    #[must_use]
    pub fn param<S: AsRef<[u8]> + ?Sized>(&self, name: &S) -> Option<Param<'a>> {
        find_param(self.params(), name.as_ref())
    }
}

#[cfg(feature = "serde")]
impl<'a, P: AsRef<[Param<'a>]>> Serialize for UriPath<'a, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("UriPath", 4)?;
        s.serialize_field("path", self.path())?;
        s.serialize_field("query", &self.query())?;
        s.serialize_field("params", self.params())?;
        s.serialize_field("fragment", &self.fragment())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'a, P: AsRef<[Param<'a>]>> Serialize for Uri<'a, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Uri", 7)?;
        s.serialize_field("scheme", self.scheme())?;
        s.serialize_field("host", self.host())?;
        s.serialize_field("port", &self.port())?;
        s.serialize_field("path", &self.path())?;
        s.serialize_field("query", &self.query())?;
        s.serialize_field("params", self.params())?;
        s.serialize_field("fragment", &self.fragment())?;
        s.end()
    }
}

//! Query parameter scanning.

use crate::{component::Param, error::ParseError};
use core::iter::FusedIterator;

#[cfg(feature = "alloc")]
use crate::log::debug;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// An iterator over the parameters of a query, in order of appearance.
///
/// The query is split on `'&'`, skipping empty segments, and each segment
/// is split on its first `'='`. This struct is created by [`Params::new`].
///
/// # Examples
///
/// ```
/// use uri_split::{Component, Params};
///
/// let mut it = Params::new(b"a=1&&flag&b=");
/// let p = it.next().unwrap();
/// assert_eq!((p.name(), p.value()), (Component::new("a"), Some(Component::new("1"))));
/// let p = it.next().unwrap();
/// assert_eq!((p.name(), p.value()), (Component::new("flag"), None));
/// let p = it.next().unwrap();
/// assert_eq!((p.name(), p.value()), (Component::new("b"), Some(Component::EMPTY)));
/// assert!(it.next().is_none());
/// ```
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Params<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Params<'a> {
    /// Creates an iterator over the parameters of the given query.
    ///
    /// The query must not include the leading `'?'` or a trailing fragment.
    #[inline]
    pub fn new<S: AsRef<[u8]> + ?Sized>(query: &'a S) -> Params<'a> {
        Params {
            bytes: query.as_ref(),
            pos: 0,
        }
    }

    /// Returns the index of the next unread byte in the query.
    fn pos(&self) -> usize {
        self.pos
    }

    // Returns the next non-empty segment and its starting index.
    fn next_segment(&mut self) -> Option<(usize, &'a [u8])> {
        while self.pos < self.bytes.len() {
            let start = self.pos;
            let rem = &self.bytes[start..];
            let len = rem.iter().position(|&x| x == b'&').unwrap_or(rem.len());
            // INVARIANT: `pos <= bytes.len()` since we skip at most one delimiter past `len`.
            self.pos = (start + len + 1).min(self.bytes.len());
            if len > 0 {
                return Some((start, &rem[..len]));
            }
        }
        None
    }
}

impl<'a> Iterator for Params<'a> {
    type Item = Param<'a>;

    #[inline]
    fn next(&mut self) -> Option<Param<'a>> {
        self.next_segment().map(|(_, seg)| Param::from_segment(seg))
    }

    /// The upper bound counts the `'&'` delimiters left in the query,
    /// which takes a linear scan of the unread bytes.
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = &self.bytes[self.pos..];
        if rem.is_empty() {
            return (0, Some(0));
        }
        let amps = rem.iter().filter(|&&x| x == b'&').count();
        let lower = usize::from(amps < rem.len());
        (lower, Some(amps + 1))
    }
}

impl FusedIterator for Params<'_> {}

/// Scans the parameters of a query into a caller-supplied slice.
///
/// The query must not include the leading `'?'` or a trailing fragment.
/// On success, returns the number of parameters written to the front
/// of `out`. Nothing is allocated.
///
/// # Errors
///
/// Returns [`TooManyParams`] as soon as a parameter does not fit into `out`.
/// The contents of `out` are then unspecified. The error index is relative
/// to the start of the query.
///
/// [`TooManyParams`]: crate::ParseErrorKind::TooManyParams
///
/// # Examples
///
/// ```
/// use uri_split::{parse_query, Param};
///
/// let mut params = [Param::EMPTY; 4];
/// let n = parse_query("key=val&flag", &mut params)?;
/// assert_eq!(n, 2);
/// assert_eq!(params[0].name(), "key");
/// assert!(params[1].value().is_none());
///
/// let mut small = [Param::EMPTY; 1];
/// assert!(parse_query("key=val&flag", &mut small).is_err());
/// # Ok::<_, uri_split::ParseError>(())
/// ```
pub fn parse_query<'a, S: AsRef<[u8]> + ?Sized>(
    query: &'a S,
    out: &mut [Param<'a>],
) -> Result<usize, ParseError> {
    scan(query.as_ref(), out)
}

pub(crate) fn scan<'a>(query: &'a [u8], out: &mut [Param<'a>]) -> Result<usize, ParseError> {
    let mut params = Params::new(query);
    let mut n = 0;
    while let Some((start, seg)) = params.next_segment() {
        let Some(slot) = out.get_mut(n) else {
            let rest = params.size_hint().1.unwrap_or(0);
            return Err(ParseError::too_many_params(start, n + 1 + rest));
        };
        *slot = Param::from_segment(seg);
        n += 1;
    }
    debug_assert_eq!(params.pos(), query.len());
    Ok(n)
}

/// Scans the parameters of a query into a `Vec`, growing it to the
/// capacity hinted by each overflow until the scan succeeds.
#[cfg(feature = "alloc")]
pub(crate) fn scan_to_vec(query: &[u8]) -> Vec<Param<'_>> {
    const INITIAL_CAPACITY: usize = 8;

    let mut out = Vec::new();
    let mut cap = INITIAL_CAPACITY;
    loop {
        out.clear();
        out.resize(cap, Param::EMPTY);
        match scan(query, &mut out) {
            Ok(n) => {
                out.truncate(n);
                return out;
            }
            Err(e) => {
                // The hint is an upper bound, so the next round succeeds.
                cap = e.params_hint;
                debug!("growing parameter buffer to {} entries", cap);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{component::Component, error::ParseErrorKind};

    #[test]
    fn skip_empty_segments() {
        let names: Vec<_> = Params::new("&&a&&b=&").map(|p| p.name()).collect();
        assert_eq!(names, [Component::new("a"), Component::new("b")]);
        assert_eq!(Params::new("").next(), None);
        assert_eq!(Params::new("&&&").next(), None);
    }

    #[test]
    fn size_hint_bounds() {
        let mut it = Params::new("a&b&&c");
        assert_eq!(it.size_hint(), (1, Some(4)));
        it.next();
        assert_eq!(it.size_hint(), (1, Some(3)));
        it.by_ref().for_each(drop);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(Params::new("&&").size_hint(), (0, Some(3)));
    }

    #[test]
    fn capacity_boundary() {
        let mut out = [Param::EMPTY; 3];
        assert_eq!(scan(b"a=1&b=2&c=3", &mut out), Ok(3));

        let e = scan(b"a=1&b=2&c=3&d=4&e", &mut out).unwrap_err();
        assert_eq!(e.kind(), ParseErrorKind::TooManyParams);
        assert_eq!(e.index(), 12);
        assert_eq!(e.params_hint(), Some(5));

        let mut none: [Param<'_>; 0] = [];
        assert_eq!(scan(b"", &mut none), Ok(0));
        assert_eq!(scan(b"&", &mut none), Ok(0));
        assert_eq!(scan(b"x", &mut none).unwrap_err().index(), 0);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn grow_vec() {
        let query = "k=v&".repeat(20);
        let params = scan_to_vec(query.as_bytes());
        assert_eq!(params.len(), 20);
        assert!(params.iter().all(|p| p.name() == "k"));

        assert!(scan_to_vec(b"").is_empty());
        assert_eq!(scan_to_vec(b"&&x&&").len(), 1);
    }
}

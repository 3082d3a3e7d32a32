use crate::{
    error::ParseError,
    log::trace,
    uri::{PathMeta, UriMeta},
};
use core::ops::{Deref, DerefMut};

type Result<T> = core::result::Result<T, ParseError>;

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr) => {{
        let index = $index;
        trace!("malformed input at index {}", index);
        return Err(ParseError::malformed(index));
    }};
}

pub(crate) fn parse_uri(bytes: &[u8]) -> Result<UriMeta> {
    let mut parser = Parser {
        reader: Reader::new(bytes),
    };
    parser.parse_from_scheme()
}

pub(crate) fn parse_path(bytes: &[u8]) -> Result<PathMeta> {
    let mut parser = Parser {
        reader: Reader::new(bytes),
    };
    parser.parse_from_path()
}

/// URI splitter.
///
/// # Invariants
///
/// `pos <= len`, `pos` is non-decreasing.
///
/// # Preconditions and guarantees
///
/// Before parsing, ensure that `pos == 0`.
///
/// Start and finish parsing by calling `parse_from_scheme` or `parse_from_path`.
/// The following are guaranteed when parsing succeeds:
///
/// - All output indexes are within bounds and correctly ordered.
/// - The whole input is consumed.
struct Parser<'a> {
    reader: Reader<'a>,
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Deref for Parser<'a> {
    type Target = Reader<'a>;

    fn deref(&self) -> &Self::Target {
        &self.reader
    }
}

impl DerefMut for Parser<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.reader
    }
}

// Delimiters that end a component.
const fn is_gen_delim(x: u8) -> bool {
    matches!(x, b':' | b'/' | b'?' | b'#')
}

const fn is_path_end(x: u8) -> bool {
    matches!(x, b'/' | b'?' | b'#')
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, pos: 0 }
    }

    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn has_remaining(&self) -> bool {
        self.pos < self.len()
    }

    fn peek(&self, i: usize) -> Option<u8> {
        self.bytes.get(self.pos + i).copied()
    }

    // Any call to this method must keep the invariants.
    fn skip(&mut self, n: usize) {
        // INVARIANT: `pos` is non-decreasing.
        self.pos += n;
        debug_assert!(self.pos <= self.len());
    }

    // Reads until a byte matching `stop` or the end of input.
    // Returns the bounds of the bytes read.
    fn read_until(&mut self, stop: impl Fn(u8) -> bool) -> (usize, usize) {
        let start = self.pos;
        let n = self.bytes[start..]
            .iter()
            .position(|&x| stop(x))
            .unwrap_or(self.len() - start);
        // INVARIANT: Skipping `n` bytes before the stop byte or end is fine.
        self.skip(n);
        (start, self.pos)
    }

    fn read_str(&mut self, s: &str) -> bool {
        if self.bytes[self.pos..].starts_with(s.as_bytes()) {
            // INVARIANT: The remaining bytes start with `s` so it's fine to skip `s.len()`.
            self.skip(s.len());
            true
        } else {
            false
        }
    }

    fn read_port(&mut self) -> Result<u16> {
        let start = self.pos;
        let mut port: u32 = 0;
        while let Some(x) = self.peek(0) {
            if is_path_end(x) {
                break;
            }
            if !x.is_ascii_digit() {
                err!(self.pos);
            }
            port = port * 10 + (x - b'0') as u32;
            if port > u16::MAX as u32 {
                err!(start);
            }
            // INVARIANT: Skipping a digit is fine.
            self.skip(1);
        }
        if self.pos == start {
            // Empty port.
            err!(start);
        }
        Ok(port as u16)
    }
}

impl Parser<'_> {
    fn parse_from_scheme(&mut self) -> Result<UriMeta> {
        let (_, scheme_end) = self.read_until(is_gen_delim);
        if scheme_end == 0 {
            err!(0);
        }
        if !self.read_str("://") {
            err!(self.pos);
        }
        self.parse_from_authority(scheme_end)
    }

    fn parse_from_authority(&mut self, scheme_end: usize) -> Result<UriMeta> {
        let host_bounds = self.read_until(is_gen_delim);

        let port = if self.read_str(":") {
            Some(self.read_port()?)
        } else {
            None
        };
        let auth_end = self.pos;

        let path = if !self.has_remaining() {
            None
        } else if self.peek(0) == Some(b'/') {
            Some(self.parse_from_path()?)
        } else {
            // Query or fragment directly after the authority.
            err!(self.pos);
        };

        Ok(UriMeta {
            scheme_end,
            host_bounds,
            port,
            auth_end,
            path,
        })
    }

    fn parse_from_path(&mut self) -> Result<PathMeta> {
        if self.peek(0) != Some(b'/') {
            err!(self.pos);
        }
        let path_bounds = self.read_until(|x| matches!(x, b'?' | b'#'));

        let query_bounds = if self.read_str("?") {
            Some(self.read_until(|x| x == b'#'))
        } else {
            None
        };

        let fragment_start = if self.read_str("#") {
            let (start, end) = (self.pos, self.len());
            // INVARIANT: Skipping to the end is fine.
            self.skip(end - start);
            Some(start)
        } else {
            None
        };

        debug_assert!(!self.has_remaining());
        Ok(PathMeta {
            path_bounds,
            query_bounds,
            fragment_start,
        })
    }
}

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// The input does not match the expected grammar.
    ///
    /// This covers a missing `"://"` delimiter, an empty scheme, a path that
    /// does not start with `'/'`, and a port that is empty, non-numeric or
    /// out of range.
    ///
    /// The error index points to the offending byte or the end of input.
    Malformed,
    /// The query holds more parameters than the output slice can take.
    ///
    /// The error index points to the first byte of the parameter that did not fit.
    /// Retrying with a slice of at least [`ParseError::params_hint`] entries succeeds.
    TooManyParams,
}

impl ParseErrorKind {
    /// Returns the numeric status code of this kind.
    ///
    /// `Malformed` maps to `-1` and `TooManyParams` to `-2`, the codes used by
    /// integer-status interfaces of the same parser.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_split::{parse_uri_path, Param};
    ///
    /// let mut params = [Param::EMPTY; 4];
    /// let e = parse_uri_path("sdfs", &mut params).unwrap_err();
    /// assert_eq!(e.kind().code(), -1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            ParseErrorKind::Malformed => -1,
            ParseErrorKind::TooManyParams => -2,
        }
    }
}

/// An error occurred when parsing a URI or URI path.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
    pub(crate) params_hint: usize,
}

impl ParseError {
    pub(crate) const fn malformed(index: usize) -> ParseError {
        ParseError {
            index,
            kind: ParseErrorKind::Malformed,
            params_hint: 0,
        }
    }

    pub(crate) const fn too_many_params(index: usize, params_hint: usize) -> ParseError {
        ParseError {
            index,
            kind: ParseErrorKind::TooManyParams,
            params_hint,
        }
    }

    // Moves the index of an error raised on a sub-slice starting at `offset`.
    pub(crate) fn shift(mut self, offset: usize) -> ParseError {
        self.index += offset;
        self
    }

    /// Returns the index at which the error occurred.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns an output capacity that is large enough for the query that
    /// overflowed, or `None` if the error is not [`TooManyParams`].
    ///
    /// The value is an upper bound computed from the `'&'` delimiters that
    /// remain in the query, so it may exceed the exact parameter count when
    /// the query contains empty segments.
    ///
    /// [`TooManyParams`]: ParseErrorKind::TooManyParams
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_split::{parse_uri_path, Param, ParseErrorKind};
    ///
    /// let mut params = [Param::EMPTY; 2];
    /// let e = parse_uri_path("/?a&b&c", &mut params).unwrap_err();
    /// assert_eq!(e.kind(), ParseErrorKind::TooManyParams);
    /// assert_eq!(e.params_hint(), Some(3));
    /// ```
    #[inline]
    #[must_use]
    pub fn params_hint(&self) -> Option<usize> {
        match self.kind {
            ParseErrorKind::TooManyParams => Some(self.params_hint),
            ParseErrorKind::Malformed => None,
        }
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for ParseError {}

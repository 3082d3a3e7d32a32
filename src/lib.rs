#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A zero-allocation URI splitter.
//!
//! Given a byte buffer holding a URI such as
//! `http://example.com:8080/users?id=3&sort#top`, or only its path part such as
//! `/users?id=3&sort#top`, this crate locates each component and returns
//! views borrowed from the buffer. Nothing is copied, percent-decoded or
//! normalized, and the bounded entry points never allocate, which makes them
//! suitable for hot paths such as request routing.
//!
//! Query parameters are written to a caller-supplied slice whose length is the
//! maximum number of parameters accepted:
//!
//! ```
//! use uri_split::{parse_uri_path, Component, Param, ParseErrorKind};
//!
//! let mut params = [Param::EMPTY; 4];
//! let p = parse_uri_path("/reddit?hello=world!&eeee&bar=", &mut params)?;
//! assert_eq!(p.path(), "/reddit");
//!
//! let names: Vec<_> = p.params().iter().map(|p| p.name()).collect();
//! assert_eq!(names, ["hello", "eeee", "bar"].map(Component::new));
//!
//! let mut params = [Param::EMPTY; 4];
//! let e = parse_uri_path("/hello/world?a=b&a=c&a=d&a=e&e=4", &mut params).unwrap_err();
//! assert_eq!(e.kind(), ParseErrorKind::TooManyParams);
//! # Ok::<_, uri_split::ParseError>(())
//! ```
//!
//! # Grammar
//!
//! The accepted forms are `scheme://host[:port][/path][?query][#fragment]`
//! for [`parse_uri`] and `/path[?query][#fragment]` for [`parse_uri_path`].
//! Components are delimited only; their characters are not checked against
//! RFC 3986. A query is split on `'&'` with empty segments skipped, and each
//! segment is split on its first `'='`.
//!
//! # Feature flags
//!
//! - `std` (default): Enables `std` support. Implies `alloc` and `impl-error`.
//!
//! - `alloc`: Enables the entry points that collect query parameters into a `Vec`,
//!   such as [`parse_uri_vec`] and [`parse_uri_path_vec`].
//!
//! - `impl-error`: Implements the `Error` trait for [`ParseError`].
//!
//! - `serde`: Implements `Serialize` for the parsed types.
//!
//! - `log`: Emits diagnostics through the [`log`](https://docs.rs/log) facade.

#[cfg(feature = "alloc")]
extern crate alloc;

mod log;

mod component;
mod error;
mod fmt;
mod parser;
mod query;
mod uri;

pub use component::{Component, Param};
pub use error::{ParseError, ParseErrorKind};
pub use query::{parse_query, Params};
pub use uri::{Uri, UriPath};

#[cfg(all(feature = "impl-error", not(feature = "std")))]
use core::error::Error;
#[cfg(feature = "std")]
use std::error::Error;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Parses a path of the form `/path[?query][#fragment]`.
///
/// Query parameters are written to the front of `params` in order of
/// appearance. The capacity is the length of `params`.
///
/// This is equivalent to [`UriPath::parse`].
///
/// # Errors
///
/// Returns [`Malformed`] if the input does not start with `'/'`, and
/// [`TooManyParams`] if the query has more parameters than `params`
/// can hold.
///
/// [`Malformed`]: ParseErrorKind::Malformed
/// [`TooManyParams`]: ParseErrorKind::TooManyParams
///
/// # Examples
///
/// ```
/// use uri_split::{parse_uri_path, Component, Param};
///
/// let mut params = [Param::EMPTY; 4];
/// let p = parse_uri_path("/tut?#thefrag", &mut params)?;
/// assert_eq!(p.path(), "/tut");
/// assert!(p.params().is_empty());
/// assert_eq!(p.fragment(), Some(Component::new("thefrag")));
///
/// assert!(parse_uri_path("@#$@sdfs", &mut params).is_err());
/// # Ok::<_, uri_split::ParseError>(())
/// ```
#[inline]
pub fn parse_uri_path<'a, 'p, S: AsRef<[u8]> + ?Sized>(
    input: &'a S,
    params: &'p mut [Param<'a>],
) -> Result<UriPath<'a, &'p [Param<'a>]>, ParseError> {
    UriPath::parse(input, params)
}

/// Parses a URI of the form `scheme://host[:port][/path][?query][#fragment]`.
///
/// Query parameters are written to the front of `params` in order of
/// appearance. The capacity is the length of `params`.
///
/// This is equivalent to [`Uri::parse`].
///
/// # Errors
///
/// Returns [`Malformed`] if the input does not match the grammar, and
/// [`TooManyParams`] if the query has more parameters than `params`
/// can hold.
///
/// [`Malformed`]: ParseErrorKind::Malformed
/// [`TooManyParams`]: ParseErrorKind::TooManyParams
///
/// # Examples
///
/// ```
/// use uri_split::{parse_uri, Param};
///
/// let mut params = [Param::EMPTY; 4];
/// let uri = parse_uri("https://google.com", &mut params)?;
/// assert_eq!(uri.scheme(), "https");
/// assert_eq!(uri.host(), "google.com");
/// assert_eq!(uri.port(), None);
/// assert_eq!(uri.path(), None);
/// assert_eq!(uri.fragment(), None);
/// # Ok::<_, uri_split::ParseError>(())
/// ```
#[inline]
pub fn parse_uri<'a, 'p, S: AsRef<[u8]> + ?Sized>(
    input: &'a S,
    params: &'p mut [Param<'a>],
) -> Result<Uri<'a, &'p [Param<'a>]>, ParseError> {
    Uri::parse(input, params)
}

/// Parses a path of the form `/path[?query][#fragment]`, collecting the
/// query parameters into a `Vec`.
///
/// This is equivalent to [`UriPath::parse_vec`].
///
/// # Errors
///
/// Returns [`Malformed`] if the input does not start with `'/'`.
///
/// [`Malformed`]: ParseErrorKind::Malformed
#[cfg(feature = "alloc")]
#[inline]
pub fn parse_uri_path_vec<S: AsRef<[u8]> + ?Sized>(
    input: &S,
) -> Result<UriPath<'_, Vec<Param<'_>>>, ParseError> {
    UriPath::parse_vec(input)
}

/// Parses a URI of the form `scheme://host[:port][/path][?query][#fragment]`,
/// collecting the query parameters into a `Vec`.
///
/// This is equivalent to [`Uri::parse_vec`].
///
/// # Errors
///
/// Returns [`Malformed`] if the input does not match the grammar.
///
/// [`Malformed`]: ParseErrorKind::Malformed
///
/// # Examples
///
/// ```
/// use uri_split::parse_uri_vec;
///
/// let uri = parse_uri_vec("http://example.com/search?q=1&q=2&q=3&q=4&q=5")?;
/// assert_eq!(uri.params().len(), 5);
/// # Ok::<_, uri_split::ParseError>(())
/// ```
#[cfg(feature = "alloc")]
#[inline]
pub fn parse_uri_vec<S: AsRef<[u8]> + ?Sized>(
    input: &S,
) -> Result<Uri<'_, Vec<Param<'_>>>, ParseError> {
    Uri::parse_vec(input)
}

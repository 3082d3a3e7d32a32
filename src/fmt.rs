use crate::{
    component::{Component, Param},
    error::{ParseError, ParseErrorKind},
    uri::{Uri, UriPath},
};
use core::fmt;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Malformed => write!(f, "malformed input at index {}", self.index),
            ParseErrorKind::TooManyParams => write!(
                f,
                "too many query parameters at index {} (capacity of {} needed)",
                self.index, self.params_hint
            ),
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_str() {
            Ok(s) => fmt::Debug::fmt(s, f),
            Err(_) => write!(f, "b\"{}\"", self.as_bytes().escape_ascii()),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_str() {
            Ok(s) => fmt::Display::fmt(s, f),
            Err(_) => fmt::Display::fmt(&self.as_bytes().escape_ascii(), f),
        }
    }
}

impl fmt::Debug for Param<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Param")
            .field("name", &self.name())
            .field("value", &self.value())
            .finish()
    }
}

impl<'a, P: AsRef<[Param<'a>]>> fmt::Debug for UriPath<'a, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UriPath")
            .field("path", &self.path())
            .field("params", &self.params())
            .field("fragment", &self.fragment())
            .finish()
    }
}

impl<'a, P: AsRef<[Param<'a>]>> fmt::Debug for Uri<'a, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme())
            .field("host", &self.host())
            .field("port", &self.port())
            .field("path", &self.path())
            .field("params", &self.params())
            .field("fragment", &self.fragment())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse_uri_path, Component, Param};

    #[test]
    fn display() {
        let mut params = [Param::EMPTY; 1];
        let e = parse_uri_path("/?a&b", &mut params).unwrap_err();
        assert_eq!(
            e.to_string(),
            "too many query parameters at index 4 (capacity of 2 needed)"
        );
        let e = parse_uri_path("x", &mut params).unwrap_err();
        assert_eq!(e.to_string(), "malformed input at index 0");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Component::new("a\"b")), r#""a\"b""#);
        assert_eq!(format!("{:?}", Component::new(b"a\xff")), r#"b"a\xff""#);
        assert_eq!(format!("{}", Component::new(b"a\xff")), r"a\xff");

        let mut params = [Param::EMPTY; 2];
        let p = parse_uri_path("/x?k=v&f#", &mut params).unwrap();
        assert_eq!(
            format!("{p:?}"),
            r#"UriPath { path: "/x", params: [Param { name: "k", value: Some("v") }, Param { name: "f", value: None }], fragment: Some("") }"#
        );
    }
}

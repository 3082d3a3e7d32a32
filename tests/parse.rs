use uri_split::{ParseErrorKind::*, *};

#[test]
fn path_simple() {
    let mut params = [Param::EMPTY; 4];
    let p = parse_uri_path("/hello/world", &mut params).unwrap();
    assert_eq!(p.path(), "/hello/world");
    assert_eq!(p.params().len(), 0);
    assert_eq!(p.fragment(), None);
}

#[test]
fn path_question() {
    let mut params = [Param::EMPTY; 4];
    let p = parse_uri_path("/hello/world?", &mut params).unwrap();
    assert_eq!(p.path(), "/hello/world");
    assert_eq!(p.params().len(), 0);
}

#[test]
fn path_params() {
    let mut params = [Param::EMPTY; 4];
    let p = parse_uri_path("/reddit?hello=world!&eeee&bar=", &mut params).unwrap();
    assert_eq!(p.path(), "/reddit");
    assert_eq!(p.params().len(), 3);
    assert_eq!(p.params()[0].name(), "hello");
    assert_eq!(p.params()[0].value(), Some(Component::new("world!")));
    assert_eq!(p.params()[1].name(), "eeee");
    assert_eq!(p.params()[1].value(), None);
    assert_eq!(p.params()[2].name(), "bar");
    assert_eq!(p.params()[2].value(), Some(Component::EMPTY));
}

#[test]
fn path_too_many_params() {
    let mut params = [Param::EMPTY; 4];
    let e = parse_uri_path("/hello/world?a=b&a=c&a=d&a=e&e=4", &mut params).unwrap_err();
    assert_eq!(e.kind(), TooManyParams);
    assert_eq!(e.kind().code(), -2);

    // Retrying with the hinted capacity succeeds.
    let mut params = vec![Param::EMPTY; e.params_hint().unwrap()];
    let p = parse_uri_path("/hello/world?a=b&a=c&a=d&a=e&e=4", &mut params).unwrap();
    assert_eq!(p.params().len(), 5);
    assert_eq!(p.params()[4].name(), "e");
    assert_eq!(p.params()[4].value(), Some(Component::new("4")));
}

#[test]
fn path_lot_of_params() {
    let mut params = [Param::EMPTY; 4];
    let p = parse_uri_path("/hello/world?a=b&a=c&a=d&a=e", &mut params).unwrap();
    assert_eq!(p.path(), "/hello/world");
    assert_eq!(p.params().len(), 4);
    for (p, v) in p.params().iter().zip(["b", "c", "d", "e"]) {
        assert_eq!(p.name(), "a");
        assert_eq!(p.value(), Some(Component::new(v)));
    }
}

#[test]
fn path_parse_error() {
    let mut params = [Param::EMPTY; 4];
    let e = parse_uri_path("@#$@sdfs", &mut params).unwrap_err();
    assert_eq!(e.kind(), Malformed);
    assert_eq!(e.kind().code(), -1);
    assert_eq!(e.params_hint(), None);
}

#[test]
fn path_fragment() {
    let mut params = [Param::EMPTY; 4];
    let p = parse_uri_path("/tut?#thefrag", &mut params).unwrap();
    assert_eq!(p.path(), "/tut");
    assert_eq!(p.params().len(), 0);
    assert_eq!(p.fragment(), Some(Component::new("thefrag")));
}

#[test]
fn path_from_bytes() {
    let mut params = [Param::EMPTY; 4];
    let buf: Vec<u8> = b"/caf\xc3\xa9/\xff?k=\xfe".to_vec();
    let p = parse_uri_path(&buf, &mut params).unwrap();
    assert_eq!(p.path(), &b"/caf\xc3\xa9/\xff"[..]);
    assert!(p.path().to_str().is_err());
    assert_eq!(p.params()[0].value(), Some(Component::new(b"\xfe")));
}

#[test]
fn uri_simple() {
    let mut params = [Param::EMPTY; 4];
    let u = parse_uri("https://google.com", &mut params).unwrap();
    assert_eq!(u.scheme(), "https");
    assert_eq!(u.host(), "google.com");
    assert_eq!(u.port(), None);
    assert_eq!(u.path(), None);
    assert_eq!(u.params().len(), 0);
    assert_eq!(u.fragment(), None);
}

#[test]
fn uri_with_port_and_path() {
    let mut params = [Param::EMPTY; 4];
    let u = parse_uri("http://hello.com:890/foobar", &mut params).unwrap();
    assert_eq!(u.scheme(), "http");
    assert_eq!(u.host(), "hello.com");
    assert_eq!(u.port(), Some(890));
    assert_eq!(u.path(), Some(Component::new("/foobar")));
}

#[test]
fn uri_long() {
    let mut params = [Param::EMPTY; 4];
    let u = parse_uri("http://hello.com:1/justbar/eeee?key=val#fragment", &mut params).unwrap();
    assert_eq!(u.scheme(), "http");
    assert_eq!(u.host(), "hello.com");
    assert_eq!(u.port(), Some(1));
    assert_eq!(u.path(), Some(Component::new("/justbar/eeee")));
    assert_eq!(u.params().len(), 1);
    assert_eq!(u.params()[0].name(), "key");
    assert_eq!(u.params()[0].value(), Some(Component::new("val")));
    assert_eq!(u.fragment(), Some(Component::new("fragment")));
}

#[test]
fn uri_port_sentinel() {
    let mut params = [Param::EMPTY; 4];
    let none = parse_uri("http://h/", &mut params).unwrap().port();
    let zero = parse_uri("http://h:0/", &mut params).unwrap().port();
    assert_eq!(none, None);
    assert_eq!(zero, Some(0));
    assert_ne!(none, zero);
}

#[test]
fn uri_errors() {
    let mut params = [Param::EMPTY; 1];
    for s in [
        "hello.com",
        "://hello.com",
        "http:hello.com",
        "http://hello.com:port/",
        "http://hello.com:65536/",
        "http://hello.com?key=val",
    ] {
        assert_eq!(parse_uri(s, &mut params).unwrap_err().kind(), Malformed, "{s}");
    }
    assert_eq!(
        parse_uri("http://hello.com/?a&b", &mut params)
            .unwrap_err()
            .kind(),
        TooManyParams
    );
}

#[test]
fn vec_entry_points() {
    let p = parse_uri_path_vec("/hello/world?a=b&a=c&a=d&a=e&e=4").unwrap();
    assert_eq!(p.params().len(), 5);
    assert_eq!(p.param("e").unwrap().value(), Some(Component::new("4")));
    assert_eq!(p.param("a").unwrap().value(), Some(Component::new("b")));
    assert!(p.param("z").is_none());

    let u = parse_uri_vec("http://hello.com:1/justbar/eeee?key=val#fragment").unwrap();
    assert_eq!(u.port(), Some(1));
    assert_eq!(u.params().len(), 1);

    assert!(parse_uri_vec("hello").is_err());
    assert!(parse_uri_path_vec("hello").is_err());
}

#[test]
fn error_trait() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}

    let mut params = [Param::EMPTY; 4];
    let e = parse_uri("nope", &mut params).unwrap_err();
    assert_error(&e);
    let boxed: Box<dyn std::error::Error> = Box::new(e);
    assert_eq!(boxed.to_string(), "malformed input at index 4");
}

#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_split::{Component, Param, Params, ParseErrorKind};

fuzz_target!(|data: &[u8]| {
    let mut params = [Param::EMPTY; 4];
    let (mut buf, path, query, fragment) = match uri_split::parse_uri(data, &mut params) {
        Ok(u) => {
            let mut buf = Vec::with_capacity(data.len());
            buf.extend_from_slice(u.scheme().as_bytes());
            buf.extend_from_slice(b"://");
            buf.extend_from_slice(u.authority().as_bytes());
            (buf, u.path(), u.query(), u.fragment())
        }
        Err(e) => match uri_split::parse_uri_path(data, &mut params) {
            Ok(p) => {
                assert_eq!(e.kind(), ParseErrorKind::Malformed);
                (Vec::new(), Some(p.path()), p.query(), p.fragment())
            }
            Err(_) => return,
        },
    };
    push(&mut buf, b"", path);
    push(&mut buf, b"?", query);
    push(&mut buf, b"#", fragment);
    assert_eq!(data, buf);

    // The allocating parsers accept the same inputs and never overflow.
    let all: Vec<Param<'_>> = query.map_or_else(Vec::new, |q| Params::new(q.as_bytes()).collect());
    let collected = match uri_split::parse_uri_vec(data) {
        Ok(u) => u.into_params(),
        Err(_) => uri_split::parse_uri_path_vec(data).unwrap().into_params(),
    };
    assert_eq!(collected, all);
});

fn push(buf: &mut Vec<u8>, delim: &[u8], c: Option<&Component>) {
    if let Some(c) = c {
        buf.extend_from_slice(delim);
        buf.extend_from_slice(c.as_bytes());
    }
}

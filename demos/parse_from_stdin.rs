use std::io;

use uri_split::{parse_uri, parse_uri_path, Param};

fn main() {
    for line in io::stdin().lines() {
        let line = line.expect("failed to read line");
        let mut params = [Param::EMPTY; 16];
        let res = if line.starts_with('/') {
            parse_uri_path(&line, &mut params).map(|p| format!("{p:#?}"))
        } else {
            parse_uri(&line, &mut params).map(|u| format!("{u:#?}"))
        };
        match res {
            Ok(s) => println!("{s}"),
            Err(e) => println!("Error: {e}"),
        };
    }
}

//! Mapping chains to HTTP responses at a service boundary.
//!
//! Run with `cargo run --example http_boundary --features serde`.

use error_trail::prelude::*;
use error_trail::{code_as, Report};
use std::collections::HashMap;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ApiCode {
    NotFound,
    Forbidden,
    Unavailable,
}

impl std::fmt::Display for ApiCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ApiCode::NotFound => "not_found",
            ApiCode::Forbidden => "forbidden",
            ApiCode::Unavailable => "unavailable",
        };
        f.write_str(name)
    }
}

impl_code!(Display: ApiCode);

impl ApiCode {
    fn status(self) -> u16 {
        match self {
            ApiCode::NotFound => 404,
            ApiCode::Forbidden => 403,
            ApiCode::Unavailable => 503,
        }
    }
}

struct Store {
    users: HashMap<u64, String>,
    online: bool,
}

impl Store {
    fn find(&self, id: u64) -> FailureResult<&str> {
        if !self.online {
            return Err(io::Error::new(io::ErrorKind::ConnectionRefused, "store offline"))
                .translate(ApiCode::Unavailable, Temporary::new());
        }
        match self.users.get(&id) {
            Some(name) => Ok(name.as_str()),
            None => bail!(ApiCode::NotFound, "user {} does not exist", id),
        }
    }
}

fn load_profile(store: &Store, caller: u64, id: u64) -> FailureResult<String> {
    if caller != id && caller != 0 {
        bail!(ApiCode::Forbidden, "caller {} may not read user {}", caller, id);
    }
    let name = store.find(id).wrap(context! { "caller" => caller, "user_id" => id })?;
    Ok(format!("profile of {name}"))
}

fn respond(result: FailureResult<String>) -> (u16, String) {
    match result {
        Ok(body) => (200, body),
        Err(err) => {
            let status = code_as::<ApiCode>(&err).map_or(500, |code| code.status());
            let report = Report::new(&err);
            eprintln!("{status} {}", err);
            eprintln!("{report}");
            if err.is_transient() {
                eprintln!("client may retry");
            }
            (status, body(&report, &err))
        }
    }
}

#[cfg(feature = "serde")]
fn body(report: &Report, _err: &Failure) -> String {
    serde_json::to_string(report).unwrap_or_default()
}

#[cfg(not(feature = "serde"))]
fn body(_report: &Report, err: &Failure) -> String {
    message_of(err).unwrap_or("internal error").to_owned()
}

fn main() {
    let mut users = HashMap::new();
    users.insert(1, "ada".to_string());
    let store = Store { users, online: true };

    println!("{:?}", respond(load_profile(&store, 1, 1)));
    println!("{:?}", respond(load_profile(&store, 1, 2)));
    println!("{:?}", respond(load_profile(&store, 0, 9)));

    let offline = Store { users: HashMap::new(), online: false };
    let err = load_profile(&offline, 1, 1).unwrap_err();
    assert!(is(&err, &ApiCode::Unavailable));
    println!("{:?}", respond(Err(err)));
}

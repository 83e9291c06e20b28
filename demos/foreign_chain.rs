//! Chains that mix this crate's nodes with third-party wrapper errors.

use error_trail::chain::{Chain, Node};
use error_trail::{cause_of, BoxError, CallStack, Failure, ResultExt, StringCode};
use std::error::Error;
use std::{fmt, io};

const PARSE: StringCode = StringCode::new("Parse");

/// A third-party error that wraps another error and exposes it through `source()`.
#[derive(Debug)]
struct ConfigError {
    file: &'static str,
    inner: BoxError,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid config file {}", self.file)
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

fn parse_port(raw: &str) -> Result<u16, Failure> {
    raw.trim().parse::<u16>().translate(PARSE, error_trail::context! { "raw" => raw })
}

fn load(file: &'static str, raw: &str) -> Result<u16, ConfigError> {
    parse_port(raw).map_err(|err| ConfigError { file, inner: err.into() })
}

fn main() {
    let err = load("server.toml", "http").wrap("starting server").unwrap_err();

    for node in Chain::new(&err) {
        match node {
            Node::Failure(f) => {
                println!("failure: {:?} {:?}", f.code().map(|c| c.to_string()), f.message())
            },
            Node::Foreign(e) => println!("foreign: {e}"),
        }
    }
    println!("cause: {:?}", cause_of(&err).map(|c| c.to_string()));
    println!("{:#}", err);

    // Stacks captured elsewhere can be normalised into the same shape.
    let mut addresses = Vec::new();
    backtrace::trace(|frame| {
        addresses.push(frame.ip() as usize);
        true
    });
    let foreign = CallStack::from_addresses(&addresses);
    println!("{:#}", foreign);
    println!("{}", CallStack::from(&backtrace::Backtrace::new()));
}

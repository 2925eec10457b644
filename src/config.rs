//! Server configuration, from command-line flags or `DECK_`-prefixed
//! environment variables. A flag wins over its variable.
//!
//! | Flag         | Variable        | Default          |
//! |--------------|-----------------|------------------|
//! | `--api-host` | `DECK_API_HOST` | `127.0.0.1:9000` |
//!
//! `--help` prints this usage and exits.

use std::ffi::OsString;
use std::fmt;
use std::net::SocketAddr;

use clap::Parser;

pub const DEFAULT_API_HOST: &str = "127.0.0.1:9000";

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "deck-server", about = "Serves the deck registry over HTTP")]
pub struct Config {
    /// Address the HTTP API listens on.
    #[arg(long, env = "DECK_API_HOST", default_value = DEFAULT_API_HOST)]
    pub api_host: SocketAddr,
}

impl Config {
    /// Read the process arguments and environment. Prints usage and exits on
    /// `--help`; prints the error and exits non-zero on invalid input.
    pub fn load() -> Self {
        Self::parse()
    }

    /// Parse an explicit argument list (first item is the program name).
    pub fn try_load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--api-host={}", self.api_host)
    }
}

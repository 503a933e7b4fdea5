//! CLI definition using clap.

use std::ffi::OsString;

use clap::Parser;

/// Pause for a number of seconds given on the command line.
///
/// Arguments are captured as raw [`OsString`]s so that undecodable or
/// unparseable input degrades to a zero wait instead of being rejected
/// with a usage error; the command never fails over its argument.
#[derive(Parser)]
#[command(name = "doze")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seconds to pause; missing or unparseable values mean zero
    #[arg(value_name = "SECONDS", allow_hyphen_values = true)]
    pub seconds: Option<OsString>,

    /// Ignored; only the first value counts
    #[arg(
        value_name = "IGNORED",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true
    )]
    pub rest: Vec<OsString>,
}

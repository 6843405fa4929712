use crate::config::RunConfig;
use crate::runner::Runner;
use anyhow::Result;
use calc_core::DEFAULT_DISPLAY_WIDTH;
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "calc-echo")]
#[command(about = "Evaluates 5 + 7 and 5 * 7, then echoes the given text within a bounded width")]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Text to echo (text matching a flag, e.g. `-v`, goes after `--`)
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    pub input: Option<OsString>,

    /// Additional arguments are accepted and ignored
    #[arg(value_name = "IGNORED", hide = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,

    /// Echo policy for long input (full|truncate)
    #[arg(short = 'p', long = "policy", default_value = "truncate")]
    pub policy: String,

    /// Display width in characters for the truncate policy
    #[arg(short = 'w', long = "width", default_value_t = DEFAULT_DISPLAY_WIDTH)]
    pub width: usize,

    /// Reject input longer than the display width instead of truncating
    #[arg(short = 's', long = "strict")]
    pub strict: bool,

    /// Output format (human|json)
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub format: String,

    /// Extra operator to evaluate after + and * (repeatable)
    #[arg(short = 'o', long = "op", value_name = "CHAR")]
    pub extra_operators: Vec<char>,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        let config = RunConfig::from_cli(&self)?;

        if !self.ignored.is_empty() {
            debug!("Ignoring {} extra argument(s)", self.ignored.len());
        }

        // 非UTF-8の引数は置換文字で表示する
        let input = self
            .input
            .as_ref()
            .map(|raw| raw.to_string_lossy().into_owned());

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let report = Runner::new(config).run(input.as_deref(), &mut out)?;
        out.flush()?;

        Ok(ExitCode::from(report.exit_code()))
    }
}

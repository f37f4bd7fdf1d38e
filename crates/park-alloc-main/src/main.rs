// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


mod command;

use command::{Command, HELP, execute};
use park_alloc_engine::lot::Lot;
use park_alloc_model::prelude::*;
use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    num::ParseIntError,
    process::ExitCode,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

#[derive(Debug)]
enum StartupError {
    Io(io::Error),
    InvalidNumber {
        what: &'static str,
        given: String,
        source: ParseIntError,
    },
    Config(LotConfigBuildError),
}

impl Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::Io(e) => write!(f, "I/O error: {e}"),
            StartupError::InvalidNumber {
                what,
                given,
                source,
            } => write!(f, "Invalid {what} '{given}': {source}"),
            StartupError::Config(e) => write!(f, "Invalid lot configuration: {e}"),
        }
    }
}

impl std::error::Error for StartupError {}

impl From<io::Error> for StartupError {
    fn from(e: io::Error) -> Self {
        StartupError::Io(e)
    }
}

impl From<LotConfigBuildError> for StartupError {
    fn from(e: LotConfigBuildError) -> Self {
        StartupError::Config(e)
    }
}

fn parse_dimension(what: &'static str, given: &str) -> Result<usize, StartupError> {
    given
        .trim()
        .parse()
        .map_err(|source| StartupError::InvalidNumber {
            what,
            given: given.trim().to_string(),
            source,
        })
}

fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    question: &str,
) -> Result<String, StartupError> {
    write!(out, "{question} ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

fn read_config(
    args: &[String],
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<LotConfig, StartupError> {
    let floors = match args.first() {
        Some(a) => a.clone(),
        None => prompt(input, out, "Enter the number of floors:")?,
    };
    let num_floors = parse_dimension("number of floors", &floors)?;

    let spots = match args.get(1) {
        Some(a) => a.clone(),
        None => prompt(input, out, "Enter the number of spots per floor:")?,
    };
    let spots_per_floor = parse_dimension("number of spots per floor", &spots)?;

    Ok(LotConfigBuilder::new()
        .num_floors(num_floors)
        .spots_per_floor(spots_per_floor)
        .build()?)
}

fn session(lot: &Lot, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HELP}")?;
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Exit) => return Ok(()),
            Ok(command) => writeln!(out, "{}", execute(lot, command))?,
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}

fn main() -> ExitCode {
    enable_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let config = match read_config(&args, &mut input, &mut out) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    info!(%config, "parking lot opened");

    let lot = Lot::new(config);
    match session(&lot, &mut input, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}

use std::{
    num::{ParseFloatError, ParseIntError},
    path::PathBuf,
};

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("Not a number: `{value}`")]
    #[diagnostic(code(weather::parse::number))]
    Number {
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("Not an integer: `{value}`")]
    #[diagnostic(code(weather::parse::integer))]
    Integer {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Not an ISO-8601 date: `{value}`")]
    #[diagnostic(
        code(weather::parse::date),
        help("dates look like `2021-07-06` or `2021-07-06T07:00:00+08:00`")
    )]
    Date {
        value: String,
        #[source]
        source: time::error::Parse,
    },
}

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("Could not open `{}`", path.display())]
    #[diagnostic(code(weather::load::not_found), help("check that the file exists and is readable"))]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Bad csv: {0}")]
    #[diagnostic(code(weather::load::csv))]
    Csv(#[from] csv::Error),
    #[error("Line {line}: missing field {column}")]
    #[diagnostic(
        code(weather::load::missing_field),
        help("rows are expected to be `date,min_temp,max_temp`")
    )]
    MissingField { line: u64, column: usize },
    #[error("Line {line}: {source}")]
    #[diagnostic(code(weather::load::parse))]
    Parse {
        line: u64,
        #[source]
        source: ParseError,
    },
}

#[derive(Debug, Error, Diagnostic)]
pub enum StatsError {
    #[error("Cannot compute the mean of an empty series")]
    #[diagnostic(code(weather::stats::empty))]
    EmptySeries,
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

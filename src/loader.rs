use std::{fs, io::Read, path::Path};

use csv::StringRecord;

use crate::{
    error::{LoadError, ParseError},
    DayRecord, WeatherDataset,
};

/// Reads a `date,min_temp,max_temp` csv file. The first row is always
/// considered to be a header and ignored.
pub fn load_data_from_csv(path: impl AsRef<Path>) -> Result<WeatherDataset, LoadError> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|source| LoadError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = load_data_from_reader(content.as_slice())?;
    log::debug!("loaded {} days from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Same as [`load_data_from_csv`] but from anything readable.
pub fn load_data_from_reader(reader: impl Read) -> Result<WeatherDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut days = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, |position| position.line());

        if row.iter().any(|field| field.trim().is_empty()) {
            log::debug!("skipping line {line}: empty field");
            continue;
        }

        days.push(parse_row(&row, line)?);
    }

    Ok(days.into_iter().collect())
}

fn parse_row(row: &StringRecord, line: u64) -> Result<DayRecord, LoadError> {
    let field = |column: usize| {
        row.get(column).ok_or(LoadError::MissingField {
            line,
            column: column + 1,
        })
    };
    let temperature = |column: usize| {
        parse_integer(field(column)?).map_err(|source| LoadError::Parse { line, source })
    };

    Ok(DayRecord {
        date: field(0)?.trim().to_string(),
        min_temp: temperature(1)?,
        max_temp: temperature(2)?,
    })
}

fn parse_integer(value: &str) -> Result<i32, ParseError> {
    value.trim().parse().map_err(|source| ParseError::Integer {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(input: &str) -> Result<WeatherDataset, LoadError> {
        load_data_from_reader(input.as_bytes())
    }

    #[test]
    fn skips_header_and_blank_fields() {
        let dataset = load(
            "date,min,max\n\
             2021-07-02,49,67\n\
             2021-07-03,,70\n\
             2021-07-04,57,68\n",
        )
        .unwrap();

        assert_eq!(
            dataset.as_slice(),
            [
                DayRecord::new("2021-07-02", 49, 67),
                DayRecord::new("2021-07-04", 57, 68),
            ]
        );
    }

    #[test]
    fn header_is_never_validated() {
        let dataset = load("whatever\n2021-07-02,49,67\n").unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn empty_input() {
        assert!(load("").unwrap().is_empty());
        assert!(load("date,min,max\n").unwrap().is_empty());
    }

    #[test]
    fn whitespace_only_fields_are_blank() {
        let dataset = load("date,min,max\n2021-07-02, ,67\n\n2021-07-03, 50 , 71\n").unwrap();
        assert_eq!(dataset.as_slice(), [DayRecord::new("2021-07-03", 50, 71)]);
    }

    #[test]
    fn blank_lines_and_empty_rows() {
        let dataset = load("date,min,max\n\n2021-07-02,49,67\n,,\n\n2021-07-03,50,71\n").unwrap();
        assert_eq!(
            dataset.as_slice(),
            [
                DayRecord::new("2021-07-02", 49, 67),
                DayRecord::new("2021-07-03", 50, 71),
            ]
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let dataset = load("date,min,max,rain\n2021-07-02,49,67,3\n").unwrap();
        assert_eq!(dataset.as_slice(), [DayRecord::new("2021-07-02", 49, 67)]);
    }

    #[test]
    fn temperatures_must_be_integers() {
        let err = load("date,min,max\n2021-07-02,49,67\n2021-07-03,cold,70\n").unwrap_err();
        assert!(
            matches!(
                &err,
                LoadError::Parse {
                    line: 3,
                    source: ParseError::Integer { value, .. },
                } if value == "cold"
            ),
            "{err:?}"
        );

        let err = load("date,min,max\n2021-07-03,49.5,70\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }), "{err:?}");
    }

    #[test]
    fn short_rows() {
        let err = load("date,min,max\n2021-07-02,49\n").unwrap_err();
        assert!(
            matches!(err, LoadError::MissingField { line: 2, column: 3 }),
            "{err:?}"
        );
    }

    #[test]
    fn missing_file() {
        let err = load_data_from_csv("this/file/does/not/exist.csv").unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }), "{err:?}");
    }

    #[test]
    fn directories_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_data_from_csv(dir.path()).unwrap_err();
        assert!(
            matches!(&err, LoadError::NotFound { path, .. } if path == dir.path()),
            "{err:?}"
        );
    }
}

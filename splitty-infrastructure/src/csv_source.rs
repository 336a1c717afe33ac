use csv::{ReaderBuilder, StringRecord};
use splitty_application::{RawRecord, RecordSource};
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use crate::error::InfraError;

/// Reads expense records from a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvRecordSource {
    path: PathBuf,
}

impl CsvRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvRecordSource {
    type Error = InfraError;

    fn read_records(&self) -> Result<Vec<RawRecord>, Self::Error> {
        let file = File::open(&self.path).map_err(|err| {
            InfraError::io(self.path.clone(), err, |path| InfraError::InputNotFound {
                path,
            })
        })?;
        let records = parse_records(file)?;
        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "read CSV records"
        );
        Ok(records)
    }
}

/// Parses CSV text into raw records.
///
/// The first line is a header and is skipped. Rows may have any number of
/// fields; width is checked later by the loader. Lines holding nothing but
/// whitespace are ignored.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        if is_blank(&record) {
            continue;
        }
        let row = record
            .position()
            .and_then(|position| usize::try_from(position.line()).ok())
            .unwrap_or(records.len() + 2);
        records.push(RawRecord::new(row, record.iter()));
    }
    Ok(records)
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(|field| field.trim().is_empty())
}

use crate::model::RawRecord;

/// Supplies the raw records of one run, in input order.
pub trait RecordSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn read_records(&self) -> Result<Vec<RawRecord>, Self::Error>;
}

impl RecordSource for [RawRecord] {
    type Error = std::convert::Infallible;

    fn read_records(&self) -> Result<Vec<RawRecord>, Self::Error> {
        Ok(self.to_vec())
    }
}

impl RecordSource for Vec<RawRecord> {
    type Error = std::convert::Infallible;

    fn read_records(&self) -> Result<Vec<RawRecord>, Self::Error> {
        Ok(self.clone())
    }
}

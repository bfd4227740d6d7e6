//! Loading the survey table and sharing it between the engine and the UI.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::data::record::{Field, Record};
use crate::error::Result;

/// Ordered, immutable set of records. Cloning shares the underlying rows.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Parse a CSV table with a header row. Columns not known to [`Record`] are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();
        for row in csv_reader.deserialize::<Record>() {
            records.push(row?);
        }
        debug!("parsed {} survey rows", records.len());
        Ok(Self::new(records))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(std::io::BufReader::new(file))?;
        info!("loaded {} records from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// All values of one column, in record order.
    pub fn values(&self, field: Field) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(move |r| r.value(field))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

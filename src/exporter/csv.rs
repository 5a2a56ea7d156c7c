// file: src/exporter/csv.rs
// description: comma-separated export of a frequency table
// reference: https://docs.rs/csv

use crate::error::{PipelineError, Result};
use crate::models::FrequencyTable;

pub const HEADER: [&str; 2] = ["Word", "Count"];

pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn to_bytes(&self, table: &FrequencyTable) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADER)?;

        for row in table.rows() {
            let count = row.count.to_string();
            writer.write_record([row.word.as_str(), count.as_str()])?;
        }

        writer
            .into_inner()
            .map_err(|e| PipelineError::Export(e.to_string()))
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(bytes: &[u8]) -> Vec<(String, usize)> {
        let mut reader = csv::Reader::from_reader(bytes);
        assert_eq!(reader.headers().unwrap(), &csv::StringRecord::from(vec!["Word", "Count"]));
        reader
            .deserialize::<(String, usize)>()
            .map(|record| record.unwrap())
            .collect()
    }

    #[test]
    fn test_layout() {
        let table = FrequencyTable::from_lemmas(["cat", "sit", "cat"]);
        let bytes = CsvExporter::new().to_bytes(&table).unwrap();

        assert_eq!(String::from_utf8(bytes).unwrap(), "Word,Count\ncat,2\nsit,1\n");
    }

    #[test]
    fn test_round_trip_preserves_pairs_and_total() {
        let lemmas = ["über", "straße", "cat", "über", "naïve", "cat", "über"];
        let table = FrequencyTable::from_lemmas(lemmas);

        let parsed = parse(&CsvExporter::new().to_bytes(&table).unwrap());
        let expected: Vec<(String, usize)> = table
            .rows()
            .iter()
            .map(|r| (r.word.clone(), r.count))
            .collect();

        assert_eq!(parsed, expected);
        assert_eq!(parsed.iter().map(|(_, c)| c).sum::<usize>(), lemmas.len());
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = FrequencyTable::default();
        let bytes = CsvExporter::new().to_bytes(&table).unwrap();
        assert_eq!(bytes, b"Word,Count\n");
    }
}

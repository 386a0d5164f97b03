use crate::domain::dataset::Dataset;
use crate::domain::errors::DatasetError;
use csv::{ByteRecord, ReaderBuilder};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Reads an ISO-8859-1 encoded CSV file with a header row.
pub fn load_csv(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|e| DatasetError::Read {
        reason: format!("{}: {}", path.display(), e),
    })?;
    let dataset = read_csv(file)?;
    info!(
        "Loaded {} rows x {} columns from {:?}",
        dataset.row_count(),
        dataset.column_count(),
        path
    );
    Ok(dataset)
}

pub fn read_csv<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .byte_headers()
        .map_err(|e| DatasetError::Read {
            reason: e.to_string(),
        })?
        .iter()
        .map(decode_latin1)
        .collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(DatasetError::Read {
            reason: "file has no header row".to_string(),
        });
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut record = ByteRecord::new();
    loop {
        match rdr.read_byte_record(&mut record) {
            Ok(true) => rows.push(record.iter().map(decode_latin1).collect()),
            Ok(false) => break,
            Err(e) => {
                return Err(DatasetError::Read {
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(Dataset::new(headers, rows))
}

/// Every byte maps to the Unicode code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_latin1_and_trims_headers() {
        let raw: &[u8] = b"Order ID, Sales ,Profit,City\nA-1,10.5,2,Montr\xe9al\nA-2,4,-1,Z\xfcrich\n";
        let ds = read_csv(raw).unwrap();

        assert_eq!(ds.headers(), &["Order ID", "Sales", "Profit", "City"]);
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.rows()[0][3], "Montréal");
        assert_eq!(ds.rows()[1][3], "Zürich");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let raw: &[u8] = b"Sales,Profit,Region\n1,2\n";
        let ds = read_csv(raw).unwrap();
        assert_eq!(ds.rows()[0], vec!["1", "2", ""]);
        assert_eq!(ds.missing_cells(), 1);
    }

    #[test]
    fn test_empty_input_rejected() {
        let raw: &[u8] = b"";
        assert!(read_csv(raw).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_csv(Path::new("no/such/superstore.csv")).unwrap_err();
        assert!(err.to_string().contains("superstore.csv"));
    }
}

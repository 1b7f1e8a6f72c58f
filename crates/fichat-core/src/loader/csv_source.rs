// crates/fichat-core/src/loader/csv_source.rs
use crate::error::Result;
use crate::raw::FiRecordRaw;
use std::io::Read;

/// Parses `Cities,Province,Total Number of Fis` rows. Extra columns are ignored.
pub(super) fn read_records(reader: impl Read) -> Result<Vec<FiRecordRaw>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    for row in rdr.deserialize::<FiRecordRaw>() {
        out.push(row?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FiError;

    #[test]
    fn reads_original_headers() {
        let data = "Cities,Province,Total Number of Fis,Region\n\
                    Quezon City , Metro Manila,120,NCR\n\
                    Davao City,Davao del Sur,60,XI\n";
        let rows = read_records(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].city, "Quezon City");
        assert_eq!(rows[1].fi_count, 60);
    }

    #[test]
    fn missing_column_is_an_error() {
        let data = "Cities,Province\nManila,Metro Manila\n";
        assert!(matches!(read_records(data.as_bytes()), Err(FiError::Csv(_))));
    }

    #[test]
    fn malformed_count_is_an_error() {
        let data = "Cities,Province,Total Number of Fis\nManila,Metro Manila,many\n";
        assert!(matches!(read_records(data.as_bytes()), Err(FiError::Csv(_))));
    }
}

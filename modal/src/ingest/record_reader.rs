use super::{IngestError, ModalRecord};
use modal_core::Modal;
use std::{io::Read, path::Path};

/// reads freight leg records from a CSV file with a header row. `kind` and
/// `distance` columns are required, every other column is optional.
pub fn read_records_csv(path: &Path) -> Result<Vec<ModalRecord>, IngestError> {
    log::info!("reading modal records from {}", path.display());
    let filepath = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|source| IngestError::ReadError {
        filepath: filepath.clone(),
        source,
    })?;
    records_from_csv_reader(file).map_err(|source| IngestError::CsvError { filepath, source })
}

pub fn records_from_csv_reader<R: Read>(reader: R) -> Result<Vec<ModalRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader
        .deserialize::<ModalRecord>()
        .collect::<Result<Vec<_>, _>>()
}

/// validates every record, reporting the first failure with its row index.
pub fn build_modals(records: &[ModalRecord]) -> Result<Vec<Modal>, IngestError> {
    records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            record
                .build()
                .map_err(|source| IngestError::InvalidRecord { row, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use modal_core::{TransportKind, TransportModal};

    const LEGS_CSV: &str = "\
kind,origin,destination,distance,has_toll,toll_fee,terminal_fee
road,Campinas,Santos,100,1,10,
rail,Campinas,Santos,100,,,
waterway,Santos,Rio Grande,200,,,50
air,Campinas,Manaus,500,,,30
";

    #[test]
    fn test_read_records() {
        let records = records_from_csv_reader(LEGS_CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].kind, TransportKind::Road);
        assert_eq!(records[0].has_toll, Some(true));
        assert_eq!(records[0].origin.as_deref(), Some("Campinas"));
        assert_eq!(records[1].toll_fee, None);
        assert_eq!(records[2].terminal_fee, Some(50.0));
    }

    #[test]
    fn test_build_modals() {
        let records = records_from_csv_reader(LEGS_CSV.as_bytes()).unwrap();
        let modals = build_modals(&records).unwrap();
        let costs = modals
            .iter()
            .map(|m| m.compute_cost(250.0).unwrap())
            .collect::<Vec<_>>();
        // road: 8 trips of 17.5, rail: 1 trip of 5, waterway: 1 trip of 58.75, air: 3 trips of 80
        let expected = [140.0, 5.0, 58.75, 240.0];
        for (cost, expected) in costs.iter().zip(expected) {
            assert!((cost - expected).abs() < 1e-9, "{cost} != {expected}");
        }
    }

    #[test]
    fn test_build_modals_reports_row() {
        let csv = "kind,distance,speed\nair,100,800\nroad,100,-60\n";
        let records = records_from_csv_reader(csv.as_bytes()).unwrap();
        let err = build_modals(&records).unwrap_err();
        assert!(matches!(err, IngestError::InvalidRecord { row: 1, .. }));
    }

    #[test]
    fn test_unknown_kind_fails_to_read() {
        let csv = "kind,distance\npipeline,100\n";
        assert!(records_from_csv_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_records_csv(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, IngestError::ReadError { .. }));
    }
}

use super::{IngestError, ModalRecord, TokenMatrix};
use modal_core::{model::validation, ModalError, TransportKind};
use std::str::FromStr;

/// interprets each matrix row as a freight leg. the row width selects the layout:
///
/// - 3 columns: `kind distance surcharge`
/// - 4 columns: `kind distance surcharge toll_flag`
/// - 6 columns: `kind price_per_km capacity speed distance surcharge`
///
/// the surcharge is the toll fee on road rows and the terminal fee on waterway
/// and air rows; rail rows must use 0.
pub fn records_from_matrix(matrix: &TokenMatrix) -> Result<Vec<ModalRecord>, IngestError> {
    matrix
        .iter_rows()
        .enumerate()
        .map(|(row, tokens)| record_from_row(row, tokens))
        .collect()
}

fn record_from_row(row: usize, tokens: &[String]) -> Result<ModalRecord, IngestError> {
    let invalid = |source: ModalError| IngestError::InvalidRecord { row, source };
    let kind = TransportKind::from_str(&tokens[0]).map_err(invalid)?;
    let mut record = match tokens.len() {
        3 | 4 => {
            let mut record = ModalRecord::new(kind, int_token(row, 1, &tokens[1])?);
            record
                .set_surcharge(float_token(row, 2, &tokens[2])?)
                .map_err(invalid)?;
            record
        }
        6 => {
            let mut record = ModalRecord::new(kind, int_token(row, 4, &tokens[4])?);
            record.price_per_km = Some(float_token(row, 1, &tokens[1])?);
            record.capacity = Some(float_token(row, 2, &tokens[2])?);
            record.speed = Some(float_token(row, 3, &tokens[3])?);
            record
                .set_surcharge(float_token(row, 5, &tokens[5])?)
                .map_err(invalid)?;
            record
        }
        columns => return Err(IngestError::UnsupportedRowWidth { row, columns }),
    };
    if let Some(flag) = tokens.get(3).filter(|_| tokens.len() == 4) {
        let has_toll = validation::toll_flag(flag).map_err(invalid)?;
        record.has_toll = Some(has_toll);
    }
    Ok(record)
}

fn int_token(row: usize, column: usize, token: &str) -> Result<i64, IngestError> {
    token.parse::<i64>().map_err(|_| IngestError::InvalidToken {
        row,
        column,
        token: String::from(token),
        expected: String::from("an integer"),
    })
}

fn float_token(row: usize, column: usize, token: &str) -> Result<f64, IngestError> {
    token.parse::<f64>().map_err(|_| IngestError::InvalidToken {
        row,
        column,
        token: String::from(token),
        expected: String::from("a number"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use modal_core::TransportModal;

    #[test]
    fn test_short_rows() {
        let matrix = TokenMatrix::parse("3 3\nroad 100 10\nrail 100 0\nair 500 30").unwrap();
        let records = records_from_matrix(&matrix).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].toll_fee, Some(10.0));
        assert_eq!(records[2].terminal_fee, Some(30.0));

        let air = records[2].build().unwrap();
        assert!((air.compute_cost(250.0).unwrap() - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_toll_flag_column() {
        let matrix = TokenMatrix::parse("2 4\nroad 100 10 0\nroad 100 0 1").unwrap();
        let records = records_from_matrix(&matrix).unwrap();
        assert_eq!(records[0].has_toll, Some(false));
        assert_eq!(records[1].has_toll, Some(true));

        let bad = TokenMatrix::parse("1 4\nroad 100 10 yes").unwrap();
        let err = records_from_matrix(&bad).unwrap_err();
        assert!(matches!(
            err,
            IngestError::InvalidRecord {
                row: 0,
                source: ModalError::InvalidTollFlag(_)
            }
        ));
    }

    #[test]
    fn test_full_rows() {
        let text = "1 6\nwaterway 0.04375 1000 40 200 50";
        let matrix = TokenMatrix::parse(text).unwrap();
        let records = records_from_matrix(&matrix).unwrap();
        let modal = records[0].build().unwrap();
        assert_eq!(modal.kind(), TransportKind::Waterway);
        assert!((modal.compute_cost(1000.0).unwrap() - 58.75).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_bad_rows() {
        let matrix = TokenMatrix::parse("1 2\nroad 100").unwrap();
        assert!(matches!(
            records_from_matrix(&matrix),
            Err(IngestError::UnsupportedRowWidth { row: 0, columns: 2 })
        ));

        let matrix = TokenMatrix::parse("1 3\nrail 100 5").unwrap();
        assert!(matches!(
            records_from_matrix(&matrix),
            Err(IngestError::InvalidRecord { row: 0, .. })
        ));

        let matrix = TokenMatrix::parse("1 3\nroad far 5").unwrap();
        assert!(matches!(
            records_from_matrix(&matrix),
            Err(IngestError::InvalidToken { column: 1, .. })
        ));

        let matrix = TokenMatrix::parse("1 3\nbarge 100 5").unwrap();
        assert!(matches!(
            records_from_matrix(&matrix),
            Err(IngestError::InvalidRecord {
                source: ModalError::UnknownKind(_),
                ..
            })
        ));
    }
}

use super::{ModalAppError, ReportFormat};
use crate::ingest::{build_modals, ModalRecord};
use itertools::Itertools;
use modal_core::{Modal, ModalError, TransportKind, TransportModal};
use serde::Serialize;
use std::io::Write;

/// cost and travel time of moving a cargo quantity over one leg.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ModalReportRow {
    /// position of the leg in the input
    pub leg: usize,
    pub kind: TransportKind,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub distance: u64,
    pub price_per_km: f64,
    pub capacity: f64,
    pub speed: f64,
    /// toll or terminal fee paid per trip
    pub surcharge: f64,
    pub quantity: f64,
    pub trips: u64,
    pub cost: f64,
    pub travel_time_minutes: f64,
}

impl ModalReportRow {
    pub fn new(
        leg: usize,
        modal: &Modal,
        record: Option<&ModalRecord>,
        quantity: f64,
    ) -> Result<ModalReportRow, ModalError> {
        let row = ModalReportRow {
            leg,
            kind: modal.kind(),
            origin: record.and_then(|r| r.origin.clone()),
            destination: record.and_then(|r| r.destination.clone()),
            distance: modal.distance(),
            price_per_km: modal.price_per_km(),
            capacity: modal.capacity(),
            speed: modal.speed(),
            surcharge: modal.surcharge(),
            quantity,
            trips: modal.trips(quantity)?,
            cost: modal.compute_cost(quantity)?,
            travel_time_minutes: modal.travel_time()?,
        };
        Ok(row)
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ModalReport {
    pub rows: Vec<ModalReportRow>,
}

impl ModalReport {
    /// prices every record for `quantity` tonnes. rows keep the input order.
    pub fn build(records: &[ModalRecord], quantity: f64) -> Result<ModalReport, ModalAppError> {
        let modals = build_modals(records)?;
        let rows = modals
            .iter()
            .zip(records)
            .enumerate()
            .map(|(index, (modal, record))| {
                ModalReportRow::new(index, modal, Some(record), quantity)
                    .map_err(|source| ModalAppError::LegError { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("built report with {} rows for {quantity} t", rows.len());
        Ok(ModalReport { rows })
    }

    pub fn sort_by_cost(self) -> ModalReport {
        let rows = self
            .rows
            .into_iter()
            .sorted_by(|a, b| a.cost.total_cmp(&b.cost))
            .collect_vec();
        ModalReport { rows }
    }

    pub fn cheapest(&self) -> Option<&ModalReportRow> {
        self.rows.iter().min_by(|a, b| a.cost.total_cmp(&b.cost))
    }

    pub fn write<W: Write>(&self, format: ReportFormat, writer: W) -> Result<(), ModalAppError> {
        write_rows(&self.rows, format, writer)
    }
}

/// reference values of one transport kind, as printed by the `defaults` command.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DefaultsRow {
    pub kind: TransportKind,
    pub price_per_km: f64,
    pub capacity: f64,
    pub speed: f64,
    pub distance: u64,
    pub surcharge: Option<&'static str>,
}

impl DefaultsRow {
    pub fn all() -> Vec<DefaultsRow> {
        TransportKind::ALL
            .into_iter()
            .map(|kind| {
                let modal = Modal::default_for(kind);
                DefaultsRow {
                    kind,
                    price_per_km: modal.price_per_km(),
                    capacity: modal.capacity(),
                    speed: modal.speed(),
                    distance: modal.distance(),
                    surcharge: kind.surcharge_name(),
                }
            })
            .collect_vec()
    }
}

pub fn write_rows<T, W>(rows: &[T], format: ReportFormat, mut writer: W) -> Result<(), ModalAppError>
where
    T: Serialize,
    W: Write,
{
    match format {
        ReportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for row in rows {
                csv_writer.serialize(row)?;
            }
            csv_writer.flush()?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

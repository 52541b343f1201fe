use super::{
    report::write_rows, DefaultsRow, InputSource, ModalAppError, ModalReport, ReportFormat,
};
use crate::{
    config::ModalConfig,
    ingest::{Localities, ModalRecord},
};
use clap::{Parser, Subcommand};
use modal_core::TransportKind;
use std::{io::Write, path::PathBuf, str::FromStr};

/// Command line tool for pricing freight legs by road, rail, waterway and air
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ModalApp {
    #[command(subcommand)]
    pub op: ModalOperation,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ModalOperation {
    /// print the reference price, capacity and speed of each transport kind
    Defaults {
        #[arg(long, default_value_t = ReportFormat::Csv)]
        format: ReportFormat,
    },
    /// print a TOML configuration with one reference leg per transport kind
    Template,
    /// price a single leg
    Cost {
        #[arg(long, value_parser = TransportKind::from_str, help = "one of road, rail, waterway, air")]
        kind: TransportKind,
        #[arg(long, help = "cargo quantity in tonnes")]
        quantity: f64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        distance: i64,
        #[arg(long, allow_negative_numbers = true, help = "overrides the reference price per km")]
        price: Option<f64>,
        #[arg(long, allow_negative_numbers = true, help = "overrides the reference capacity in tonnes")]
        capacity: Option<f64>,
        #[arg(long, allow_negative_numbers = true, help = "overrides the reference speed")]
        speed: Option<f64>,
        #[arg(long, allow_negative_numbers = true, help = "road toll paid per trip")]
        toll_fee: Option<f64>,
        #[arg(long, allow_negative_numbers = true, help = "waterway or air terminal fee paid per trip")]
        terminal_fee: Option<f64>,
        #[arg(long, default_value_t = ReportFormat::Csv)]
        format: ReportFormat,
    },
    /// price every leg of an input file (.toml, .json, .csv or a whitespace token matrix)
    Report {
        #[arg(long, help = "file listing the legs to price")]
        input: PathBuf,
        #[arg(long, help = "cargo quantity in tonnes, required unless set in the input file")]
        quantity: Option<f64>,
        #[arg(long, help = "whitespace-delimited list of known locality names")]
        localities: Option<PathBuf>,
        #[arg(long, help = "order rows from cheapest to most expensive")]
        sort_by_cost: bool,
        #[arg(long, default_value_t = ReportFormat::Csv)]
        format: ReportFormat,
    },
}

impl ModalOperation {
    pub fn run(&self) -> Result<(), ModalAppError> {
        let stdout = std::io::stdout();
        self.run_with_writer(stdout.lock())
    }

    pub fn run_with_writer<W: Write>(&self, mut writer: W) -> Result<(), ModalAppError> {
        match self {
            ModalOperation::Defaults { format } => write_rows(&DefaultsRow::all(), *format, writer),
            ModalOperation::Template => {
                let toml = ModalConfig::template().to_toml()?;
                write!(writer, "{toml}")?;
                Ok(())
            }
            ModalOperation::Cost {
                kind,
                quantity,
                distance,
                price,
                capacity,
                speed,
                toll_fee,
                terminal_fee,
                format,
            } => {
                let record = ModalRecord {
                    price_per_km: *price,
                    capacity: *capacity,
                    speed: *speed,
                    toll_fee: *toll_fee,
                    terminal_fee: *terminal_fee,
                    ..ModalRecord::new(*kind, *distance)
                };
                let report = ModalReport::build(&[record], *quantity)?;
                report.write(*format, writer)
            }
            ModalOperation::Report {
                input,
                quantity,
                localities,
                sort_by_cost,
                format,
            } => {
                let loaded = InputSource::from_path(input).load()?;
                let quantity = quantity.or(loaded.quantity).ok_or_else(|| {
                    ModalAppError::InvalidUserInput(String::from(
                        "no cargo quantity given on the command line or in the input file",
                    ))
                })?;
                let localities = match localities {
                    Some(path) => Some(Localities::read(path)?),
                    None => loaded.localities,
                };
                if let Some(localities) = &localities {
                    localities.check(&loaded.records)?;
                }
                log::info!(
                    "pricing {} legs for {quantity} t from {}",
                    loaded.records.len(),
                    input.display()
                );
                let mut report = ModalReport::build(&loaded.records, quantity)?;
                if *sort_by_cost {
                    report = report.sort_by_cost();
                }
                if let Some(cheapest) = report.cheapest() {
                    log::info!(
                        "cheapest leg is {} ({}) at {}",
                        cheapest.leg,
                        cheapest.kind,
                        cheapest.cost
                    );
                }
                report.write(*format, writer)
            }
        }
    }
}

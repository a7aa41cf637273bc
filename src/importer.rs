//! Parse a full four-section CSV export back into a ledger. This is the
//! restore/migration path for the format written by `exporter::full_export`.

use std::path::Path;

use crate::error::{MinnowError, Result};
use crate::ledger::Ledger;
use crate::models::{Booking, Customer, Pond, Transaction};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    None,
    Ponds,
    Customers,
    Bookings,
    Txns,
}

fn parse_fields(line: &str) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    match rdr.records().next() {
        Some(record) => Ok(record?.iter().map(str::to_string).collect()),
        None => Ok(Vec::new()),
    }
}

fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn malformed(section: &str, line: &str) -> MinnowError {
    MinnowError::Other(format!("malformed {section} row: {line}"))
}

pub fn parse_full_export(text: &str) -> Result<Ledger> {
    let mut ledger = Ledger::default();
    let mut section = Section::None;
    let mut expect_header = false;

    for raw_line in text.lines() {
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if let Some(marker) = line.strip_prefix('#') {
            section = match marker.trim() {
                "PONDS" => Section::Ponds,
                "CUSTOMERS" => Section::Customers,
                "BOOKINGS" => Section::Bookings,
                "TXNS" => Section::Txns,
                other => {
                    return Err(MinnowError::Other(format!("unknown section: {other}")))
                }
            };
            expect_header = true;
            continue;
        }
        if expect_header {
            // column header row right under the marker
            expect_header = false;
            continue;
        }

        let fields = parse_fields(line)?;
        match section {
            Section::None => {
                return Err(MinnowError::Other(format!(
                    "data before any section marker: {line}"
                )))
            }
            Section::Ponds => {
                if fields.len() < 2 {
                    return Err(malformed("pond", line));
                }
                ledger.ponds.push(Pond {
                    id: fields[0].clone(),
                    name: fields[1].clone(),
                });
            }
            Section::Customers => {
                if fields.len() < 2 {
                    return Err(malformed("customer", line));
                }
                ledger.customers.push(Customer {
                    id: fields[0].clone(),
                    name: fields[1].clone(),
                });
            }
            Section::Bookings => {
                if fields.len() < 6 {
                    return Err(malformed("booking", line));
                }
                ledger.bookings.push(Booking {
                    id: fields[0].clone(),
                    pond_id: fields[1].clone(),
                    cust_id: fields[2].clone(),
                    date: fields[3].clone(),
                    hours: parse_number(&fields[4]),
                    price: parse_number(&fields[5]),
                });
            }
            Section::Txns => {
                if fields.len() < 5 {
                    return Err(malformed("transaction", line));
                }
                ledger.txns.push(Transaction {
                    id: fields[0].clone(),
                    kind: fields[1].parse()?,
                    date: fields[2].clone(),
                    desc: fields[3].clone(),
                    amount: parse_number(&fields[4]),
                });
            }
        }
    }

    Ok(ledger)
}

pub fn parse_export_file(path: &Path) -> Result<Ledger> {
    let text = std::fs::read_to_string(path)?;
    parse_full_export(&text)
}

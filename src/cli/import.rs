use std::path::Path;

use crate::error::{MinnowError, Result};
use crate::importer::parse_export_file;
use crate::settings::get_data_dir;
use crate::store;

pub fn run(file: &str, replace: bool) -> Result<()> {
    let data_dir = get_data_dir();
    let existing = store::load_or_seed(&data_dir)?;
    if !existing.is_empty() && !replace {
        return Err(MinnowError::Other(
            "the ledger already has records; pass --replace to overwrite them".to_string(),
        ));
    }

    let ledger = parse_export_file(Path::new(file))?;
    store::save(&data_dir, &ledger)?;
    println!(
        "Imported {} ponds, {} customers, {} bookings, {} transactions from {file}",
        ledger.ponds.len(),
        ledger.customers.len(),
        ledger.bookings.len(),
        ledger.txns.len()
    );
    Ok(())
}

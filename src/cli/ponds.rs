use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::settings::get_data_dir;
use crate::store;

pub fn add(name: &str) -> Result<()> {
    let data_dir = get_data_dir();
    let mut ledger = store::load_or_seed(&data_dir)?;
    let pond = ledger.add_pond(name)?;
    store::save(&data_dir, &ledger)?;
    println!("Added pond: {} ({})", pond.name, pond.id);
    Ok(())
}

pub fn list() -> Result<()> {
    let ledger = store::load_or_seed(&get_data_dir())?;
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name"]);
    for p in &ledger.ponds {
        table.add_row(vec![Cell::new(&p.id), Cell::new(&p.name)]);
    }
    println!("Ponds ({})\n{table}", ledger.ponds.len());
    Ok(())
}

pub fn delete(id: &str) -> Result<()> {
    let data_dir = get_data_dir();
    let mut ledger = store::load_or_seed(&data_dir)?;
    ledger.delete_pond(id)?;
    store::save(&data_dir, &ledger)?;
    println!("Deleted pond {id}. Bookings that reference it are kept.");
    Ok(())
}

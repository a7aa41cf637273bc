use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::settings::get_data_dir;
use crate::store;

pub fn add(name: &str) -> Result<()> {
    let data_dir = get_data_dir();
    let mut ledger = store::load_or_seed(&data_dir)?;
    let customer = ledger.add_customer(name)?;
    store::save(&data_dir, &ledger)?;
    println!("Added customer: {} ({})", customer.name, customer.id);
    Ok(())
}

pub fn list() -> Result<()> {
    let ledger = store::load_or_seed(&get_data_dir())?;
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name"]);
    for c in &ledger.customers {
        table.add_row(vec![Cell::new(&c.id), Cell::new(&c.name)]);
    }
    println!("Customers ({})\n{table}", ledger.customers.len());
    Ok(())
}

pub fn delete(id: &str) -> Result<()> {
    let data_dir = get_data_dir();
    let mut ledger = store::load_or_seed(&data_dir)?;
    ledger.delete_customer(id)?;
    store::save(&data_dir, &ledger)?;
    println!("Deleted customer {id}. Bookings that reference them are kept.");
    Ok(())
}

use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::vnd;
use crate::ledger::today;
use crate::settings::get_data_dir;
use crate::store;

pub fn add(
    pond: &str,
    customer: &str,
    date: Option<String>,
    hours: f64,
    price: f64,
) -> Result<()> {
    let data_dir = get_data_dir();
    let mut ledger = store::load_or_seed(&data_dir)?;
    let pond_id = ledger.find_pond(pond)?.id.clone();
    let cust_id = ledger.find_customer(customer)?.id.clone();
    let date = date.unwrap_or_else(today);
    let booking = ledger.add_booking(&pond_id, &cust_id, &date, hours, price)?;
    store::save(&data_dir, &ledger)?;
    println!(
        "Added booking {} on {}: {} at {} for {}",
        booking.id,
        booking.date,
        ledger.customer_name(&booking.cust_id),
        ledger.pond_name(&booking.pond_id),
        vnd(booking.price)
    );
    if booking.price > 0.0 {
        println!("Recorded a matching sale of {}.", vnd(booking.price));
    }
    Ok(())
}

pub fn list() -> Result<()> {
    let ledger = store::load_or_seed(&get_data_dir())?;
    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Pond", "Customer", "Hours", "Price"]);
    for b in &ledger.bookings {
        table.add_row(vec![
            Cell::new(&b.id),
            Cell::new(&b.date),
            Cell::new(ledger.pond_name(&b.pond_id)),
            Cell::new(ledger.customer_name(&b.cust_id)),
            Cell::new(b.hours),
            Cell::new(vnd(b.price)),
        ]);
    }
    println!("Bookings ({})\n{table}", ledger.bookings.len());
    Ok(())
}

pub fn delete(id: &str) -> Result<()> {
    let data_dir = get_data_dir();
    let mut ledger = store::load_or_seed(&data_dir)?;
    ledger.delete_booking(id)?;
    store::save(&data_dir, &ledger)?;
    println!("Deleted booking {id}.");
    Ok(())
}

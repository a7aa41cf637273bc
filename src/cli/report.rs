use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::{MinnowError, Result};
use crate::fmt::vnd;
use crate::ledger::Ledger;
use crate::reports;
use crate::settings::get_data_dir;
use crate::store;

/// Resolve a name-or-id argument to a customer id. Unknown keys pass through
/// as-is: bookings keep referencing deleted customers, and their history
/// must stay reportable by raw id.
pub(crate) fn resolve_customer_id(ledger: &Ledger, key: &str) -> Result<String> {
    match ledger.find_customer(key) {
        Ok(c) => Ok(c.id.clone()),
        Err(MinnowError::UnknownCustomer(_)) => Ok(key.to_string()),
        Err(e) => Err(e),
    }
}

pub fn customer(
    customer: &str,
    from_date: Option<String>,
    to_date: Option<String>,
) -> Result<()> {
    let ledger = store::load_or_seed(&get_data_dir())?;
    let cust_id = resolve_customer_id(&ledger, customer)?;
    let report = reports::get_customer_report(
        &ledger,
        &cust_id,
        from_date.as_deref(),
        to_date.as_deref(),
    );

    println!("Customer Report: {}", ledger.customer_name(&cust_id));
    println!(
        "From: {}   To: {}",
        report.start.as_deref().unwrap_or("—"),
        report.end.as_deref().unwrap_or("—")
    );

    let mut table = Table::new();
    table.set_header(vec!["Date", "Pond", "Hours", "Price"]);
    for r in &report.rows {
        table.add_row(vec![
            Cell::new(&r.date),
            Cell::new(ledger.pond_name(&r.pond_id)),
            Cell::new(r.hours),
            Cell::new(vnd(r.price)),
        ]);
    }
    println!("{table}");
    println!("Total revenue: {}", vnd(report.total).green().bold());
    Ok(())
}

pub fn date(date: &str) -> Result<()> {
    let ledger = store::load_or_seed(&get_data_dir())?;
    let report = reports::get_date_report(&ledger, date);

    println!("Date Report: {date}");

    let mut bookings = Table::new();
    bookings.set_header(vec!["Customer", "Pond", "Hours", "Price"]);
    for b in &report.bookings {
        bookings.add_row(vec![
            Cell::new(ledger.customer_name(&b.cust_id)),
            Cell::new(ledger.pond_name(&b.pond_id)),
            Cell::new(b.hours),
            Cell::new(vnd(b.price)),
        ]);
    }
    println!("\nBookings ({})\n{bookings}", report.bookings.len());

    let mut txns = Table::new();
    txns.set_header(vec!["Kind", "Description", "Amount"]);
    for t in &report.txns {
        txns.add_row(vec![
            Cell::new(t.kind),
            Cell::new(&t.desc),
            Cell::new(vnd(t.amount)),
        ]);
    }
    println!("\nTransactions ({})\n{txns}", report.txns.len());

    // three ledgers, three totals — bookings and txns are never reconciled
    println!("\nBooking total:   {}", vnd(report.from_bookings).bold());
    println!("Sale total:      {}", vnd(report.txn_sales).green());
    println!("Expense total:   {}", vnd(report.expenses).red());
    Ok(())
}

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::vnd;
use crate::models::TxnKind;
use crate::settings::get_data_dir;
use crate::store;

pub fn add(
    kind: TxnKind,
    date: Option<String>,
    desc: Option<String>,
    amount: f64,
) -> Result<()> {
    let data_dir = get_data_dir();
    let mut ledger = store::load_or_seed(&data_dir)?;
    let txn = ledger.add_txn(
        kind,
        date.as_deref().unwrap_or(""),
        desc.as_deref().unwrap_or(""),
        amount,
    )?;
    store::save(&data_dir, &ledger)?;
    println!(
        "Added {} {} on {}: {} ({})",
        txn.kind,
        txn.id,
        txn.date,
        txn.desc,
        vnd(txn.amount)
    );
    Ok(())
}

pub fn list() -> Result<()> {
    let ledger = store::load_or_seed(&get_data_dir())?;
    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Kind", "Description", "Amount"]);
    for t in &ledger.txns {
        let amount = match t.kind {
            TxnKind::Sale => vnd(t.amount).green().to_string(),
            TxnKind::Expense => vnd(t.amount).red().to_string(),
        };
        table.add_row(vec![
            Cell::new(&t.id),
            Cell::new(&t.date),
            Cell::new(t.kind),
            Cell::new(&t.desc),
            Cell::new(amount),
        ]);
    }
    println!("Transactions ({})\n{table}", ledger.txns.len());
    Ok(())
}

pub fn delete(id: &str) -> Result<()> {
    let data_dir = get_data_dir();
    let mut ledger = store::load_or_seed(&data_dir)?;
    ledger.delete_txn(id)?;
    store::save(&data_dir, &ledger)?;
    println!("Deleted transaction {id}.");
    Ok(())
}

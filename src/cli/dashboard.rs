use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::vnd;
use crate::reports;
use crate::settings::get_data_dir;
use crate::store;

pub fn run() -> Result<()> {
    let ledger = store::load_or_seed(&get_data_dir())?;
    let totals = reports::get_dashboard(&ledger);

    println!("Total sales:    {}", vnd(totals.total_sales).green());
    println!("Total expenses: {}", vnd(totals.total_expenses).red());
    let profit = if totals.profit >= 0.0 {
        vnd(totals.profit).green().bold()
    } else {
        vnd(totals.profit).red().bold()
    };
    println!("Profit:         {profit}");

    let series = reports::get_monthly_revenue(&ledger);
    if series.is_empty() {
        println!("\nNo sales recorded yet.");
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec!["Month", "Revenue"]);
    for m in &series {
        table.add_row(vec![Cell::new(&m.month), Cell::new(vnd(m.total))]);
    }
    println!("\nMonthly Revenue\n{table}");
    Ok(())
}

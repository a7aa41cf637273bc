use std::path::PathBuf;

use crate::cli::report::resolve_customer_id;
use crate::error::Result;
use crate::exporter;
use crate::reports;
use crate::settings::get_data_dir;
use crate::store;

fn default_path(name: &str) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    get_data_dir().join("exports").join(format!("{name}-{date}.csv"))
}

fn write_csv(text: &str, path: &PathBuf) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)?;
    println!("Wrote {}", path.display());
    Ok(())
}

pub fn all(output: Option<String>) -> Result<()> {
    let ledger = store::load_or_seed(&get_data_dir())?;
    let csv = exporter::full_export(&ledger);
    let path = output.map(PathBuf::from).unwrap_or_else(|| default_path("full"));
    write_csv(&csv, &path)
}

pub fn customer(
    customer: &str,
    from_date: Option<String>,
    to_date: Option<String>,
    output: Option<String>,
) -> Result<()> {
    let ledger = store::load_or_seed(&get_data_dir())?;
    let cust_id = resolve_customer_id(&ledger, customer)?;
    let report = reports::get_customer_report(
        &ledger,
        &cust_id,
        from_date.as_deref(),
        to_date.as_deref(),
    );
    let csv = exporter::customer_report_csv(&ledger, &report);
    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_path(&format!("customer-{cust_id}")));
    write_csv(&csv, &path)
}

pub fn date(date: &str, output: Option<String>) -> Result<()> {
    let ledger = store::load_or_seed(&get_data_dir())?;
    let report = reports::get_date_report(&ledger, date);
    let csv = exporter::date_report_csv(&ledger, &report);
    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_path(&format!("date-{date}")));
    write_csv(&csv, &path)
}

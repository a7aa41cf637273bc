use chrono::{Datelike, Local};

use crate::error::Result;
use crate::ledger::Ledger;
use crate::models::TxnKind;
use crate::settings::get_data_dir;
use crate::store;

const PONDS: &[&str] = &["Hồ Câu Trung Hiếu", "Hồ Sen"];

const CUSTOMERS: &[&str] = &["Anh Bảy", "Chị Ba", "Chú Tư Cá Rô"];

/// (customer idx, pond idx, day of month, hours, price) — repeated for each
/// of the last three months.
const BOOKINGS: &[(usize, usize, u32, f64, f64)] = &[
    (0, 0, 3, 4.0, 200_000.0),
    (1, 0, 8, 2.0, 100_000.0),
    (2, 1, 12, 6.0, 350_000.0),
    (0, 1, 21, 3.0, 150_000.0),
];

/// (kind, day of month, description, amount)
const TXNS: &[(TxnKind, u32, &str, f64)] = &[
    (TxnKind::Expense, 2, "Thức ăn cá", 80_000.0),
    (TxnKind::Expense, 15, "Mồi câu", 45_000.0),
    (TxnKind::Sale, 18, "Bán cá", 120_000.0),
];

fn make_date(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

pub fn run() -> Result<()> {
    let data_dir = get_data_dir();
    let mut ledger = Ledger::default();

    let pond_ids: Vec<String> = PONDS
        .iter()
        .map(|name| ledger.add_pond(name).map(|p| p.id))
        .collect::<Result<_>>()?;
    let cust_ids: Vec<String> = CUSTOMERS
        .iter()
        .map(|name| ledger.add_customer(name).map(|c| c.id))
        .collect::<Result<_>>()?;

    let today = Local::now().date_naive();
    for months_ago in (0..3u32).rev() {
        let target = today - chrono::Months::new(months_ago);
        let (year, month) = (target.year(), target.month());
        // days 1..=21 are always valid, no month-length clamping needed
        for &(cust, pond, day, hours, price) in BOOKINGS {
            ledger.add_booking(
                &pond_ids[pond],
                &cust_ids[cust],
                &make_date(year, month, day),
                hours,
                price,
            )?;
        }
        for &(kind, day, desc, amount) in TXNS {
            ledger.add_txn(kind, &make_date(year, month, day), desc, amount)?;
        }
    }

    store::save(&data_dir, &ledger)?;
    println!(
        "Loaded demo data: {} ponds, {} customers, {} bookings, {} transactions.",
        ledger.ponds.len(),
        ledger.customers.len(),
        ledger.bookings.len(),
        ledger.txns.len()
    );
    println!("Try `minnow dashboard` or `minnow report date {}`.", make_date(today.year(), today.month(), 3));
    Ok(())
}

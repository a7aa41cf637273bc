use std::collections::BTreeMap;

use crate::ledger::Ledger;
use crate::models::{Booking, Transaction, TxnKind};

// ---------------------------------------------------------------------------
// Dashboard totals
// ---------------------------------------------------------------------------

pub struct Dashboard {
    pub total_sales: f64,
    pub total_expenses: f64,
    pub profit: f64,
}

/// All-time sale and expense totals. Bookings are not consulted: the
/// transaction ledger is its own source of truth.
pub fn get_dashboard(ledger: &Ledger) -> Dashboard {
    let total_sales: f64 = ledger
        .txns
        .iter()
        .filter(|t| t.kind == TxnKind::Sale)
        .map(|t| t.amount)
        .sum();
    let total_expenses: f64 = ledger
        .txns
        .iter()
        .filter(|t| t.kind == TxnKind::Expense)
        .map(|t| t.amount)
        .sum();
    Dashboard {
        total_sales,
        total_expenses,
        profit: total_sales - total_expenses,
    }
}

// ---------------------------------------------------------------------------
// Monthly revenue series
// ---------------------------------------------------------------------------

pub struct MonthRevenue {
    pub month: String,
    pub total: f64,
}

/// Sale amounts grouped by year-month (first 7 chars of the date), months
/// sorted ascending. Months without sales are omitted, not zero-filled.
pub fn get_monthly_revenue(ledger: &Ledger) -> Vec<MonthRevenue> {
    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
    for t in ledger.txns.iter().filter(|t| t.kind == TxnKind::Sale) {
        if let Some(month) = t.date.get(..7) {
            *by_month.entry(month.to_string()).or_insert(0.0) += t.amount;
        }
    }
    by_month
        .into_iter()
        .map(|(month, total)| MonthRevenue { month, total })
        .collect()
}

// ---------------------------------------------------------------------------
// Customer report
// ---------------------------------------------------------------------------

pub struct CustomerReport {
    pub cust_id: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub rows: Vec<Booking>,
    pub total: f64,
}

/// That customer's bookings inside `[start, end]` (both bounds optional and
/// inclusive), sorted ascending by date, plus the price total. Bound checks
/// are lexicographic, which is sound for zero-padded ISO dates.
pub fn get_customer_report(
    ledger: &Ledger,
    cust_id: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> CustomerReport {
    let mut rows: Vec<Booking> = ledger
        .bookings
        .iter()
        .filter(|b| b.cust_id == cust_id)
        .filter(|b| start.map_or(true, |s| b.date.as_str() >= s))
        .filter(|b| end.map_or(true, |e| b.date.as_str() <= e))
        .cloned()
        .collect();
    rows.sort_by(|a, b| a.date.cmp(&b.date));
    let total = rows.iter().map(|r| r.price).sum();
    CustomerReport {
        cust_id: cust_id.to_string(),
        start: start.map(str::to_string),
        end: end.map(str::to_string),
        rows,
        total,
    }
}

// ---------------------------------------------------------------------------
// Date report
// ---------------------------------------------------------------------------

pub struct DateReport {
    pub date: String,
    pub bookings: Vec<Booking>,
    pub txns: Vec<Transaction>,
    /// Sum of booking prices on the date.
    pub from_bookings: f64,
    /// Sum of sale transaction amounts on the date.
    pub txn_sales: f64,
    /// Sum of expense transaction amounts on the date.
    pub expenses: f64,
}

/// One day, two independent ledgers: bookings and transactions are filtered
/// separately and their totals are never reconciled against each other.
pub fn get_date_report(ledger: &Ledger, date: &str) -> DateReport {
    let bookings: Vec<Booking> = ledger
        .bookings
        .iter()
        .filter(|b| b.date == date)
        .cloned()
        .collect();
    let txns: Vec<Transaction> = ledger
        .txns
        .iter()
        .filter(|t| t.date == date)
        .cloned()
        .collect();

    let from_bookings = bookings.iter().map(|b| b.price).sum();
    let txn_sales = txns
        .iter()
        .filter(|t| t.kind == TxnKind::Sale)
        .map(|t| t.amount)
        .sum();
    let expenses = txns
        .iter()
        .filter(|t| t.kind == TxnKind::Expense)
        .map(|t| t.amount)
        .sum();

    DateReport {
        date: date.to_string(),
        bookings,
        txns,
        from_bookings,
        txn_sales,
        expenses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_ledger() -> Ledger {
        let mut ledger = Ledger::default();
        let pond = ledger.add_pond("Hồ 1").unwrap();
        let cust = ledger.add_customer("Anh Bảy").unwrap();
        let other = ledger.add_customer("Chị Ba").unwrap();
        // bookings deliberately out of date order
        ledger
            .add_booking(&pond.id, &cust.id, "2024-01-20", 2.0, 50.0)
            .unwrap();
        ledger
            .add_booking(&pond.id, &cust.id, "2024-01-05", 4.0, 100.0)
            .unwrap();
        ledger
            .add_booking(&pond.id, &other.id, "2024-02-01", 1.0, 30.0)
            .unwrap();
        ledger
    }

    #[test]
    fn test_monthly_revenue_sparse_and_sorted() {
        let mut ledger = Ledger::default();
        ledger.add_txn(TxnKind::Sale, "2024-01-05", "a", 100.0).unwrap();
        ledger.add_txn(TxnKind::Sale, "2024-01-20", "b", 50.0).unwrap();
        ledger.add_txn(TxnKind::Sale, "2024-02-01", "c", 30.0).unwrap();
        ledger.add_txn(TxnKind::Expense, "2024-03-01", "d", 999.0).unwrap();

        let series = get_monthly_revenue(&ledger);
        let months: Vec<&str> = series.iter().map(|m| m.month.as_str()).collect();
        let values: Vec<f64> = series.iter().map(|m| m.total).collect();
        assert_eq!(months, vec!["2024-01", "2024-02"]);
        assert_eq!(values, vec![150.0, 30.0]);
    }

    #[test]
    fn test_monthly_revenue_empty() {
        assert!(get_monthly_revenue(&Ledger::default()).is_empty());
    }

    #[test]
    fn test_customer_report_unbounded_sorted_ascending() {
        let ledger = seed_ledger();
        let cust_id = ledger.customers[0].id.clone();
        let report = get_customer_report(&ledger, &cust_id, None, None);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].date, "2024-01-05");
        assert_eq!(report.rows[1].date, "2024-01-20");
        assert_eq!(report.total, 150.0);
    }

    #[test]
    fn test_customer_report_bounds_inclusive() {
        let ledger = seed_ledger();
        let cust_id = ledger.customers[0].id.clone();
        let report =
            get_customer_report(&ledger, &cust_id, Some("2024-01-05"), Some("2024-01-05"));
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.total, 100.0);

        let report = get_customer_report(&ledger, &cust_id, Some("2024-01-06"), None);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].date, "2024-01-20");

        let report = get_customer_report(&ledger, &cust_id, None, Some("2024-01-19"));
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].date, "2024-01-05");
    }

    #[test]
    fn test_customer_report_unknown_customer_is_empty() {
        let ledger = seed_ledger();
        let report = get_customer_report(&ledger, "ghost", None, None);
        assert!(report.rows.is_empty());
        assert_eq!(report.total, 0.0);
    }

    #[test]
    fn test_date_report_three_independent_totals() {
        let mut ledger = Ledger::default();
        // priced bookings auto-record sales, so build bookings without price
        // interference: two bookings plus hand-entered txns on the same day
        ledger.add_booking("p1", "c1", "2024-05-01", 2.0, 0.0).unwrap();
        ledger.add_booking("p1", "c2", "2024-05-01", 3.0, 0.0).unwrap();
        ledger.bookings[0].price = 100.0;
        ledger.bookings[1].price = 200.0;
        ledger.add_txn(TxnKind::Sale, "2024-05-01", "bán cá", 50.0).unwrap();
        ledger.add_txn(TxnKind::Expense, "2024-05-01", "mồi câu", 20.0).unwrap();
        ledger.add_txn(TxnKind::Sale, "2024-05-02", "khác ngày", 999.0).unwrap();

        let report = get_date_report(&ledger, "2024-05-01");
        assert_eq!(report.bookings.len(), 2);
        assert_eq!(report.txns.len(), 2);
        assert_eq!(report.from_bookings, 300.0);
        assert_eq!(report.txn_sales, 50.0);
        assert_eq!(report.expenses, 20.0);
    }

    #[test]
    fn test_date_report_empty_day() {
        let ledger = seed_ledger();
        let report = get_date_report(&ledger, "1999-01-01");
        assert!(report.bookings.is_empty());
        assert!(report.txns.is_empty());
        assert_eq!(report.from_bookings, 0.0);
        assert_eq!(report.txn_sales, 0.0);
        assert_eq!(report.expenses, 0.0);
    }

    #[test]
    fn test_dashboard_totals_and_idempotence() {
        let mut ledger = Ledger::default();
        ledger.add_txn(TxnKind::Sale, "2024-01-01", "a", 500.0).unwrap();
        ledger.add_txn(TxnKind::Sale, "2024-06-01", "b", 250.0).unwrap();
        ledger.add_txn(TxnKind::Expense, "2024-03-01", "c", 100.0).unwrap();

        let first = get_dashboard(&ledger);
        assert_eq!(first.total_sales, 750.0);
        assert_eq!(first.total_expenses, 100.0);
        assert_eq!(first.profit, 650.0);

        let second = get_dashboard(&ledger);
        assert_eq!(second.total_sales, first.total_sales);
        assert_eq!(second.total_expenses, first.total_expenses);
        assert_eq!(second.profit, first.profit);
    }

    #[test]
    fn test_dashboard_empty_ledger_is_zero() {
        let d = get_dashboard(&Ledger::default());
        assert_eq!(d.total_sales, 0.0);
        assert_eq!(d.total_expenses, 0.0);
        assert_eq!(d.profit, 0.0);
    }
}

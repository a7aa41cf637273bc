//! CSV renderers. The layouts (section markers, Vietnamese headers, trailing
//! total rows) are the legacy on-disk contract and are reproduced verbatim so
//! existing spreadsheets and the importer keep working.

use crate::ledger::Ledger;
use crate::reports::{CustomerReport, DateReport};

/// Free-text fields are always double-quoted with embedded quotes doubled;
/// ids, dates and numbers are written raw.
fn quote(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    format!("\"{}\"", s.replace('"', "\"\""))
}

// ---------------------------------------------------------------------------
// Full document export: four `#`-marked sections
// ---------------------------------------------------------------------------

pub fn full_export(ledger: &Ledger) -> String {
    let mut out = String::new();

    out.push_str("# PONDS\n");
    out.push_str("id,name\n");
    for p in &ledger.ponds {
        out.push_str(&format!("{},{}\n", p.id, quote(&p.name)));
    }

    out.push_str("\n# CUSTOMERS\n");
    out.push_str("id,name\n");
    for c in &ledger.customers {
        out.push_str(&format!("{},{}\n", c.id, quote(&c.name)));
    }

    out.push_str("\n# BOOKINGS\n");
    out.push_str("id,pondId,custId,date,hours,price\n");
    for b in &ledger.bookings {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            b.id, b.pond_id, b.cust_id, b.date, b.hours, b.price
        ));
    }

    out.push_str("\n# TXNS\n");
    out.push_str("id,type,date,desc,amount\n");
    for t in &ledger.txns {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            t.id,
            t.kind,
            t.date,
            quote(&t.desc),
            t.amount
        ));
    }

    out
}

// ---------------------------------------------------------------------------
// Customer report export
// ---------------------------------------------------------------------------

pub fn customer_report_csv(ledger: &Ledger, report: &CustomerReport) -> String {
    let mut out = String::new();
    out.push_str("Báo cáo doanh thu theo khách\n");
    out.push_str(&format!("Khách: {}\n", ledger.customer_name(&report.cust_id)));
    out.push_str(&format!("Từ: {}\n", report.start.as_deref().unwrap_or("")));
    out.push_str(&format!("Đến: {}\n", report.end.as_deref().unwrap_or("")));
    out.push('\n');
    out.push_str("Ngày,Hồ,Giờ,Giá\n");
    for r in &report.rows {
        out.push_str(&format!(
            "{},{},{},{}\n",
            r.date,
            quote(ledger.pond_name(&r.pond_id)),
            r.hours,
            r.price
        ));
    }
    out.push_str(&format!("\nTổng, , ,{}\n", report.total));
    out
}

// ---------------------------------------------------------------------------
// Date report export
// ---------------------------------------------------------------------------

pub fn date_report_csv(ledger: &Ledger, report: &DateReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Báo cáo ngày,{}\n", report.date));
    out.push_str("\nBooking\n");
    out.push_str("Ngày,Khách,Hồ,Giờ,Giá\n");
    for b in &report.bookings {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            report.date,
            quote(ledger.customer_name(&b.cust_id)),
            quote(ledger.pond_name(&b.pond_id)),
            b.hours,
            b.price
        ));
    }
    out.push_str("\nGiao dich\n");
    out.push_str("Loại,Mô tả,Số tiền\n");
    for t in &report.txns {
        out.push_str(&format!("{},{},{}\n", t.kind, quote(&t.desc), t.amount));
    }
    out.push_str(&format!("\nTổng booking, ,{}\n", report.from_bookings));
    out.push_str(&format!("Tổng txn (sale), ,{}\n", report.txn_sales));
    out.push_str(&format!("Tổng chi phí, ,{}\n", report.expenses));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TxnKind;
    use crate::reports::{get_customer_report, get_date_report};

    fn seed_ledger() -> Ledger {
        let mut ledger = Ledger::default();
        let pond = ledger.add_pond("Hồ \"Lớn\", phía Bắc").unwrap();
        let cust = ledger.add_customer("Anh Bảy").unwrap();
        ledger
            .add_booking(&pond.id, &cust.id, "2024-01-05", 2.5, 100.0)
            .unwrap();
        ledger
            .add_txn(TxnKind::Expense, "2024-01-05", "mồi câu", 20.0)
            .unwrap();
        ledger
    }

    #[test]
    fn test_full_export_sections_and_headers() {
        let ledger = seed_ledger();
        let csv = full_export(&ledger);
        assert!(csv.starts_with("# PONDS\nid,name\n"));
        assert!(csv.contains("\n# CUSTOMERS\nid,name\n"));
        assert!(csv.contains("\n# BOOKINGS\nid,pondId,custId,date,hours,price\n"));
        assert!(csv.contains("\n# TXNS\nid,type,date,desc,amount\n"));
        // embedded quote doubled, field quoted
        assert!(csv.contains("\"Hồ \"\"Lớn\"\", phía Bắc\""));
        // booking row carries raw numbers
        assert!(csv.contains(",2024-01-05,2.5,100\n"));
    }

    #[test]
    fn test_full_export_empty_ledger_keeps_structure() {
        let csv = full_export(&Ledger::default());
        assert_eq!(
            csv,
            "# PONDS\nid,name\n\n# CUSTOMERS\nid,name\n\n# BOOKINGS\nid,pondId,custId,date,hours,price\n\n# TXNS\nid,type,date,desc,amount\n"
        );
    }

    #[test]
    fn test_customer_report_csv_layout() {
        let ledger = seed_ledger();
        let cust_id = ledger.customers[0].id.clone();
        let report = get_customer_report(&ledger, &cust_id, Some("2024-01-01"), None);
        let csv = customer_report_csv(&ledger, &report);
        assert!(csv.starts_with("Báo cáo doanh thu theo khách\nKhách: Anh Bảy\nTừ: 2024-01-01\nĐến: \n"));
        assert!(csv.contains("Ngày,Hồ,Giờ,Giá\n"));
        assert!(csv.contains("2024-01-05,"));
        assert!(csv.ends_with("\nTổng, , ,100\n"));
    }

    #[test]
    fn test_date_report_csv_layout() {
        let ledger = seed_ledger();
        let report = get_date_report(&ledger, "2024-01-05");
        let csv = date_report_csv(&ledger, &report);
        assert!(csv.starts_with("Báo cáo ngày,2024-01-05\n"));
        assert!(csv.contains("\nBooking\nNgày,Khách,Hồ,Giờ,Giá\n"));
        assert!(csv.contains("\nGiao dich\nLoại,Mô tả,Số tiền\n"));
        // the booking's companion sale plus the hand-entered expense
        assert!(csv.contains("sale,"));
        assert!(csv.contains("expense,\"mồi câu\",20\n"));
        assert!(csv.contains("\nTổng booking, ,100\n"));
        assert!(csv.contains("Tổng txn (sale), ,100\n"));
        assert!(csv.ends_with("Tổng chi phí, ,20\n"));
    }

    #[test]
    fn test_customer_report_csv_placeholder_for_deleted_pond() {
        let mut ledger = seed_ledger();
        let pond_id = ledger.ponds[0].id.clone();
        let cust_id = ledger.customers[0].id.clone();
        ledger.delete_pond(&pond_id).unwrap();
        let report = get_customer_report(&ledger, &cust_id, None, None);
        let csv = customer_report_csv(&ledger, &report);
        assert!(csv.contains(",\"—\","));
    }
}

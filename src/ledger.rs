use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MinnowError, Result};
use crate::models::{Booking, Customer, Pond, Transaction, TxnKind};

/// Pond seeded on first run.
pub const DEFAULT_POND_NAME: &str = "Hồ Câu Trung Hiếu";

/// Label shown for a pond/customer id that no longer resolves.
pub const PLACEHOLDER: &str = "—";

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.iter().rev().map(|&b| b as char).collect()
}

/// Opaque record id: millisecond timestamp in base 36 plus a 5-char random
/// suffix. Unique enough in practice; callers still check their collection.
pub fn gen_id() -> String {
    let mut id = base36(chrono::Utc::now().timestamp_millis() as u64);
    let mut rng = rand::thread_rng();
    for _ in 0..5 {
        id.push(BASE36[rng.gen_range(0..36)] as char);
    }
    id
}

fn unique_id(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = gen_id();
        if !taken(&id) {
            return id;
        }
    }
}

/// Dates are stored as zero-padded ISO strings so that plain string
/// comparison orders them chronologically. Anything else is rejected.
pub(crate) fn validate_date(date: &str) -> Result<()> {
    let canonical = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string());
    if canonical.as_deref() == Ok(date) {
        Ok(())
    } else {
        Err(MinnowError::Validation(format!(
            "invalid date: {date} (expected YYYY-MM-DD)"
        )))
    }
}

pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// The whole persisted document: four insertion-ordered collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub ponds: Vec<Pond>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub txns: Vec<Transaction>,
}

impl Ledger {
    /// Fresh ledger with the single default pond, used on first run.
    pub fn seed() -> Self {
        let mut ledger = Self::default();
        ledger.ponds.push(Pond {
            id: gen_id(),
            name: DEFAULT_POND_NAME.to_string(),
        });
        ledger
    }

    pub fn is_empty(&self) -> bool {
        self.ponds.is_empty()
            && self.customers.is_empty()
            && self.bookings.is_empty()
            && self.txns.is_empty()
    }

    // -----------------------------------------------------------------------
    // Mutators
    // -----------------------------------------------------------------------

    pub fn add_pond(&mut self, name: &str) -> Result<Pond> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MinnowError::Validation("pond name is required".to_string()));
        }
        let pond = Pond {
            id: unique_id(|id| self.ponds.iter().any(|p| p.id == id)),
            name: name.to_string(),
        };
        self.ponds.push(pond.clone());
        Ok(pond)
    }

    pub fn add_customer(&mut self, name: &str) -> Result<Customer> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MinnowError::Validation("customer name is required".to_string()));
        }
        let customer = Customer {
            id: unique_id(|id| self.customers.iter().any(|c| c.id == id)),
            name: name.to_string(),
        };
        self.customers.push(customer.clone());
        Ok(customer)
    }

    /// Record a booking. A booking with price > 0 also appends a companion
    /// sale transaction whose description names the customer, pond and the
    /// booking itself. Negative hours/price are coerced to 0, not rejected.
    pub fn add_booking(
        &mut self,
        pond_id: &str,
        cust_id: &str,
        date: &str,
        hours: f64,
        price: f64,
    ) -> Result<Booking> {
        if pond_id.is_empty() || cust_id.is_empty() || date.is_empty() {
            return Err(MinnowError::Validation(
                "pond, customer and date are required".to_string(),
            ));
        }
        validate_date(date)?;
        let clamp = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let booking = Booking {
            id: unique_id(|id| self.bookings.iter().any(|b| b.id == id)),
            pond_id: pond_id.to_string(),
            cust_id: cust_id.to_string(),
            date: date.to_string(),
            hours: clamp(hours),
            price: clamp(price),
        };
        self.bookings.push(booking.clone());
        if booking.price > 0.0 {
            let txn = Transaction {
                id: unique_id(|id| self.txns.iter().any(|t| t.id == id)),
                kind: TxnKind::Sale,
                date: date.to_string(),
                desc: format!("Booking:{}:{}:{}", cust_id, pond_id, booking.id),
                amount: booking.price,
            };
            self.txns.push(txn);
        }
        Ok(booking)
    }

    /// Record a standalone sale/expense. Empty date defaults to today, empty
    /// description defaults per kind; the amount must be positive.
    pub fn add_txn(
        &mut self,
        kind: TxnKind,
        date: &str,
        desc: &str,
        amount: f64,
    ) -> Result<Transaction> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(MinnowError::Validation(
                "amount must be a positive number".to_string(),
            ));
        }
        let date = if date.is_empty() {
            today()
        } else {
            validate_date(date)?;
            date.to_string()
        };
        let desc = desc.trim();
        let desc = if desc.is_empty() {
            kind.default_desc().to_string()
        } else {
            desc.to_string()
        };
        let txn = Transaction {
            id: unique_id(|id| self.txns.iter().any(|t| t.id == id)),
            kind,
            date,
            desc,
            amount,
        };
        self.txns.push(txn.clone());
        Ok(txn)
    }

    // Deletion never cascades: bookings keep their pond/customer ids and the
    // companion sale of a deleted booking stays in the transaction ledger.

    pub fn delete_pond(&mut self, id: &str) -> Result<()> {
        let before = self.ponds.len();
        self.ponds.retain(|p| p.id != id);
        if self.ponds.len() == before {
            return Err(MinnowError::NotFound(format!("pond {id}")));
        }
        Ok(())
    }

    pub fn delete_customer(&mut self, id: &str) -> Result<()> {
        let before = self.customers.len();
        self.customers.retain(|c| c.id != id);
        if self.customers.len() == before {
            return Err(MinnowError::NotFound(format!("customer {id}")));
        }
        Ok(())
    }

    pub fn delete_booking(&mut self, id: &str) -> Result<()> {
        let before = self.bookings.len();
        self.bookings.retain(|b| b.id != id);
        if self.bookings.len() == before {
            return Err(MinnowError::NotFound(format!("booking {id}")));
        }
        Ok(())
    }

    pub fn delete_txn(&mut self, id: &str) -> Result<()> {
        let before = self.txns.len();
        self.txns.retain(|t| t.id != id);
        if self.txns.len() == before {
            return Err(MinnowError::NotFound(format!("transaction {id}")));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    pub fn pond_name(&self, id: &str) -> &str {
        self.ponds
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
            .unwrap_or(PLACEHOLDER)
    }

    pub fn customer_name(&self, id: &str) -> &str {
        self.customers
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or(PLACEHOLDER)
    }

    /// Resolve a CLI argument to a pond: exact id first, then unique name.
    pub fn find_pond(&self, key: &str) -> Result<&Pond> {
        if let Some(p) = self.ponds.iter().find(|p| p.id == key) {
            return Ok(p);
        }
        let mut by_name = self.ponds.iter().filter(|p| p.name == key);
        match (by_name.next(), by_name.next()) {
            (Some(p), None) => Ok(p),
            (Some(_), Some(_)) => Err(MinnowError::Validation(format!(
                "pond name '{key}' is ambiguous, use the id"
            ))),
            _ => Err(MinnowError::UnknownPond(key.to_string())),
        }
    }

    /// Resolve a CLI argument to a customer: exact id first, then unique name.
    pub fn find_customer(&self, key: &str) -> Result<&Customer> {
        if let Some(c) = self.customers.iter().find(|c| c.id == key) {
            return Ok(c);
        }
        let mut by_name = self.customers.iter().filter(|c| c.name == key);
        match (by_name.next(), by_name.next()) {
            (Some(c), None) => Ok(c),
            (Some(_), Some(_)) => Err(MinnowError::Validation(format!(
                "customer name '{key}' is ambiguous, use the id"
            ))),
            _ => Err(MinnowError::UnknownCustomer(key.to_string())),
        }
    }
}

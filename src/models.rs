use serde::{Deserialize, Serialize};

use crate::error::MinnowError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pond {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

/// A reservation of a pond by a customer. `pond_id`/`cust_id` may dangle
/// after the referenced record is deleted — history is kept on purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(rename = "pondId")]
    pub pond_id: String,
    #[serde(rename = "custId")]
    pub cust_id: String,
    pub date: String,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnKind {
    Sale,
    Expense,
}

impl TxnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Expense => "expense",
        }
    }

    /// Fallback description used when the user leaves it blank.
    pub fn default_desc(&self) -> &'static str {
        match self {
            Self::Sale => "Doanh thu",
            Self::Expense => "Chi phí",
        }
    }
}

impl std::fmt::Display for TxnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TxnKind {
    type Err = MinnowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(Self::Sale),
            "expense" => Ok(Self::Expense),
            other => Err(MinnowError::Validation(format!(
                "unknown transaction kind: {other} (expected sale or expense)"
            ))),
        }
    }
}

/// A standalone ledger entry. Not structurally tied to a booking; a priced
/// booking records a companion sale whose description names the booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TxnKind,
    pub date: String,
    pub desc: String,
    pub amount: f64,
}

pub mod backup;
pub mod bookings;
pub mod customers;
pub mod dashboard;
pub mod demo;
pub mod export;
pub mod import;
pub mod init;
pub mod ponds;
pub mod report;
pub mod reset;
pub mod status;
pub mod txns;

use clap::{Parser, Subcommand};

use crate::models::TxnKind;

#[derive(Parser)]
#[command(name = "minnow", about = "Pond-rental bookkeeping CLI for a small fishing business.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up minnow: choose a data directory and seed the ledger.
    Init {
        /// Path for minnow data (default: ~/Documents/minnow)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Manage ponds.
    Ponds {
        #[command(subcommand)]
        command: PondsCommands,
    },
    /// Manage customers.
    Customers {
        #[command(subcommand)]
        command: CustomersCommands,
    },
    /// Manage bookings.
    Bookings {
        #[command(subcommand)]
        command: BookingsCommands,
    },
    /// Manage sale/expense transactions.
    Txns {
        #[command(subcommand)]
        command: TxnsCommands,
    },
    /// All-time totals and the monthly revenue series.
    Dashboard,
    /// Generate reports.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Export the ledger or a report to CSV.
    Export {
        #[command(subcommand)]
        command: ExportCommands,
    },
    /// Restore a ledger from a full CSV export.
    Import {
        /// Path to a file written by `minnow export all`
        file: String,
        /// Overwrite existing records
        #[arg(long)]
        replace: bool,
    },
    /// Load sample data to explore minnow.
    Demo,
    /// Show current data file and record counts.
    Status,
    /// Back up the data file.
    Backup {
        /// Output path (default: <data_dir>/backups/minnow-YYYYMMDD-HHMMSS.json)
        #[arg(long)]
        output: Option<String>,
    },
    /// Delete all data and start over.
    Reset {
        /// Skip the safety check
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum PondsCommands {
    /// Add a new pond.
    Add {
        /// Pond name, e.g. 'Hồ số 2'
        name: String,
    },
    /// List all ponds.
    List,
    /// Delete a pond by id. Bookings that reference it are kept.
    Delete {
        /// Pond id (shown in `minnow ponds list`)
        id: String,
    },
}

#[derive(Subcommand)]
pub enum CustomersCommands {
    /// Add a new customer.
    Add {
        /// Customer name
        name: String,
    },
    /// List all customers.
    List,
    /// Delete a customer by id. Bookings that reference them are kept.
    Delete {
        /// Customer id (shown in `minnow customers list`)
        id: String,
    },
}

#[derive(Subcommand)]
pub enum BookingsCommands {
    /// Record a booking. A priced booking also records a sale transaction.
    Add {
        /// Pond name or id
        #[arg(long)]
        pond: String,
        /// Customer name or id
        #[arg(long)]
        customer: String,
        /// Date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Hours booked
        #[arg(long, default_value = "0")]
        hours: f64,
        /// Price in VND
        #[arg(long, default_value = "0")]
        price: f64,
    },
    /// List all bookings.
    List,
    /// Delete a booking by id. Its companion sale, if any, is kept.
    Delete {
        /// Booking id (shown in `minnow bookings list`)
        id: String,
    },
}

#[derive(Subcommand)]
pub enum TxnsCommands {
    /// Record a sale or expense.
    Add {
        /// sale or expense
        #[arg(long)]
        kind: TxnKind,
        /// Date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Description (defaults per kind)
        #[arg(long)]
        desc: Option<String>,
        /// Amount in VND, must be positive
        #[arg(long)]
        amount: f64,
    },
    /// List all transactions.
    List,
    /// Delete a transaction by id.
    Delete {
        /// Transaction id (shown in `minnow txns list`)
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Booking revenue for one customer, optionally date-bounded.
    Customer {
        /// Customer name or id (deleted ids are allowed, for history)
        customer: String,
        /// Start date: YYYY-MM-DD (inclusive)
        #[arg(long = "from")]
        from_date: Option<String>,
        /// End date: YYYY-MM-DD (inclusive)
        #[arg(long = "to")]
        to_date: Option<String>,
    },
    /// Bookings and transactions for a single day.
    Date {
        /// Date: YYYY-MM-DD
        date: String,
    },
}

#[derive(Subcommand)]
pub enum ExportCommands {
    /// Full four-section data export (ponds, customers, bookings, txns).
    All {
        /// Output file path
        #[arg(long)]
        output: Option<String>,
    },
    /// Customer revenue report as CSV.
    Customer {
        /// Customer name or id
        customer: String,
        #[arg(long = "from")]
        from_date: Option<String>,
        #[arg(long = "to")]
        to_date: Option<String>,
        /// Output file path
        #[arg(long)]
        output: Option<String>,
    },
    /// Single-day report as CSV.
    Date {
        /// Date: YYYY-MM-DD
        date: String,
        /// Output file path
        #[arg(long)]
        output: Option<String>,
    },
}

mod cli;
mod error;
mod exporter;
mod fmt;
mod importer;
mod ledger;
mod models;
mod reports;
mod settings;
mod store;

use clap::Parser;

use cli::{
    BookingsCommands, Cli, Commands, CustomersCommands, ExportCommands, PondsCommands,
    ReportCommands, TxnsCommands,
};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Ponds { command } => match command {
            PondsCommands::Add { name } => cli::ponds::add(&name),
            PondsCommands::List => cli::ponds::list(),
            PondsCommands::Delete { id } => cli::ponds::delete(&id),
        },
        Commands::Customers { command } => match command {
            CustomersCommands::Add { name } => cli::customers::add(&name),
            CustomersCommands::List => cli::customers::list(),
            CustomersCommands::Delete { id } => cli::customers::delete(&id),
        },
        Commands::Bookings { command } => match command {
            BookingsCommands::Add {
                pond,
                customer,
                date,
                hours,
                price,
            } => cli::bookings::add(&pond, &customer, date, hours, price),
            BookingsCommands::List => cli::bookings::list(),
            BookingsCommands::Delete { id } => cli::bookings::delete(&id),
        },
        Commands::Txns { command } => match command {
            TxnsCommands::Add {
                kind,
                date,
                desc,
                amount,
            } => cli::txns::add(kind, date, desc, amount),
            TxnsCommands::List => cli::txns::list(),
            TxnsCommands::Delete { id } => cli::txns::delete(&id),
        },
        Commands::Dashboard => cli::dashboard::run(),
        Commands::Report { command } => match command {
            ReportCommands::Customer {
                customer,
                from_date,
                to_date,
            } => cli::report::customer(&customer, from_date, to_date),
            ReportCommands::Date { date } => cli::report::date(&date),
        },
        Commands::Export { command } => match command {
            ExportCommands::All { output } => cli::export::all(output),
            ExportCommands::Customer {
                customer,
                from_date,
                to_date,
                output,
            } => cli::export::customer(&customer, from_date, to_date, output),
            ExportCommands::Date { date, output } => cli::export::date(&date, output),
        },
        Commands::Import { file, replace } => cli::import::run(&file, replace),
        Commands::Demo => cli::demo::run(),
        Commands::Status => cli::status::run(),
        Commands::Backup { output } => cli::backup::run(output),
        Commands::Reset { force } => cli::reset::run(force),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

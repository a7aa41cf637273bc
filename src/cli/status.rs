use crate::error::Result;
use crate::fmt::format_bytes;
use crate::settings::get_data_dir;
use crate::store;

pub fn run() -> Result<()> {
    let data_dir = get_data_dir();
    let data_file = store::data_file(&data_dir);

    println!("Data dir:   {}", data_dir.display());
    println!("Data file:  {}", data_file.display());

    if !data_file.exists() {
        println!();
        println!("Data file not found. Run `minnow init` to set up.");
        return Ok(());
    }

    let size = std::fs::metadata(&data_file)?.len();
    println!("File size:  {}", format_bytes(size));

    let ledger = store::load_or_seed(&data_dir)?;
    println!();
    println!("Ponds:         {}", ledger.ponds.len());
    println!("Customers:     {}", ledger.customers.len());
    println!("Bookings:      {}", ledger.bookings.len());
    println!("Transactions:  {}", ledger.txns.len());
    Ok(())
}

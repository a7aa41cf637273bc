use crate::error::{MinnowError, Result};
use crate::settings::get_data_dir;
use crate::store;

pub fn run(force: bool) -> Result<()> {
    if !force {
        return Err(MinnowError::Other(
            "this deletes all ponds, customers, bookings and transactions; pass --force to confirm"
                .to_string(),
        ));
    }
    let data_file = store::data_file(&get_data_dir());
    if data_file.exists() {
        std::fs::remove_file(&data_file)?;
    }
    println!("All data deleted. The next command starts from a fresh ledger.");
    Ok(())
}

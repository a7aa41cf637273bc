use std::path::PathBuf;

use crate::error::{MinnowError, Result};
use crate::fmt::format_bytes;
use crate::settings::get_data_dir;
use crate::store;

pub fn run(output: Option<String>) -> Result<()> {
    let data_dir = get_data_dir();
    let data_file = store::data_file(&data_dir);
    if !data_file.exists() {
        return Err(MinnowError::Persistence(format!(
            "nothing to back up: {} does not exist",
            data_file.display()
        )));
    }

    let dest_path = match output {
        Some(p) => PathBuf::from(p),
        None => {
            let backups_dir = data_dir.join("backups");
            std::fs::create_dir_all(&backups_dir)?;
            let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
            backups_dir.join(format!("minnow-{stamp}.json"))
        }
    };

    std::fs::copy(&data_file, &dest_path)?;
    let size = std::fs::metadata(&dest_path)?.len();
    println!("Backup saved to {}", dest_path.display());
    println!("Size: {}", format_bytes(size));
    Ok(())
}

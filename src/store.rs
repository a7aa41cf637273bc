use std::path::{Path, PathBuf};

use crate::error::{MinnowError, Result};
use crate::ledger::Ledger;

pub const DATA_FILE: &str = "minnow.json";

pub fn data_file(data_dir: &Path) -> PathBuf {
    data_dir.join(DATA_FILE)
}

/// Load the document, seeding a fresh ledger (single default pond) when none
/// exists yet. A present-but-malformed file is an error, not a silent reset:
/// continuing with an empty ledger would overwrite the user's data on the
/// next mutation.
pub fn load_or_seed(data_dir: &Path) -> Result<Ledger> {
    let path = data_file(data_dir);
    if path.exists() {
        read(&path)
    } else {
        let ledger = Ledger::seed();
        save(data_dir, &ledger)?;
        Ok(ledger)
    }
}

fn read(path: &Path) -> Result<Ledger> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| MinnowError::Persistence(format!("{}: {e}", path.display())))
}

/// Full-document overwrite; there is no partial write path.
pub fn save(data_dir: &Path, ledger: &Ledger) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let json = serde_json::to_string_pretty(ledger)
        .map_err(|e| MinnowError::Persistence(e.to_string()))?;
    std::fs::write(data_file(data_dir), format!("{json}\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::DEFAULT_POND_NAME;
    use crate::models::TxnKind;

    #[test]
    fn test_first_load_seeds_default_pond_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = load_or_seed(dir.path()).unwrap();
        assert_eq!(ledger.ponds.len(), 1);
        assert_eq!(ledger.ponds[0].name, DEFAULT_POND_NAME);
        assert!(data_file(dir.path()).exists());

        // second load reads the persisted seed, no re-seeding
        let again = load_or_seed(dir.path()).unwrap();
        assert_eq!(again, ledger);
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = load_or_seed(dir.path()).unwrap();
        let pond_id = ledger.ponds[0].id.clone();
        let cust = ledger.add_customer("Anh Bảy").unwrap();
        ledger
            .add_booking(&pond_id, &cust.id, "2024-01-05", 2.0, 100000.0)
            .unwrap();
        ledger
            .add_txn(TxnKind::Expense, "2024-01-06", "thức ăn cá", 50000.0)
            .unwrap();
        save(dir.path(), &ledger).unwrap();

        let reloaded = load_or_seed(dir.path()).unwrap();
        assert_eq!(reloaded, ledger);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(data_file(dir.path()), "{not json").unwrap();
        let err = load_or_seed(dir.path()).unwrap_err();
        assert!(matches!(err, MinnowError::Persistence(_)));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(data_file(dir.path()), r#"{"ponds": []}"#).unwrap();
        let ledger = load_or_seed(dir.path()).unwrap();
        assert!(ledger.is_empty());
    }
}

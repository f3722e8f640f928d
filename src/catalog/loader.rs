use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use super::seed::seed_items;
use super::types::{CatalogError, CatalogItem};

/// Serializes first-time seeding so concurrent first callers do not race
/// to create the schedule file.
static SEED_GUARD: Mutex<()> = Mutex::new(());

/// Load the schedule from `path`, writing the seed schedule first if the
/// file does not exist yet.
pub fn load_or_seed(path: &Path) -> Result<Vec<CatalogItem>, CatalogError> {
    {
        let _guard = SEED_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        if !path.exists() {
            tracing::info!(path = %path.display(), "MBS schedule missing, writing seed schedule");
            write_seed(path)?;
        }
    }
    read_items(path)
}

/// Read and parse a schedule file.
pub fn read_items(path: &Path) -> Result<Vec<CatalogItem>, CatalogError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| CatalogError::Io(path.display().to_string(), e.to_string()))?;
    let items: Vec<CatalogItem> = serde_json::from_str(&json)
        .map_err(|e| CatalogError::Parse(path.display().to_string(), e.to_string()))?;

    tracing::info!(count = items.len(), path = %path.display(), "Loaded MBS schedule");
    Ok(items)
}

/// Write the seed schedule atomically: temp file in the target directory,
/// then persist without clobbering a file another process created meanwhile.
fn write_seed(path: &Path) -> Result<(), CatalogError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .map_err(|e| CatalogError::Io(dir.display().to_string(), e.to_string()))?;

    let items = seed_items();
    let json = serde_json::to_string_pretty(&items)
        .map_err(|e| CatalogError::Serialization(e.to_string()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| CatalogError::Io(dir.display().to_string(), e.to_string()))?;
    tmp.write_all(json.as_bytes())
        .map_err(|e| CatalogError::Io(tmp.path().display().to_string(), e.to_string()))?;

    match tmp.persist_noclobber(path) {
        Ok(_) => {
            tracing::info!(count = items.len(), "Seed MBS schedule written");
            Ok(())
        }
        Err(_) if path.exists() => {
            tracing::debug!("Schedule appeared while seeding, keeping existing file");
            Ok(())
        }
        Err(e) => Err(CatalogError::Io(
            path.display().to_string(),
            e.error.to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_seeded_then_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mbs_codes").join("mbs_items.json");

        let items = load_or_seed(&path).unwrap();
        assert!(path.exists());
        assert_eq!(items, seed_items());
    }

    #[test]
    fn seeded_file_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mbs_items.json");

        let first = load_or_seed(&path).unwrap();
        let second = load_or_seed(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn existing_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mbs_items.json");
        std::fs::write(
            &path,
            r#"[{"item_number":"99","description":"Custom","duration":"Variable"}]"#,
        )
        .unwrap();

        let items = load_or_seed(&path).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].code, "99");
        assert!(items[0].requirements.is_empty());
    }

    #[test]
    fn record_without_duration_loads_unconstrained() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mbs_items.json");
        std::fs::write(
            &path,
            r#"[{"item_number":"23","description":"Level B"},
                {"item_number":"99","description":"Custom","duration":"Variable"}]"#,
        )
        .unwrap();

        let items = load_or_seed(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].code, "23");
        assert!(!items[0].duration_band.is_constrained());
        assert_eq!(items[0].duration_band.label(), "");
        assert_eq!(items[1].duration_band.label(), "Variable");
    }

    #[test]
    fn annotated_band_round_trips_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mbs_items.json");
        std::fs::write(
            &path,
            r#"[{"item_number":"23","duration":"6-20 minutes (standard)"}]"#,
        )
        .unwrap();

        let items = read_items(&path).unwrap();
        assert!(items[0].duration_band.contains(15));
        assert!(!items[0].duration_band.contains(30));
        let json = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(json["duration"], "6-20 minutes (standard)");
    }

    #[test]
    fn corrupted_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mbs_items.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_or_seed(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(..)));
    }

    #[test]
    fn concurrent_first_loads_agree() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mbs_items.json");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let path = path.clone();
                std::thread::spawn(move || load_or_seed(&path).unwrap().len())
            })
            .collect();

        for h in handles {
            assert_eq!(h.join().unwrap(), seed_items().len());
        }
    }
}

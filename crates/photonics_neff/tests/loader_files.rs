//! Integration tests for loading tables from a directory.

use photonics_neff::{NeffError, NeffTables, TableId};
use std::fs;
use std::path::{Path, PathBuf};

fn packaged_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn copy_packaged(dir: &Path) {
    for id in TableId::ALL {
        fs::copy(packaged_dir().join(id.file_name()), dir.join(id.file_name())).unwrap();
    }
}

#[test]
fn test_load_from_dir_matches_embedded() {
    let from_dir = NeffTables::load_from_dir(packaged_dir()).unwrap();
    let embedded = NeffTables::load_embedded().unwrap();
    for id in TableId::ALL {
        assert_eq!(from_dir.table(id), embedded.table(id));
    }
    assert_eq!(
        from_dir.lookup(TableId::Tm0, 0.47, 1.31),
        embedded.lookup(TableId::Tm0, 0.47, 1.31)
    );
}

#[test]
fn test_load_from_dir_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    copy_packaged(dir.path());
    fs::remove_file(dir.path().join(TableId::Te2.file_name())).unwrap();

    match NeffTables::load_from_dir(dir.path()).unwrap_err() {
        NeffError::FileFormat { file, .. } => assert!(file.ends_with(TableId::Te2.file_name())),
        other => panic!("Expected FileFormat error, got {:?}", other),
    }
}

#[test]
fn test_load_from_dir_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    copy_packaged(dir.path());
    fs::write(
        dir.path().join(TableId::Tm1.file_name()),
        "width_um\\wavelength_um,1.2,1.3\n0.24,1.5,oops\n",
    )
    .unwrap();

    match NeffTables::load_from_dir(dir.path()).unwrap_err() {
        NeffError::FileFormat { reason, .. } => assert!(reason.contains("'oops'"), "{}", reason),
        other => panic!("Expected FileFormat error, got {:?}", other),
    }
}

#[test]
fn test_load_from_dir_mode_grid_shape_mismatch() {
    // A well-formed TE1 file whose grid does not fit TE0's axes
    let dir = tempfile::tempdir().unwrap();
    copy_packaged(dir.path());
    fs::write(
        dir.path().join(TableId::Te1.file_name()),
        "width_um\\wavelength_um,1.2,1.7\n0.24,1.5,1.45\n0.70,2.4,2.2\n",
    )
    .unwrap();

    assert!(matches!(
        NeffTables::load_from_dir(dir.path()).unwrap_err(),
        NeffError::FileFormat { .. }
    ));
}

#[test]
fn test_load_from_empty_dir() {
    let dir = tempfile::tempdir().unwrap();
    assert!(NeffTables::load_from_dir(dir.path()).is_err());
}

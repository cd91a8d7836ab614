use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use ico::IconDir;
use image::GenericImageView;
use savemyeyes_icons::config::{ICNS_SOURCE, ICO_FILE_NAME, ICO_SIZES, PNG_MANIFEST};
use savemyeyes_icons::{ExportConfig, export_all};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("savemyeyes-icons-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn listing(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect()
}

#[test]
fn test_full_run_writes_every_artifact() {
    let dir = scratch_dir("full");
    let report = export_all(&ExportConfig::default().with_output_dir(&dir)).unwrap();
    assert_eq!(report.len(), 16);

    let mut expected: BTreeSet<String> = PNG_MANIFEST.iter().map(|e| e.file_name.to_string()).collect();
    expected.insert(ICO_FILE_NAME.to_string());
    expected.insert(ICNS_SOURCE.file_name.to_string());
    assert_eq!(listing(&dir), expected);

    for entry in PNG_MANIFEST.iter().chain(std::iter::once(&ICNS_SOURCE)) {
        let img = image::open(dir.join(entry.file_name)).unwrap();
        assert_eq!(
            (img.width(), img.height()),
            (entry.size, entry.size),
            "{} has wrong dimensions",
            entry.file_name
        );
    }

    let ico = IconDir::read(fs::File::open(dir.join(ICO_FILE_NAME)).unwrap()).unwrap();
    let sizes: Vec<u32> = ico.entries().iter().map(|e| e.width()).collect();
    assert_eq!(sizes, ICO_SIZES.to_vec());
    assert!(ico.entries().iter().all(|e| e.width() == e.height()));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = scratch_dir("rerun");
    let cfg = ExportConfig::default().with_output_dir(&dir);

    export_all(&cfg).unwrap();
    let first: Vec<(String, Vec<u8>)> = listing(&dir)
        .into_iter()
        .map(|name| {
            let bytes = fs::read(dir.join(&name)).unwrap();
            (name, bytes)
        })
        .collect();

    export_all(&cfg).unwrap();
    for (name, bytes) in first {
        assert_eq!(fs::read(dir.join(&name)).unwrap(), bytes, "{} changed between runs", name);
    }
    assert_eq!(listing(&dir).len(), 16);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_existing_files_are_overwritten() {
    let dir = scratch_dir("overwrite");
    fs::write(dir.join("32x32.png"), b"stale").unwrap();
    fs::write(dir.join(ICO_FILE_NAME), b"stale").unwrap();

    export_all(&ExportConfig::default().with_output_dir(&dir)).unwrap();

    let img = image::open(dir.join("32x32.png")).unwrap();
    assert_eq!(img.width(), 32);
    assert!(IconDir::read(fs::File::open(dir.join(ICO_FILE_NAME)).unwrap()).is_ok());

    let _ = fs::remove_dir_all(&dir);
}

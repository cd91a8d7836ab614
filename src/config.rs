use std::path::{Path, PathBuf};

use crate::models::ManifestEntry;

/// Icons land next to the crate manifest. The directory must already exist.
pub const OUTPUT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/icons");

// Standard sizes needed for the Tauri bundle
pub const PNG_MANIFEST: [ManifestEntry; 14] = [
    entry("32x32.png", 32),
    entry("128x128.png", 128),
    entry("128x128@2x.png", 256),
    entry("icon.png", 512),
    entry("Square30x30Logo.png", 30),
    entry("Square44x44Logo.png", 44),
    entry("Square71x71Logo.png", 71),
    entry("Square89x89Logo.png", 89),
    entry("Square107x107Logo.png", 107),
    entry("Square142x142Logo.png", 142),
    entry("Square150x150Logo.png", 150),
    entry("Square284x284Logo.png", 284),
    entry("Square310x310Logo.png", 310),
    entry("StoreLogo.png", 50),
];

pub const ICO_FILE_NAME: &str = "icon.ico";
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

// Source for a later .icns conversion; no .icns is written here.
pub const ICNS_SOURCE: ManifestEntry = entry("icon_512.png", 512);

const fn entry(file_name: &'static str, size: u32) -> ManifestEntry {
    ManifestEntry { file_name, size }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub pngs: Vec<ManifestEntry>,
    pub ico_file_name: &'static str,
    pub ico_sizes: Vec<u32>,
    pub icns_source: ManifestEntry,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            pngs: PNG_MANIFEST.to_vec(),
            ico_file_name: ICO_FILE_NAME,
            ico_sizes: ICO_SIZES.to_vec(),
            icns_source: ICNS_SOURCE,
        }
    }
}

impl ExportConfig {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

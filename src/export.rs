use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::{ImageFormat, RgbaImage};
use log::info;

use crate::config::ExportConfig;
use crate::error::{IconError, Result};
use crate::icon::generate_icon;
use crate::models::ExportReport;

/// Runs every export step against `cfg.output_dir`. Stops at the first failure;
/// files already written stay in place.
pub fn export_all(cfg: &ExportConfig) -> Result<ExportReport> {
    let mut report = write_pngs(cfg)?;
    report.extend(write_ico(cfg)?);
    report.extend(write_icns_source(cfg)?);
    info!("All icons generated successfully! ({} files in {})", report.len(), cfg.output_dir().display());
    Ok(report)
}

/// One single-resolution PNG per manifest entry, in manifest order.
pub fn write_pngs(cfg: &ExportConfig) -> Result<ExportReport> {
    let mut report = ExportReport::default();
    for entry in &cfg.pngs {
        let path = cfg.path_for(entry.file_name);
        save_png(&generate_icon(entry.size), &path)?;
        info!("Created {}", entry.file_name);
        report.push(path, vec![entry.size]);
    }
    Ok(report)
}

/// Windows icon embedding every size of `cfg.ico_sizes`.
pub fn write_ico(cfg: &ExportConfig) -> Result<ExportReport> {
    let path = cfg.path_for(cfg.ico_file_name);
    let dir = build_icon_dir(&cfg.ico_sizes).map_err(|e| IconError::io(&path, e))?;
    write_icon_dir(&dir, &path)?;
    info!("Created {} ({:?})", cfg.ico_file_name, cfg.ico_sizes);

    let mut report = ExportReport::default();
    report.push(path, cfg.ico_sizes.clone());
    Ok(report)
}

/// Plain PNG meant as input for an external .icns conversion.
pub fn write_icns_source(cfg: &ExportConfig) -> Result<ExportReport> {
    let entry = cfg.icns_source;
    let path = cfg.path_for(entry.file_name);
    save_png(&generate_icon(entry.size), &path)?;
    info!("Created {} (for ICNS conversion)", entry.file_name);

    let mut report = ExportReport::default();
    report.push(path, vec![entry.size]);
    Ok(report)
}

/// Rasterizes each size and adds it as its own directory entry, in the given order.
pub fn build_icon_dir(sizes: &[u32]) -> io::Result<IconDir> {
    let mut dir = IconDir::new(ResourceType::Icon);
    for &size in sizes {
        let image = IconImage::from_rgba_data(size, size, generate_icon(size).into_raw());
        dir.add_entry(IconDirEntry::encode(&image)?);
    }
    Ok(dir)
}

fn write_icon_dir(dir: &IconDir, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| IconError::io(path, e))?;
    let mut out = BufWriter::new(file);
    dir.write(&mut out).map_err(|e| IconError::io(path, e))?;
    out.flush().map_err(|e| IconError::io(path, e))
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::image(path, e))
}

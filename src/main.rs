use savemyeyes_icons::{ExportConfig, IconError, export_all, logger};

fn main() -> Result<(), IconError> {
    logger::init();
    export_all(&ExportConfig::default())?;
    Ok(())
}

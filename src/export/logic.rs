// src/export/logic.rs

use crate::core::ScheduleView;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        view: &ScheduleView,
        format: &ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Json => export_json(view, path),
            ExportFormat::Csv => export_csv(view, path),
        }
    }
}

// src/export/logic.rs

use crate::core::views::ViewLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{history_csv_rows, history_rows, map_csv_rows, map_markers};
use crate::export::{ExportFormat, ExportView};
use crate::ui::messages::warning;
use chrono::{FixedOffset, NaiveDate};
use std::path::Path;

/// What to export and where.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub view: ExportView,
    pub format: ExportFormat,
    pub file: String,
    pub employee: Option<String>,
    pub lookback_days: i64,
    /// Last day of the history window, or the map snapshot date.
    pub date: NaiveDate,
    pub force: bool,
}

/// High-level export logic. Returns the number of rows written.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(pool: &DbPool, offset: FixedOffset, req: &ExportRequest) -> AppResult<usize> {
        let path = Path::new(&req.file);

        // Argument errors come before any overwrite prompt.
        match req.view {
            ExportView::History => {
                let employee = req.employee.as_deref().ok_or_else(|| {
                    AppError::InvalidArgument("--employee is required for the history view".into())
                })?;
                ensure_writable(path, req.force)?;
                Self::export_history(pool, offset, req, employee, path)
            }
            ExportView::Map => {
                ensure_writable(path, req.force)?;
                Self::export_map(pool, offset, req, path)
            }
        }
    }

    fn export_history(
        pool: &DbPool,
        offset: FixedOffset,
        req: &ExportRequest,
        employee: &str,
        path: &Path,
    ) -> AppResult<usize> {
        let summaries = ViewLogic::history(pool, offset, employee, req.lookback_days, req.date)?;
        let rows = history_rows(&summaries, &offset);
        if rows.is_empty() {
            warning(format!("No events for '{}' in the selected window.", employee));
        }

        match req.format {
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Csv => export_csv(&history_csv_rows(&rows), path)?,
        }
        Ok(rows.len())
    }

    fn export_map(
        pool: &DbPool,
        offset: FixedOffset,
        req: &ExportRequest,
        path: &Path,
    ) -> AppResult<usize> {
        let clusters = ViewLogic::map(pool, offset, req.date)?;
        let markers = map_markers(&clusters, &offset);
        if markers.is_empty() {
            warning(format!("No events with valid coordinates on {}.", req.date));
        }

        match req.format {
            ExportFormat::Json => export_json(&markers, path)?,
            ExportFormat::Csv => export_csv(&map_csv_rows(&markers), path)?,
        }
        Ok(markers.len())
    }
}

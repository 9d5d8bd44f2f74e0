use chrono::{Datelike, Local};

use crate::client::ApiClient;
use crate::export::{ExportError, ReportTotals, export_file_name, report_csv, totals};
use crate::model::report::MonthlyReportRow;

use super::Notice;

pub const NO_DATA: &str = "No data available for selected period";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl ReportPeriod {
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }
}

/// A rendered CSV ready to be written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

#[derive(Debug)]
pub struct ReportsView {
    period: ReportPeriod,
    rows: Vec<MonthlyReportRow>,
}

impl Default for ReportsView {
    fn default() -> Self {
        Self::new(ReportPeriod::current())
    }
}

impl ReportsView {
    pub fn new(period: ReportPeriod) -> Self {
        Self {
            period,
            rows: Vec::new(),
        }
    }

    pub fn period(&self) -> ReportPeriod {
        self.period
    }

    pub fn set_year(&mut self, year: i32) {
        self.period.year = year;
    }

    pub fn set_month(&mut self, month: u32) {
        self.period.month = month;
    }

    pub fn rows(&self) -> &[MonthlyReportRow] {
        &self.rows
    }

    pub fn totals(&self) -> ReportTotals {
        totals(&self.rows)
    }

    pub fn can_export(&self) -> bool {
        !self.rows.is_empty()
    }

    pub async fn load(&mut self, api: &ApiClient) -> Result<(), Notice> {
        let ReportPeriod { year, month } = self.period;
        match api.monthly_report(year, month).await {
            Ok(rows) => {
                self.rows = rows;
                Ok(())
            }
            Err(e) => Err(Notice::from_client_error(&e, "Failed to load report")),
        }
    }

    /// CSV of the rows on screen. `Ok(None)` while there is nothing to export.
    pub fn export(&self) -> Result<Option<CsvExport>, ExportError> {
        if !self.can_export() {
            return Ok(None);
        }

        let ReportPeriod { year, month } = self.period;
        let Some(file_name) = export_file_name(year, month) else {
            return Ok(None);
        };

        Ok(Some(CsvExport {
            file_name,
            content: report_csv(&self.rows)?,
        }))
    }
}

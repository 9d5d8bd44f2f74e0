//! Monthly wage report totals and CSV export.

use chrono::Month;
use csv::WriterBuilder;
use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

use crate::model::report::MonthlyReportRow;

pub const CURRENCY_SYMBOL: &str = "₹";

pub const CSV_HEADER: [&str; 6] = [
    "Worker Name",
    "Worker ID",
    "Daily Wage Rate",
    "Present Days",
    "Total Hours",
    "Total Wages",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer failed: {0}")]
    Io(#[from] io::Error),

    #[error("CSV is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Grand totals over a set of report rows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReportTotals {
    pub hours: f64,
    pub wages: f64,
}

pub fn totals(rows: &[MonthlyReportRow]) -> ReportTotals {
    rows.iter().fold(ReportTotals::default(), |acc, row| ReportTotals {
        hours: acc.hours + row.total_hours,
        wages: acc.wages + row.total_wages,
    })
}

pub fn format_currency(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

/// English month name for 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    Month::try_from(month).ok().map(|m| m.name())
}

/// `wage_report_<MonthName>_<Year>.csv`
pub fn export_file_name(year: i32, month: u32) -> Option<String> {
    month_name(month).map(|name| format!("wage_report_{}_{}.csv", name, year))
}

/// Header, one line per row, a blank line, then the totals line
/// with only the wage column filled. No trailing newline.
pub fn report_csv(rows: &[MonthlyReportRow]) -> Result<String, ExportError> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;

    for row in rows {
        wtr.write_record([
            row.worker_name.clone(),
            row.worker_number.clone(),
            format_currency(row.daily_wage_rate),
            row.present_days.to_string(),
            format!("{:.2}", row.total_hours),
            format_currency(row.total_wages),
        ])?;
    }

    let mut buf = wtr.into_inner().map_err(|e| e.into_error())?;
    buf.push(b'\n');

    let grand_wages = format_currency(totals(rows).wages);
    let mut wtr = WriterBuilder::new().from_writer(buf);
    wtr.write_record(["", "", "", "", "", grand_wages.as_str()])?;

    let mut buf = wtr.into_inner().map_err(|e| e.into_error())?;
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }

    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, number: &str, rate: f64, days: i64, hours: f64, wages: f64) -> MonthlyReportRow {
        MonthlyReportRow {
            worker_id: format!("id-{number}"),
            worker_name: name.to_string(),
            worker_number: number.to_string(),
            daily_wage_rate: rate,
            total_days: days,
            present_days: days,
            absent_days: 0,
            total_hours: hours,
            total_wages: wages,
        }
    }

    #[test]
    fn csv_layout_matches_export_format() {
        let rows = vec![
            row("Asha", "W001", 500.0, 2, 16.0, 1000.0),
            row("Ravi", "W002", 450.5, 1, 4.5, 253.41),
        ];

        let csv = report_csv(&rows).unwrap();
        let expected = "Worker Name,Worker ID,Daily Wage Rate,Present Days,Total Hours,Total Wages\n\
                        Asha,W001,₹500.00,2,16.00,₹1000.00\n\
                        Ravi,W002,₹450.50,1,4.50,₹253.41\n\
                        \n\
                        ,,,,,₹1253.41";
        assert_eq!(csv, expected);
    }

    #[test]
    fn empty_report_has_zero_total() {
        let csv = report_csv(&[]).unwrap();
        assert_eq!(
            csv,
            "Worker Name,Worker ID,Daily Wage Rate,Present Days,Total Hours,Total Wages\n\n,,,,,₹0.00"
        );
        assert_eq!(totals(&[]), ReportTotals::default());
    }

    #[test]
    fn names_with_commas_are_quoted() {
        let csv = report_csv(&[row("Kumar, R", "W009", 300.0, 0, 0.0, 0.0)]).unwrap();
        assert!(csv.contains("\"Kumar, R\",W009,₹300.00,0,0.00,₹0.00"));
    }

    #[test]
    fn totals_sum_every_row() {
        let rows = vec![
            row("A", "1", 100.0, 1, 1.25, 10.5),
            row("B", "2", 100.0, 1, 2.5, 20.25),
            row("C", "3", 100.0, 1, 3.0, 30.0),
        ];
        let t = totals(&rows);
        assert!((t.hours - 6.75).abs() < 1e-9);
        assert!((t.wages - 60.75).abs() < 1e-9);
    }

    #[test]
    fn file_name_uses_month_name() {
        assert_eq!(
            export_file_name(2026, 10).as_deref(),
            Some("wage_report_October_2026.csv")
        );
        assert_eq!(export_file_name(2026, 13), None);
        assert_eq!(month_name(0), None);
    }
}

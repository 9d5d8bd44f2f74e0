use chrono::{Local, NaiveDate, NaiveTime, TimeZone};

use crate::client::ApiClient;
use crate::model::{attendance::AttendanceRecord, worker::Worker};
use crate::models::MarkAttendance;

use super::Notice;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayStatus {
    Marked { hours_worked: f64, wage_earned: f64 },
    NotMarked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusRow<'a> {
    pub worker: &'a Worker,
    pub status: DayStatus,
}

/// Form input as typed: a selected worker and two `HH:MM` times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceForm {
    /// Internal id of the selected worker
    pub worker: Option<String>,
    pub clock_in: String,
    pub clock_out: String,
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

/// `date` at wall-clock `time` in the local zone, as RFC 3339.
fn local_timestamp(date: NaiveDate, time: NaiveTime) -> Option<String> {
    Local
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|dt| dt.to_rfc3339())
}

/// Validates the form and builds the request for `date`.
pub fn build_request(form: &AttendanceForm, date: NaiveDate) -> Result<MarkAttendance, Notice> {
    let worker = match form.worker.as_deref().map(str::trim) {
        Some(w) if !w.is_empty() => w.to_string(),
        _ => return Err(Notice::error("Please select a worker")),
    };

    if form.clock_in.trim().is_empty() || form.clock_out.trim().is_empty() {
        return Err(Notice::error("Please provide both clock-in and clock-out times"));
    }

    let to_timestamp = |raw: &str| {
        parse_time(raw)
            .and_then(|t| local_timestamp(date, t))
            .ok_or_else(|| Notice::error(format!("Invalid time: {}", raw.trim())))
    };

    Ok(MarkAttendance {
        worker_id: worker,
        clock_in: Some(to_timestamp(&form.clock_in)?),
        clock_out: Some(to_timestamp(&form.clock_out)?),
    })
}

#[derive(Debug, Default)]
pub struct AttendanceView {
    workers: Vec<Worker>,
    today: Vec<AttendanceRecord>,
}

impl AttendanceView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn today(&self) -> &[AttendanceRecord] {
        &self.today
    }

    /// Fetches workers and today's records together; state changes only if both succeed.
    pub async fn load(&mut self, api: &ApiClient) -> Result<(), Notice> {
        let (workers, today) = futures::try_join!(api.list_workers(), api.today_attendance())
            .map_err(|e| Notice::from_client_error(&e, "Failed to load data"))?;

        self.workers = workers;
        self.today = today;
        Ok(())
    }

    pub fn status_of(&self, worker_id: &str) -> DayStatus {
        self.today
            .iter()
            .find(|a| a.worker_id == worker_id)
            .map(|a| DayStatus::Marked {
                hours_worked: a.hours_worked,
                wage_earned: a.wage_earned,
            })
            .unwrap_or(DayStatus::NotMarked)
    }

    pub fn rows(&self) -> Vec<StatusRow<'_>> {
        self.workers
            .iter()
            .map(|worker| StatusRow {
                worker,
                status: self.status_of(&worker.id),
            })
            .collect()
    }

    /// Marks attendance for today. The backend decides whether the times make sense.
    pub async fn submit(&mut self, api: &ApiClient, form: &AttendanceForm) -> Notice {
        self.submit_on(api, form, Local::now().date_naive()).await
    }

    pub async fn submit_on(&mut self, api: &ApiClient, form: &AttendanceForm, date: NaiveDate) -> Notice {
        let request = match build_request(form, date) {
            Ok(r) => r,
            Err(notice) => return notice,
        };

        match api.mark_attendance(&request).await {
            Ok(_) => match self.load(api).await {
                Ok(()) => Notice::success("Attendance marked successfully"),
                Err(notice) => notice,
            },
            Err(e) => Notice::from_client_error(&e, "Failed to mark attendance"),
        }
    }
}

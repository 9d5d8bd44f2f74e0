use crate::client::ApiClient;
use crate::export::format_currency;
use crate::model::report::DashboardStats;

use super::Notice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

/// Link from the dashboard to another view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub label: &'static str,
    pub path: &'static str,
}

pub const SHORTCUTS: [Shortcut; 3] = [
    Shortcut { label: "Manage Workers", path: "/workers" },
    Shortcut { label: "Mark Attendance", path: "/attendance" },
    Shortcut { label: "View Reports", path: "/reports" },
];

pub fn cards(stats: &DashboardStats) -> [StatCard; 5] {
    [
        StatCard { label: "Total Workers", value: stats.total_workers.to_string() },
        StatCard { label: "Present Today", value: stats.present_today.to_string() },
        StatCard { label: "Absent Today", value: stats.absent_today.to_string() },
        StatCard { label: "Hours Today", value: format!("{:.2}h", stats.total_hours_today) },
        StatCard { label: "Wages Today", value: format_currency(stats.total_wages_today) },
    ]
}

#[derive(Debug, Default)]
pub struct DashboardView {
    stats: Option<DashboardStats>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub async fn load(&mut self, api: &ApiClient) -> Result<(), Notice> {
        let stats = api
            .dashboard_stats()
            .await
            .map_err(|e| Notice::from_client_error(&e, "Failed to load dashboard stats"))?;
        self.stats = Some(stats);
        Ok(())
    }

    /// Cards for the loaded snapshot, empty until `load` succeeds.
    pub fn cards(&self) -> Vec<StatCard> {
        self.stats.as_ref().map(|s| cards(s).to_vec()).unwrap_or_default()
    }
}

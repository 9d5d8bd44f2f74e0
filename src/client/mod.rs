//! HTTP client for the WageFlow API

mod error;

pub use error::ClientError;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::model::{
    attendance::AttendanceRecord,
    report::{DashboardStats, MonthlyReportRow},
    worker::Worker,
};
use crate::models::{CreateWorker, MarkAttendance, UpdateWorker};
use error::extract_detail;

/// Default mount point of the API, matches the server's `API_PREFIX` default.
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Client for the endpoints the admin views use
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    /// Backend origin, without trailing slash
    base_url: String,
    /// Server's `API_PREFIX`, leading slash and no trailing slash
    api_prefix: String,
}

impl ApiClient {
    /// Create a client for the backend at `base_url`, e.g. `http://localhost:8001`,
    /// serving the API under the default `/api` prefix.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_prefix(base_url, DEFAULT_API_PREFIX)
    }

    /// Same as `new` for a server started with a different `API_PREFIX`.
    pub fn with_prefix(base_url: &str, api_prefix: &str) -> Result<Self, ClientError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| ClientError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;

        let client = Client::builder().build()?;

        let prefix = api_prefix.trim().trim_matches('/');
        let api_prefix = if prefix.is_empty() {
            String::new()
        } else {
            format!("/{prefix}")
        };

        Ok(Self {
            client,
            base_url: trimmed.to_string(),
            api_prefix,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.api_prefix, path)
    }

    async fn send(request: RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status,
            detail: extract_detail(&body),
        })
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
        let response = Self::send(request).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn list_workers(&self) -> Result<Vec<Worker>, ClientError> {
        Self::send_json(self.client.get(self.url("/workers"))).await
    }

    pub async fn create_worker(&self, payload: &CreateWorker) -> Result<Worker, ClientError> {
        Self::send_json(self.client.post(self.url("/workers")).json(payload)).await
    }

    pub async fn update_worker(
        &self,
        id: &str,
        payload: &UpdateWorker,
    ) -> Result<Worker, ClientError> {
        let url = self.url(&format!("/workers/{id}"));
        Self::send_json(self.client.put(url).json(payload)).await
    }

    pub async fn delete_worker(&self, id: &str) -> Result<(), ClientError> {
        let url = self.url(&format!("/workers/{id}"));
        Self::send(self.client.delete(url)).await?;
        Ok(())
    }

    pub async fn today_attendance(&self) -> Result<Vec<AttendanceRecord>, ClientError> {
        Self::send_json(self.client.get(self.url("/attendance/today"))).await
    }

    pub async fn mark_attendance(
        &self,
        payload: &MarkAttendance,
    ) -> Result<AttendanceRecord, ClientError> {
        Self::send_json(self.client.post(self.url("/attendance")).json(payload)).await
    }

    pub async fn monthly_report(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<MonthlyReportRow>, ClientError> {
        let url = self.url(&format!("/attendance/monthly/{year}/{month}"));
        Self::send_json(self.client.get(url)).await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        Self::send_json(self.client.get(self.url("/dashboard/stats"))).await
    }
}

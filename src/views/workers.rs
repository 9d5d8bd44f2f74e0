use crate::client::ApiClient;
use crate::model::worker::Worker;
use crate::models::{CreateWorker, UpdateWorker};

use super::Notice;

pub const NO_WORKERS_FOUND: &str = "No workers found";

/// Workers whose name or code contains `term`, ignoring case.
pub fn filter_workers<'a>(workers: &'a [Worker], term: &str) -> Vec<&'a Worker> {
    let term = term.to_lowercase();
    workers
        .iter()
        .filter(|w| w.name.to_lowercase().contains(&term) || w.worker_id.to_lowercase().contains(&term))
        .collect()
}

/// Add/edit form input.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerForm {
    pub name: String,
    pub worker_id: String,
    pub daily_wage_rate: f64,
}

#[derive(Debug, Default)]
pub struct WorkersView {
    workers: Vec<Worker>,
    search: String,
}

impl WorkersView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn filtered(&self) -> Vec<&Worker> {
        filter_workers(&self.workers, &self.search)
    }

    /// Placeholder text when the filtered list is empty.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.filtered().is_empty().then_some(NO_WORKERS_FOUND)
    }

    pub async fn load(&mut self, api: &ApiClient) -> Result<(), Notice> {
        match api.list_workers().await {
            Ok(workers) => {
                self.workers = workers;
                Ok(())
            }
            Err(e) => Err(Notice::from_client_error(&e, "Failed to load workers")),
        }
    }

    /// Creates a worker, or updates the one with internal id `editing`.
    /// An edit keeps the worker's existing code whatever the form says.
    pub async fn save(&mut self, api: &ApiClient, form: WorkerForm, editing: Option<&str>) -> Notice {
        let result = match editing {
            Some(id) => {
                let Some(current) = self.workers.iter().find(|w| w.id == id) else {
                    return Notice::error("Worker not found");
                };
                let payload = UpdateWorker {
                    name: Some(form.name),
                    worker_id: Some(current.worker_id.clone()),
                    daily_wage_rate: Some(form.daily_wage_rate),
                };
                api.update_worker(id, &payload)
                    .await
                    .map(|_| "Worker updated successfully")
            }
            None => {
                let payload = CreateWorker {
                    name: form.name,
                    worker_id: form.worker_id,
                    daily_wage_rate: form.daily_wage_rate,
                };
                api.create_worker(&payload)
                    .await
                    .map(|_| "Worker added successfully")
            }
        };

        match result {
            Ok(message) => self.refresh_then(api, message).await,
            Err(e) => Notice::from_client_error(&e, "Failed to save worker"),
        }
    }

    /// Deletes after `confirm` approves. `None` when the user backed out.
    pub async fn delete<F>(&mut self, api: &ApiClient, id: &str, confirm: F) -> Option<Notice>
    where
        F: FnOnce(&Worker) -> bool,
    {
        let worker = match self.workers.iter().find(|w| w.id == id) {
            Some(w) => w,
            None => return Some(Notice::error("Worker not found")),
        };

        if !confirm(worker) {
            return None;
        }

        let notice = match api.delete_worker(id).await {
            Ok(()) => self.refresh_then(api, "Worker deleted successfully").await,
            Err(e) => Notice::from_client_error(&e, "Failed to delete worker"),
        };
        Some(notice)
    }

    async fn refresh_then(&mut self, api: &ApiClient, message: &str) -> Notice {
        match self.load(api).await {
            Ok(()) => Notice::success(message),
            Err(notice) => notice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn worker(name: &str, code: &str) -> Worker {
        Worker {
            id: format!("id-{code}"),
            name: name.to_string(),
            worker_id: code.to_string(),
            daily_wage_rate: 500.0,
            created_at: Utc::now(),
        }
    }

    fn roster() -> Vec<Worker> {
        vec![
            worker("Asha", "W001"),
            worker("Ravi Kumar", "W002"),
            worker("Meena", "X-17"),
        ]
    }

    #[test]
    fn matches_name_case_insensitively() {
        let workers = roster();
        let hits = filter_workers(&workers, "KUMAR");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ravi Kumar");
    }

    #[test]
    fn matches_code_substring() {
        let workers = roster();
        let codes: Vec<&str> = filter_workers(&workers, "w00")
            .iter()
            .map(|w| w.worker_id.as_str())
            .collect();
        assert_eq!(codes, vec!["W001", "W002"]);
    }

    #[test]
    fn empty_term_keeps_everyone() {
        let workers = roster();
        assert_eq!(filter_workers(&workers, "").len(), 3);
    }

    #[test]
    fn unknown_term_shows_empty_state() {
        let mut view = WorkersView {
            workers: roster(),
            search: String::new(),
        };
        assert_eq!(view.empty_message(), None);

        view.set_search("zzz");
        assert!(view.filtered().is_empty());
        assert_eq!(view.empty_message(), Some(NO_WORKERS_FOUND));
    }
}

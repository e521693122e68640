//! HTTP client for the project/task REST API.

use futures::future::join_all;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::entities::{Project, Task};
use crate::errors::{DashError, DashResult};
use crate::snapshot::Snapshot;

/// Read-only client for the upstream project-management API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given API base URL (no trailing slash
    /// required).
    pub fn new(base_url: impl Into<String>) -> DashResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    /// Execute a GET and deserialize the JSON body.
    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> DashResult<R> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DashError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// List all projects. Task lists come back empty; use
    /// [`ApiClient::load_snapshot`] to populate them.
    #[instrument(skip(self))]
    pub async fn list_projects(&self) -> DashResult<Vec<Project>> {
        let projects: Vec<Project> = self.get_json("/projects").await?;
        debug!(count = projects.len(), "fetched projects");
        Ok(projects)
    }

    /// List the tasks belonging to one project.
    #[instrument(skip(self))]
    pub async fn list_tasks(&self, project_id: i64) -> DashResult<Vec<Task>> {
        let tasks: Vec<Task> = self
            .get_json(&format!("/tasks?projectId={project_id}"))
            .await?;
        debug!(project_id, count = tasks.len(), "fetched tasks");
        Ok(tasks)
    }

    /// Fetch everything: the project list, then every project's tasks
    /// concurrently.
    ///
    /// A failed task fetch is absorbed as "that project contributes zero
    /// tasks" rather than failing the whole load. The flattened task order
    /// across the concurrent sub-fetches is unspecified.
    #[instrument(skip(self))]
    pub async fn load_snapshot(&self) -> DashResult<Snapshot> {
        let projects = self.list_projects().await?;

        let loads = projects.into_iter().map(|mut project| async move {
            match self.list_tasks(project.id).await {
                Ok(tasks) => project.tasks = tasks,
                Err(err) => {
                    warn!(project_id = project.id, %err, "task fetch failed, contributing zero tasks");
                    project.tasks = Vec::new();
                }
            }
            project
        });

        Ok(Snapshot::new(join_all(loads).await))
    }
}

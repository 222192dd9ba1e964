//! HTTP client for the employee REST API

use crate::types::{Command, Employee, Outcome, SubmitMode};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with HTTP {0}")]
    Status(StatusCode),
}

/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct EmployeeClient {
    http: reqwest::Client,
    base_url: String,
}

impl EmployeeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        let response = self.http.get(self.url("/employees/all")).send().await?;
        let response = check_status(response)?;
        let employees: Vec<Employee> = response.json().await?;
        debug!(count = employees.len(), "Fetched employees");
        Ok(employees)
    }

    pub async fn create(&self, employee: &Employee) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/employees/employee"))
            .json(employee)
            .send()
            .await?;
        check_status(response)?;
        debug!(name = %employee.name, "Employee created");
        Ok(())
    }

    pub async fn update(&self, id: i64, employee: &Employee) -> Result<(), ApiError> {
        let response = self
            .http
            .put(self.url("/employees/id"))
            .query(&[("id", id)])
            .json(employee)
            .send()
            .await?;
        check_status(response)?;
        debug!(id, "Employee updated");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url("/employees/id"))
            .query(&[("id", id)])
            .send()
            .await?;
        check_status(response)?;
        debug!(id, "Employee deleted");
        Ok(())
    }

    /// Run one command to completion and wrap its result for the view.
    pub async fn execute(&self, command: Command) -> Outcome {
        match command {
            Command::List => Outcome::Listed(self.list().await),
            Command::Create(employee) => Outcome::Saved {
                mode: SubmitMode::Create,
                result: self.create(&employee).await,
            },
            Command::Update { id, employee } => Outcome::Saved {
                mode: SubmitMode::Update,
                result: self.update(id, &employee).await,
            },
            Command::Delete { id } => {
                if let Err(e) = self.delete(id).await {
                    warn!(id, error = %e, "Delete failed");
                }
                Outcome::Deleted { id }
            }
        }
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status))
    }
}

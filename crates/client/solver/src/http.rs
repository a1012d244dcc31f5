//! HTTP solver client implementation.

use async_trait::async_trait;

use hanoi_core::Solution;

use crate::traits::{SolverApi, SolverError};
use crate::types::SolveResponse;

/// Remote solver client using the solver's HTTP API.
pub struct HttpSolverClient {
    /// Solver endpoint, without a trailing slash.
    base_url: String,

    /// HTTP client
    http_client: reqwest::Client,
}

impl HttpSolverClient {
    /// Create a client for the solver at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client reusing an existing connection pool.
    pub fn with_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http_client,
        }
    }
}

#[async_trait]
impl SolverApi for HttpSolverClient {
    async fn solve(&self, disks: u8) -> Result<Solution, SolverError> {
        if disks == 0 {
            return Err(SolverError::InvalidDiskCount(disks));
        }

        let url = format!("{}/api/hanoi/solve?disks={}", self.base_url, disks);
        tracing::debug!(disks, %url, "requesting solution from solver");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| SolverError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            tracing::warn!(status = status.as_u16(), "solver request failed");
            return Err(SolverError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: SolveResponse = response
            .json()
            .await
            .map_err(|e| SolverError::Malformed(e.to_string()))?;

        payload.into_solution(disks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed_from_the_base_url() {
        let client = HttpSolverClient::new("http://solver.local/");
        assert_eq!(client.base_url, "http://solver.local");

        let client = HttpSolverClient::new("http://solver.local");
        assert_eq!(client.base_url, "http://solver.local");
    }

    #[tokio::test]
    async fn zero_disks_is_rejected_before_any_request() {
        let client = HttpSolverClient::new("http://solver.invalid");
        let error = client.solve(0).await.unwrap_err();
        assert!(matches!(error, SolverError::InvalidDiskCount(0)));
    }
}

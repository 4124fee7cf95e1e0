// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! HTTP transport to the proving backend.

use std::time::Duration;

use log::debug;
use reqwest::{
    blocking::Client,
    header::{ACCEPT, CONTENT_TYPE},
};
use thiserror::Error;

use battlesetup::{
    board::Layout,
    proof::{ProofArtifact, ProofArtifactError, ProofBackend, VerifyResponse},
};

/// Error talking to the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request failed or the server answered with an error status.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// `/prove` answered with something that is not JSON.
    #[error(transparent)]
    Artifact(#[from] ProofArtifactError),
    /// `/prove` answered with its failure object.
    #[error("the server could not prove this layout")]
    Rejected,
}

/// [`ProofBackend`] that POSTs JSON to `<base>/prove` and `<base>/verify`.
pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    /// Create a backend for the server at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    /// The server's base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }
}

impl ProofBackend for HttpBackend {
    type Error = ClientError;

    fn prove(&mut self, layout: &Layout) -> Result<ProofArtifact, ClientError> {
        let url = self.url("prove");
        debug!("POST {}", url);
        let text = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(layout)
            .send()?
            .error_for_status()?
            .text()?;
        let artifact = ProofArtifact::from_json(text)?;
        if artifact.reports_error() {
            return Err(ClientError::Rejected);
        }
        Ok(artifact)
    }

    fn verify(&mut self, artifact: &ProofArtifact) -> Result<VerifyResponse, ClientError> {
        let url = self.url("verify");
        debug!("POST {}", url);
        let resp = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(artifact.as_json().to_owned())
            .send()?
            .error_for_status()?
            .json()?;
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_base_url() {
        let backend = HttpBackend::new("http://localhost:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:8080");
        assert_eq!(backend.url("prove"), "http://localhost:8080/prove");
        assert_eq!(backend.url("verify"), "http://localhost:8080/verify");
    }
}

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
//! Payloads exchanged with the proving backend, and the seam a transport plugs into.
//!
//! The backend exposes two endpoints. `/prove` takes a [`Layout`] and answers with an
//! opaque [`ProofArtifact`]. `/verify` takes that artifact's JSON text back, unchanged,
//! and answers with a [`VerifyResponse`].

use std::{error::Error as StdError, fmt, str::FromStr};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{board::Layout, session::SelectionSession};

/// Error returned when a proof artifact is not JSON.
#[derive(Debug, Error)]
#[error("proof artifact is not valid JSON: {0}")]
pub struct ProofArtifactError(#[from] serde_json::Error);

/// Response body of `/prove`. Its structure is not interpreted; the exact text is kept
/// so it can be resubmitted to `/verify` verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ProofArtifact {
    /// Text as received.
    text: String,
    /// Parsed form of `text`.
    value: Value,
}

impl ProofArtifact {
    /// Wrap the JSON text received from the backend.
    pub fn from_json<S: Into<String>>(text: S) -> Result<Self, ProofArtifactError> {
        let text = text.into();
        let value = serde_json::from_str(&text)?;
        Ok(Self { text, value })
    }

    /// The exact JSON text of the artifact.
    pub fn as_json(&self) -> &str {
        &self.text
    }

    /// The parsed JSON value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether the backend answered with its failure object, `{"error": true}`,
    /// instead of a proof.
    pub fn reports_error(&self) -> bool {
        self.value.get("error").and_then(Value::as_bool) == Some(true)
    }
}

impl FromStr for ProofArtifact {
    type Err = ProofArtifactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl fmt::Display for ProofArtifact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Response body of `/verify`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Whether the proof checked out. Missing from the backend's `{"error": ...}`
    /// answers, which count as a failed verification.
    #[serde(default)]
    pub verify: bool,
}

/// Outcome shown to the player after verification.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VerificationStatus {
    /// The backend accepted the proof.
    Verified,
    /// The backend rejected the proof, or did not say it accepted it.
    Failed,
}

impl From<VerifyResponse> for VerificationStatus {
    fn from(resp: VerifyResponse) -> Self {
        if resp.verify {
            VerificationStatus::Verified
        } else {
            VerificationStatus::Failed
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            VerificationStatus::Verified => "Verified",
            VerificationStatus::Failed => "Verification Failed",
        })
    }
}

/// Transport to the proving backend.
pub trait ProofBackend {
    /// Error raised by the transport.
    type Error: StdError;

    /// Send a layout to `/prove`.
    fn prove(&mut self, layout: &Layout) -> Result<ProofArtifact, Self::Error>;

    /// Resubmit an artifact to `/verify`.
    fn verify(&mut self, artifact: &ProofArtifact) -> Result<VerifyResponse, Self::Error>;
}

/// Snapshot the session's grid and submit it for proving.
pub fn submit_layout<B: ProofBackend>(
    session: &SelectionSession,
    backend: &mut B,
) -> Result<ProofArtifact, B::Error> {
    let layout = session.snapshot();
    info!(
        "submitting layout with {} occupied cells",
        session.grid().occupied_count()
    );
    debug!("prover input {}", layout.prover_input());
    backend.prove(&layout)
}

/// Submit an artifact for verification.
pub fn verify_artifact<B: ProofBackend>(
    artifact: &ProofArtifact,
    backend: &mut B,
) -> Result<VerificationStatus, B::Error> {
    let status: VerificationStatus = backend.verify(artifact)?.into();
    info!("verification: {}", status);
    Ok(status)
}

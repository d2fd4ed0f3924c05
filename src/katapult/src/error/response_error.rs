// Copyright 2025 Katapult Rust Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::Category;
use serde::{Deserialize, Serialize};

/// The raw error envelope returned by the Katapult API on failure.
///
/// Non-2xx responses carry a JSON body of the form
/// `{"error": {"code": "...", "description": "...", "detail": {...}}}`. The
/// `code` field is a stable machine identifier, and `detail` is an opaque
/// JSON object whose shape depends on the code (possibly empty or absent).
///
/// A `ResponseError` is usable as-is: it is the error value for codes the
/// taxonomy does not recognize, carrying a best-effort [Category] derived
/// from the HTTP status code. Known codes are upgraded to a typed error by
/// `katapult-core`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResponseError {
    /// The machine-readable error code, e.g. `network_not_found`.
    pub code: String,

    /// The human-readable description of the error.
    pub description: String,

    /// The opaque detail payload. [serde_json::Value::Null] when absent.
    pub detail: serde_json::Value,

    #[serde(skip)]
    category: Category,
}

impl ResponseError {
    /// Creates an envelope, deriving the category from the HTTP status code
    /// of the response it was received in.
    pub fn new<C, D>(http_status: u16, code: C, description: D, detail: serde_json::Value) -> Self
    where
        C: Into<String>,
        D: Into<String>,
    {
        Self {
            code: code.into(),
            description: description.into(),
            detail,
            category: Category::from_http_status(http_status),
        }
    }

    /// Sets the category from a HTTP status code. Used after deserializing
    /// the envelope from a response body, which carries no status itself.
    pub fn with_status(mut self, http_status: u16) -> Self {
        self.category = Category::from_http_status(http_status);
        self
    }

    /// The coarse category derived from the transport status code.
    pub fn category(&self) -> Category {
        self.category
    }

    fn detail_is_present(&self) -> bool {
        match &self.detail {
            serde_json::Value::Null => false,
            serde_json::Value::Object(o) => !o.is_empty(),
            _ => true,
        }
    }
}

impl std::fmt::Display for ResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)?;
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        // A non-empty detail object is prettified and appended, so unknown
        // codes still surface whatever the API chose to include.
        if self.detail_is_present() {
            let pretty = serde_json::to_string_pretty(&self.detail)
                .unwrap_or_else(|_| self.detail.to_string());
            write!(f, " -- {pretty}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ResponseError {}

/// The top-level body wrapping the envelope on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorResponseBody {
    pub error: Option<ResponseError>,
}

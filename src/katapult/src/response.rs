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

use serde::Deserialize;

/// Pagination metadata returned alongside list results.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total: u32,
    pub per_page: u32,
    /// True when the collection is too large for exact totals; `total` and
    /// `total_pages` are then approximations.
    pub large_set: bool,
}

/// A successful response: the decoded body plus response metadata.
#[derive(Clone, Debug)]
pub struct Response<T> {
    status: http::StatusCode,
    pagination: Option<Pagination>,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from its parts.
    pub fn new(status: http::StatusCode, body: T) -> Self {
        Self {
            status,
            pagination: None,
            body,
        }
    }

    /// Attaches pagination metadata, typically lifted out of a list
    /// response's body envelope.
    pub fn with_pagination(mut self, pagination: Option<Pagination>) -> Self {
        self.pagination = pagination;
        self
    }

    /// The HTTP status of the response.
    pub fn status(&self) -> http::StatusCode {
        self.status
    }

    /// Pagination metadata, present on list responses.
    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// A reference to the decoded body.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response, returning the decoded body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transforms the body, preserving status and pagination. Used by the
    /// resource clients to project the wire envelope onto the result type.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            status: self.status,
            pagination: self.pagination,
            body: f(self.body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn map_preserves_metadata() {
        let pagination = Pagination {
            current_page: 2,
            total_pages: 3,
            total: 70,
            per_page: 30,
            large_set: false,
        };
        let resp = Response::new(http::StatusCode::OK, vec![1, 2, 3])
            .with_pagination(Some(pagination.clone()));
        let mapped = resp.map(|v| v.len());
        assert_eq!(*mapped.body(), 3);
        assert_eq!(mapped.status(), http::StatusCode::OK);
        assert_eq!(mapped.pagination(), Some(&pagination));
    }

    #[test]
    fn pagination_deserializes_with_defaults() {
        let p: Pagination = serde_json::from_value(json!({"current_page": 1})).unwrap();
        assert_eq!(p.current_page, 1);
        assert_eq!(p.total, 0);
        assert!(!p.large_set);
    }
}

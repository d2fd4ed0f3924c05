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

/// Coarse classification of API errors.
///
/// Every error returned by the Katapult API belongs to exactly one category.
/// Known error codes have a category declared in the `katapult-core`
/// taxonomy; unrecognized codes fall back to the category derived from the
/// HTTP status code of the response.
///
/// Categories enable broad `is-a` matching without inspecting the specific
/// error code:
///
/// ```
/// use katapult::error::Category;
/// let category = Category::from_http_status(404);
/// assert!(category.is(Category::NotFound));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Category {
    /// HTTP 400.
    BadRequest,
    /// HTTP 401.
    Unauthorized,
    /// HTTP 403. Also matches [Category::Unauthorized] in [Category::is].
    Forbidden,
    /// HTTP 404. The parent of all resource-specific not-found errors.
    NotFound,
    /// HTTP 406.
    NotAcceptable,
    /// HTTP 409.
    Conflict,
    /// HTTP 422.
    UnprocessableEntity,
    /// HTTP 429.
    TooManyRequests,
    /// HTTP 500.
    InternalServerError,
    /// HTTP 502.
    BadGateway,
    /// HTTP 503.
    ServiceUnavailable,
    /// HTTP 504.
    GatewayTimeout,
    /// The response error could not be understood.
    #[default]
    Unknown,
}

impl Category {
    /// Maps a HTTP status code to its category. Statuses without a mapping
    /// yield [Category::Unknown].
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Category::BadRequest,
            401 => Category::Unauthorized,
            403 => Category::Forbidden,
            404 => Category::NotFound,
            406 => Category::NotAcceptable,
            409 => Category::Conflict,
            422 => Category::UnprocessableEntity,
            429 => Category::TooManyRequests,
            500 => Category::InternalServerError,
            502 => Category::BadGateway,
            503 => Category::ServiceUnavailable,
            504 => Category::GatewayTimeout,
            _ => Category::Unknown,
        }
    }

    /// The stable snake_case name of the category, as spliced into error
    /// messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BadRequest => "bad_request",
            Category::Unauthorized => "unauthorized",
            // Forbidden is a child of Unauthorized and renders under the
            // parent's name, matching the API's own terminology.
            Category::Forbidden => "unauthorized",
            Category::NotFound => "not_found",
            Category::NotAcceptable => "not_acceptable",
            Category::Conflict => "conflict",
            Category::UnprocessableEntity => "unprocessable_entity",
            Category::TooManyRequests => "too_many_requests",
            Category::InternalServerError => "internal_server_error",
            Category::BadGateway => "bad_gateway",
            Category::ServiceUnavailable => "service_unavailable",
            Category::GatewayTimeout => "gateway_timeout",
            Category::Unknown => "unknown_error",
        }
    }

    /// Broad sentinel matching.
    ///
    /// True when `self` is `target`, or when `target` is a declared parent of
    /// `self`: [Category::Forbidden] matches [Category::Unauthorized].
    pub fn is(self, target: Category) -> bool {
        self == target || matches!((self, target), (Category::Forbidden, Category::Unauthorized))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(400, Category::BadRequest)]
    #[test_case(401, Category::Unauthorized)]
    #[test_case(403, Category::Forbidden)]
    #[test_case(404, Category::NotFound)]
    #[test_case(406, Category::NotAcceptable)]
    #[test_case(409, Category::Conflict)]
    #[test_case(422, Category::UnprocessableEntity)]
    #[test_case(429, Category::TooManyRequests)]
    #[test_case(500, Category::InternalServerError)]
    #[test_case(502, Category::BadGateway)]
    #[test_case(503, Category::ServiceUnavailable)]
    #[test_case(504, Category::GatewayTimeout)]
    #[test_case(418, Category::Unknown)]
    #[test_case(200, Category::Unknown)]
    fn from_http_status(status: u16, want: Category) {
        assert_eq!(Category::from_http_status(status), want);
    }

    #[test]
    fn is_matches_self() {
        assert!(Category::NotFound.is(Category::NotFound));
        assert!(!Category::NotFound.is(Category::Conflict));
    }

    #[test]
    fn forbidden_is_unauthorized() {
        assert!(Category::Forbidden.is(Category::Unauthorized));
        assert!(!Category::Unauthorized.is(Category::Forbidden));
    }
}

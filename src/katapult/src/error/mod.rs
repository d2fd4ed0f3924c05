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

//! Errors returned by the Katapult clients.
//!
//! The library distinguishes between errors detected while trying to send a
//! request (e.g. a missing API token, an unreachable endpoint), errors
//! processing a response (e.g. an unexpected body), and errors returned by
//! the Katapult API itself. API errors carry a [Category] derived from the
//! HTTP status code. Once classified by `katapult-core` they also carry a
//! specific typed error keyed on the machine-readable error code.

mod category;
mod core_error;
mod response_error;

pub use category::Category;
pub use core_error::Error;
pub use response_error::ResponseError;

pub(crate) use response_error::ErrorResponseBody;

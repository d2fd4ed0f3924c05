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

//! Katapult API helpers.
//!
//! This crate contains the transport and the types shared by all Katapult
//! API clients: the unified [Error] type, the coarse error
//! [categories][error::Category], the wire-level error envelope, query-string
//! filter encoding, and pagination plumbing. The per-resource clients live in
//! the `katapult-core` crate and are thin consumers of the machinery defined
//! here.

/// An alias of [std::result::Result] where the error is always [Error].
///
/// This is the result type used by all functions wrapping API calls.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The error types used by the Katapult clients.
pub mod error;

/// Query-string filter representation and the [Queryable][query::Queryable]
/// trait.
pub mod query;

mod client;
mod list_options;
mod response;

pub use client::{BuilderError, Client, ClientBuilder, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
pub use error::Error;
pub use list_options::ListOptions;
pub use response::{Pagination, Response};

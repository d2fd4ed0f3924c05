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

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all Katapult client libraries.
///
/// Errors come from multiple sources: the service may reject a request, the
/// transport may be unable to reach the endpoint, or the library may be
/// unable to build or decode a message. Most applications just return or log
/// the error. Applications that need to branch can use the `is_*` predicates
/// for the error kind, and [Error::as_inner] to reach a specific error in
/// the source chain, e.g. the [ResponseError][crate::error::ResponseError]
/// envelope for service errors.
///
/// # Example
/// ```
/// use katapult::error::{Category, Error, ResponseError};
/// fn handle(e: Error) {
///     if let Some(re) = e.as_inner::<ResponseError>() {
///         if re.category().is(Category::NotFound) {
///             println!("no such resource: {re}");
///         }
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

impl Error {
    fn new<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }

    /// Creates an error for problems with the client configuration.
    pub fn config<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Config, source)
    }

    /// Creates an error for problems building a request, before any I/O
    /// takes place. A missing API token is the most common cause.
    pub fn request<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Request, source)
    }

    /// Creates an error for serialization problems.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Serialization, source)
    }

    /// Creates an error for response deserialization problems, including
    /// non-2xx responses whose body is not a recognizable error envelope.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Deserialization, source)
    }

    /// Creates an error for I/O problems while making a request.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Io, source)
    }

    /// Creates an error for requests that did not complete in time.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Timeout, source)
    }

    /// Creates an error with the information returned by the Katapult API.
    ///
    /// The source is typically a [ResponseError][crate::error::ResponseError]
    /// or, after classification, a typed error from `katapult-core`.
    pub fn service<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Service, source)
    }

    /// The transport could not reach the service or the connection failed.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// The request could not be completed before its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// The request could not be built.
    pub fn is_request(&self) -> bool {
        matches!(self.kind, ErrorKind::Request)
    }

    /// The client was misconfigured.
    pub fn is_config(&self) -> bool {
        matches!(self.kind, ErrorKind::Config)
    }

    /// The request body could not be serialized.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The response body could not be deserialized.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// The service rejected the request and returned an error envelope.
    pub fn is_service(&self) -> bool {
        matches!(self.kind, ErrorKind::Service)
    }

    /// Recurses through the source error chain and returns a reference to
    /// the inner value if it is of type `T`, or `None` if it isn't found.
    pub fn as_inner<T: StdError + Send + Sync + 'static>(&self) -> Option<&T> {
        let mut error = self.source.as_ref() as &(dyn StdError);
        loop {
            match error.downcast_ref::<T>() {
                Some(e) => return Some(e),
                None => error = error.source()?,
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            // Service errors render as-is: the envelope or typed error
            // message is already self-describing.
            ErrorKind::Service => write!(f, "{}", self.source),
            _ => write!(f, "{}: {}", self.kind, self.source),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ErrorKind {
    Config,
    Request,
    Serialization,
    Deserialization,
    Io,
    Timeout,
    Service,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Config => write!(f, "config"),
            ErrorKind::Request => write!(f, "request"),
            ErrorKind::Serialization => write!(f, "cannot serialize the request"),
            ErrorKind::Deserialization => write!(f, "cannot deserialize the response"),
            ErrorKind::Io => write!(f, "i/o error while making the request"),
            ErrorKind::Timeout => write!(f, "the request exceeded its deadline"),
            ErrorKind::Service => write!(f, "service error"),
        }
    }
}

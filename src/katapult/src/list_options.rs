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

use crate::query::{QueryValues, Queryable};

/// Pagination options accepted by all `List` operations.
///
/// Absent values are omitted from the request entirely, letting the API
/// apply its defaults; passing `None` for the whole struct adds no keys.
///
/// ```
/// use katapult::ListOptions;
/// use katapult::query::Queryable;
/// let opts = ListOptions::default().page(2).per_page(50);
/// assert_eq!(opts.query_values().encode(), "page=2&per_page=50");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    page: Option<u32>,
    per_page: Option<u32>,
}

impl ListOptions {
    /// Sets the page to fetch.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of items per page.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

impl Queryable for ListOptions {
    fn query_values(&self) -> QueryValues {
        let mut values = QueryValues::new();
        if let Some(page) = self.page {
            values.set("page", page.to_string());
        }
        if let Some(per_page) = self.per_page {
            values.set("per_page", per_page.to_string());
        }
        values
    }
}

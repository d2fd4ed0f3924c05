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

use crate::client::{execute, unwrap_field};
use katapult::query::{QueryValues, Queryable};
use katapult::{Response, Result};
use reqwest::Method;

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DataCenter {
    pub id: String,
    pub name: String,
    pub permalink: String,
}

impl DataCenter {
    /// Reduces this object to a single-field reference. Priority: `id`,
    /// then `permalink`.
    pub fn lookup_ref(&self) -> Option<DataCenterRef> {
        if !self.id.is_empty() {
            return Some(DataCenterRef::Id(self.id.clone()));
        }
        if !self.permalink.is_empty() {
            return Some(DataCenterRef::Permalink(self.permalink.clone()));
        }
        None
    }
}

/// A single-field reference to a data center. Data center IDs carry no
/// distinguishing prefix, so there is no string-classifying `lookup`
/// constructor; build the variant you mean.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataCenterRef {
    Id(String),
    Permalink(String),
}

impl Queryable for DataCenterRef {
    fn query_values(&self) -> QueryValues {
        let mut v = QueryValues::new();
        match self {
            Self::Id(id) => v.set("data_center[id]", id.as_str()),
            Self::Permalink(permalink) => v.set("data_center[permalink]", permalink.as_str()),
        }
        v
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ResponseBody {
    data_center: Option<DataCenter>,
    data_centers: Option<Vec<DataCenter>>,
}

#[derive(Clone, Debug)]
pub struct DataCentersClient {
    inner: katapult::Client,
}

impl DataCentersClient {
    pub fn new(transport: katapult::Client) -> Self {
        Self { inner: transport }
    }

    pub async fn list(&self) -> Result<Response<Vec<DataCenter>>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/data_centers",
            &QueryValues::new(),
            None::<&()>,
        )
        .await?;
        Ok(response.map(|b| b.data_centers.unwrap_or_default()))
    }

    pub async fn get(&self, r: &DataCenterRef) -> Result<Response<DataCenter>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/data_centers/_",
            &r.query_values(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.data_center), "data_center")
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Response<DataCenter>> {
        self.get(&DataCenterRef::Id(id.to_string())).await
    }

    pub async fn get_by_permalink(&self, permalink: &str) -> Result<Response<DataCenter>> {
        self.get(&DataCenterRef::Permalink(permalink.to_string()))
            .await
    }
}

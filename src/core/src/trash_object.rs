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
use crate::field_name::FieldName;
use crate::organization::OrganizationRef;
use crate::task::Task;
use katapult::query::{QueryValues, Queryable, query_values};
use katapult::{ListOptions, Pagination, Response, Result};
use reqwest::Method;

/// A deleted object awaiting purge.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct TrashObject {
    pub id: String,
    pub keep_until: Option<i64>,
    pub object_id: String,
    pub object_type: String,
}

impl TrashObject {
    /// Reduces this object to a single-field reference. Priority: `id`,
    /// then `object_id`.
    pub fn lookup_ref(&self) -> Option<TrashObjectRef> {
        if !self.id.is_empty() {
            return Some(TrashObjectRef::Id(self.id.clone()));
        }
        if !self.object_id.is_empty() {
            return Some(TrashObjectRef::ObjectId(self.object_id.clone()));
        }
        None
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrashObjectRef {
    Id(String),
    ObjectId(String),
}

impl TrashObjectRef {
    /// Classifies an ambiguous caller string by the `trsh_` ID prefix.
    /// Anything else is treated as the ID of the trashed object itself.
    pub fn lookup(id_or_object_id: &str) -> (Self, FieldName) {
        if id_or_object_id.starts_with("trsh_") {
            (Self::Id(id_or_object_id.to_string()), FieldName::Id)
        } else {
            (
                Self::ObjectId(id_or_object_id.to_string()),
                FieldName::ObjectId,
            )
        }
    }
}

impl Queryable for TrashObjectRef {
    fn query_values(&self) -> QueryValues {
        let mut v = QueryValues::new();
        match self {
            Self::Id(id) => v.set("trash_object[id]", id.as_str()),
            Self::ObjectId(object_id) => v.set("trash_object[object_id]", object_id.as_str()),
        }
        v
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ResponseBody {
    pagination: Option<Pagination>,
    trash_object: Option<TrashObject>,
    trash_objects: Option<Vec<TrashObject>>,
    task: Option<Task>,
}

#[derive(Clone, Debug)]
pub struct TrashObjectsClient {
    inner: katapult::Client,
}

impl TrashObjectsClient {
    pub fn new(transport: katapult::Client) -> Self {
        Self { inner: transport }
    }

    pub async fn list(
        &self,
        org: &OrganizationRef,
        opts: Option<ListOptions>,
    ) -> Result<Response<Vec<TrashObject>>> {
        let query = query_values(&[org, &opts]);
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/organizations/_/trash_objects",
            &query,
            None::<&()>,
        )
        .await?;
        let pagination = response.body().pagination.clone();
        Ok(response
            .map(|b| b.trash_objects.unwrap_or_default())
            .with_pagination(pagination))
    }

    /// Fetches by trash-object ID or trashed-object ID, classifying the
    /// string by its prefix.
    pub async fn get(&self, id_or_object_id: &str) -> Result<Response<TrashObject>> {
        let (r, _) = TrashObjectRef::lookup(id_or_object_id);
        self.get_by_ref(&r).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Response<TrashObject>> {
        self.get_by_ref(&TrashObjectRef::Id(id.to_string())).await
    }

    pub async fn get_by_object_id(&self, object_id: &str) -> Result<Response<TrashObject>> {
        self.get_by_ref(&TrashObjectRef::ObjectId(object_id.to_string()))
            .await
    }

    async fn get_by_ref(&self, r: &TrashObjectRef) -> Result<Response<TrashObject>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/trash_objects/_",
            &r.query_values(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.trash_object), "trash_object")
    }

    /// Permanently deletes the trashed object. Purging runs in the
    /// background; poll the returned task for completion.
    pub async fn purge(&self, trash: &TrashObjectRef) -> Result<Response<Task>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::DELETE,
            "core/v1/trash_objects/_",
            &trash.query_values(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.task), "task")
    }

    /// Purges everything in the organization's trash.
    pub async fn purge_all(&self, org: &OrganizationRef) -> Result<Response<Task>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::POST,
            "core/v1/organizations/_/trash_objects/purge_all",
            &org.query_values(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.task), "task")
    }

    pub async fn restore(&self, trash: &TrashObjectRef) -> Result<Response<TrashObject>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::POST,
            "core/v1/trash_objects/_/restore",
            &trash.query_values(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.trash_object), "trash_object")
    }
}

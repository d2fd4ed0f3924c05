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
use katapult::query::QueryValues;
use katapult::{Response, Result};
use reqwest::Method;

/// A background job spawned by an asynchronous operation such as a purge or
/// a virtual machine state change.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub status: TaskStatus,
    pub created_at: Option<i64>,
    pub started_at: Option<i64>,
    pub finished_at: Option<i64>,
    pub progress: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ResponseBody {
    task: Option<Task>,
}

#[derive(Clone, Debug)]
pub struct TasksClient {
    inner: katapult::Client,
}

impl TasksClient {
    pub fn new(transport: katapult::Client) -> Self {
        Self { inner: transport }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Response<Task>> {
        let path = format!("core/v1/tasks/{id}");
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            &path,
            &QueryValues::new(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.task), "task")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_decodes() {
        let task: Task = serde_json::from_value(serde_json::json!({
            "id": "task_bdh2OyJUzVYCbsZe",
            "name": "Purge items from trash",
            "status": "completed",
            "progress": 100,
        }))
        .unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.progress, 100);
        assert_eq!(task.finished_at, None);
    }
}

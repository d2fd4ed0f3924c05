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

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use katapult_core::{
        Client, DataCenterRef, DiskTemplateOption, DiskTemplateRef, OrganizationRef,
        VirtualMachineBuildArguments, VirtualMachineBuildState,
    };
    use serde_json::json;

    fn test_client(server: &Server) -> Client {
        let transport = katapult::Client::builder()
            .endpoint(format!("http://{}", server.addr()))
            .api_token("kat_test")
            .build()
            .unwrap();
        Client::new(transport)
    }

    #[tokio::test]
    async fn get_reads_virtual_machine_build_key() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/core/v1/virtual_machines/builds/vmbuild_1",
            ))
            .respond_with(json_encoded(json!({
                "virtual_machine_build": {"id": "vmbuild_1", "state": "complete"},
            }))),
        );

        let client = test_client(&server);
        let response = client.virtual_machine_builds().get_by_id("vmbuild_1").await?;
        assert_eq!(response.body().id, "vmbuild_1");
        assert_eq!(response.body().state, VirtualMachineBuildState::Complete);
        Ok(())
    }

    #[tokio::test]
    async fn get_accepts_legacy_build_key() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/core/v1/virtual_machines/builds/vmbuild_1",
            ))
            .respond_with(json_encoded(json!({
                "build": {"id": "vmbuild_1", "state": "building"},
            }))),
        );

        let client = test_client(&server);
        let response = client.virtual_machine_builds().get_by_id("vmbuild_1").await?;
        assert_eq!(response.body().id, "vmbuild_1");
        assert_eq!(response.body().state, VirtualMachineBuildState::Building);
        Ok(())
    }

    #[tokio::test]
    async fn create_posts_selections() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path("/core/v1/organizations/_/virtual_machines/build"),
                request::body(json_decoded(eq(json!({
                    "organization": {"sub_domain": "acme"},
                    "hostname": "web-01",
                    "data_center": {"permalink": "uk-lon-01"},
                    "disk_template": {"permalink": "templates/ubuntu-22-04"},
                    "disk_template_options": [{"key": "install_agent", "value": "true"}],
                })))),
            ])
            .respond_with(json_encoded(json!({
                "task": {"id": "task_1", "status": "pending"},
                "virtual_machine_build": {"id": "vmbuild_new", "state": "pending"},
            }))),
        );

        let client = test_client(&server);
        let org = OrganizationRef::SubDomain("acme".into());
        let args = VirtualMachineBuildArguments {
            data_center: Some(DataCenterRef::Permalink("uk-lon-01".into())),
            disk_template: Some(DiskTemplateRef::Permalink("templates/ubuntu-22-04".into())),
            disk_template_options: vec![DiskTemplateOption {
                key: "install_agent".into(),
                value: "true".into(),
            }],
            hostname: Some("web-01".into()),
            ..Default::default()
        };
        let response = client.virtual_machine_builds().create(&org, &args).await?;
        assert_eq!(response.body().id, "vmbuild_new");
        assert_eq!(response.body().state, VirtualMachineBuildState::Pending);
        Ok(())
    }
}

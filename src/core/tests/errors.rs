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
    use katapult::error::Category;
    use katapult_core::{
        ApiErrorKind, Client, DnsZoneCreateArguments, ErrorExt, OrganizationRef, VirtualMachineRef,
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
    async fn known_code_surfaces_typed_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/core/v1/organizations/_/dns/zones"))
                .respond_with(status_code(422).body(
                    json!({"error": {
                        "code": "validation_error",
                        "description": "A validation error occurred with the object that was being created/updated/deleted",
                        "detail": {"errors": ["name must be present", "ttl is invalid"]},
                    }})
                    .to_string(),
                )),
        );

        let client = test_client(&server);
        let org = OrganizationRef::SubDomain("acme".into());
        let args = DnsZoneCreateArguments {
            name: "".into(),
            ..Default::default()
        };
        let err = client.dns_zones().create(&org, &args).await.unwrap_err();

        let api = err.api_error().expect("typed taxonomy error");
        assert_eq!(api.code(), "validation_error");
        assert_eq!(api.category(), Category::UnprocessableEntity);
        match api.kind() {
            ApiErrorKind::Validation(Some(detail)) => {
                assert_eq!(detail.errors.len(), 2);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
        assert_eq!(
            format!("{api}"),
            "unprocessable_entity: validation_error: \
             A validation error occurred with the object that was being created/updated/deleted: \
             name must be present, ttl is invalid"
        );
        assert_eq!(err.category(), Some(Category::UnprocessableEntity));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_code_falls_back_to_envelope() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/core/v1/virtual_machines/_"))
                .respond_with(status_code(410).body(
                    json!({"error": {
                        "code": "virtual_machine_archived",
                        "description": "This virtual machine has been archived",
                        "detail": {},
                    }})
                    .to_string(),
                )),
        );

        let client = test_client(&server);
        let err = client
            .virtual_machines()
            .get("vm_gone")
            .await
            .unwrap_err();

        assert!(err.api_error().is_none());
        let envelope = err.response_error().expect("raw envelope");
        assert_eq!(envelope.code, "virtual_machine_archived");
        // Category falls back to the HTTP status when the code is unknown.
        assert_eq!(err.category(), Some(Category::Unknown));
        Ok(())
    }

    #[tokio::test]
    async fn object_in_trash_names_the_trash_object() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path("/core/v1/virtual_machines/_/start"),
                request::query(url_decoded(contains(("virtual_machine[id]", "vm_1")))),
            ])
            .respond_with(status_code(406).body(
                json!({"error": {
                    "code": "object_in_trash",
                    "description": "The object found is in the trash",
                    "detail": {"trash_object": {"id": "trsh_9", "object_id": "vm_1"}},
                }})
                .to_string(),
            )),
        );

        let client = test_client(&server);
        let err = client
            .virtual_machines()
            .start(&VirtualMachineRef::Id("vm_1".into()))
            .await
            .unwrap_err();

        let api = err.api_error().expect("typed taxonomy error");
        assert_eq!(api.category(), Category::NotAcceptable);
        match api.kind() {
            ApiErrorKind::ObjectInTrash(Some(detail)) => {
                let trash = detail.trash_object.as_ref().expect("trash object");
                assert_eq!(trash.id, "trsh_9");
            }
            other => panic!("unexpected kind: {other:?}"),
        }
        assert!(
            format!("{api}").ends_with("trash_object_id=trsh_9"),
            "{api}"
        );
        Ok(())
    }
}

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
    use katapult::ListOptions;
    use katapult_core::{
        Client, IpAddressCreateArguments, IpAddressRef, IpAddressUpdateArguments, IpVersion,
        NetworkRef, OrganizationRef,
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
    async fn list_injects_pagination_and_surfaces_metadata() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path("/core/v1/organizations/_/ip_addresses"),
                request::query(url_decoded(contains(("organization[sub_domain]", "acme")))),
                request::query(url_decoded(contains(("page", "2")))),
                request::query(url_decoded(contains(("per_page", "5")))),
            ])
            .respond_with(json_encoded(json!({
                "pagination": {
                    "current_page": 2,
                    "total_pages": 4,
                    "total": 17,
                    "per_page": 5,
                    "large_set": false,
                },
                "ip_addresses": [
                    {"id": "ip_1", "address": "10.0.0.1"},
                    {"id": "ip_2", "address": "10.0.0.2"},
                ],
            }))),
        );

        let client = test_client(&server);
        let org = OrganizationRef::SubDomain("acme".into());
        let opts = ListOptions::default().page(2).per_page(5);
        let response = client.ip_addresses().list(&org, Some(opts)).await?;

        let pagination = response.pagination().expect("list carries pagination");
        assert_eq!(pagination.current_page, 2);
        assert_eq!(pagination.total, 17);
        let addresses = response.into_body();
        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0].id, "ip_1");
        assert_eq!(addresses[1].address, "10.0.0.2");
        Ok(())
    }

    #[tokio::test]
    async fn create_sends_organization_and_selections() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path("/core/v1/organizations/_/ip_addresses"),
                request::body(json_decoded(eq(json!({
                    "organization": {"sub_domain": "acme"},
                    "network": {"permalink": "prod"},
                    "version": "ipv4",
                    "vip": true,
                })))),
            ])
            .respond_with(json_encoded(json!({
                "ip_address": {"id": "ip_new", "address": "185.1.2.3", "vip": true},
            }))),
        );

        let client = test_client(&server);
        let org = OrganizationRef::SubDomain("acme".into());
        let args = IpAddressCreateArguments {
            network: Some(NetworkRef::Permalink("prod".into())),
            version: Some(IpVersion::V4),
            vip: Some(true),
            label: None,
        };
        let response = client.ip_addresses().create(&org, &args).await?;
        assert_eq!(response.body().id, "ip_new");
        assert!(response.body().vip);
        Ok(())
    }

    #[tokio::test]
    async fn update_identifies_address_in_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("PATCH"),
                request::path("/core/v1/ip_addresses/_"),
                request::body(json_decoded(eq(json!({
                    "ip_address": {"id": "ip_1"},
                    "reverse_dns": "mail.example.com",
                })))),
            ])
            .respond_with(json_encoded(json!({
                "ip_address": {"id": "ip_1", "reverse_dns": "mail.example.com"},
            }))),
        );

        let client = test_client(&server);
        let args = IpAddressUpdateArguments {
            reverse_dns: Some("mail.example.com".into()),
            ..Default::default()
        };
        let response = client
            .ip_addresses()
            .update(&IpAddressRef::Id("ip_1".into()), &args)
            .await?;
        assert_eq!(response.body().reverse_dns, "mail.example.com");
        Ok(())
    }

    #[tokio::test]
    async fn delete_passes_ref_as_query_filter() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path("/core/v1/ip_addresses/_"),
                request::query(url_decoded(contains(("ip_address[address]", "10.0.0.1")))),
            ])
            .respond_with(status_code(200).body("{}")),
        );

        let client = test_client(&server);
        let response = client
            .ip_addresses()
            .delete(&IpAddressRef::Address("10.0.0.1".into()))
            .await?;
        assert_eq!(response.status().as_u16(), 200);
        Ok(())
    }

    #[tokio::test]
    async fn get_missing_body_key_is_deserialization_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/core/v1/ip_addresses/_"))
                .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server);
        let err = client
            .ip_addresses()
            .get_by_id("ip_1")
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert!(format!("{err}").contains("ip_address"), "{err}");
        Ok(())
    }
}

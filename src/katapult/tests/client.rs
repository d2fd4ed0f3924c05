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
    use katapult::error::{Category, ResponseError};
    use katapult::query::QueryValues;
    use serde_json::json;

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
    struct TestBody {
        hello: String,
    }

    fn test_client(server: &Server) -> katapult::Client {
        katapult::Client::builder()
            .endpoint(format!("http://{}", server.addr()))
            .api_token("kat_test")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn success_decodes_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path("/core/v1/networks/_"),
                request::query(url_decoded(contains(("network[permalink]", "prod")))),
            ])
            .respond_with(json_encoded(json!({"hello": "world"}))),
        );

        let client = test_client(&server);
        let mut query = QueryValues::new();
        query.set("network[permalink]", "prod");
        let response = client
            .execute::<(), TestBody>(reqwest::Method::GET, "core/v1/networks/_", &query, None)
            .await?;
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(
            response.into_body(),
            TestBody {
                hello: "world".into()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn sends_auth_and_user_agent_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path("/core/v1/dns/zones"),
                request::headers(contains(("authorization", "Bearer kat_test"))),
                request::headers(contains(("user-agent", katapult::DEFAULT_USER_AGENT))),
                request::body(json_decoded(eq(json!({"name": "example.com"})))),
            ])
            .respond_with(json_encoded(json!({"hello": "created"}))),
        );

        let client = test_client(&server);
        let body = json!({"name": "example.com"});
        let response = client
            .execute::<serde_json::Value, TestBody>(
                reqwest::Method::POST,
                "core/v1/dns/zones",
                &QueryValues::new(),
                Some(&body),
            )
            .await?;
        assert_eq!(response.body().hello, "created");
        Ok(())
    }

    #[tokio::test]
    async fn error_envelope_becomes_service_error() -> Result<()> {
        let server = Server::run();
        let body = json!({"error": {
            "code": "network_not_found",
            "description": "No network was found matching any of the criteria",
            "detail": {},
        }});
        server.expect(
            Expectation::matching(request::method_path("GET", "/core/v1/networks/_"))
                .respond_with(status_code(404).body(body.to_string())),
        );

        let client = test_client(&server);
        let got = client
            .execute::<(), serde_json::Value>(
                reqwest::Method::GET,
                "core/v1/networks/_",
                &QueryValues::new(),
                None,
            )
            .await;
        let err = got.unwrap_err();
        assert!(err.is_service(), "{err:?}");
        let envelope = err.as_inner::<ResponseError>().expect("service envelope");
        assert_eq!(envelope.code, "network_not_found");
        assert_eq!(envelope.category(), Category::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn unrecognizable_error_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/core/v1/networks/_"))
                .respond_with(status_code(500).body("<html>bad gateway</html>")),
        );

        let client = test_client(&server);
        let got = client
            .execute::<(), serde_json::Value>(
                reqwest::Method::GET,
                "core/v1/networks/_",
                &QueryValues::new(),
                None,
            )
            .await;
        let err = got.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert!(format!("{err}").contains("500"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn empty_success_body_decodes_to_default() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/core/v1/ip_addresses/_"))
                .respond_with(status_code(204)),
        );

        let client = test_client(&server);
        let response = client
            .execute::<(), TestBody>(
                reqwest::Method::DELETE,
                "core/v1/ip_addresses/_",
                &QueryValues::new(),
                None,
            )
            .await?;
        assert_eq!(response.status(), http::StatusCode::NO_CONTENT);
        assert_eq!(response.into_body(), TestBody::default());
        Ok(())
    }
}

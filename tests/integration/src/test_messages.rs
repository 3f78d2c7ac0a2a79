//! Message API integration tests against a running Relay server.

#[cfg(test)]
mod tests {
    use relay_client::{ClientError, MessageApi};

    use crate::{endpoint_url, message_client, raw_client, test_message_text};

    // -----------------------------------------------------------------------
    // Client-level behavior
    // -----------------------------------------------------------------------

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_round_trip_created_message() {
        let client = message_client();
        let text = test_message_text("roundtrip");

        let created = client.create(&text).await.unwrap();
        assert_eq!(created.message, text);
        assert!(!created.id.is_empty());

        let fetched = client.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_increment_count_per_create() {
        let client = message_client();

        let before = client.count().await.unwrap();
        for _ in 0..3 {
            client.create(&test_message_text("count")).await.unwrap();
        }
        let after = client.count().await.unwrap();

        assert_eq!(after, before + 3);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_report_not_found_for_unknown_id() {
        let client = message_client();

        let err = client.get("doesnotexist").await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("doesnotexist"));
            }
            other => panic!("expected api error, got {other}"),
        }
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_assign_distinct_ids_to_concurrent_creates() {
        let client = message_client();
        let text = test_message_text("concurrent");

        let creates = (0..4).map(|_| client.create(&text));
        let records = futures::future::try_join_all(creates).await.unwrap();

        for (i, a) in records.iter().enumerate() {
            assert_eq!(a.message, text);
            for b in &records[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }

        // Every record remains independently retrievable.
        for record in &records {
            let fetched = client.get(&record.id).await.unwrap();
            assert_eq!(&fetched, record);
        }
    }

    // -----------------------------------------------------------------------
    // Wire-level shapes
    // -----------------------------------------------------------------------

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_answer_create_with_201_and_record_body() {
        let http = raw_client();

        let resp = http
            .post(format!("{}/messages", endpoint_url()))
            .body("hello")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["message"], "hello");
        assert!(body["id"].is_string());
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_answer_count_with_camel_case_field() {
        let http = raw_client();

        let resp = http
            .get(format!("{}/messages", endpoint_url()))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert!(body["messageCount"].is_u64());
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_strip_surrounding_quotes_from_body() {
        let http = raw_client();

        let resp = http
            .post(format!("{}/messages", endpoint_url()))
            .body("\"quoted hello\"")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["message"], "quoted hello");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_delete_with_405() {
        let http = raw_client();

        let resp = http
            .delete(format!("{}/messages", endpoint_url()))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 405);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_answer_preflight_with_cors_headers() {
        let http = raw_client();

        let resp = http
            .request(
                reqwest::Method::OPTIONS,
                format!("{}/messages", endpoint_url()),
            )
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 204);
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*"),
        );
        assert_eq!(
            resp.headers()
                .get("access-control-allow-methods")
                .and_then(|v| v.to_str().ok()),
            Some("OPTIONS,POST,GET"),
        );
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_attach_request_id_to_responses() {
        let http = raw_client();

        let resp = http
            .get(format!("{}/messages", endpoint_url()))
            .send()
            .await
            .unwrap();
        assert!(resp.headers().get("x-request-id").is_some());
    }
}

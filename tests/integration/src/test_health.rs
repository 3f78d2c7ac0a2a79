//! Health endpoint integration tests.

#[cfg(test)]
mod tests {
    use crate::{endpoint_url, raw_client};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_report_running_service() {
        let http = raw_client();

        let resp = http
            .get(format!("{}/health", endpoint_url()))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["services"]["messages"], "running");
    }
}

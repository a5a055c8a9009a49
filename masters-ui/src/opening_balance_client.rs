use async_trait::async_trait;

use masters_core::models::{CreateOpeningBalanceRequest, OpeningBalanceDetail, OpeningBalanceSummary};

use crate::errors::Result;
use crate::http_client::ApiClient;

const OPENING_BALANCE_PATH: &str = "/invoices/opening-balance";

#[async_trait]
pub trait OpeningBalanceRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<OpeningBalanceSummary>>;

    async fn get_detail(&self, id: &str) -> Result<OpeningBalanceDetail>;

    async fn create(&self, request: &CreateOpeningBalanceRequest) -> Result<OpeningBalanceSummary>;

    async fn update(
        &self,
        id: &str,
        request: &CreateOpeningBalanceRequest,
    ) -> Result<OpeningBalanceSummary>;
}

#[derive(Debug, Clone)]
pub struct OpeningBalanceClient {
    api: ApiClient,
}

impl OpeningBalanceClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OpeningBalanceRepository for OpeningBalanceClient {
    async fn list(&self) -> Result<Vec<OpeningBalanceSummary>> {
        self.api.get(OPENING_BALANCE_PATH).await
    }

    async fn get_detail(&self, id: &str) -> Result<OpeningBalanceDetail> {
        self.api
            .get(&format!("{}/{}", OPENING_BALANCE_PATH, id))
            .await
    }

    async fn create(&self, request: &CreateOpeningBalanceRequest) -> Result<OpeningBalanceSummary> {
        log::info!(
            "Creating opening balance {} with {} lines",
            request.ref_no,
            request.lines.len()
        );
        self.api.post(OPENING_BALANCE_PATH, request).await
    }

    async fn update(
        &self,
        id: &str,
        request: &CreateOpeningBalanceRequest,
    ) -> Result<OpeningBalanceSummary> {
        log::info!("Updating opening balance {}", id);
        self.api
            .patch(&format!("{}/{}", OPENING_BALANCE_PATH, id), request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use masters_core::OpeningBalanceDocument;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_posts_normalised_document() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/invoices/opening-balance"))
            .and(body_partial_json(json!({
                "refNo": "OB-1",
                "date": "2024-01-31",
                "warehouseId": "w1",
                "remark": null,
                "lines": [{"stockDetailId": "d1", "qty": 3.0, "purchasePrice": 1500.0, "amount": 4500.0}]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "ob1",
                "invoice": "OB-1",
                "date": "2024-01-31",
                "warehouse": "w1",
                "currency": "IDR",
                "amount": 4500
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut doc = OpeningBalanceDocument::new();
        doc.ref_no = "OB-1".to_string();
        doc.date = "2024-01-31".to_string();
        doc.warehouse_id = Some("w1".to_string());
        doc.add_empty_line();
        doc.lines[0].stock_detail_id = "d1".to_string();
        doc.set_purchase_price(0, 1500.0).unwrap();
        doc.set_qty(0, 3.0).unwrap();

        let client = OpeningBalanceClient::new(ApiClient::new(&ClientConfig::with_api_url(server.uri())));
        let summary = client.create(&doc.to_request().unwrap()).await.unwrap();

        assert_eq!(summary.id, "ob1");
        assert_eq!(summary.amount, 4500.0);
    }
}

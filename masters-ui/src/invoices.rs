use async_trait::async_trait;

use masters_core::models::{InvoicePayload, PartyInvoice, PartyKind};

use crate::errors::Result;
use crate::http_client::ApiClient;

/// Opening invoices attached to a customer or supplier.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn list(&self, kind: PartyKind, party_id: &str) -> Result<Vec<PartyInvoice>>;

    /// Creates rows without an id and updates the rest, in one request.
    async fn save_bulk(
        &self,
        kind: PartyKind,
        party_id: &str,
        invoices: &[InvoicePayload],
    ) -> Result<()>;

    async fn delete(&self, invoice_id: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct PartyInvoiceClient {
    api: ApiClient,
}

impl PartyInvoiceClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl InvoiceRepository for PartyInvoiceClient {
    async fn list(&self, kind: PartyKind, party_id: &str) -> Result<Vec<PartyInvoice>> {
        self.api
            .get(&format!("/invoices/{}/{}", kind.as_path(), party_id))
            .await
    }

    async fn save_bulk(
        &self,
        kind: PartyKind,
        party_id: &str,
        invoices: &[InvoicePayload],
    ) -> Result<()> {
        log::info!(
            "Saving {} invoices for {} {}",
            invoices.len(),
            kind,
            party_id
        );
        self.api
            .post_discard(
                &format!("/invoices/{}/{}/bulk", kind.as_path(), party_id),
                invoices,
            )
            .await
    }

    async fn delete(&self, invoice_id: &str) -> Result<()> {
        self.api.delete(&format!("/invoices/{}", invoice_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use masters_core::models::EditableInvoice;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn bulk_save_posts_payload_array() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/invoices/supplier/s1/bulk"))
            .and(body_json(json!([{
                "refNo": "INV-1",
                "date": "2024-05-01",
                "warehouseId": "w1",
                "exchangeId": "c1",
                "value": 10.0,
                "remark": null,
                "salesmanId": "..default..............",
                "opening": 1
            }])))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let row = EditableInvoice {
            invoice: Some("INV-1".to_string()),
            date: Some("2024-05-01".to_string()),
            warehouse: Some("w1".to_string()),
            currency: Some("c1".to_string()),
            amount: Some(10.0),
            ..Default::default()
        };
        let client = PartyInvoiceClient::new(ApiClient::new(&ClientConfig::with_api_url(server.uri())));
        client
            .save_bulk(PartyKind::Supplier, "s1", &[row.to_payload()])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn invoices_listed_per_party() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/invoices/customer/c9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "i1",
                "invoice": "INV-1",
                "date": "2024-05-01T00:00:00.000Z",
                "warehouse": "w1",
                "currency": "c1",
                "amount": 99.5,
                "rem": 10
            }])))
            .mount(&server)
            .await;

        let client = PartyInvoiceClient::new(ApiClient::new(&ClientConfig::with_api_url(server.uri())));
        let invoices = client.list(PartyKind::Customer, "c9").await.unwrap();

        assert_eq!(invoices[0].rem, Some(10.0));
        let editable = EditableInvoice::from(&invoices[0]);
        assert_eq!(editable.date.as_deref(), Some("2024-05-01"));
    }
}

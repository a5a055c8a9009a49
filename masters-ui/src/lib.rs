//! Client side of the inventory master-data screens: HTTP transport,
//! per-resource clients and the action-driven screen controllers.

pub mod config;
pub mod errors;
pub mod http_client;
pub mod invoices;
pub mod masters;
pub mod notifications;
pub mod opening_balance;
pub mod opening_balance_client;
pub mod parties;
pub mod resource;
pub mod stock_details;
pub mod upload;

#[cfg(test)]
mod testing;

use std::sync::Arc;
use std::time::Duration;

use masters_core::models::{Unit, Warehouse};
use masters_core::Entity;

pub use config::ClientConfig;
pub use errors::{ApiError, BatchOutcome, ErrorClass};
pub use http_client::{ApiClient, LoadingState};
pub use notifications::{Notification, NotificationCenter, Severity};
pub use resource::{Repository, ResourceClient};

use invoices::PartyInvoiceClient;
use masters::MasterManager;
use opening_balance::{OpeningBalanceManager, OpeningBalanceRepositories};
use opening_balance_client::OpeningBalanceClient;
use parties::{PartyEntity, PartyManager, PartyRepositories};
use stock_details::StockDetailClient;
use upload::UploadClient;

/// Every client built over one shared [`ApiClient`], so all screens drive
/// the same loading indicator.
#[derive(Debug, Clone)]
pub struct Clients {
    pub api: ApiClient,
    pub stock_details: StockDetailClient,
    pub invoices: PartyInvoiceClient,
    pub opening_balances: OpeningBalanceClient,
    pub upload: UploadClient,
    notification_life: Duration,
}

impl Clients {
    pub fn new(config: &ClientConfig) -> Self {
        let api = ApiClient::new(config);
        Self {
            stock_details: StockDetailClient::new(api.clone()),
            invoices: PartyInvoiceClient::new(api.clone()),
            opening_balances: OpeningBalanceClient::new(api.clone()),
            upload: UploadClient::new(api.clone()),
            api,
            notification_life: config.notification_life(),
        }
    }

    /// An empty toast queue using the configured notification life.
    pub fn notifications(&self) -> NotificationCenter {
        NotificationCenter::new(self.notification_life)
    }

    pub fn master_manager<E: Entity + 'static>(&self) -> MasterManager<E> {
        MasterManager::new(self.resource::<E>()).with_notifications(self.notifications())
    }

    pub fn party_manager<E: PartyEntity>(&self) -> PartyManager<E> {
        PartyManager::new(self.resource::<E>(), self.party_repositories())
            .with_notifications(self.notifications())
    }

    pub fn opening_balance_manager(&self) -> OpeningBalanceManager {
        OpeningBalanceManager::new(self.opening_balance_repositories())
            .with_notifications(self.notifications())
    }

    pub fn resource<E: Entity + 'static>(&self) -> Arc<dyn Repository<E>> {
        Arc::new(ResourceClient::<E>::new(self.api.clone()))
    }

    /// Lookups fetched by the customer and supplier screens. These load in
    /// the background and do not drive the loading indicator.
    pub fn party_repositories(&self) -> PartyRepositories {
        let quiet = self.api.without_loading();
        PartyRepositories {
            invoices: Arc::new(PartyInvoiceClient::new(quiet.clone())),
            cities: Arc::new(ResourceClient::new(quiet.clone())),
            warehouses: Arc::new(ResourceClient::new(quiet.clone())),
            currencies: Arc::new(ResourceClient::new(quiet)),
        }
    }

    pub fn opening_balance_repositories(&self) -> OpeningBalanceRepositories {
        OpeningBalanceRepositories {
            opening_balances: Arc::new(self.opening_balances.clone()),
            stock_details: Arc::new(self.stock_details.clone()),
            warehouses: Arc::new(ResourceClient::<Warehouse>::new(self.api.clone())),
            units: Arc::new(ResourceClient::<Unit>::new(self.api.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn configured_notification_life_shortens_errors() {
        let config = ClientConfig {
            notification_life_ms: 1000,
            ..ClientConfig::with_api_url("http://localhost:3000/api")
        };
        let mut short = Clients::new(&config).notifications();
        let mut standard = Clients::new(&ClientConfig::default()).notifications();
        short.error("Failed to load Banks");
        standard.error("Failed to load Banks");

        let later = Instant::now() + Duration::from_millis(1500);
        assert!(short.active(later).is_empty());
        assert_eq!(standard.active(later).len(), 1);
    }
}

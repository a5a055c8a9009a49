//! Generic CRUD over a master collection.

use async_trait::async_trait;
use std::marker::PhantomData;

use masters_core::models::{
    Bank, Brand, City, Currency, Customer, Salesman, Stock, StockGroup, Supplier, Unit, Warehouse,
};
use masters_core::{Entity, EntityForm};

use crate::errors::Result;
use crate::http_client::ApiClient;

/// Data access for one entity type. Controllers only see this trait, so
/// they can run against the HTTP client or an in-memory store.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    async fn list(&self) -> Result<Vec<E>>;

    async fn get(&self, id: &str) -> Result<E>;

    async fn create(&self, form: &E::Form) -> Result<E>;

    /// Partial update: only the fields set on `form` are sent.
    async fn update(&self, id: &str, form: &E::Form) -> Result<E>;

    async fn delete(&self, id: &str) -> Result<()>;
}

/// REST client for `E`'s collection: GET/POST on the collection,
/// GET/PATCH/DELETE on `/{id}`.
#[derive(Debug, Clone)]
pub struct ResourceClient<E> {
    api: ApiClient,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> ResourceClient<E> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _entity: PhantomData,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", E::RESOURCE_PATH, id)
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for ResourceClient<E> {
    async fn list(&self) -> Result<Vec<E>> {
        self.api.get(E::RESOURCE_PATH).await
    }

    async fn get(&self, id: &str) -> Result<E> {
        self.api.get(&Self::item_path(id)).await
    }

    async fn create(&self, form: &E::Form) -> Result<E> {
        log::info!("Creating {}", E::SINGULAR);
        self.api.post(E::RESOURCE_PATH, &form.to_payload()).await
    }

    async fn update(&self, id: &str, form: &E::Form) -> Result<E> {
        log::info!("Updating {} {}", E::SINGULAR, id);
        self.api.patch(&Self::item_path(id), &form.to_payload()).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        log::info!("Deleting {} {}", E::SINGULAR, id);
        self.api.delete(&Self::item_path(id)).await
    }
}

pub type BankClient = ResourceClient<Bank>;
pub type BrandClient = ResourceClient<Brand>;
pub type CityClient = ResourceClient<City>;
pub type UnitClient = ResourceClient<Unit>;
pub type WarehouseClient = ResourceClient<Warehouse>;
pub type StockGroupClient = ResourceClient<StockGroup>;
pub type StockClient = ResourceClient<Stock>;
pub type CurrencyClient = ResourceClient<Currency>;
pub type SalesmanClient = ResourceClient<Salesman>;
pub type SupplierClient = ResourceClient<Supplier>;
pub type CustomerClient = ResourceClient<Customer>;

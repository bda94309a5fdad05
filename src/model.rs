use chrono::NaiveDateTime;
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(
    Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize,
    Deserialize,
)]
pub enum Marketplace {
    #[default]
    #[display(fmt = "Ozon")]
    Ozon,
    #[display(fmt = "Wildberries")]
    Wildberries,
    #[display(fmt = "Uzum")]
    Uzum,
}

/// Listing order is load-bearing: per-day top-marketplace ties resolve to the
/// earliest entry here.
pub const MARKETPLACES: [Marketplace; 3] = [
    Marketplace::Ozon,
    Marketplace::Wildberries,
    Marketplace::Uzum,
];

pub type Money = f64;

/// One completed sale as delivered by the upstream data source. Never mutated
/// after creation; `id` is unique across the whole sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: String,
    pub date: NaiveDateTime,
    pub amount: Money,
    pub items: u32,
    pub marketplace: Marketplace,
}

/// Catalog entry. `stock` and `threshold` are set independently; neither is
/// guaranteed to be above the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub stock: u32,
    pub threshold: u32,
    pub price: Money,
    pub marketplace: Marketplace,
    pub category: String,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct DataSet {
    pub sales: Vec<SaleRecord>,
    pub products: Vec<Product>,
}

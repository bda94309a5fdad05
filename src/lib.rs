//! Filtering and aggregation core behind a marketplace sales dashboard:
//! date-range filtering, per-day bucketed turnover with marketplace
//! breakdown, KPI reduction, and stock-based ad-spend recommendations.
//! Everything is a pure function over immutable inputs; the caller owns all
//! state and re-invokes on every filter change.

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod recommend;
pub mod summary;
pub mod utils;

pub use aggregate::{aggregate_by_day, DayBucket};
pub use filter::{filter_by_range, filter_catalog, DateRangeFilter, MarketplaceScope};
pub use loader::{DataLoader, JsonDataLoader, MockDataLoader};
pub use model::{DataSet, Marketplace, Money, Product, SaleRecord, MARKETPLACES};
pub use recommend::{
    classify, filter_products, recommendation_counts, AdProduct, Recommendation,
    RecommendationCounts, RecommendationFilter,
};
pub use summary::{low_stock_products, marketplace_share, summarize, SummaryStats};

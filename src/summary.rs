use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::{Marketplace, Money, Product, SaleRecord, MARKETPLACES};
use crate::utils::safe_ratio;

/// Top-line KPIs for the dashboard cards.
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_turnover: Money,
    pub total_sales_count: usize,
    pub low_stock_count: usize,
    pub total_stock: u64,
}

impl SummaryStats {
    pub fn average_order_value(&self) -> Money {
        safe_ratio(self.total_turnover, self.total_sales_count)
    }
}

/// Reduces pre-filtered sales and products to the four KPI scalars. The
/// catalog carries no timestamp, so its figures follow only the marketplace
/// scope, never the date range. Empty inputs yield all zeros.
pub fn summarize(sales: &[SaleRecord], products: &[Product]) -> SummaryStats {
    SummaryStats {
        total_turnover: sales.iter().map(|s| s.amount).sum(),
        total_sales_count: sales.len(),
        low_stock_count: products.iter().filter(|p| p.stock <= p.threshold).count(),
        total_stock: products.iter().map(|p| u64::from(p.stock)).sum(),
    }
}

/// Turnover per marketplace over the full record set. Market-share comparison
/// is deliberately independent of the date-range filter, so callers pass the
/// unfiltered sales here. All three marketplaces are present in the result
/// even at zero.
pub fn marketplace_share(sales: &[SaleRecord]) -> BTreeMap<Marketplace, Money> {
    let mut share: BTreeMap<Marketplace, Money> =
        MARKETPLACES.iter().map(|&mp| (mp, 0.0)).collect();

    for sale in sales {
        *share.entry(sale.marketplace).or_insert(0.0) += sale.amount;
    }

    share
}

/// Products at or below their reorder threshold, catalog order preserved.
/// Feeds the attention list on the dashboard.
pub fn low_stock_products(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.stock <= p.threshold)
        .cloned()
        .collect_vec()
}

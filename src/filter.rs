use chrono::{Duration, NaiveDate};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::{Marketplace, Product, SaleRecord};

/// Date-range selection as the analytics view exposes it: a rolling preset
/// window or an explicit pair of bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateRangeFilter {
    Preset { days: u32 },
    Custom { start: NaiveDate, end: NaiveDate },
}

impl DateRangeFilter {
    /// Concrete inclusive day bounds, or `None` when the range cannot be
    /// satisfied (inverted custom bounds, zero-day preset). `today` is passed
    /// in so resolution stays deterministic; the caller owns the clock.
    pub fn resolve(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            DateRangeFilter::Preset { days } => {
                if days == 0 {
                    return None;
                }
                Some((today - Duration::days(days as i64 - 1), today))
            }
            DateRangeFilter::Custom { start, end } => (start <= end).then_some((start, end)),
        }
    }
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketplaceScope {
    #[default]
    All,
    Only(Marketplace),
}

impl MarketplaceScope {
    pub fn admits(&self, marketplace: Marketplace) -> bool {
        match *self {
            MarketplaceScope::All => true,
            MarketplaceScope::Only(mp) => mp == marketplace,
        }
    }
}

/// Keeps records whose calendar day of occurrence falls inside the resolved
/// range, optionally narrowed to one marketplace. Comparison is at day
/// granularity, so a record anywhere within a boundary day is kept. An
/// unresolvable range yields an empty result rather than an error; this is
/// display-filter logic, not a correctness-critical path.
pub fn filter_by_range(
    records: &[SaleRecord],
    range: &DateRangeFilter,
    scope: MarketplaceScope,
    today: NaiveDate,
) -> Vec<SaleRecord> {
    let Some((start, end)) = range.resolve(today) else {
        return Vec::new();
    };

    records
        .iter()
        .filter(|r| {
            let day = r.date.date();
            start <= day && day <= end && scope.admits(r.marketplace)
        })
        .cloned()
        .collect_vec()
}

/// Catalog narrowed to one marketplace. The catalog carries no timestamp, so
/// this is the only filter that applies to products on the dashboard.
pub fn filter_catalog(products: &[Product], scope: MarketplaceScope) -> Vec<Product> {
    products
        .iter()
        .filter(|p| scope.admits(p.marketplace))
        .cloned()
        .collect_vec()
}

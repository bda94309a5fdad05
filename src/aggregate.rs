use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::{Marketplace, Money, SaleRecord, MARKETPLACES};
use crate::utils::safe_ratio;

/// One calendar day of sales, built fresh per query and discarded after use.
/// Identity is the full date (year included), so the same month-day in
/// different years never merges into one bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub total_amount: Money,
    pub sales_count: usize,
    pub by_marketplace: BTreeMap<Marketplace, Money>,
    /// Timestamp of the first record folded into this bucket.
    pub first_seen: NaiveDateTime,
}

impl DayBucket {
    fn open(date: NaiveDate, first_seen: NaiveDateTime) -> Self {
        Self {
            date,
            total_amount: 0.0,
            sales_count: 0,
            by_marketplace: MARKETPLACES.iter().map(|&mp| (mp, 0.0)).collect(),
            first_seen,
        }
    }

    /// Chart/table label, "Mar 05" style.
    pub fn label(&self) -> String {
        self.date.format("%b %d").to_string()
    }

    pub fn average_order_value(&self) -> Money {
        safe_ratio(self.total_amount, self.sales_count)
    }

    /// Marketplace with the strictly greatest turnover this day. Exact ties
    /// resolve to the earliest entry in the fixed marketplace listing.
    pub fn top_marketplace(&self) -> Marketplace {
        let mut best = MARKETPLACES[0];
        let mut best_amount = self.by_marketplace.get(&best).copied().unwrap_or(0.0);

        for &mp in &MARKETPLACES[1..] {
            let amount = self.by_marketplace.get(&mp).copied().unwrap_or(0.0);
            if amount > best_amount {
                best = mp;
                best_amount = amount;
            }
        }

        best
    }
}

/// Folds records into per-day buckets, ascending by each bucket's first-seen
/// timestamp. Bucket membership is the record's local calendar day; every
/// record lands in exactly one bucket and one marketplace slot.
pub fn aggregate_by_day(records: &[SaleRecord]) -> Vec<DayBucket> {
    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for record in records {
        let day = record.date.date();
        let bucket = buckets
            .entry(day)
            .or_insert_with(|| DayBucket::open(day, record.date));

        bucket.total_amount += record.amount;
        bucket.sales_count += 1;
        *bucket.by_marketplace.entry(record.marketplace).or_insert(0.0) += record.amount;
    }

    // Key order is date order, which matches first-seen order because each
    // first_seen maps to its own key.
    buckets.into_values().collect()
}

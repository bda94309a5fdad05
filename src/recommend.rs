use derive_more::Display;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::Product;

/// Ad-spend recommendation derived per product, never stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Recommendation {
    #[display(fmt = "Turn On")]
    TurnOn,
    #[display(fmt = "Turn Off")]
    TurnOff,
    #[display(fmt = "Don't Touch")]
    Maintain,
}

/// Stock pressure decides the spend: at or below the reorder threshold means
/// stockout risk, more than four thresholds on hand means surplus to move.
/// Total over non-negative integers; a zero threshold turns any positive
/// stock into `TurnOn` and zero stock into `TurnOff`.
pub fn classify(stock: u32, threshold: u32) -> Recommendation {
    if stock <= threshold {
        Recommendation::TurnOff
    } else if u64::from(stock) > u64::from(threshold) * 4 {
        Recommendation::TurnOn
    } else {
        Recommendation::Maintain
    }
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationFilter {
    #[default]
    All,
    Only(Recommendation),
}

impl RecommendationFilter {
    pub fn admits(&self, recommendation: Recommendation) -> bool {
        match *self {
            RecommendationFilter::All => true,
            RecommendationFilter::Only(wanted) => wanted == recommendation,
        }
    }
}

/// A catalog entry with its recommendation attached, as the ad optimizer
/// table consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdProduct {
    pub product: Product,
    pub recommendation: Recommendation,
}

/// Annotates every product with its recommendation, then keeps those matching
/// the search text (case-insensitive substring of name or SKU; empty matches
/// everything) AND the recommendation filter. Stable: catalog order survives.
pub fn filter_products(
    products: &[Product],
    search: &str,
    filter: RecommendationFilter,
) -> Vec<AdProduct> {
    let needle = search.to_lowercase();

    products
        .iter()
        .map(|p| AdProduct {
            recommendation: classify(p.stock, p.threshold),
            product: p.clone(),
        })
        .filter(|ad| {
            let matches_search = needle.is_empty()
                || ad.product.name.to_lowercase().contains(&needle)
                || ad.product.sku.to_lowercase().contains(&needle);
            matches_search && filter.admits(ad.recommendation)
        })
        .collect_vec()
}

/// Tallies for the three ad optimizer stat cards, computed over whatever list
/// the view currently shows.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationCounts {
    pub turn_on: usize,
    pub turn_off: usize,
    pub maintain: usize,
}

pub fn recommendation_counts(annotated: &[AdProduct]) -> RecommendationCounts {
    let mut counts = RecommendationCounts::default();

    for ad in annotated {
        match ad.recommendation {
            Recommendation::TurnOn => counts.turn_on += 1,
            Recommendation::TurnOff => counts.turn_off += 1,
            Recommendation::Maintain => counts.maintain += 1,
        }
    }

    counts
}

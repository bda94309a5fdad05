use std::{fs::File, io::BufReader, path::Path};

use chrono::{Duration, Local, NaiveDate, NaiveTime};
use rand::Rng;

use crate::model::{DataSet, Marketplace, Money, Product, SaleRecord, MARKETPLACES};

pub trait DataLoader {
    fn load() -> eyre::Result<DataSet>;
}

/// Synthetic data source for demos and development.
pub struct MockDataLoader {}

impl DataLoader for MockDataLoader {
    fn load() -> eyre::Result<DataSet> {
        Ok(DataSet {
            sales: generate_sales(Local::now().date_naive()),
            products: demo_catalog(),
        })
    }
}

/// File-backed data source: one `DataSet` as JSON.
pub struct JsonDataLoader {}

impl DataLoader for JsonDataLoader {
    fn load() -> eyre::Result<DataSet> {
        JsonDataLoader::load_from("./data/dataset.json")
    }
}

impl JsonDataLoader {
    pub fn load_from(path: impl AsRef<Path>) -> eyre::Result<DataSet> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// Ninety days of synthetic sales ending at `today`: one to five sales per
/// marketplace per day, amounts in 50..550, one to three items each.
pub fn generate_sales(today: NaiveDate) -> Vec<SaleRecord> {
    let mut rng = rand::thread_rng();
    let mut sales = Vec::new();

    for back in 0..90i64 {
        let stamp = (today - Duration::days(back)).and_time(NaiveTime::MIN);

        for &mp in &MARKETPLACES {
            let count = rng.gen_range(1..=5);
            for n in 0..count {
                sales.push(SaleRecord {
                    id: format!("{back}-{mp}-{n}"),
                    date: stamp,
                    amount: rng.gen_range(50.0..550.0),
                    items: rng.gen_range(1..=3),
                    marketplace: mp,
                });
            }
        }
    }

    sales
}

pub fn demo_catalog() -> Vec<Product> {
    fn entry(
        id: &str,
        name: &str,
        sku: &str,
        stock: u32,
        threshold: u32,
        price: Money,
        marketplace: Marketplace,
        category: &str,
    ) -> Product {
        Product {
            id: id.to_owned(),
            name: name.to_owned(),
            sku: sku.to_owned(),
            stock,
            threshold,
            price,
            marketplace,
            category: category.to_owned(),
        }
    }

    vec![
        entry("1", "Premium Wireless Headphones", "WH-1000XM4", 12, 15, 299.99, Marketplace::Ozon, "Electronics"),
        entry("2", "Mechanical Keyboard", "KBD-RGB-80", 45, 20, 129.50, Marketplace::Uzum, "Computing"),
        entry("3", "Ergonomic Desk Chair", "CH-ERG-01", 3, 5, 349.00, Marketplace::Ozon, "Furniture"),
        entry("4", "USB-C Hub 7-in-1", "HUB-71", 150, 30, 45.00, Marketplace::Wildberries, "Accessories"),
        entry("5", "Smart Watch Series 7", "SW-S7-BLK", 8, 10, 399.00, Marketplace::Uzum, "Wearables"),
        entry("6", "Leather Laptop Sleeve", "LS-LTH-14", 2, 10, 59.99, Marketplace::Ozon, "Accessories"),
        entry("7", "Noise Cancelling Earbuds", "EB-NC-02", 65, 15, 189.00, Marketplace::Wildberries, "Electronics"),
        entry("8", "4K Gaming Monitor", "MON-4K-27", 5, 8, 549.99, Marketplace::Uzum, "Computing"),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Duration, NaiveDate};
    use itertools::Itertools;

    use super::{demo_catalog, generate_sales, DataLoader, JsonDataLoader, MockDataLoader};
    use crate::aggregate::aggregate_by_day;
    use crate::filter::{filter_by_range, DateRangeFilter, MarketplaceScope};
    use crate::model::DataSet;
    use crate::summary::summarize;

    #[test]
    fn unittest_mock_data_loader() -> eyre::Result<()> {
        let data = MockDataLoader::load()?;

        assert_eq!(data.products.len(), 8);
        assert!(!data.sales.is_empty());

        let ids: HashSet<&str> = data.sales.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), data.sales.len());

        Ok(())
    }

    #[test]
    fn unittest_generated_sales_stay_in_bounds() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let sales = generate_sales(today);

        let oldest = today - Duration::days(89);
        for sale in &sales {
            let day = sale.date.date();
            assert!(oldest <= day && day <= today);
            assert!((50.0..550.0).contains(&sale.amount));
            assert!((1..=3).contains(&sale.items));
        }

        // Every marketplace sells at least once per day.
        let days = sales.iter().map(|s| s.date.date()).unique().count();
        assert_eq!(days, 90);
        assert!(sales.len() >= 90 * 3);
    }

    #[test]
    fn unittest_json_data_loader_reads_a_dataset() -> eyre::Result<()> {
        let data = DataSet {
            sales: generate_sales(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()),
            products: demo_catalog(),
        };

        let path = std::env::temp_dir().join("marketplace-analytics-dataset.json");
        std::fs::write(&path, serde_json::to_string(&data)?)?;

        let loaded = JsonDataLoader::load_from(&path)?;
        assert_eq!(loaded.sales.len(), data.sales.len());
        assert_eq!(loaded.products.len(), data.products.len());

        Ok(())
    }

    #[test]
    fn unittest_full_pipeline_over_mock_data() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let sales = generate_sales(today);
        let products = demo_catalog();

        let range = DateRangeFilter::Preset { days: 30 };
        let filtered = filter_by_range(&sales, &range, MarketplaceScope::All, today);
        assert!(!filtered.is_empty());

        let buckets = aggregate_by_day(&filtered);
        assert_eq!(buckets.len(), 30);
        assert!(buckets.windows(2).all(|w| w[0].date < w[1].date));

        let from_buckets: f64 = buckets.iter().map(|b| b.total_amount).sum();
        let stats = summarize(&filtered, &products);
        assert!((from_buckets - stats.total_turnover).abs() < 1e-6);
        assert_eq!(stats.total_sales_count, filtered.len());
    }
}

//! Pure aggregations over a transaction log.
//!
//! Every function here accepts the raw [`Record`] sequence and skips records
//! whose [`Record::parts`] is `None`. Mappings iterate in the order products
//! were first seen, and sums are accumulated left to right so identical input
//! always yields identical output.

use indexmap::IndexMap;

use crate::Record;

/// Product id to running total.
pub type Totals = IndexMap<String, f64>;

/// Product id to the amounts recorded for it, in log order.
pub type Grouped = IndexMap<String, Vec<f64>>;

fn usable(records: &[Record]) -> impl Iterator<Item = (&str, f64)> {
    records.iter().enumerate().filter_map(|(idx, record)| {
        let parts = record.parts();
        if parts.is_none() {
            tracing::debug!("skipping record #{idx}: missing productId or amount");
        }
        parts
    })
}

pub fn group_by_product(records: &[Record]) -> Grouped {
    let mut grouped = Grouped::new();
    for (product_id, amount) in usable(records) {
        grouped
            .entry(product_id.to_string())
            .or_default()
            .push(amount);
    }
    grouped
}

pub fn totals_by_product(records: &[Record]) -> Totals {
    let mut totals = Totals::new();
    for (product_id, amount) in usable(records) {
        *totals.entry(product_id.to_string()).or_insert(0.0) += amount;
    }
    totals
}

/// Amounts recorded for `product_id` (exact, case-sensitive match).
///
/// An unknown product yields an empty vector; deciding that this means
/// "not found" is up to the caller.
pub fn amounts_for_product(records: &[Record], product_id: &str) -> Vec<f64> {
    usable(records)
        .filter(|(id, _)| *id == product_id)
        .map(|(_, amount)| amount)
        .collect()
}

/// Sum of every usable amount, across all products.
pub fn grand_total(records: &[Record]) -> f64 {
    usable(records).fold(0.0, |acc, (_, amount)| acc + amount)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn records(values: &[serde_json::Value]) -> Vec<Record> {
        values.iter().cloned().map(Record::from).collect()
    }

    fn sample() -> Vec<Record> {
        records(&[
            json!({ "productId": "A", "amount": 100 }),
            json!({ "productId": "B", "amount": 200 }),
            json!({ "productId": "A", "amount": 150 }),
        ])
    }

    #[test]
    fn empty_log_yields_empty_results() {
        assert!(group_by_product(&[]).is_empty());
        assert!(totals_by_product(&[]).is_empty());
        assert!(amounts_for_product(&[], "A").is_empty());
        assert_eq!(grand_total(&[]), 0.0);
    }

    #[test]
    fn totals_sum_per_product() {
        let totals = totals_by_product(&sample());
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["A"], 250.0);
        assert_eq!(totals["B"], 200.0);
        assert_eq!(grand_total(&sample()), 450.0);
    }

    #[test]
    fn products_keep_first_seen_order() {
        let log = records(&[
            json!({ "productId": "Z", "amount": 1 }),
            json!({ "productId": "A", "amount": 2 }),
            json!({ "productId": "Z", "amount": 3 }),
        ]);
        let keys: Vec<_> = totals_by_product(&log).into_keys().collect();
        assert_eq!(keys, ["Z", "A"]);
        let keys: Vec<_> = group_by_product(&log).into_keys().collect();
        assert_eq!(keys, ["Z", "A"]);
    }

    #[test]
    fn grouping_preserves_log_order() {
        let grouped = group_by_product(&sample());
        assert_eq!(grouped["A"], vec![100.0, 150.0]);
        assert_eq!(grouped["B"], vec![200.0]);
    }

    #[test]
    fn amounts_for_product_is_exact_match() {
        assert_eq!(amounts_for_product(&sample(), "A"), vec![100.0, 150.0]);
        assert!(amounts_for_product(&sample(), "a").is_empty());
        assert!(amounts_for_product(&sample(), "Z").is_empty());
    }

    #[test]
    fn malformed_records_are_skipped() {
        let mut log = sample();
        log.push(Record::from(json!({ "productId": "D" })));
        log.push(Record::from(json!({ "amount": 5 })));
        log.push(Record::from(json!(null)));

        assert_eq!(log.len(), 6);
        assert!(!totals_by_product(&log).contains_key("D"));
        assert!(!group_by_product(&log).contains_key("D"));
        assert!(amounts_for_product(&log, "D").is_empty());
        assert_eq!(grand_total(&log), 450.0);
    }

    #[test]
    fn zero_and_negative_amounts_are_aggregated() {
        let log = records(&[
            json!({ "productId": "A", "amount": 0 }),
            json!({ "productId": "A", "amount": -20 }),
            json!({ "productId": "B", "amount": 5.5 }),
        ]);
        assert_eq!(totals_by_product(&log)["A"], -20.0);
        assert_eq!(group_by_product(&log)["A"], vec![0.0, -20.0]);
        assert_eq!(grand_total(&log), -14.5);
    }

    #[test]
    fn per_product_totals_match_grand_total() {
        let log = records(&[
            json!({ "productId": "A", "amount": 0.1 }),
            json!({ "productId": "B", "amount": 0.2 }),
            json!({ "productId": "C", "amount": 0.3 }),
            json!({ "productId": "D", "amount": 7 }),
        ]);
        let summed: f64 = totals_by_product(&log).values().sum();
        assert_eq!(summed, grand_total(&log));
    }

    #[test]
    fn grouped_lengths_match_per_product_amounts() {
        let mut log = sample();
        log.push(Record::from(json!({ "productId": "A", "amount": "oops" })));
        for (product_id, amounts) in group_by_product(&log) {
            assert_eq!(amounts.len(), amounts_for_product(&log, &product_id).len());
        }
    }
}

//! Demand & Supply Aggregator (C4, spec §4.4) plus the customer filter
//! selection rule from §6.

use mrp_core::{
    DiagnosticKind, Diagnostics, EngineError, Horizon, Item, ItemId, OpenPurchase, Result, SalesOrderLine,
};
use std::collections::HashMap;

/// Keeps only sales-order lines whose customer is in `selected_customers`.
/// An empty selection is a user error (§6), not a silent no-op.
pub fn filter_by_customers<'a>(
    sales_orders: &'a [SalesOrderLine],
    selected_customers: &[String],
) -> Result<Vec<&'a SalesOrderLine>> {
    if selected_customers.is_empty() {
        return Err(EngineError::EmptyCustomerSelection);
    }
    Ok(sales_orders
        .iter()
        .filter(|line| selected_customers.iter().any(|c| c == &line.customer))
        .collect())
}

/// Dense per-item, per-day series over `horizon`, indexed by
/// `horizon.day_index`.
pub type DaySeries = HashMap<ItemId, Vec<f64>>;

/// Buckets sales orders into `gross_req_init` and open purchases into
/// `sched_recv`. Rows referencing an unknown item, or whose date falls
/// outside `horizon`, are skipped with a diagnostic rather than
/// propagated as zero demand (Design Note: "a missing key is never
/// equivalent to zero demand" — here a *skipped row* is explicit too, it
/// never silently contributes nothing while pretending to have been
/// applied).
pub fn aggregate(
    sales_orders: &[&SalesOrderLine],
    purchases: &[OpenPurchase],
    items: &HashMap<ItemId, Item>,
    horizon: &Horizon,
    diagnostics: &mut Diagnostics,
) -> (DaySeries, DaySeries) {
    let mut gross_req_init: DaySeries = HashMap::new();
    let mut sched_recv: DaySeries = HashMap::new();

    for line in sales_orders {
        if !items.contains_key(&line.item_id) {
            diagnostics.push(DiagnosticKind::UnknownItem { item_code: line.item_id.to_string() });
            continue;
        }
        let Some(day) = horizon.day_index(line.date) else {
            diagnostics.push(DiagnosticKind::OutOfHorizon { item_id: line.item_id, date: line.date });
            continue;
        };
        let series = gross_req_init.entry(line.item_id).or_insert_with(|| vec![0.0; horizon.len_days()]);
        series[day] += line.qty;
    }

    for purchase in purchases {
        if !items.contains_key(&purchase.item_id) {
            diagnostics.push(DiagnosticKind::UnknownItem { item_code: purchase.item_id.to_string() });
            continue;
        }
        let Some(day) = horizon.day_index(purchase.expected_receipt_date) else {
            diagnostics.push(DiagnosticKind::OutOfHorizon {
                item_id: purchase.item_id,
                date: purchase.expected_receipt_date,
            });
            continue;
        };
        let series = sched_recv.entry(purchase.item_id).or_insert_with(|| vec![0.0; horizon.len_days()]);
        series[day] += purchase.qty;
    }

    (gross_req_init, sched_recv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mrp_core::ItemPolicy;

    fn item(item_id: ItemId) -> Item {
        Item { item_id, code: format!("I{item_id}"), policy: ItemPolicy::Output, lead_time_days: 1 }
    }

    fn horizon() -> Horizon {
        Horizon::new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        )
    }

    #[test]
    fn empty_customer_selection_is_an_error() {
        let lines = vec![];
        assert!(matches!(
            filter_by_customers(&lines, &[]),
            Err(EngineError::EmptyCustomerSelection)
        ));
    }

    #[test]
    fn unknown_item_is_skipped_with_diagnostic() {
        let items: HashMap<ItemId, Item> = HashMap::new();
        let line = SalesOrderLine {
            item_id: 1,
            customer: "ACME".into(),
            date: NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
            qty: 5.0,
        };
        let mut diagnostics = Diagnostics::new();
        let (gross, _sched) = aggregate(&[&line], &[], &items, &horizon(), &mut diagnostics);
        assert!(gross.is_empty());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn out_of_horizon_date_is_skipped_with_diagnostic() {
        let mut items = HashMap::new();
        items.insert(1, item(1));
        let line = SalesOrderLine {
            item_id: 1,
            customer: "ACME".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            qty: 5.0,
        };
        let mut diagnostics = Diagnostics::new();
        let (gross, _sched) = aggregate(&[&line], &[], &items, &horizon(), &mut diagnostics);
        assert!(gross.is_empty());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn matching_rows_are_summed_per_day() {
        let mut items = HashMap::new();
        items.insert(1, item(1));
        let day = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();
        let a = SalesOrderLine { item_id: 1, customer: "ACME".into(), date: day, qty: 4.0 };
        let b = SalesOrderLine { item_id: 1, customer: "ACME".into(), date: day, qty: 6.0 };
        let mut diagnostics = Diagnostics::new();
        let h = horizon();
        let (gross, _sched) = aggregate(&[&a, &b], &[], &items, &h, &mut diagnostics);
        assert_eq!(gross[&1][h.day_index(day).unwrap()], 10.0);
    }
}

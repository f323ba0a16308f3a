//! Horizon Planner (C3, spec §4.3).

use chrono::{Duration, NaiveDate};
use mrp_core::{Horizon, OpenPurchase, SalesOrderLine};

/// Computes `[H_start, H_end]` from demand dates, supply dates, and the
/// maximum (already-cleaned, see `item_master::clean_lead_time`) lead time
/// across items.
///
/// `max_lead_time_days` is clamped to `0..=horizon_lead_time_cap_days`
/// before use; a value above the cap is treated as a data error and
/// replaced by `degenerate_default_days` (§4.3, open question 1 — this is
/// a defensive second guard, since callers going through
/// `item_master::load` will already have cleaned every item's lead time
/// to at most `degenerate_lead_time_threshold_days`).
pub fn compute_horizon(
    sales_orders: &[&SalesOrderLine],
    purchases: &[OpenPurchase],
    max_lead_time_days: u32,
    horizon_lead_time_cap_days: u32,
    degenerate_default_days: u32,
) -> Option<Horizon> {
    let demand_dates = sales_orders.iter().map(|s| s.date);
    let supply_dates = purchases.iter().map(|p| p.expected_receipt_date);
    let mut all_dates = demand_dates.chain(supply_dates).peekable();
    all_dates.peek()?;

    let (min_date, max_date) = all_dates.fold(
        (NaiveDate::MAX, NaiveDate::MIN),
        |(min_d, max_d), d| (min_d.min(d), max_d.max(d)),
    );

    let effective_lead_time = if max_lead_time_days > horizon_lead_time_cap_days {
        degenerate_default_days
    } else {
        max_lead_time_days
    };

    let start = min_date - Duration::days(30);
    let end = max_date + Duration::days(effective_lead_time as i64 + 30);
    Some(Horizon::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(item_id: i64, date: NaiveDate) -> SalesOrderLine {
        SalesOrderLine { item_id, customer: "ACME".into(), date, qty: 10.0 }
    }

    #[test]
    fn horizon_spans_thirty_days_before_and_lead_time_plus_thirty_after() {
        let d = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();
        let order = line(1, d);
        let horizon = compute_horizon(&[&order], &[], 5, 1000, 5).unwrap();
        assert_eq!(horizon.start, d - Duration::days(30));
        assert_eq!(horizon.end, d + Duration::days(35));
    }

    #[test]
    fn lead_time_above_cap_is_replaced_with_default() {
        let d = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();
        let order = line(1, d);
        let horizon = compute_horizon(&[&order], &[], 5000, 1000, 5).unwrap();
        assert_eq!(horizon.end, d + Duration::days(35));
    }

    #[test]
    fn no_dates_at_all_yields_no_horizon() {
        assert!(compute_horizon(&[], &[], 5, 1000, 5).is_none());
    }
}

//! Runs the spec's seed scenarios (S1-S6) through the full pipeline and
//! prints the resulting plan, expedites, and purchases — a runnable
//! walkthrough of what `mrp::run` produces, in the style of the sibling
//! engine's own example binaries.

use chrono::NaiveDate;
use mrp::{BomEdge, EngineConfig, InventorySnapshot, Item, ItemPolicy, SalesOrderLine};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Seed scenario S1: two-level BOM with a shortage ===");
    run_s1();

    println!();
    println!("=== Seed scenario S5: expedite extraction ===");
    run_s5();
}

fn run_s1() {
    // A(1) -> B(2, qty=2) -> C(3, qty=3), on_hand C=5.
    // Sales A: qty 10 on 2023-01-10. Lead times A=3, B=2, C=1.
    let items = vec![
        Item { item_id: 1, code: "A".to_string(), policy: ItemPolicy::Output, lead_time_days: 3 },
        Item { item_id: 2, code: "B".to_string(), policy: ItemPolicy::Output, lead_time_days: 2 },
        Item { item_id: 3, code: "C".to_string(), policy: ItemPolicy::Purchase, lead_time_days: 1 },
    ];
    let bom = vec![
        BomEdge { parent_id: 1, child_id: 2, qty_per: 2.0 },
        BomEdge { parent_id: 2, child_id: 3, qty_per: 3.0 },
    ];
    let sales = vec![SalesOrderLine {
        item_id: 1,
        customer: "ACME".to_string(),
        date: NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
        qty: 10.0,
    }];
    let inventory = vec![InventorySnapshot { item_id: 3, on_hand_qty: 5.0 }];
    let config = EngineConfig::new();

    let result =
        mrp::run(items, &bom, &sales, &[], &inventory, &["ACME".to_string()], &config).expect("planning run");

    for row in result.transactions.iter().filter(|r| r.gross_requirement > 0.0 || r.planned_release > 0.0) {
        println!(
            "  item {} {}: gross={:.1} net={:.1} planned_receipt={:.1} planned_release={:.1}",
            row.item_id, row.date, row.gross_requirement, row.net_requirement, row.planned_receipt, row.planned_release
        );
    }
    for row in &result.ending_inventory {
        println!("  item {} ending inventory = {:.1}", row.item_id, row.ending_inventory);
    }
    if !result.diagnostics.is_empty() {
        println!("  diagnostics:");
        for d in result.diagnostics.iter() {
            println!("    - {d}");
        }
    }
}

fn run_s5() {
    // Purchase-class item, lead_time=7, sales on 2023-06-05, today=2023-06-01.
    let items = vec![Item { item_id: 1, code: "P".to_string(), policy: ItemPolicy::Purchase, lead_time_days: 7 }];
    let sales = vec![SalesOrderLine {
        item_id: 1,
        customer: "ACME".to_string(),
        date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
        qty: 20.0,
    }];
    let config = EngineConfig::new().with_as_of_date(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());

    let result = mrp::run(items, &[], &sales, &[], &[], &["ACME".to_string()], &config).expect("planning run");

    for row in &result.expedites {
        println!("  EXPEDITE item {} required by {} qty {:.1}", row.item_id, row.required_date, row.expedite_qty);
    }
    for row in &result.purchases {
        println!(
            "  PURCHASE item {} place {} receive {} qty {:.1}",
            row.item_id, row.placement_date, row.expected_receipt_date, row.purchase_qty
        );
    }
}

//! MRP Per-Item Planner (C6, spec §4.6).

use mrp_core::{numeric, EngineConfig, EngineError, Horizon, ItemId, PerItemPlan, Result};

/// Produces the time-phased plan for one item over `horizon`, given its
/// gross-requirement and scheduled-receipt series (dense, one entry per
/// horizon day) and opening on-hand quantity.
///
/// `gross_req` and `sched_recv` must each have length `horizon.len_days()`.
#[tracing::instrument(skip_all, fields(item_id, lead_time_days))]
pub fn plan_item(
    item_id: ItemId,
    gross_req: &[f64],
    sched_recv: &[f64],
    on_hand: f64,
    lead_time_days: u32,
    horizon: &Horizon,
    config: &EngineConfig,
) -> Result<PerItemPlan> {
    let n = horizon.len_days();
    debug_assert_eq!(gross_req.len(), n);
    debug_assert_eq!(sched_recv.len(), n);

    let mut plan = PerItemPlan::zeroed(item_id, horizon);
    plan.gross_requirement.copy_from_slice(gross_req);
    plan.scheduled_receipt.copy_from_slice(sched_recv);

    let mut projected_prev = on_hand;

    for d in 0..n {
        let available = projected_prev + plan.scheduled_receipt[d];
        let gross = plan.gross_requirement[d];

        let projected_d = if available < gross {
            let net = gross - available;
            plan.net_requirement[d] = net;
            plan.planned_receipt[d] = net;

            let release_day = d as i64 - lead_time_days as i64;
            if release_day >= 0 {
                plan.planned_release[release_day as usize] += net;
            } else {
                plan.planned_release[0] += net;
                plan.release_clamped_from_before_horizon = true;
            }

            0.0
        } else {
            available - gross
        };

        let projected_d = numeric::clamp_noise_to_zero(projected_d, config.epsilon);
        if !numeric::approx_ge_zero(projected_d, config.epsilon) {
            return Err(EngineError::ArithmeticInvariantViolation(format!(
                "item {item_id} day {d} projected on-hand went negative: {projected_d}"
            )));
        }

        plan.projected_on_hand[d] = projected_d;
        projected_prev = projected_d;
    }

    Ok(plan)
}

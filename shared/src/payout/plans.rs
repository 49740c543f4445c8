//! Price-protection plan catalogue and quoting

use crate::error::{CoreError, CoreResult};
use crate::models::{InsurancePlan, InsurancePlanId, PlanQuote};
use crate::types::Language;

/// Guide price per jin that plan trigger prices are anchored to
pub const GUIDE_PRICE: f64 = 14.6;
/// Modelled price floor used for the potential payout
pub const MODELLED_LOW_PRICE: f64 = 10.0;
/// Modelled price ceiling used for the potential profit
pub const MODELLED_HIGH_PRICE: f64 = 20.0;
/// Jin of fruit per mu assumed by quotes
pub const QUOTE_YIELD_PER_MU: f64 = 1000.0;

struct PlanTerms {
    trigger_factor: f64,
    premium_rate_percent: f64,
    premium_per_mu: f64,
    max_payout_per_mu: f64,
}

fn terms(id: InsurancePlanId) -> PlanTerms {
    match id {
        InsurancePlanId::Basic => PlanTerms {
            trigger_factor: 0.85,
            premium_rate_percent: 2.8,
            premium_per_mu: 280.0,
            max_payout_per_mu: 3000.0,
        },
        InsurancePlanId::Standard => PlanTerms {
            trigger_factor: 1.0,
            premium_rate_percent: 4.5,
            premium_per_mu: 450.0,
            max_payout_per_mu: 5000.0,
        },
        InsurancePlanId::Premium => PlanTerms {
            trigger_factor: 1.1,
            premium_rate_percent: 6.8,
            premium_per_mu: 680.0,
            max_payout_per_mu: 8000.0,
        },
    }
}

/// Trigger price of a plan
pub fn plan_trigger_price(id: InsurancePlanId) -> f64 {
    GUIDE_PRICE * terms(id).trigger_factor
}

/// Catalogue entry for a plan
pub fn insurance_plan(id: InsurancePlanId, language: Language) -> InsurancePlan {
    let t = terms(id);
    let (name, description, suitable_for) = match id {
        InsurancePlanId::Basic => (
            language.pick("成本兜底", "Cost floor"),
            language.pick(
                "保障种植成本不受严重跌价影响",
                "Protects planting costs against severe price falls",
            ),
            language.pick("种植新手、风险厌恶型农户", "New or risk-averse growers"),
        ),
        InsurancePlanId::Standard => (
            language.pick("稳健收益", "Steady income"),
            language.pick("锁定预期收益，保障基本利润", "Locks in expected income and basic profit"),
            language.pick("追求稳定收益的种植户", "Growers seeking stable income"),
        ),
        InsurancePlanId::Premium => (
            language.pick("优质优价", "Premium quality"),
            language.pick(
                "高溢价保障，未出险享平台免佣",
                "High-premium cover, no platform commission when no claim is made",
            ),
            language.pick("A级认证果园、优质供应商", "Grade-A certified orchards and suppliers"),
        ),
    };

    InsurancePlan {
        id,
        name: name.to_string(),
        description: description.to_string(),
        suitable_for: suitable_for.to_string(),
        trigger_factor: t.trigger_factor,
        trigger_price: GUIDE_PRICE * t.trigger_factor,
        premium_rate_percent: t.premium_rate_percent,
        premium_per_mu: t.premium_per_mu,
        max_payout_per_mu: t.max_payout_per_mu,
        highlighted: id == InsurancePlanId::Premium,
    }
}

/// All plans in display order
pub fn plan_catalogue(language: Language) -> Vec<InsurancePlan> {
    InsurancePlanId::ALL
        .iter()
        .map(|id| insurance_plan(*id, language))
        .collect()
}

/// Quote a plan for an orchard at the current market price
pub fn quote_plan(id: InsurancePlanId, orchard_size: f64, market_price: f64) -> CoreResult<PlanQuote> {
    if !(orchard_size.is_finite() && orchard_size > 0.0) {
        return Err(CoreError::invalid_policy(
            "orchard_size",
            "Orchard size must be greater than zero",
        ));
    }
    if !market_price.is_finite() {
        return Err(CoreError::InvalidInput(
            "market_price must be a finite number".to_string(),
        ));
    }

    let t = terms(id);
    let trigger_price = GUIDE_PRICE * t.trigger_factor;

    let potential_payout = if market_price < trigger_price {
        (trigger_price - MODELLED_LOW_PRICE) * orchard_size * QUOTE_YIELD_PER_MU
    } else {
        0.0
    };
    let max_profit = if market_price > trigger_price {
        ((MODELLED_HIGH_PRICE - trigger_price) * orchard_size * QUOTE_YIELD_PER_MU).max(0.0)
    } else {
        0.0
    };

    Ok(PlanQuote {
        plan_id: id,
        orchard_size,
        market_price,
        trigger_price,
        premium: t.premium_per_mu * orchard_size,
        max_payout: t.max_payout_per_mu * orchard_size,
        potential_payout,
        max_profit,
    })
}

//! Stage-by-stage evaluation of one set of planning inputs.
//!
//! Each stage is a method that takes the outputs of earlier stages as
//! explicit arguments and returns its own output; nothing is shared through
//! hidden state. [`PlanningContext::run`] chains them in order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config;
use crate::engine;
use crate::models::{
    CorridorSizing, Crossing, MarketSizing, PaybackSeries, PlanShareSet, PlanningInputs,
    PriceBreakdown, PricingPolicy, ProjectionSeries, Scenario, ScenarioFinancials, SubscriptionRevenue,
};

// ---------------------------------------------------------------------------
// Horizons
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Horizons {
    pub breakeven_months: u32,
    pub payback_months: u32,
}

impl Default for Horizons {
    fn default() -> Self {
        Self {
            breakeven_months: config::BREAKEVEN_HORIZON_MONTHS,
            payback_months: config::PAYBACK_HORIZON_MONTHS,
        }
    }
}

// ---------------------------------------------------------------------------
// Stage outputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricedPlan {
    pub plan: String,
    #[serde(flatten)]
    pub breakdown: PriceBreakdown,
}

/// Per-plan prices in the order the plans were entered.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PlanPrices {
    pub plans: Vec<PricedPlan>,
}

impl PlanPrices {
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.plans
            .iter()
            .map(|p| (p.plan.as_str(), p.breakdown.price))
    }

    pub fn get(&self, plan: &str) -> Option<f64> {
        self.plans
            .iter()
            .find(|p| p.plan == plan)
            .map(|p| p.breakdown.price)
    }

    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    /// Sum of the shares charged across these plans, once per priced plan.
    pub fn applied_share_total(&self, shares: &PlanShareSet) -> f64 {
        self.plans.iter().map(|p| shares.share(&p.plan)).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaybackOutcome {
    pub investment: f64,
    pub monthly_revenue: f64,
    pub revenue_growth_pct: f64,
    pub series: PaybackSeries,
    pub month: Crossing,
}

/// Everything the display surface shows for one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanningReport {
    pub policy: PricingPolicy,
    pub horizons: Horizons,
    pub plan_prices: PlanPrices,
    pub market: MarketSizing,
    pub subscription: SubscriptionRevenue,
    pub weighted_price: f64,
    pub projection: ProjectionSeries,
    pub total_cost: f64,
    pub breakeven: Crossing,
    pub payback: PaybackOutcome,
}

impl PlanningReport {
    /// Snapshot this report under `name` for the scenario store.
    pub fn to_scenario(&self, name: &str, inputs: &PlanningInputs) -> Scenario {
        Scenario {
            name: name.to_string(),
            plan_prices: self.plan_prices.to_map(),
            market: self.market.clone(),
            shares: inputs.shares.clone(),
            financial: ScenarioFinancials {
                total_cost: self.total_cost,
                breakeven_month: self.breakeven,
                weighted_price: self.weighted_price,
                subscription_revenue: self.subscription.total,
                payback_month: self.payback.month,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// PlanningContext
// ---------------------------------------------------------------------------

/// Borrowed view over one set of inputs plus the evaluation settings.
pub struct PlanningContext<'a> {
    inputs: &'a PlanningInputs,
    policy: PricingPolicy,
    horizons: Horizons,
}

impl<'a> PlanningContext<'a> {
    pub fn new(inputs: &'a PlanningInputs, policy: PricingPolicy, horizons: Horizons) -> Self {
        Self {
            inputs,
            policy,
            horizons,
        }
    }

    pub fn inputs(&self) -> &PlanningInputs {
        self.inputs
    }

    /// Stage 1: price every plan. Reads `plans`.
    pub fn price_plans(&self) -> PlanPrices {
        let plans = self
            .inputs
            .plans
            .iter()
            .map(|plan| PricedPlan {
                plan: plan.name.clone(),
                breakdown: engine::price_breakdown(plan, self.policy),
            })
            .collect();
        PlanPrices { plans }
    }

    /// Stage 2: size each corridor. Reads `corridors`.
    pub fn size_market(&self) -> MarketSizing {
        self.inputs
            .corridors
            .iter()
            .map(|(corridor, m)| {
                let adopters = engine::serviceable_sellers(m.total_sellers, m.adoption_rate_pct);
                let sizing = CorridorSizing {
                    total_sellers: m.total_sellers,
                    adoption_rate_pct: m.adoption_rate_pct,
                    avg_order_value: m.avg_order_value,
                    serviceable_sellers: adopters.max(0.0) as u64,
                    potential_revenue: engine::estimate_revenue(
                        m.total_sellers,
                        m.adoption_rate_pct,
                        m.avg_order_value,
                    ),
                    channel_orders: m.total_channel_orders(),
                };
                (*corridor, sizing)
            })
            .collect()
    }

    /// Stage 3: subscription revenue of the basis corridor's adopters.
    /// Reads `corridors`, `basis_corridor` and `shares`.
    pub fn subscription(&self, prices: &PlanPrices) -> SubscriptionRevenue {
        let shares = &self.inputs.shares;
        let applied = prices.applied_share_total(shares);
        if (applied - 100.0).abs() > 0.01 {
            tracing::warn!(
                "Priced plans carry {:.2}% of adopters instead of 100%; revenue is scaled accordingly",
                applied
            );
        }

        let adopters = match self.inputs.corridors.get(&self.inputs.basis_corridor) {
            Some(m) => engine::serviceable_sellers(m.total_sellers, m.adoption_rate_pct),
            None => {
                tracing::warn!(
                    "Basis corridor {} has no market inputs; assuming no adopters",
                    self.inputs.basis_corridor
                );
                0.0
            }
        };

        engine::aggregate(adopters, shares, prices.iter())
    }

    /// Stage 3b: blended per-seller price. Reads `shares`.
    pub fn weighted_price(&self, prices: &PlanPrices) -> f64 {
        engine::weighted_price(&self.inputs.shares, prices.iter())
    }

    /// Stage 4: cohort projection over the breakeven horizon. Reads `projection`.
    pub fn project_sellers(&self, weighted_price: f64) -> ProjectionSeries {
        let p = &self.inputs.projection;
        engine::project(
            p.start_month,
            p.initial_cohort,
            p.cohort_growth_pct,
            weighted_price,
            self.horizons.breakeven_months,
        )
    }

    /// Stage 5: operating cost over the breakeven horizon. Reads `costs`.
    pub fn operating_cost(&self) -> f64 {
        engine::total_cost(&self.inputs.costs, self.horizons.breakeven_months)
    }

    /// Stage 6a: month cumulative projected revenue covers total cost.
    pub fn breakeven(&self, projection: &ProjectionSeries, total_cost: f64) -> Crossing {
        engine::find_crossing(projection.cumulative_revenue(), total_cost)
    }

    /// Stage 6b: payback of the investment. Reads `payback`; falls back to
    /// `subscription_revenue` when no monthly revenue override is given.
    pub fn payback(&self, investment: f64, subscription_revenue: f64) -> PaybackOutcome {
        let p = &self.inputs.payback;
        let monthly_revenue = p.monthly_revenue.unwrap_or(subscription_revenue);
        let (series, month) = engine::payback(
            investment,
            monthly_revenue,
            p.revenue_growth_pct,
            self.horizons.payback_months,
        );
        PaybackOutcome {
            investment,
            monthly_revenue,
            revenue_growth_pct: p.revenue_growth_pct,
            series,
            month,
        }
    }

    /// Run every stage using the investment from the inputs.
    pub fn run(&self) -> PlanningReport {
        self.run_with_investment(self.inputs.payback.investment)
    }

    /// Run every stage with an externally resolved investment total
    /// (e.g. summed from an uploaded table).
    pub fn run_with_investment(&self, investment: f64) -> PlanningReport {
        let plan_prices = self.price_plans();
        tracing::debug!("Priced {} plans under {} policy", plan_prices.plans.len(), self.policy.as_str());

        let market = self.size_market();
        let subscription = self.subscription(&plan_prices);
        let weighted_price = self.weighted_price(&plan_prices);
        tracing::debug!(
            "Subscription revenue {:.2} from {:.2} adopters, weighted price {:.2}",
            subscription.total,
            subscription.adopters,
            weighted_price
        );

        let projection = self.project_sellers(weighted_price);
        let total_cost = self.operating_cost();
        let breakeven = self.breakeven(&projection, total_cost);
        let payback = self.payback(investment, subscription.total);
        tracing::debug!("Breakeven {}, payback {}", breakeven, payback.month);

        PlanningReport {
            policy: self.policy,
            horizons: self.horizons,
            plan_prices,
            market,
            subscription,
            weighted_price,
            projection,
            total_cost,
            breakeven,
            payback,
        }
    }
}

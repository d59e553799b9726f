use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PlanRevenue {
    pub plan: String,
    pub share_pct: f64,
    pub price: f64,
    pub revenue: f64,
}

/// Subscription revenue across all plans for one adopter base.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SubscriptionRevenue {
    pub adopters: f64,
    pub per_plan: Vec<PlanRevenue>,
    pub total: f64,
}

impl SubscriptionRevenue {
    pub fn plan(&self, name: &str) -> Option<&PlanRevenue> {
        self.per_plan.iter().find(|p| p.plan == name)
    }
}

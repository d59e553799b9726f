pub mod cost;
pub mod inputs;
pub mod market;
pub mod plan;
pub mod projection;
pub mod revenue;
pub mod scenario;

pub use cost::CostLineItem;
pub use inputs::{PaybackParams, PlanningInputs, ProjectionParams};
pub use market::{Corridor, CorridorSizing, MarketCorridor, MarketSizing};
pub use plan::{Plan, PlanShareSet, PriceBreakdown, PricingPolicy};
pub use projection::{Crossing, PaybackRow, PaybackSeries, ProjectionRow, ProjectionSeries};
pub use revenue::{PlanRevenue, SubscriptionRevenue};
pub use scenario::{Scenario, ScenarioFile, ScenarioFinancials};

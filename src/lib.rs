//! Business-planning engine for a cross-border marketplace hub.
//!
//! Prices subscription tiers, sizes the LATAM→US and US/China→LATAM
//! corridors, blends plan prices by adoption share, projects sellers and
//! revenue month by month, and reports breakeven and payback months.
//! Named scenarios are persisted to a JSON file; investment totals can be
//! read from an uploaded CSV via DuckDB.
//!
//! # Quick start
//!
//! ```no_run
//! use hub_planner::{config, HubPlanner};
//!
//! let planner = HubPlanner::builder().build().unwrap();
//!
//! let inputs = config::reference_inputs();
//! let report = planner.evaluate(&inputs).unwrap();
//! println!("breakeven: {}", report.breakeven);
//!
//! planner.save("baseline", &inputs).unwrap();
//! ```

pub mod config;
pub mod connection;
pub mod context;
pub mod engine;
pub mod error;
pub mod investment;
pub mod models;
pub mod store;

pub use connection::{Connection, Table};
pub use context::{Horizons, PlanningContext, PlanningReport};
pub use error::{PlannerError, Result};
pub use investment::{InvestmentQuery, InvestmentSource};
pub use models::{Crossing, PlanningInputs, PricingPolicy};
pub use store::ScenarioStore;

use std::fmt;
use std::path::{Path, PathBuf};

use models::Scenario;

// ---------------------------------------------------------------------------
// HubPlannerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`HubPlanner`].
///
/// Use [`HubPlanner::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](HubPlannerBuilder::build).
pub struct HubPlannerBuilder {
    data_dir: Option<PathBuf>,
    scenario_file: String,
    policy: PricingPolicy,
    horizons: Horizons,
}

impl Default for HubPlannerBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            scenario_file: config::SCENARIO_FILE.to_string(),
            policy: PricingPolicy::default(),
            horizons: Horizons::default(),
        }
    }
}

impl HubPlannerBuilder {
    /// Set the directory holding the scenario file.
    ///
    /// Defaults to the platform data directory (e.g.
    /// `~/.local/share/hub-planner` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the scenario file name inside the data directory.
    pub fn scenario_file(mut self, name: &str) -> Self {
        self.scenario_file = name.to_string();
        self
    }

    /// Choose how per-order and percentage fees combine. Defaults to
    /// [`PricingPolicy::Max`].
    pub fn pricing_policy(mut self, policy: PricingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Length of the breakeven simulation. Defaults to 24 months.
    pub fn breakeven_horizon(mut self, months: u32) -> Self {
        self.horizons.breakeven_months = months;
        self
    }

    /// Length of the payback simulation. Defaults to 60 months.
    pub fn payback_horizon(mut self, months: u32) -> Self {
        self.horizons.payback_months = months;
        self
    }

    /// Build the planner, creating the data directory and opening DuckDB.
    pub fn build(self) -> Result<HubPlanner> {
        if self.scenario_file.trim().is_empty() {
            return Err(PlannerError::InvalidArgument(
                "Scenario file name must not be empty".to_string(),
            ));
        }
        let dir = self.data_dir.unwrap_or_else(config::default_data_dir);
        std::fs::create_dir_all(&dir)?;
        let store = ScenarioStore::open(dir.join(&self.scenario_file))?;
        let conn = Connection::open_in_memory()?;
        tracing::debug!("Planner data dir {}", dir.display());
        Ok(HubPlanner {
            data_dir: dir,
            store,
            conn,
            policy: self.policy,
            horizons: self.horizons,
        })
    }
}

// ---------------------------------------------------------------------------
// HubPlanner
// ---------------------------------------------------------------------------

/// The main entry point.
///
/// Owns the scenario store and the DuckDB connection; evaluation itself is
/// delegated to a [`PlanningContext`] built per call.
pub struct HubPlanner {
    data_dir: PathBuf,
    store: ScenarioStore,
    conn: Connection,
    policy: PricingPolicy,
    horizons: Horizons,
}

impl HubPlanner {
    /// Create a new builder for configuring the planner.
    pub fn builder() -> HubPlannerBuilder {
        HubPlannerBuilder::default()
    }

    pub fn policy(&self) -> PricingPolicy {
        self.policy
    }

    pub fn horizons(&self) -> Horizons {
        self.horizons
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// A stage-by-stage context over `inputs` with this planner's settings.
    pub fn context<'a>(&self, inputs: &'a PlanningInputs) -> PlanningContext<'a> {
        PlanningContext::new(inputs, self.policy, self.horizons)
    }

    /// Evaluate `inputs` using the investment they carry.
    ///
    /// Fails with [`PlannerError::InvalidArgument`] if two plans share a name.
    pub fn evaluate(&self, inputs: &PlanningInputs) -> Result<PlanningReport> {
        inputs.validate()?;
        Ok(self.context(inputs).run())
    }

    /// Evaluate `inputs` with the investment resolved from `source`.
    pub fn evaluate_with(
        &self,
        inputs: &PlanningInputs,
        source: &InvestmentSource,
    ) -> Result<PlanningReport> {
        inputs.validate()?;
        let investment = source.resolve(&self.conn)?;
        Ok(self.context(inputs).run_with_investment(investment))
    }

    /// Evaluate `inputs` and append the result to the scenario store.
    pub fn save(&self, name: &str, inputs: &PlanningInputs) -> Result<Scenario> {
        let report = self.context(inputs).run();
        self.save_report(name, inputs, &report)
    }

    /// Append an already computed report to the scenario store.
    pub fn save_report(
        &self,
        name: &str,
        inputs: &PlanningInputs,
        report: &PlanningReport,
    ) -> Result<Scenario> {
        inputs.validate()?;
        let scenario = report.to_scenario(name, inputs);
        self.store.append(scenario.clone())?;
        Ok(scenario)
    }

    // -- Accessors ---------------------------------------------------------

    /// Access the scenario store.
    pub fn scenarios(&self) -> &ScenarioStore {
        &self.store
    }

    /// Access the investment-table query interface.
    pub fn investments(&self) -> InvestmentQuery<'_> {
        InvestmentQuery::new(&self.conn)
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for HubPlanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HubPlanner(scenarios={}, policy={}, breakeven_horizon={}, payback_horizon={})",
            self.store.path().display(),
            self.policy.as_str(),
            self.horizons.breakeven_months,
            self.horizons.payback_months
        )
    }
}

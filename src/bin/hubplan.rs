//! hubplan
//!
//! Command-line front end for the hub planning engine.
//!
//! # Usage
//!
//! ```bash
//! hubplan template > inputs.json
//! hubplan evaluate -i inputs.json --policy sum
//! hubplan evaluate -i inputs.json --investment-csv investimentos.csv --format json
//! hubplan save -i inputs.json --name baseline
//! hubplan list
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use hub_planner::context::PlanningReport;
use hub_planner::{
    config, HubPlanner, InvestmentSource, PlanningInputs, PricingPolicy, Result, Table,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hubplan")]
#[command(version)]
#[command(about = "Cross-border marketplace hub business planner", long_about = None)]
struct Cli {
    /// Directory holding the scenario file
    #[arg(long, env = "HUBPLAN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// How per-order and percentage-of-sale fees combine: max, sum or percent-only
    #[arg(long, default_value = "max", value_parser = parse_policy)]
    policy: PricingPolicy,

    /// Breakeven horizon in months
    #[arg(long, default_value_t = config::BREAKEVEN_HORIZON_MONTHS)]
    breakeven_horizon: u32,

    /// Payback horizon in months
    #[arg(long, default_value_t = config::PAYBACK_HORIZON_MONTHS)]
    payback_horizon: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the reference inputs as JSON
    Template,
    /// Evaluate an inputs file and print the report
    Evaluate {
        /// Inputs JSON file
        #[arg(long, short)]
        inputs: PathBuf,

        /// CSV with an "Investimento" column to sum as the investment
        #[arg(long)]
        investment_csv: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Evaluate an inputs file and save it as a named scenario
    Save {
        #[arg(long, short)]
        inputs: PathBuf,

        #[arg(long, short)]
        name: String,
    },
    /// List saved scenarios
    List {
        #[arg(long, short, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn parse_policy(s: &str) -> std::result::Result<PricingPolicy, String> {
    s.parse().map_err(|e: hub_planner::PlannerError| e.to_string())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut builder = HubPlanner::builder()
        .pricing_policy(cli.policy)
        .breakeven_horizon(cli.breakeven_horizon)
        .payback_horizon(cli.payback_horizon);
    if let Some(dir) = &cli.data_dir {
        builder = builder.data_dir(dir);
    }

    match cli.command {
        Commands::Template => {
            println!("{}", serde_json::to_string_pretty(&config::reference_inputs())?);
        }
        Commands::Evaluate {
            inputs,
            investment_csv,
            format,
        } => {
            let planner = builder.build()?;
            let inputs = read_inputs(&inputs)?;
            let source = match &investment_csv {
                Some(path) => InvestmentSource::Table {
                    path: path.clone(),
                    fallback: inputs.payback.investment,
                },
                None => InvestmentSource::Manual(inputs.payback.investment),
            };
            let report = planner.evaluate_with(&inputs, &source)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Table => {
                    if let Some(path) = &investment_csv {
                        print_upload(&planner.investments().table_from_csv(path)?);
                        println!();
                    }
                    print_report(&report);
                }
            }
        }
        Commands::Save { inputs, name } => {
            let planner = builder.build()?;
            let inputs = read_inputs(&inputs)?;
            let scenario = planner.save(&name, &inputs)?;
            println!(
                "Saved '{}' (breakeven {}, weighted price {:.2})",
                scenario.name, scenario.financial.breakeven_month, scenario.financial.weighted_price
            );
        }
        Commands::List { format } => {
            let planner = builder.build()?;
            let scenarios = planner.scenarios().list()?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&scenarios)?),
                OutputFormat::Table => {
                    println!(
                        "{:<24} {:>14} {:>14} {:>12} {:>12}",
                        "NAME", "WEIGHTED PRICE", "TOTAL COST", "BREAKEVEN", "PAYBACK"
                    );
                    for s in &scenarios {
                        println!(
                            "{:<24} {:>14.2} {:>14.2} {:>12} {:>12}",
                            s.name,
                            s.financial.weighted_price,
                            s.financial.total_cost,
                            s.financial.breakeven_month.to_string(),
                            s.financial.payback_month.to_string()
                        );
                    }
                }
            }
        }
    }
    Ok(())
}

fn read_inputs(path: &Path) -> Result<PlanningInputs> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn print_upload(table: &Table) {
    println!("Investment table ({} rows)", table.len());
    println!("{}", table.columns.join("\t"));
    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect();
        println!("{}", cells.join("\t"));
    }
}

fn print_report(report: &PlanningReport) {
    println!("Pricing policy: {}", report.policy.as_str());
    println!();
    println!("{:<16} {:>12} {:>12} {:>12}", "PLAN", "BY ORDER", "BY PERCENT", "PRICE");
    for p in &report.plan_prices.plans {
        println!(
            "{:<16} {:>12.2} {:>12.2} {:>12.2}",
            p.plan, p.breakdown.by_order, p.breakdown.by_percent, p.breakdown.price
        );
    }

    println!();
    println!("{:<20} {:>10} {:>10} {:>16}", "CORRIDOR", "TAM", "SAM", "POTENTIAL");
    for (corridor, sizing) in &report.market {
        println!(
            "{:<20} {:>10} {:>10} {:>16.2}",
            corridor.to_string(),
            sizing.total_sellers,
            sizing.serviceable_sellers,
            sizing.potential_revenue
        );
    }

    println!();
    for p in &report.subscription.per_plan {
        println!("{:<16} {:>6.2}% {:>16.2}", p.plan, p.share_pct, p.revenue);
    }
    println!("Subscription revenue: {:.2}", report.subscription.total);
    println!("Weighted price:       {:.2}", report.weighted_price);

    println!();
    println!(
        "{:>5} {:>12} {:>12} {:>14} {:>16}",
        "MONTH", "NEW", "SELLERS", "REVENUE", "CUMULATIVE"
    );
    for row in &report.projection.rows {
        println!(
            "{:>5} {:>12.2} {:>12.2} {:>14.2} {:>16.2}",
            row.month, row.new_sellers, row.cumulative_sellers, row.monthly_revenue, row.cumulative_revenue
        );
    }

    println!();
    println!("Total cost ({} months): {:.2}", report.horizons.breakeven_months, report.total_cost);
    println!("Breakeven: {}", report.breakeven);
    println!(
        "Payback: {} (investment {:.2}, monthly revenue {:.2})",
        report.payback.month, report.payback.investment, report.payback.monthly_revenue
    );
}

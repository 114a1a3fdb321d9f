//! Command line interface for the rental price optimizer.
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use prettytable::{Table, row};
use rental_pricing_domain::value_objects::demand_model::DemandModel;
use rental_pricing_domain::value_objects::price::Price;
use rental_pricing_domain::value_objects::price_bounds::PriceBounds;
use rental_pricing_optimization::{optimize, sweep_curve};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::path::PathBuf;

mod params;
use params::ParamsTable;

#[derive(Parser)]
#[command(name = "pricing-cli")]
#[command(about = "Revenue-maximizing nightly price recommendations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ModelArgs {
    /// Neighbourhood to pull demand parameters for
    #[arg(short, long)]
    neighbourhood: Option<String>,

    /// Path to the demand parameter table
    #[arg(long, default_value = "demand_params.json")]
    params: PathBuf,

    /// Demand intercept a, occupancy % at price zero (overrides the table)
    #[arg(long)]
    intercept: Option<f64>,

    /// Price sensitivity b, occupancy points lost per $ (overrides the table)
    #[arg(long)]
    sensitivity: Option<f64>,
}

#[derive(Args)]
struct BoundsArgs {
    /// Minimum nightly price ($)
    #[arg(long, default_value_t = 50.0)]
    min: f64,

    /// Maximum nightly price ($)
    #[arg(long, default_value_t = 300.0)]
    max: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the revenue-maximizing nightly price
    Optimize {
        #[command(flatten)]
        model: ModelArgs,

        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// Print the revenue/occupancy curve across the price range
    Sweep {
        #[command(flatten)]
        model: ModelArgs,

        #[command(flatten)]
        bounds: BoundsArgs,

        /// Number of sample prices
        #[arg(short, long, default_value_t = 20)]
        samples: usize,
    },
    /// List the demand parameter table
    Params {
        /// Path to the demand parameter table
        #[arg(long, default_value = "demand_params.json")]
        params: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Optimize { model, bounds } => {
            let demand = resolve_model(model)?;
            let bounds = resolve_bounds(bounds)?;

            let result = optimize(&bounds, &demand)?;

            println!("📊 Optimization Results");
            println!("{}", "-".repeat(44));
            println!("{:<28} | ${}", "Optimal Price", result.optimal_price);
            println!("{:<28} | {}", "Expected Occupancy", result.optimal_occupancy);
            println!(
                "{:<28} | ${}",
                "Projected Monthly Revenue", result.optimal_revenue
            );
            if let Some(warning) = result.warning {
                println!("⚠️  {warning}");
            }
        }
        Commands::Sweep {
            model,
            bounds,
            samples,
        } => {
            let demand = resolve_model(model)?;
            let bounds = resolve_bounds(bounds)?;

            let curve = sweep_curve(&bounds, &demand, *samples)?;
            let result = optimize(&bounds, &demand)?;

            let mut table = Table::new();
            table.set_titles(row!["Price ($)", "Occupancy", "Monthly Revenue ($)"]);
            for point in &curve {
                table.add_row(row![
                    format!("{}", point.price),
                    format!("{}", point.occupancy.rounded()),
                    format!("{}", point.revenue.round_dp(2)),
                ]);
            }
            table.printstd();

            println!(
                "✅ Optimum: ${} at {} occupancy, ${} per month",
                result.optimal_price, result.optimal_occupancy, result.optimal_revenue
            );
        }
        Commands::Params { params } => {
            let table_data = ParamsTable::load(params)?;

            let mut table = Table::new();
            table.set_titles(row!["Neighbourhood", "Intercept (a)", "Sensitivity (b)"]);
            for entry in table_data.entries() {
                table.add_row(row![entry.neighbourhood, entry.a, entry.b]);
            }
            table.printstd();
        }
    }

    Ok(())
}

/// Resolves demand coefficients from explicit overrides or the table.
fn resolve_model(args: &ModelArgs) -> Result<DemandModel> {
    if let (Some(a), Some(b)) = (args.intercept, args.sensitivity) {
        return Ok(DemandModel::new(
            to_decimal(a, "intercept")?,
            to_decimal(b, "sensitivity")?,
        ));
    }

    let Some(name) = &args.neighbourhood else {
        bail!("provide --neighbourhood or both --intercept and --sensitivity");
    };

    let table = ParamsTable::load(&args.params)?;
    let entry = table
        .lookup(name)
        .with_context(|| format!("no demand parameters available for {name}"))?;

    let a = match args.intercept {
        Some(v) => to_decimal(v, "intercept")?,
        None => entry.a,
    };
    let b = match args.sensitivity {
        Some(v) => to_decimal(v, "sensitivity")?,
        None => entry.b,
    };
    Ok(DemandModel::new(a, b))
}

fn resolve_bounds(args: &BoundsArgs) -> Result<PriceBounds> {
    Ok(PriceBounds::new(
        Price::new(to_decimal(args.min, "min")?),
        Price::new(to_decimal(args.max, "max")?),
    ))
}

fn to_decimal(value: f64, name: &str) -> Result<Decimal> {
    Decimal::from_f64(value).with_context(|| format!("{name} is not a finite number: {value}"))
}

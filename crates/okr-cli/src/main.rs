//! okr-dash: dashboard reports over a JSON objective export
//!
//! Loads an export file, hydrates the objective tree, and prints drill-down,
//! aggregate, status-board, or timeline reports as text or JSON.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use okr_dashboard::{DashboardConfig, DrillDownView, ObjectivePage};
use okr_engine::FilterSet;
use okr_loader::JsonFileLoader;
use okr_model::{Department, FunctionalObjective, KeyResult, RagColor};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "okr-dash", version, about = "OKR drill-down dashboard reports")]
struct Cli {
    /// Path to the JSON export file
    #[arg(long, global = true, default_value = "export.json")]
    input: PathBuf,

    /// Log filter directive (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "info")]
    log: String,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct FilterArgs {
    /// Objective to load
    #[arg(long)]
    objective: String,

    /// Restrict to one status color (green, amber, red)
    #[arg(long)]
    status: Option<RagColor>,

    /// Restrict to one department id
    #[arg(long)]
    department: Option<String>,

    /// Restrict to indicators linked to one customer id
    #[arg(long)]
    customer: Option<String>,

    /// Restrict to indicators linked to one feature id
    #[arg(long)]
    feature: Option<String>,
}

impl FilterArgs {
    fn to_filter_set(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        if let Some(color) = self.status {
            filters = filters.with_status(color);
        }
        if let Some(department) = &self.department {
            filters = filters.with_department(department.as_str());
        }
        if let Some(customer) = &self.customer {
            filters = filters.with_customer(customer.as_str());
        }
        if let Some(feature) = &self.feature {
            filters = filters.with_feature(feature.as_str());
        }
        filters
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the (optionally filtered) drill-down tree
    Show(FilterArgs),
    /// Print aggregate counts over the unfiltered tree
    Aggregates {
        /// Objective to load
        #[arg(long)]
        objective: String,
    },
    /// Print the department status board
    Board {
        /// Objective to load
        #[arg(long)]
        objective: String,
    },
    /// Print one page of the activity timeline
    Timeline {
        /// Objective to load
        #[arg(long)]
        objective: String,
        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: usize,
        /// Entries per page
        #[arg(long, default_value_t = 20)]
        page_size: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let loader = JsonFileLoader::new(&cli.input);

    match &cli.command {
        Command::Show(args) => {
            let config = DashboardConfig::new().with_default_filters(args.to_filter_set());
            let page = load_page(&loader, &args.objective, config).await?;
            let view = page.view().context("page not ready")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_drill_down(&view);
            }
        }
        Command::Aggregates { objective } => {
            let page = load_page(&loader, objective, DashboardConfig::new()).await?;
            let view = page.view().context("page not ready")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view.aggregates)?);
            } else {
                let agg = &view.aggregates;
                println!("departments:            {}", agg.departments);
                println!("functional objectives:  {}", agg.functional_objectives);
                println!("key results:            {}", agg.key_results);
                println!("indicators:             {}", agg.indicators);
                println!(
                    "status breakdown:       {} green / {} amber / {} red",
                    agg.status_breakdown.green,
                    agg.status_breakdown.amber,
                    agg.status_breakdown.red
                );
            }
        }
        Command::Board { objective } => {
            let page = load_page(&loader, objective, DashboardConfig::new()).await?;
            let board = page.status_board().context("page not ready")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&board)?);
            } else {
                for dept in &board.departments {
                    println!(
                        "[{}] {} ({}): {} green / {} amber / {} red / {} not-set",
                        dept.worst,
                        dept.name,
                        dept.id,
                        dept.counts.green,
                        dept.counts.amber,
                        dept.counts.red,
                        dept.counts.not_set
                    );
                }
                if board.is_empty() {
                    println!("(no departments)");
                }
            }
        }
        Command::Timeline {
            objective,
            page: page_index,
            page_size,
        } => {
            let config = DashboardConfig::new().with_timeline_page_size(*page_size);
            let page = load_page(&loader, objective, config).await?;
            let timeline = page.timeline(*page_index).context("page not ready")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&timeline)?);
            } else {
                for item in &timeline.entries {
                    println!(
                        "{}  {}",
                        item.entry.recorded_at.format("%Y-%m-%d %H:%M"),
                        item.summary
                    );
                }
                println!(
                    "page {} of {} entries{}",
                    timeline.page,
                    timeline.total,
                    if timeline.has_more { " (more available)" } else { "" }
                );
            }
        }
    }

    Ok(())
}

async fn load_page(
    loader: &JsonFileLoader,
    objective: &str,
    config: DashboardConfig,
) -> anyhow::Result<ObjectivePage> {
    let mut page = ObjectivePage::new(objective, config);
    page.refresh(loader)
        .await
        .with_context(|| format!("loading objective {objective}"))?;
    Ok(page)
}

fn print_drill_down(view: &DrillDownView) {
    println!(
        "{} [{}] ({})",
        view.objective.name, view.objective.status, view.objective.id
    );
    for dept in &view.objective.departments {
        print_department(dept);
    }
    if view.is_empty {
        if view.has_active_filter {
            println!("(no results match the active filters)");
        } else {
            println!("(objective has no departments)");
        }
    }
}

fn print_department(dept: &Department) {
    println!("  {} ({})", dept.name, dept.id);
    for fo in &dept.functional_objectives {
        print_functional_objective(fo);
    }
}

fn print_functional_objective(fo: &FunctionalObjective) {
    println!("    {} [{}] ({})", fo.name, fo.status, fo.id);
    for kr in &fo.key_results {
        print_key_result(kr);
    }
}

fn print_key_result(kr: &KeyResult) {
    println!("      {} [{}] ({})", kr.name, kr.status, kr.id);
    for ind in &kr.indicators {
        let customers: Vec<&str> = ind.customers.iter().map(|c| c.as_str()).collect();
        let features: Vec<&str> = ind.features.iter().map(|f| f.as_str()).collect();
        println!(
            "        {} ({}) customers=[{}] features=[{}]",
            ind.name,
            ind.id,
            customers.join(","),
            features.join(",")
        );
    }
}

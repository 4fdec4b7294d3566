use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use ptxboa::session::parse_assignment;
use ptxboa::{
    ApiHandle, AppConfig, DatasetSource, OutputFormat, SessionContext, View, ViewContext,
    init_logging, render,
};
use ptxboa_core::SettingsOverrides;

#[derive(Parser, Debug)]
#[command(name = "ptxboa")]
#[command(about = "Explore the cost of green hydrogen supply chains across world regions")]
struct Args {
    /// Path to the data directory (default: ~/.ptxboa/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Application config file (default: <data-dir>/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dataset file; overrides the config, falls back to the bundled sample
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Override a scenario setting, e.g. --set region=Morocco
    #[arg(long = "set", value_name = "PARAM=VALUE")]
    assignments: Vec<String>,

    /// View to render
    #[arg(short, long, value_enum, default_value_t = View::Dashboard)]
    tab: View,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Number of rows in "cheapest" listings
    #[arg(long)]
    top: Option<usize>,

    /// Supply regions to show in market scanning instead of the cheapest
    #[arg(long = "select", value_name = "REGION")]
    selection: Vec<String>,

    /// Country for the deep-dive view
    #[arg(long)]
    country: Option<String>,

    /// Enable data editing mode
    #[arg(long)]
    edit: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ptxboa")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config_path = args
        .config
        .unwrap_or_else(|| AppConfig::default_path(&data_dir));
    let config = AppConfig::load(&config_path)
        .wrap_err_with(|| format!("Failed to load config {}", config_path.display()))?;

    let source = match args.dataset.or_else(|| config.dataset.clone()) {
        Some(path) => DatasetSource::File(path),
        None => DatasetSource::Bundled,
    };
    let api = ApiHandle::global(source)
        .get()
        .wrap_err("Failed to load dataset")?;

    let overrides = args
        .assignments
        .iter()
        .map(|a| parse_assignment(a))
        .collect::<Result<SettingsOverrides, _>>()
        .wrap_err("Invalid --set argument")?;

    let mut session = SessionContext::new(config.settings.clone())
        .with_overrides(&overrides)
        .with_view(args.tab)
        .with_edit_mode(args.edit)
        .with_user_changes(config.user_changes.clone())
        .with_market_selection(args.selection)
        .with_top(args.top.unwrap_or(config.dashboard.top));
    if let Some(country) = args.country {
        session = session.with_deep_dive_country(country);
    }

    tracing::info!(view = session.view().name(), "Rendering");

    let ctx = ViewContext {
        api,
        session: &session,
        config: &config,
    };
    let report = ptxboa::views::render(&ctx)
        .wrap_err_with(|| format!("Failed to render {}", session.view().name()))?;

    println!("{}", render(&report, args.format)?);

    tracing::info!("Application shutting down");
    Ok(())
}

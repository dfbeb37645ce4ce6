//! FILENAME: app/src/main.rs
// PURPOSE: Command-line entry point with unified logging.
// FORMAT: seq|level|category|message

use std::env;
use std::path::PathBuf;
use std::process;

use dashboard_lib::config::DashboardConfig;
use dashboard_lib::logging::{init_log_file, install_log_bridge, set_min_level};
use dashboard_lib::render::render_dashboard;
use dashboard_lib::{
    create_app_state_with_config, export_downloads, get_dashboard_view, load_dataset, log_info,
    set_date_range, set_level_selection, AppState,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct CliOptions {
    config: Option<PathBuf>,
    data: Option<String>,
    start: Option<String>,
    end: Option<String>,
    regions: Vec<String>,
    states: Vec<String>,
    cities: Vec<String>,
    export: Option<String>,
    json: bool,
}

fn main() {
    let raw_args: Vec<String> = env::args().skip(1).collect();
    if raw_args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return;
    }

    let options = match parse_options(raw_args.iter().map(|arg| arg.as_str())) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            print_help();
            process::exit(1);
        }
    };

    if let Err(err) = run(&options) {
        eprintln!("dashboard failed: {err}");
        process::exit(1);
    }
}

fn run(options: &CliOptions) -> Result<(), String> {
    let config = DashboardConfig::load_or_default(options.config.as_deref()).map_err(|e| e.to_string())?;

    install_log_bridge();
    set_min_level(&config.log_level)?;
    if let Some(log_file) = &config.log_file {
        init_log_file(log_file)?;
    }
    log_info!("SYS", "dashboard starting");

    let state = create_app_state_with_config(config);
    load_dataset(&state, options.data.clone())?;
    apply_filters(&state, options)?;

    let view = get_dashboard_view(&state)?;
    if options.json {
        let json = serde_json::to_string_pretty(&view).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        print!("{}", render_dashboard(&view));
    }

    if let Some(dir) = &options.export {
        let result = export_downloads(&state, Some(dir.clone()))?;
        for file in &result.files {
            eprintln!("wrote {file}");
        }
    }
    Ok(())
}

/// Applies the date range first so the hierarchy selections are checked
/// against the date-filtered data, then each level top-down.
fn apply_filters(state: &AppState, options: &CliOptions) -> Result<(), String> {
    if options.start.is_some() || options.end.is_some() {
        let summary = dashboard_lib::get_dataset_summary(state)?;
        let bounds = summary.date_range.or(summary.date_bounds);
        let start = match (&options.start, bounds) {
            (Some(s), _) => s.clone(),
            (None, Some(b)) => b.start.to_string(),
            (None, None) => return Err("--end given but the dataset has no order dates".to_string()),
        };
        let end = match (&options.end, bounds) {
            (Some(e), _) => e.clone(),
            (None, Some(b)) => b.end.to_string(),
            (None, None) => return Err("--start given but the dataset has no order dates".to_string()),
        };
        set_date_range(state, &start, &end)?;
    }

    for (level, values) in [
        ("region", &options.regions),
        ("state", &options.states),
        ("city", &options.cities),
    ] {
        if !values.is_empty() {
            set_level_selection(state, level, values.clone())?;
        }
    }
    Ok(())
}

fn parse_options<'a>(args: impl Iterator<Item = &'a str>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.peekable();

    while let Some(arg) = iter.next() {
        match arg {
            "--config" => {
                options.config = Some(PathBuf::from(parse_required_value(&mut iter, "--config")?));
            }
            "--data" => {
                options.data = Some(parse_required_value(&mut iter, "--data")?);
            }
            "--start" => {
                options.start = Some(parse_required_value(&mut iter, "--start")?);
            }
            "--end" => {
                options.end = Some(parse_required_value(&mut iter, "--end")?);
            }
            "--region" => {
                options.regions.push(parse_required_value(&mut iter, "--region")?);
            }
            "--state" => {
                options.states.push(parse_required_value(&mut iter, "--state")?);
            }
            "--city" => {
                options.cities.push(parse_required_value(&mut iter, "--city")?);
            }
            "--export" => {
                options.export = Some(parse_required_value(&mut iter, "--export")?);
            }
            "--json" => {
                options.json = true;
            }
            _ => return Err(format!("unknown option: {arg}")),
        }
    }

    Ok(options)
}

fn parse_required_value<'a, I>(
    iter: &mut std::iter::Peekable<I>,
    flag: &str,
) -> Result<String, String>
where
    I: Iterator<Item = &'a str>,
{
    match iter.next() {
        Some(value) if !value.starts_with("--") => Ok(value.to_string()),
        _ => Err(format!("{flag} requires a value")),
    }
}

fn print_help() {
    println!(
        "Usage: dashboard [options]\n\n\
Superstore sales dashboard: filter by order date and Region -> State -> City,\n\
then print category, region, time series, treemap and pivot summaries.\n\n\
Options:\n\
  --config <path>     settings file (default: dashboard.toml if present)\n\
  --data <file>       CSV/TXT/XLSX/XLS dataset (default: from config, Superstore.csv)\n\
  --start <date>      first order date to include (default: earliest in data)\n\
  --end <date>        last order date to include (default: latest in data)\n\
  --region <name>     select a region; repeat for several\n\
  --state <name>      select a state; repeat for several\n\
  --city <name>       select a city; repeat for several\n\
  --export <dir>      write Category.csv, Region.csv, TimeSeries.csv and Data.csv\n\
  --json              print the dashboard as JSON instead of text\n\
  -h, --help          show this help"
    );
}

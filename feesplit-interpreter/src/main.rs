#![warn(clippy::uninlined_format_args)]

mod config;

use std::{borrow::Cow, env, fs, io, process};

use feesplit_application::SplitCalculator;
use feesplit_infrastructure::FeesplitOrderSheetParser;
use feesplit_presentation::{SummaryPresenter, format_order_sheet_error};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn run() -> CliResult<()> {
    let Some(path) = env::args().nth(1) else {
        return Err("Usage: feesplit_interpreter <order-sheet.txt>".into());
    };

    let config = AppConfig::from_env();
    tracing::debug!(
        default_mode = %config.default_mode,
        currency_symbol = %config.currency_symbol,
        "Configuration loaded"
    );

    let source =
        fs::read_to_string(&path).map_err(|err| format!("Failed to read '{path}': {err}"))?;

    let parser = FeesplitOrderSheetParser;
    let calculator = SplitCalculator::new(&parser);
    let roster = calculator
        .calculate(&source, config.default_mode)
        .map_err(|err| format_order_sheet_error(&err))?;

    print!(
        "{}",
        SummaryPresenter::render(&roster, &config.currency_symbol)
    );
    Ok(())
}

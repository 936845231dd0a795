mod args;
mod error;
mod paths;
mod settings;

use std::fs::{self, File};
use std::io::BufReader;
use std::process::ExitCode;

use clap::Parser;
use log::{info, LevelFilter};
use logbook_lib::presets::{self, ENTRY_ID};
use logbook_lib::{ClickOutcome, LogTable, Record};
use simplelog::{Config, WriteLogger};

use crate::args::Args;
use crate::error::CliError;
use crate::settings::Settings;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let settings_path = Settings::locate(args.config.as_deref());
    let settings = Settings::load(settings_path.as_deref())?;
    init_logging(settings.log_level()?)?;
    info!("logbook starting");
    match &settings_path {
        Some(path) => info!("settings read from {}", path.display()),
        None => info!("no settings file, using defaults"),
    }

    let file = File::open(&args.entries)?;
    let records: Vec<Record> = serde_json::from_reader(BufReader::new(file))?;
    info!("loaded {} entries from {}", records.len(), args.entries.display());

    let mut columns = presets::log_columns();
    settings.apply(&mut columns)?;

    let mut options = settings.table;
    if let Some(width) = args.width {
        options.width = width;
    }

    let mut table = LogTable::new(columns, options).with_row_params(presets::open_entry);
    table.set_records(records);
    table.frame()?;

    if args.expand_all {
        table.tracker_mut().expand_all();
    }
    for target in &args.toggles {
        let outcome = table.click(target)?;
        report(target, &outcome);
    }
    for &(x, y) in &args.clicks {
        let outcome = table.click_at(x, y)?;
        report(&format!("{x},{y}"), &outcome);
    }

    let frame = table.frame()?;
    info!("rendered {} rows in {} pass(es)", frame.body.row_ids().count(), frame.passes);
    for line in frame.lines() {
        println!("{line}");
    }
    Ok(())
}

fn report(target: &str, outcome: &ClickOutcome) {
    for (row_id, column) in &outcome.toggled {
        info!("click on {target} toggled {row_id}/{column}");
    }
    if let Some(row) = &outcome.row {
        info!("click on {target} reached {} of {}", row.handler, row.row_id);
        if let Some(id) = row.data.get(ENTRY_ID) {
            println!("navigate: {}", presets::entry_url(id));
        }
    }
}

fn init_logging(level: LevelFilter) -> Result<(), CliError> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = File::create(&path)?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

//! # CLI Layer
//!
//! The CLI is the only place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Initializes logging
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Reads config and the data files into a `ClinicApi`
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::menu::Menu;
use super::prompt::Prompter;
use super::render::{patient_form, patient_table, print_messages, schedule_table};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use log::{debug, warn};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use vetclinic::api::ClinicApi;
use vetclinic::config::ClinicConfig;
use vetclinic::error::{ClinicError, Result};
use vetclinic::model::Date;

struct AppContext {
    api: ClinicApi,
    config: ClinicConfig,
    config_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(&mut ctx),
        Some(Commands::Patients { json }) => handle_patients(&ctx, json),
        Some(Commands::Search { number, phone }) => handle_search(&ctx, number, phone),
        Some(Commands::Schedule { date, json }) => handle_schedule(&ctx, date, json),
        Some(Commands::Config { init }) => handle_config(&ctx, init),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn config_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.config_dir {
        return dir.clone();
    }
    match ProjectDirs::from("com", "vetclinic", "vetclinic") {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => PathBuf::from("."),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = config_dir(cli);
    debug!("config dir: {}", dir.display());
    let config = match ClinicConfig::load(&dir) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring config in {}: {}", dir.display(), e);
            ClinicConfig::default()
        }
    };

    let mut api = ClinicApi::from_config(&config);

    let patient_file = cli.patients.as_ref().unwrap_or(&config.patient_file);
    if data_file_present(patient_file) {
        api.load_patients_file(patient_file)?;
    }

    let appointment_file = cli.appointments.as_ref().unwrap_or(&config.appointment_file);
    if data_file_present(appointment_file) {
        api.load_appointments_file(appointment_file)?;
    }

    Ok(AppContext {
        api,
        config,
        config_dir: dir,
    })
}

/// A missing data file means an empty store.
fn data_file_present(path: &Path) -> bool {
    if path.exists() {
        return true;
    }
    warn!("{} not found, starting empty", path.display());
    false
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompt = Prompter::new(stdin.lock(), stdout.lock());
    Menu::new(&mut ctx.api, prompt).run()
}

fn handle_patients(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_patients()?;
    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result.listed_patients)?)?;
        return Ok(());
    }
    patient_table(&mut out, &result.listed_patients)?;
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_search(ctx: &AppContext, number: Option<u32>, phone: Option<String>) -> Result<()> {
    let mut out = io::stdout().lock();
    if let Some(number) = number {
        match ctx.api.find_patient(number) {
            Ok(result) => {
                for patient in &result.listed_patients {
                    patient_form(&mut out, patient)?;
                }
            }
            Err(ClinicError::PatientNotFound(_)) => writeln!(out, "*** No records found ***")?,
            Err(e) => return Err(e),
        }
        return Ok(());
    }

    let phone = phone.unwrap_or_default();
    let result = ctx.api.search_by_phone(&phone)?;
    patient_table(&mut out, &result.listed_patients)?;
    Ok(())
}

fn handle_schedule(ctx: &AppContext, date: Option<Date>, json: bool) -> Result<()> {
    let result = match &date {
        Some(date) => ctx.api.list_on_date(date)?,
        None => ctx.api.list_all()?,
    };
    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result.schedule)?)?;
        return Ok(());
    }
    if date.is_some() && result.schedule.is_empty() {
        writeln!(out, "No appointments found.")?;
        return Ok(());
    }
    schedule_table(&mut out, date.as_ref(), &result.schedule)?;
    Ok(())
}

fn handle_config(ctx: &AppContext, init: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    if init {
        ctx.config.save(&ctx.config_dir)?;
        writeln!(
            out,
            "Configuration written to {}",
            ctx.config_dir.join("config.json").display()
        )?;
        return Ok(());
    }
    writeln!(out, "{}", serde_json::to_string_pretty(&ctx.config)?)?;
    Ok(())
}

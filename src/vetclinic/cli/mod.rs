//! # CLI Behavior
//!
//! This is the front-desk client for vetclinic. It is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution (`vetclinic`)
//!
//! Running `vetclinic` with no subcommand opens the interactive menu, which is
//! how the clinic staff use the tool day to day. The other subcommands are
//! one-shot reports over the same data (`patients`, `search`, `schedule`).
//!
//! ## Data Files
//!
//! Both data files are read once at startup. Their paths come from
//! `--patients`/`--appointments`, falling back to the config file in
//! `--config-dir` (or the platform config dir). A missing file is an empty
//! store. Nothing is written back.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `menu`: Interactive menus
//! - `prompt`: Validated line input
//! - `render`: Tables, forms and message output
//! - `setup`: Argument parsing via clap

mod commands;
mod menu;
mod prompt;
mod render;
pub mod setup;

pub use commands::run;

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;
use vetclinic::model::Date;

/// "0.3.2" for tagged releases, "0.3.2@abc1234" otherwise.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "vetclinic", bin_name = "vetclinic", version = get_version())]
#[command(about = "Patient and appointment records for a veterinary clinic", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Patient data file (overrides the configured one)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub patients: Option<PathBuf>,

    /// Appointment data file (overrides the configured one)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub appointments: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Interactive front-desk menu (default)
    Menu,

    /// List every patient
    Patients {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Find patients by number or phone
    #[command(group(ArgGroup::new("key").required(true).args(["number", "phone"])))]
    Search {
        /// Patient number
        #[arg(long)]
        number: Option<u32>,

        /// 10-digit phone number
        #[arg(long)]
        phone: Option<String>,
    },

    /// Show booked appointments, optionally for one day
    Schedule {
        /// Day to show (YYYY-MM-DD)
        #[arg(long)]
        date: Option<Date>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write it to config.json in the config directory
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vetclinic").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_means_menu() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn global_file_overrides() {
        let cli = parse(&["patients", "--patients", "p.txt", "-v"]);
        assert_eq!(cli.patients, Some(PathBuf::from("p.txt")));
        assert!(cli.verbose);
        assert_eq!(cli.command, Some(Commands::Patients { json: false }));
    }

    #[test]
    fn search_needs_a_key() {
        assert!(Cli::try_parse_from(["vetclinic", "search"]).is_err());
        assert!(
            Cli::try_parse_from(["vetclinic", "search", "--number", "1", "--phone", "5551234567"])
                .is_err()
        );
        let cli = parse(&["search", "--number", "7"]);
        assert_eq!(
            cli.command,
            Some(Commands::Search {
                number: Some(7),
                phone: None
            })
        );
    }

    #[test]
    fn config_init_flag() {
        let cli = parse(&["config", "--init", "--config-dir", "/tmp/vet"]);
        assert_eq!(cli.command, Some(Commands::Config { init: true }));
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/vet")));
    }

    #[test]
    fn schedule_date_is_validated() {
        assert!(Cli::try_parse_from(["vetclinic", "schedule", "--date", "2023-02-29"]).is_err());
        let cli = parse(&["schedule", "--date", "2024-02-29", "--json"]);
        assert_eq!(
            cli.command,
            Some(Commands::Schedule {
                date: Some("2024-02-29".parse().unwrap()),
                json: true
            })
        );
    }
}

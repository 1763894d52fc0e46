//! Thin binary: everything user-facing lives in `cli/`, the records logic in
//! the `vetclinic` library. See the library docs for the layering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Demonstration driver: decompose command-line tokens, fill a store,
//! validate it against a handful of declarations, and print the result.

use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use stipula::input::InputParser;
use stipula::parameter::ParameterController;
use stipula::printer::ValuePrinter;
use stipula::settings::Settings;
use stipula::store::ParameterStore;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = InputParser::from_env();
    input.add_help("help", "help", "print this overview and exit");
    input.add_help("settings", "settings file", "path to a settings file (TOML)");
    input.add_help("case", "case name", "name of the case to run (required)");
    input.add_help("threads", "worker threads", "number of worker threads, 1 to 256");
    input.add_help(
        "tolerance",
        "solver tolerance",
        "absolute tolerance, 0.0 to 1.0 (pass a decimal point)",
    );
    if input.contains("help") {
        print!("{}", input.print_help());
        return Ok(());
    }

    let settings = Settings::load(input.value("settings").ok())?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let mut controller = ParameterController::new();
    controller.declare::<String>("case").is_required();
    controller
        .declare::<i64>("threads")
        .set_default(4)
        .is_required()
        .check_range(1, 256);
    controller
        .declare::<f64>("tolerance")
        .check_data_type()
        .check_range(0.0, 1.0);

    let mut store = ParameterStore::new();
    input.populate(&mut store);
    controller.validate(&mut store)?;
    info!(parameters = store.len(), "validation pass complete");

    if settings.print_store {
        print!("{}", store.print(&ValuePrinter::default())?);
    }
    Ok(())
}

use clap::Parser;
use solar_analyzer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let command = match args.command {
        Some(command) => command,
        None => {
            show_help_and_commands();
            process::exit(0);
        }
    };

    // Create async runtime and run the command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(command));

    match result {
        Ok(()) => {
            // Success - the report has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Solar Analyzer - Solar Panel Time-Series Analysis");
    println!("=================================================");
    println!();
    println!("Analyze CSV exports of solar panel measurements: validate data quality,");
    println!("aggregate hourly and daily production, and classify sky conditions.");
    println!();
    println!("USAGE:");
    println!("    solar-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Run the full analysis pipeline (main command)");
    println!("    validate    Check data quality and report without analyzing");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Analyze a measurement export with the default panel:");
    println!("    solar-analyzer analyze measurements.csv");
    println!();
    println!("    # Analyze with a stricter clear-sky threshold and JSON output:");
    println!("    solar-analyzer analyze measurements.csv --threshold 0.85 --output-format json");
    println!();
    println!("    # Validate a file against a 100 W panel:");
    println!("    solar-analyzer validate measurements.csv --rated-power 100");
    println!();
    println!("For detailed help on any command, use:");
    println!("    solar-analyzer <COMMAND> --help");
}

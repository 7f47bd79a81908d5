use clap::Parser;
use monthsum::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Output has already been written by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("MonthSum - Advertising Export Summarizer");
    println!("========================================");
    println!();
    println!("Turn exports pasted from the Facebook, TikTok and Google Ads dashboards");
    println!("into monthly spend, conversions and cost per acquisition in ILS.");
    println!();
    println!("USAGE:");
    println!("    monthsum <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report      Print totals, platform breakdown and daily series (main command)");
    println!("    parse       Print the normalized daily records");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Paste an export and get the monthly report:");
    println!("    monthsum report");
    println!();
    println!("    # Report from a saved export as JSON with a custom exchange rate:");
    println!("    monthsum report --input january.tsv --format json --usd-rate 3.65");
    println!();
    println!("    # Show the parsed rows and why other lines were skipped:");
    println!("    monthsum parse --input january.tsv --show-skipped");
    println!();
    println!("For detailed help on any command, use:");
    println!("    monthsum <COMMAND> --help");
}

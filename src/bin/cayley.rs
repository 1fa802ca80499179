//! Group multiplication table validator
//!
//! Loads tables or group records from JSON files and checks them against the
//! group axioms, or answers single queries (elements, identity, inverse).

use anyhow::{Context, Result};
use cayleyrs::analysis;
use cayleyrs::domain::join_elements;
use cayleyrs::group_files::{self, GroupRecord};
use cayleyrs::reporters::{
    ConsoleValidationReporter, SilentValidationReporter, ValidationReporter,
};
use cayleyrs::table::CayleyTable;
use cayleyrs::validate::{self, ValidationConfig};
use std::path::Path;
use std::process;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = cayleyrs::parse_args();

    match matches.subcommand() {
        Some(("validate", sub_matches)) => handle_validate(sub_matches),
        Some(("elements", sub_matches)) => handle_elements(sub_matches),
        Some(("identity", sub_matches)) => handle_identity(sub_matches),
        Some(("inverse", sub_matches)) => handle_inverse(sub_matches),
        Some((cmd, _)) => {
            eprintln!("Unknown command: {}", cmd);
            process::exit(1);
        }
        None => {
            eprintln!("Error: No command specified");
            eprintln!("\nUse 'cayley --help' for usage information");
            process::exit(1);
        }
    }
}

fn handle_validate(matches: &clap::ArgMatches) -> Result<()> {
    let quiet = matches.get_flag("quiet");
    let config = ValidationConfig::from_args(matches);
    let reporter: Box<dyn ValidationReporter> = if quiet {
        Box::new(SilentValidationReporter::new())
    } else {
        Box::new(ConsoleValidationReporter::new())
    };

    let mut all_valid = true;
    for file in matches.get_many::<String>("files").into_iter().flatten() {
        let records = match group_files::load_group_file(Path::new(file)) {
            Ok(records) => records,
            Err(err) => {
                reporter.report_error(&err.to_string());
                all_valid = false;
                continue;
            }
        };

        if records.is_empty() && !quiet {
            println!("No groups found in {}.", file);
        }

        for record in &records {
            let Some(table) = record.table() else {
                if !quiet {
                    println!("\nGroup: {}", record.name);
                    println!("This group has no multiplication table to validate.");
                }
                continue;
            };

            if !quiet {
                print_group_header(record, table);
            }

            match validate::validate_table_with_config_and_reporter(table, &config, &*reporter) {
                Ok(report) => {
                    if !quiet {
                        match analysis::calculate_group_stats(table, &report) {
                            Ok(Some(stats)) => analysis::print_summary_stats(&stats),
                            Ok(None) => {}
                            Err(err) => {
                                reporter.report_error(&format!("{}: {}", record.name, err))
                            }
                        }
                    }
                    all_valid &= report.is_group();
                }
                Err(err) => {
                    reporter.report_error(&format!("{}: {}", record.name, err));
                    all_valid = false;
                }
            }
        }
    }

    if all_valid {
        Ok(())
    } else {
        process::exit(1);
    }
}

fn print_group_header(record: &GroupRecord, table: &CayleyTable) {
    println!("\nValidating group: {}", record.name);
    println!("{}", "=".repeat(50));
    println!("Description: {}", record.description_or_default());
    if let Some(id) = &record.id {
        println!("ID: {}", id);
    }
    println!("Elements: {}", join_elements(validate::get_elements(table)));
    println!("Order: {}", table.order());
    println!("{}", "-".repeat(30));
}

/// Load the file and pick the requested record's table
fn load_table(matches: &clap::ArgMatches) -> Result<CayleyTable> {
    let file = matches.get_one::<String>("file").expect("file is required");
    let group = matches.get_one::<String>("group").map(String::as_str);

    let records = group_files::load_group_file(Path::new(file))?;
    let record = group_files::find_record(&records, group)
        .with_context(|| format!("Failed to select a group from {}", file))?;

    Ok(record.table().cloned().unwrap_or_default())
}

fn handle_elements(matches: &clap::ArgMatches) -> Result<()> {
    let table = load_table(matches)?;
    println!("{}", join_elements(validate::get_elements(&table)));
    Ok(())
}

fn handle_identity(matches: &clap::ArgMatches) -> Result<()> {
    let table = load_table(matches)?;
    match validate::find_identity(&table).context("Cannot search for an identity")? {
        Some(identity) => println!("{}", identity),
        None => {
            println!("No identity element found");
            process::exit(1);
        }
    }
    Ok(())
}

fn handle_inverse(matches: &clap::ArgMatches) -> Result<()> {
    let table = load_table(matches)?;
    let element = matches
        .get_one::<String>("element")
        .expect("element is required");

    match validate::find_inverse(&table, element).context("Cannot search for an inverse")? {
        Some(inverse) => println!("{}", inverse),
        None => {
            println!("No inverse found for {}", element);
            process::exit(1);
        }
    }
    Ok(())
}

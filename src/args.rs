use clap::{Arg, ArgAction, Command};

/// Group selector shared by the query subcommands
fn group_arg() -> Arg {
    Arg::new("group")
        .short('g')
        .long("group")
        .help("Name of the group record to use (default: first with a table)")
        .value_name("NAME")
}

fn file_arg() -> Arg {
    Arg::new("file")
        .help("JSON file holding a table or group records")
        .required(true)
        .index(1)
}

/// Command-line definition for the `cayley` binary
pub fn build_cli() -> Command {
    Command::new("cayley")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Group multiplication table validator")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("validate")
                .visible_alias("v")
                .about("Check group records against the group axioms")
                .arg(
                    Arg::new("files")
                        .help("JSON files holding tables or group records")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                )
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .help("Quiet mode - minimal output")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("threads")
                        .short('t')
                        .long("threads")
                        .help("Number of CPU threads for the associativity scan (0 = auto-detect)")
                        .value_name("N")
                        .default_value("0")
                        .value_parser(|threads: &str| {
                            threads
                                .parse::<usize>()
                                .map(|_| threads.to_string())
                                .map_err(|_| String::from("Thread count must be a whole number"))
                        }),
                )
                .arg(
                    Arg::new("no-parallel")
                        .long("no-parallel")
                        .help("Disable all parallel processing")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("max-order")
                        .long("max-order")
                        .help("Reject tables with more elements than this")
                        .value_name("N")
                        .value_parser(|limit: &str| {
                            limit
                                .parse::<usize>()
                                .map(|_| limit.to_string())
                                .map_err(|_| String::from("Order limit must be a whole number"))
                        }),
                ),
        )
        .subcommand(
            Command::new("elements")
                .visible_alias("e")
                .about("Print the element set of a table")
                .arg(file_arg())
                .arg(group_arg()),
        )
        .subcommand(
            Command::new("identity")
                .visible_alias("i")
                .about("Print the identity element of a table")
                .arg(file_arg())
                .arg(group_arg()),
        )
        .subcommand(
            Command::new("inverse")
                .about("Print the inverse of an element")
                .arg(file_arg())
                .arg(
                    Arg::new("element")
                        .help("Element to invert")
                        .required(true)
                        .index(2),
                )
                .arg(group_arg()),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}

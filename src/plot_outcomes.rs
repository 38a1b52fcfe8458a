use super::VERSION;
use clap::{value_parser, Arg, ArgAction, Command};
use std::ffi::OsString;
use std::path::PathBuf;

/// Takes the CLI arguments that control the plotting of the outcomes.
/// The data file is optional for clap so that a missing file
/// is reported with the usage message by the caller instead of the clap error.
/// Only the first positional argument is used, any following one is ignored.
pub fn parse_cli() -> (Option<PathBuf>, bool) {
    let cli_args = cli().get_matches();
    let datafile: Option<PathBuf> = cli_args.get_one::<PathBuf>("datafile").cloned();
    let verbose: bool = cli_args.get_flag("verbose");
    (datafile, verbose)
}

fn cli() -> Command {
    let arg_datafile = Arg::new("datafile")
        .help("text file with one 'wins ties losses' line per sampled generation")
        .num_args(1)
        .value_parser(value_parser!(PathBuf))
        .required(false);
    let arg_ignored = Arg::new("ignored")
        .num_args(1..)
        .value_parser(value_parser!(OsString))
        .action(ArgAction::Append)
        .required(false)
        .hide(true);
    let arg_verbose = Arg::new("verbose")
        .help("print verbose information")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue);
    Command::new("plot_outcomes")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot wins, ties, and losses against the generation to wins.png, ties.png, and losses.png")
        .arg(arg_datafile)
        .arg(arg_ignored)
        .arg(arg_verbose)
}

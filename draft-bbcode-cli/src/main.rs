// Command-line interface for draft-bbcode
//
// Reads a raw Draft.js content JSON file (the output of the editor's
// convertToRaw) and writes the BBCode rendition to stdout or a file.
//
// Hashtag detection is configured either through a draft-bbcode.toml file
// (--config) or directly with --hashtags/--trigger/--separator; command-line
// flags win over the file.
//
// Usage:
//  draft2bb <input.json>                       - Convert to stdout
//  draft2bb <input.json> -o out.bbcode         - Convert to a file
//  draft2bb - --hashtags                       - Read stdin, detect #tags
//  draft2bb <input.json> --trigger @           - Custom hashtag trigger

use clap::{Arg, ArgAction, Command, ValueHint};
use draft_bbcode::convert_json;
use draft_bbcode_config::{BbConfig, Loader};
use std::fs;
use std::io::Read;

fn build_cli() -> Command {
    Command::new("draft2bb")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert raw Draft.js editor content to BBCode")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .required(true)
                .value_name("FILE")
                .help("Raw content JSON file, or '-' for stdin")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a draft-bbcode.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("hashtags")
                .long("hashtags")
                .help("Enable hashtag detection with the configured trigger/separator")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("trigger")
                .long("trigger")
                .value_name("STRING")
                .help("Hashtag trigger (implies --hashtags)"),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .value_name("STRING")
                .help("Hashtag separator (implies --hashtags)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
}

fn load_config(matches: &clap::ArgMatches) -> BbConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("hashtags")
        || matches.contains_id("trigger")
        || matches.contains_id("separator")
    {
        loader = loader
            .set_override("hashtag.enabled", true)
            .expect("override to apply");
    }
    if let Some(trigger) = matches.get_one::<String>("trigger") {
        loader = loader
            .set_override("hashtag.trigger", trigger.as_str())
            .expect("override to apply");
    }
    if let Some(separator) = matches.get_one::<String>("separator") {
        loader = loader
            .set_override("hashtag.separator", separator.as_str())
            .expect("override to apply");
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    })
}

fn read_input(input: &str) -> String {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {e}");
                std::process::exit(1);
            });
        buffer
    } else {
        fs::read_to_string(input).unwrap_or_else(|e| {
            eprintln!("Error reading file '{input}': {e}");
            std::process::exit(1);
        })
    }
}

fn main() {
    let matches = build_cli().get_matches();
    let config = load_config(&matches);

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let source = read_input(input);

    let bbcode = convert_json(&source, &config.convert_options()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, bbcode).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{bbcode}"),
    }
}

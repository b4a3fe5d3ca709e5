// Command-line interface for xmldoc
//
// This binary converts Doxygen comment trees, given as JSON declaration records, into C#
// XML documentation comments.
//
// The input is produced by whatever tokenizes the comments: a record carries the declaration
// name, its parameter names, the raw comment text and the parsed entity tree. A file may hold
// a single record or an array of them.
//
// Usage:
//  xmldoc <input.json> [--output <file>]          - Convert records (default)
//  xmldoc convert <input.json> [--output <file>]  - Same as above (explicit)
//  xmldoc inspect <input.json> [<transform>]      - Print the tree after a pipeline stage
//  xmldoc --list-transforms                       - List available transforms
//  xmldoc --list-tags                             - List the supported Doxygen commands
//
// Verbosity follows `logging.level` from the configuration, each -d raises it one notch.

use xmldoc_cli::transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, registry};
use xmldoc_babel::record::parse_records;
use xmldoc_babel::{CommentConverter, ConvertOptions, DeclarationRecord, TagRegistry};
use xmldoc_config::{LogLevel, Loader, XmldocConfig};

fn build_cli() -> Command {
    Command::new("xmldoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Doxygen comments into C# XML documentation comments")
        .long_about(
            "xmldoc turns parsed Doxygen comments into `///` C# XML doc blocks.\n\n\
            Commands:\n  \
            - convert: Print the comment block for each declaration record\n  \
            - inspect: View the comment tree after a pipeline stage\n\n\
            Examples:\n  \
            xmldoc records.json                      # Convert (outputs to stdout)\n  \
            xmldoc records.json -o comments.txt      # Convert to a file\n  \
            xmldoc inspect records.json              # Tree after all passes\n  \
            xmldoc inspect records.json parsed-json  # Tree as parsed, as JSON",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("list-tags")
                .long("list-tags")
                .help("List the Doxygen commands that are translated")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an xmldoc.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Raise log verbosity (repeatable)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the comment tree at a pipeline stage")
                .long_about(
                    "View the comment tree of each record after a preparation pass.\n\n\
                    Transforms (stage-format):\n  \
                    - parsed:   Tree as given by the record\n  \
                    - summary:  Brief and description pooled into a summary\n  \
                    - filtered: Unsupported commands and unknown parameters removed\n  \
                    - shifted:  Trailing line breaks moved out of elements (default)\n\n\
                    Formats are treeviz and json.",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the JSON records")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'shifted-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert declaration records (default command)")
                .long_about(
                    "Print the C# XML doc block of every declaration record.\n\n\
                    When the input holds several records, each block is preceded by a\n\
                    `// <name>` line. Output goes to stdout by default, or use -o to\n\
                    specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "inspect"
                && args[1] != "convert"
                && args[1] != "help"
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    setup_logging(config.logging.level.raised(matches.get_count("debug")));

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }
    if matches.get_flag("list-tags") {
        handle_list_tags_command();
        return;
    }

    let options = ConvertOptions::from(&config.convert);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, options);
        }
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, output, options);
        }
        _ => {
            eprintln!("Unknown command");
            std::process::exit(1);
        }
    }
}

fn setup_logging(level: LogLevel) {
    let filter = match level {
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    registry().with(fmt_layer).init();
}

fn read_records(path: &str) -> Vec<DeclarationRecord> {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    parse_records(&source).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn handle_inspect_command(path: &str, transform: &str, options: ConvertOptions) {
    let records = read_records(path);
    let converter = CommentConverter::new(options);

    match transforms::execute_transform(&records, transform, &converter) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn handle_convert_command(input: &str, output: Option<&str>, options: ConvertOptions) {
    let records = read_records(input);
    let converter = CommentConverter::new(options);
    let result = transforms::convert_records(&records, &converter);

    if let Some(path) = output {
        fs::write(path, result).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        });
    } else {
        print!("{result}");
    }
}

fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("Stages:");
    println!("  parsed    - Tree as given by the record");
    println!("  summary   - Brief and description pooled into a summary");
    println!("  filtered  - Unsupported commands and unknown parameters removed");
    println!("  shifted   - Trailing line breaks moved out of elements\n");

    println!("Formats:");
    println!("  treeviz   - Tree visualization");
    println!("  json      - JSON output\n");

    println!("Available transform combinations:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn handle_list_tags_command() {
    for tag in TagRegistry::global().list_tags() {
        println!("{tag}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> XmldocConfig {
    let loader = Loader::new().with_optional_file("xmldoc.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

// Command-line interface for pubtable
//
// Reads a bibliography, renders it as one HTML publication table and writes the
// table to a file. The heavy lifting lives in pubtable-render; this binary owns
// files, configuration and logging.
//
// Usage:
//  pubtable <input> <output> [--verify-name <NAME>] [--config <PATH>] [--extra-<key> [value]]
//
// The input format is detected from the file extension and falls back to BibTeX.
// The output file is only replaced once the whole table rendered successfully.
//
// Configuration:
//
// Built-in defaults, then ./pubtable.toml if present, then the --config file, then
// --extra-* overrides. See pubtable-config/defaults/pubtable.default.toml.
//
// Extra Parameters:
//
// Configuration values can be overridden with --extra-<key> <value>.
// Boolean keys can omit the value (defaults to "true"). Unknown keys are rejected.
// Example:
//  pubtable pubs.bib pubs.table --extra-url-policy prefer-pdf --extra-on-error skip

mod logging;
mod output;

use clap::{Arg, ArgAction, Command, ValueHint};
use pubtable_config::{Loader, OnErrorConfig, PubtableConfig, UrlPolicyConfig};
use pubtable_render::{BibtexFormat, FormatRegistry, HtmlTableFormat, ParseOptions};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Keys accepted as --extra-<key>
const EXTRA_KEYS: &[&str] = &[
    "url-policy",
    "on-error",
    "table-id",
    "asset-base",
    "pdf-base",
    "decode-latex",
    "log-level",
];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            // The next arg is a value unless it is another flag or missing
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("pubtable")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render a BibTeX bibliography as an HTML publication table")
        .long_about(
            "pubtable turns a bibliography into one HTML table grouped by year and month,\n\
            ready to be included by a static publication page.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration values:\n  \
            url-policy (always | prefer-pdf), on-error (abort | skip), table-id,\n  \
            asset-base, pdf-base, decode-latex (bool), log-level.\n\n\
            Examples:\n  \
            pubtable pubs.bib pubs.table\n  \
            pubtable pubs.bib pubs.table --verify-name \"Uwe D. Hanebeck\"\n  \
            pubtable pubs.bib pubs.table --extra-on-error skip",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Bibliography file to read")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("File to write the HTML table to")
                .required(true)
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verify-name")
                .long("verify-name")
                .value_name("NAME")
                .help("Full name of a tracked author to check every entry against")
                .action(ArgAction::Set)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a pubtable.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);
    let matches = build_cli().get_matches_from(&cleaned_args);

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    reject_unknown_extras(&extra_params);

    if let Some(name) = matches.get_one::<String>("verify-name") {
        config.validate.reference_name = Some(name.clone());
    }

    if let Err(err) = logging::init_logging(&config.logging.level) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    let (Some(input), Some(output)) = (
        matches.get_one::<String>("input"),
        matches.get_one::<String>("output"),
    ) else {
        eprintln!("Both an input and an output path are required. Use --help for usage information.");
        std::process::exit(1);
    };
    handle_render_command(input, output, &config);
}

/// Read, render and write one table
fn handle_render_command(input: &str, output: &str, config: &PubtableConfig) {
    let mut registry = FormatRegistry::default();
    registry.register(BibtexFormat::new(ParseOptions::from(&config.input)));
    let from = input_format(&registry, input);

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let bib = registry.parse(&source, &from).unwrap_or_else(|e| {
        eprintln!("Error in '{input}': {e}");
        std::process::exit(1);
    });

    let table = HtmlTableFormat::new(config.html_options())
        .render(&bib)
        .unwrap_or_else(|e| {
            eprintln!("Render error: {e}");
            std::process::exit(1);
        });

    if !table.skipped.is_empty() {
        eprintln!(
            "Skipped {} of {} entries",
            table.skipped.len(),
            table.skipped.len() + table.rendered
        );
    }

    output::write_atomic(Path::new(output), &table.html).unwrap_or_else(|e| {
        eprintln!("Error writing file '{output}': {e}");
        std::process::exit(1);
    });

    tracing::info!(output, entries = table.rendered, "wrote publication table");
}

/// Readable format detected from the input's extension, else BibTeX
fn input_format(registry: &FormatRegistry, input: &str) -> String {
    registry
        .detect_format_from_filename(input)
        .filter(|name| {
            registry
                .get(name)
                .is_ok_and(|format| format.supports_parsing())
        })
        .unwrap_or_else(|| "bibtex".to_string())
}

fn load_cli_config(explicit_path: Option<&str>) -> PubtableConfig {
    let loader = Loader::new().with_optional_file("pubtable.toml");
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

fn apply_config_overrides(config: &mut PubtableConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("url-policy") {
        config.render.url_policy = parse_url_policy(&raw);
    }
    if let Some(raw) = extra_params.remove("on-error") {
        config.render.on_error = parse_on_error(&raw);
    }
    if let Some(raw) = extra_params.remove("decode-latex") {
        config.input.decode_latex = parse_bool_arg("decode-latex", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["table-id"]) {
        config.render.table_id = raw;
    }
    if let Some(raw) = take_override(extra_params, &["asset-base", "asset-base-url"]) {
        config.render.asset_base_url = raw;
    }
    if let Some(raw) = take_override(extra_params, &["pdf-base", "pdf-base-url"]) {
        config.render.pdf_base_url = raw;
    }
    if let Some(raw) = take_override(extra_params, &["log-level"]) {
        config.logging.level = raw;
    }
}

fn reject_unknown_extras(extra_params: &HashMap<String, String>) {
    let mut unknown: Vec<&str> = extra_params.keys().map(|key| key.as_str()).collect();
    if unknown.is_empty() {
        return;
    }
    unknown.sort_unstable();
    for key in unknown {
        eprintln!("Unknown option --extra-{key}");
    }
    eprintln!("Known options: {}", EXTRA_KEYS.join(", "));
    std::process::exit(1);
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_url_policy(raw: &str) -> UrlPolicyConfig {
    match raw.to_lowercase().as_str() {
        "always" => UrlPolicyConfig::Always,
        "prefer-pdf" => UrlPolicyConfig::PreferPdf,
        other => {
            eprintln!("Invalid value '{other}' for --extra-url-policy (expected always or prefer-pdf)");
            std::process::exit(1);
        }
    }
}

fn parse_on_error(raw: &str) -> OnErrorConfig {
    match raw.to_lowercase().as_str() {
        "abort" => OnErrorConfig::Abort,
        "skip" => OnErrorConfig::Skip,
        other => {
            eprintln!("Invalid value '{other}' for --extra-on-error (expected abort or skip)");
            std::process::exit(1);
        }
    }
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

use std::io::{self, Read};

use clap::Parser;

use textassert::cli::{Args, CliValue, Command, OutputFormat, decode_escapes};
use textassert::equivalence::EquivalenceOptions;
use textassert::error::CommandError;
use textassert::logging;
use textassert::output::{
    Comparison, TextReport, format_comparison, format_comparison_json, format_report,
    format_report_json,
};
use textassert::text::{
    Arg, as_groups_of, inject, inject_invariant, join_with_last, lines,
    replace_new_lines_with, replace_new_lines_with_default, words,
};

fn main() {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    logging::init_subscriber(logging::level_for(args.verbose));

    let report = match &args.command {
        Command::Compare {
            expected,
            actual,
            epsilon,
            message,
        } => {
            let options = EquivalenceOptions::new(*epsilon).with_message(message.clone());
            run_compare(*expected, *actual, &options, args.format);
            return;
        }
        Command::Join {
            elements,
            separator,
            last_separator,
        } => {
            let last = last_separator.as_deref().unwrap_or(separator);
            Ok(TextReport::single("join", join_with_last(elements, separator, last)))
        }
        Command::Groups { size, text } => run_groups(*size, text.as_deref()),
        Command::Lines { text } => input_text(text.as_deref())
            .map(|text| TextReport::new("lines", lines(&text).map(str::to_string).collect())),
        Command::Words { text } => input_text(text.as_deref()).map(|text| {
            TextReport::new("words", words(&text).into_iter().map(str::to_string).collect())
        }),
        Command::Normalize { text, newline } => run_normalize(text.as_deref(), newline.as_deref()),
        Command::Inject {
            template,
            arguments,
            invariant,
        } => run_inject(template, arguments, *invariant),
    };

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    match args.format {
        OutputFormat::Text => print!("{}", format_report(&report)),
        OutputFormat::Json => println!("{}", format_report_json(&report)),
    }
}

/// Print the comparison and exit 1 when it failed
fn run_compare(expected: f64, actual: f64, options: &EquivalenceOptions, format: OutputFormat) {
    let comparison = Comparison::run(expected, actual, options);

    match format {
        OutputFormat::Text => print!("{}", format_comparison(&comparison)),
        OutputFormat::Json => println!("{}", format_comparison_json(&comparison)),
    }

    if !comparison.passed {
        std::process::exit(1);
    }
}

fn run_groups(size: usize, text: Option<&str>) -> Result<TextReport, CommandError> {
    let text = input_text(text)?;
    let groups = as_groups_of(&text, size)?.map(str::to_string).collect();
    Ok(TextReport::new("groups", groups))
}

fn run_normalize(text: Option<&str>, newline: Option<&str>) -> Result<TextReport, CommandError> {
    let text = input_text(text)?;
    let normalized = match newline {
        Some(raw) => replace_new_lines_with(&text, &decode_escapes(raw)),
        None => replace_new_lines_with_default(&text),
    };
    Ok(TextReport::single("normalize", normalized))
}

fn run_inject(template: &str, arguments: &[String], invariant: bool) -> Result<TextReport, CommandError> {
    let values: Vec<CliValue> = arguments.iter().map(|raw| CliValue::parse(raw)).collect();
    let args: Vec<Arg<'_>> = values.iter().map(CliValue::as_arg).collect();
    let injected = if invariant {
        inject_invariant(template, &args)
    } else {
        inject(template, &args)
    }
    .map_err(textassert::ContractError::from)?;
    Ok(TextReport::single("inject", injected))
}

/// The TEXT argument, or all of stdin when it was omitted
fn input_text(text: Option<&str>) -> Result<String, CommandError> {
    match text {
        Some(text) => Ok(text.to_string()),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

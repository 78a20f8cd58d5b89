use anyhow::{Context, Result};
use markspan_config::Config;
use markspan_syntax::{ParseState, SpanNode, Status, StderrSink, parse_file};
use std::{env, path::PathBuf, process};

struct Args {
    input: PathBuf,
    config_path: Option<PathBuf>,
}

fn usage(program: &str) -> String {
    format!("Usage: {program} <file.md> [--config <path>]")
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let program = args.first().map(String::as_str).unwrap_or("markspan-cli");
    let mut input = None;
    let mut config_path = None;

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--config" => {
                let Some(path) = rest.next() else {
                    return Err(usage(program));
                };
                config_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Err(usage(program)),
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ => return Err(usage(program)),
        }
    }

    match input {
        Some(input) => Ok(Args { input, config_path }),
        None => Err(usage(program)),
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let config_path = match &args.config_path {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.clone()),
        None => Config::config_path(),
    };
    log::info!("Config path: {}", config_path.display());
    Config::load_or_default(&config_path).context("loading configuration")
}

fn format_span(state: &ParseState, span: &SpanNode) -> String {
    format!("{span} {:?}", state.text_of(span))
}

fn run(args: &Args) -> Result<Status> {
    let config = load_config(args)?;
    let mut sink = StderrSink;
    let state = parse_file(&args.input, config.parser, &mut sink)
        .with_context(|| format!("reading {}", args.input.display()))?;

    for span in state.spans() {
        println!("{}", format_span(&state, span));
    }
    Ok(state.status())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(usage) => {
            eprintln!("{usage}");
            process::exit(2);
        }
    };

    match run(&args) {
        Ok(status) => {
            log::info!("finished with status {} ({})", status, status.code());
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

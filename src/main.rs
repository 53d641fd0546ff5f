use std::io::{self, BufRead};
use std::process::ExitCode;

use tracing::warn;
use urlextract::{Extractor, ExtractorConfig, UrlComponent};

const USAGE: &str = "\
Usage: urlextract [OPTIONS] [INPUT]...

Split each INPUT (or each line of stdin when none is given) into its
URL components.

Options:
  -p, --private    Accept private Public Suffix List entries as TLDs
  -v, --verbose    Log pipeline stages (RUST_LOG overrides)
      --json-log   Emit logs as JSON
  -h, --help       Print this help";

fn main() -> ExitCode {
    let mut inputs = Vec::new();
    let mut config = ExtractorConfig::default();
    let mut level = "warn";
    let mut json_log = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-p" | "--private" => config.require_icann = false,
            "-v" | "--verbose" => level = "debug",
            "--json-log" => json_log = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return ExitCode::SUCCESS;
            }
            _ => inputs.push(arg),
        }
    }

    if json_log {
        urlextract::logging::init_tracing_json(level);
    } else {
        urlextract::logging::init_tracing(level);
    }

    if inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) if !line.trim().is_empty() => inputs.push(line),
                Ok(_) => {}
                Err(err) => {
                    eprintln!("error: failed to read stdin: {}", err);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    let extractor = Extractor::new().with_config(config);
    let mut failed = false;

    for input in &inputs {
        println!("{}", input);
        match extractor.extract(input) {
            Ok(parsed) => {
                for component in UrlComponent::ALL {
                    let value = parsed.component(component);
                    if !value.is_empty() {
                        println!("  {:<20} {}", component.name(), value);
                    }
                }
            }
            Err(err) => {
                warn!(input = %input, error = %err, "extraction failed");
                println!("  ✗ {}", err);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};

use classdoc_cli::args::CliArgs;
use classdoc_cli::driver;
use classdoc_cli::reporter::Reporter;

/// Exit status codes. Fatal errors (bad arguments, unreadable or invalid
/// manifests) return 1 through `main`'s `Err`.
const EXIT_SUCCESS: i32 = 0;
const EXIT_CLASSES_FAILED_OUTPUT_GENERATED: i32 = 2;

fn main() -> Result<()> {
    // Supports CLASSDOC_LOG_FORMAT=tree|json|text (see tracing_config.rs).
    classdoc_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let result = driver::run(&args, &cwd)?;
    let json = driver::render_json(&result.documentation, args.compact)?;

    match &args.out {
        Some(path) => std::fs::write(path, &json)
            .with_context(|| format!("failed to write output: {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .context("failed to write output")?;
            stdout.flush().context("failed to write output")?;
        }
    }

    if !result.documentation.is_complete() {
        let color = !args.no_color && std::io::stderr().is_terminal();
        let reporter = Reporter::new(color);
        // render() already includes all newlines
        eprint!("{}", reporter.render(&result.documentation.failures));
        std::process::exit(EXIT_CLASSES_FAILED_OUTPUT_GENERATED);
    }

    std::process::exit(EXIT_SUCCESS);
}

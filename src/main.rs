use anyhow::Result;
use clap::Parser;

use phrase_cli::cli::commands::{configure, languages, lookup, translate};
use phrase_cli::cli::{Args, Command};
use phrase_cli::config::ResolveOptions;
use phrase_cli::logging;
use phrase_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose);

    let resolve = ResolveOptions {
        endpoint: args.endpoint,
        languages: args.langs,
    };

    let code = match args.command {
        Some(Command::Languages) => {
            languages::print_languages(&resolve)?;
            exitcode::OK
        }
        Some(Command::Pairs) => {
            languages::print_pairs(&resolve)?;
            exitcode::OK
        }
        Some(Command::Configure) => {
            configure::run_configure()?;
            exitcode::OK
        }
        Some(Command::Lookup { from, to, phrase }) => {
            let options = lookup::LookupOptions {
                resolve,
                from,
                to,
                phrase,
            };
            lookup::run_lookup(options).await?
        }
        None => {
            let options = translate::TranslateOptions {
                resolve,
                into: args.into,
                at: args.at,
            };
            translate::run_translate(options).await?.exit_code()
        }
    };

    if code != exitcode::OK {
        std::process::exit(code);
    }

    Ok(())
}

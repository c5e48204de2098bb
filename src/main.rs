//! `numwords` command-line interface.

use std::{error::Error, process::ExitCode};

use clap::Parser;
use numwords::{Converter, DEFAULT_LANG, Lang, Number, all_langs};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Spell a number as words.
#[derive(Debug, Parser)]
#[command(name = "numwords")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Integer (`-42`) or decimal (`12.50`) to spell
    #[arg(allow_negative_numbers = true, required_unless_present = "list")]
    value: Option<String>,

    /// Language code, ISO 639-1 code or locale tag (e.g. FRA, fr, fr-FR)
    #[arg(short, long, default_value = DEFAULT_LANG.code)]
    lang: String,

    /// Word appended after the number, e.g. a currency
    #[arg(short, long, default_value = "")]
    suffix: String,

    /// Log level, used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// List supported languages and exit
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli.log_level) {
        eprintln!("invalid log level `{}`: {e}", cli.log_level);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = %e, "conversion failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("").add_directive(format!("numwords={level}").parse()?),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if cli.list {
        for lang in all_langs() {
            println!("{}\t{}\t{}", lang.code(), lang.locale(), lang.name());
        }
        return Ok(());
    }

    let lang: Lang = cli.lang.parse()?;
    let value: Number = cli.value.as_deref().unwrap_or_default().parse()?;
    debug!(%lang, ?value, "parsed arguments");

    let converter = Converter::builder()
        .lang(lang)
        .suffix(cli.suffix.clone())
        .build()?;
    println!("{}", converter.convert(value)?);
    Ok(())
}

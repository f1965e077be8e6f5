//! tavutin - Finnish soft hyphenation for text and HTML

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tavutin::filter::{Channel, ContentFilter, Settings};
use tavutin::{Hyphenator, HyphenatorOptions, SoftHyphen, break_positions};

#[derive(Parser)]
#[command(name = "tavutin")]
#[command(version, about = "Finnish soft hyphenation for text and HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    tavutin post.html -o post.fi.html      Hyphenate an HTML fragment
    echo kirjoituskone | tavutin --entity  Print kir&shy;joi&shy;tus&shy;ko&shy;ne
    tavutin --positions notes.txt          Show break positions per word")]
struct Cli {
    /// Input file (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Write breaks as the &shy; entity instead of U+00AD
    #[arg(long)]
    entity: bool,

    /// Content channel, checked against the settings
    #[arg(long, value_enum, default_value = "content")]
    channel: Channel,

    /// Content locale; only Finnish content is hyphenated
    #[arg(long, default_value = "fi")]
    locale: String,

    /// JSON settings file choosing the hyphenated channels
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Print each word with its break positions instead
    #[arg(long)]
    positions: bool,

    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "tavutin=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> tavutin::Result<()> {
    let bytes = read_input(cli.input.as_deref())?;
    let text = tavutin::decode_utf8(&bytes)?;

    let output = if cli.positions {
        describe_positions(text)
    } else {
        let settings = match &cli.settings {
            Some(path) => Settings::from_json(&fs::read_to_string(path)?)?,
            None => Settings::default(),
        };
        let soft_hyphen = if cli.entity {
            SoftHyphen::Entity
        } else {
            SoftHyphen::Char
        };
        let filter = ContentFilter::with_hyphenator(
            settings,
            Hyphenator::new(HyphenatorOptions { soft_hyphen }),
            tavutin::cache::DEFAULT_TTL,
        );
        tracing::debug!(channel = ?cli.channel, locale = %cli.locale, "filtering input");
        filter.apply(cli.channel, &cli.locale, text).into_owned()
    };

    write_output(cli.output.as_deref(), &output)?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}

fn write_output(path: Option<&Path>, text: &str) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, text),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()
        }
    }
}

fn describe_positions(text: &str) -> String {
    let mut out = String::new();
    for word in text.split_ascii_whitespace() {
        let positions: Vec<String> = break_positions(word)
            .iter()
            .map(|p| p.to_string())
            .collect();
        out.push_str(word);
        out.push('\t');
        out.push_str(&positions.join(","));
        out.push('\n');
    }
    out
}

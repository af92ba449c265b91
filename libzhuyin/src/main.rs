use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hanzidict_core::{classify, DictEntry, DisplayConfig, QueryKind};
use libzhuyin::{phrase_to_zhuyin, phrase_to_zhuyin_lossy, render_pronunciation};

#[derive(Parser)]
#[command(name = "zhuyin")]
#[command(about = "Convert tone-numbered pinyin to Zhuyin/Bopomofo")]
#[command(version)]
struct Cli {
    /// Display preferences (TOML with `romanization` and `hanzi_form`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Single pinyin phrase for quick conversion
    input: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert pinyin phrases to zhuyin
    Convert {
        /// Phrases such as "zhong1 guo2"
        #[arg(required = true)]
        phrases: Vec<String>,
        /// Keep unconvertible syllables as pinyin instead of failing
        #[arg(long)]
        lossy: bool,
    },
    /// Report whether text is hanzi, zhuyin or romanization
    Classify {
        text: String,
    },
    /// Render a dictionary entry with the configured preferences
    Show {
        #[arg(long)]
        simplified: String,
        #[arg(long)]
        traditional: String,
        #[arg(long)]
        pinyin: String,
        /// Translations, repeatable
        #[arg(long = "translation")]
        translations: Vec<String>,
    },
    /// Interactive mode: convert stdin line by line
    Repl,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<DisplayConfig> {
    match path {
        Some(path) => DisplayConfig::load_toml(path),
        None => Ok(DisplayConfig::default()),
    }
}

fn handle_convert_command(phrases: &[String], lossy: bool) -> Result<()> {
    for phrase in phrases {
        if lossy {
            println!("{}", phrase_to_zhuyin_lossy(phrase));
            continue;
        }
        let zhuyin = phrase_to_zhuyin(phrase)?;
        println!("{zhuyin}");
    }
    Ok(())
}

/// Headword (alternate form in parentheses), pronunciation, numbered
/// translations; one per line.
fn render_entry(entry: &DictEntry, config: &DisplayConfig) -> String {
    let headword = entry.headword(config.hanzi_form);
    let mut lines = vec![match entry.alternate_headword(config.hanzi_form) {
        Some(alt) => format!("{headword} ({alt})"),
        None => headword.to_string(),
    }];
    lines.push(format!("  {}", render_pronunciation(entry, config.romanization)));
    for (i, t) in entry.translations.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, t));
    }
    lines.join("\n")
}

fn handle_show_command(entry: &DictEntry, config: &DisplayConfig) {
    println!("{}", render_entry(entry, config));
}

fn describe(line: &str) -> String {
    match classify(line) {
        QueryKind::Romanization => phrase_to_zhuyin_lossy(line),
        kind => format!("({kind})"),
    }
}

fn run_repl() -> Result<()> {
    println!("zhuyin — type tone-numbered pinyin and press Enter");
    println!("Example: zhong1 guo2 for ㄓㄨㄥ ㄍㄨㄛˊ");
    println!("Ctrl-D to exit.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let raw = line?;
        let input = raw.trim();
        if input.is_empty() {
            continue;
        }
        println!("{}", describe(input));
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Some(Commands::Convert { phrases, lossy }) => handle_convert_command(&phrases, lossy),
        Some(Commands::Classify { text }) => {
            println!("{}", classify(&text));
            Ok(())
        }
        Some(Commands::Show {
            simplified,
            traditional,
            pinyin,
            translations,
        }) => {
            let mut entry = DictEntry::new(simplified, traditional, pinyin);
            entry.translations = translations;
            handle_show_command(&entry, &config);
            Ok(())
        }
        Some(Commands::Repl) => run_repl(),
        None => match cli.input {
            // bare argument: strict conversion
            Some(input) => handle_convert_command(&[input], false),
            None => run_repl(),
        },
    }
}

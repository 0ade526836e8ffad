//! seedkit: Base58Check and BIP39 mnemonic command-line tool.

mod commands;
mod config;

use clap::Parser;
use config::CliConfig;
use seedkit_crypto::OsEntropy;
use seedkit_types::EntropyBits;
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seedkit", about = "Base58Check encoding and BIP39 mnemonic generation")]
struct Cli {
    /// Path to a TOML configuration file. File settings are used as the
    /// base; CLI flags and env vars override them.
    #[arg(long, env = "SEEDKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "SEEDKIT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, env = "SEEDKIT_LOG_JSON")]
    log_json: bool,

    /// Print results as JSON.
    #[arg(long, env = "SEEDKIT_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// BIP39 mnemonic phrases and seeds.
    Mnemonic {
        #[command(subcommand)]
        action: MnemonicAction,
    },
    /// Plain Base58.
    Base58 {
        #[command(subcommand)]
        action: Base58Action,
    },
    /// Base58Check (version byte + payload + checksum).
    Check {
        #[command(subcommand)]
        action: CheckAction,
    },
}

#[derive(clap::Subcommand)]
enum MnemonicAction {
    /// Generate a random mnemonic and its seed.
    Generate {
        /// Entropy strength in bits: 128, 160, 192, 224 or 256.
        #[arg(long, conflicts_with = "words")]
        bits: Option<u32>,

        /// Number of words: 12, 15, 18, 21 or 24.
        #[arg(long)]
        words: Option<usize>,

        /// Optional BIP39 passphrase.
        #[arg(long, default_value = "", env = "SEEDKIT_PASSPHRASE", hide_env_values = true)]
        passphrase: String,

        /// Newline-separated 2048-word list (defaults to BIP39 English).
        #[arg(long, env = "SEEDKIT_WORDLIST")]
        wordlist: Option<PathBuf>,
    },
    /// Derive the seed of an existing mnemonic.
    Seed {
        /// The mnemonic phrase, words separated by spaces.
        #[arg(long)]
        phrase: String,

        /// Optional BIP39 passphrase.
        #[arg(long, default_value = "", env = "SEEDKIT_PASSPHRASE", hide_env_values = true)]
        passphrase: String,

        /// Newline-separated 2048-word list (defaults to BIP39 English).
        #[arg(long, env = "SEEDKIT_WORDLIST")]
        wordlist: Option<PathBuf>,
    },
}

#[derive(clap::Subcommand)]
enum Base58Action {
    /// Encode hex bytes.
    Encode { hex: String },
    /// Decode to hex bytes.
    Decode { text: String },
}

#[derive(clap::Subcommand)]
enum CheckAction {
    /// Encode hex payload under a version byte.
    Encode {
        #[arg(long)]
        version: u8,
        hex: String,
    },
    /// Decode and verify the checksum.
    Decode {
        text: String,
        /// Only split the string; do not verify the checksum.
        #[arg(long)]
        no_verify: bool,
    },
}

fn emit<T: Serialize + Display>(report: &T, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn resolve_strength(
    bits: Option<u32>,
    words: Option<usize>,
    fallback: EntropyBits,
) -> anyhow::Result<EntropyBits> {
    Ok(match (bits, words) {
        (Some(bits), _) => EntropyBits::try_from(bits)?,
        (None, Some(words)) => EntropyBits::from_word_count(words)?,
        (None, None) => fallback,
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = CliConfig::load(cli.config.as_deref());
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    seedkit_utils::init_tracing(log_level, cli.log_json || config.log_json);

    match &loaded {
        Ok(_) if cli.config.is_some() => tracing::info!("loaded config file"),
        Ok(_) => {}
        Err(e) => tracing::warn!("{e}, using defaults"),
    }

    let json = cli.json || config.json;

    match cli.command {
        Command::Mnemonic { action } => match action {
            MnemonicAction::Generate {
                bits,
                words,
                passphrase,
                wordlist,
            } => {
                let strength = resolve_strength(bits, words, config.strength)?;
                let wordlist = commands::load_wordlist(wordlist.or(config.wordlist).as_deref())?;
                let report =
                    commands::generate_mnemonic(strength, &wordlist, &passphrase, &OsEntropy)?;
                emit(&report, json)
            }
            MnemonicAction::Seed {
                phrase,
                passphrase,
                wordlist,
            } => {
                let wordlist = commands::load_wordlist(wordlist.or(config.wordlist).as_deref())?;
                emit(&commands::mnemonic_seed(&phrase, &wordlist, &passphrase)?, json)
            }
        },
        Command::Base58 { action } => match action {
            Base58Action::Encode { hex } => emit(&commands::base58_encode(&hex)?, json),
            Base58Action::Decode { text } => emit(&commands::base58_decode(&text)?, json),
        },
        Command::Check { action } => match action {
            CheckAction::Encode { version, hex } => {
                emit(&commands::check_encode(version, &hex)?, json)
            }
            CheckAction::Decode { text, no_verify } => {
                emit(&commands::check_decode(&text, !no_verify)?, json)
            }
        },
    }
}

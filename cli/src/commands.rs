//! Command implementations. Each returns a serializable report that `main`
//! prints as text or JSON.

use anyhow::{bail, Context};
use serde::Serialize;
use seedkit_crypto::{base58, base58check, to_seed, EntropySource, Wordlist};
use seedkit_types::{EntropyBits, Mnemonic};
use std::fmt;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct GeneratedReport {
    pub bits: u32,
    pub words: usize,
    pub mnemonic: String,
    pub seed: String,
}

#[derive(Debug, Serialize)]
pub struct SeedReport {
    pub seed: String,
}

#[derive(Debug, Serialize)]
pub struct EncodedReport {
    pub encoded: String,
}

#[derive(Debug, Serialize)]
pub struct DecodedReport {
    pub hex: String,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub version: u8,
    pub payload: String,
    pub checksum: String,
    /// `None` when verification was skipped.
    pub verified: Option<bool>,
}

impl fmt::Display for GeneratedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mnemonic: {}", self.mnemonic)?;
        write!(f, "seed:     {}", self.seed)
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.seed)
    }
}

impl fmt::Display for EncodedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encoded)
    }
}

impl fmt::Display for DecodedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "version:  {}", self.version)?;
        writeln!(f, "payload:  {}", self.payload)?;
        write!(f, "checksum: {}", self.checksum)?;
        if let Some(ok) = self.verified {
            write!(f, "\nverified: {ok}")?;
        }
        Ok(())
    }
}

/// Load a wordlist file, or the English list when no path is given.
pub fn load_wordlist(path: Option<&Path>) -> anyhow::Result<Wordlist> {
    let Some(path) = path else {
        return Ok(Wordlist::english());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read wordlist {}", path.display()))?;
    let wordlist = Wordlist::from_text(&text)
        .with_context(|| format!("invalid wordlist {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded wordlist");
    Ok(wordlist)
}

pub fn generate_mnemonic(
    strength: EntropyBits,
    wordlist: &Wordlist,
    passphrase: &str,
    source: &dyn EntropySource,
) -> anyhow::Result<GeneratedReport> {
    let (seed, mnemonic) =
        seedkit_crypto::random_mnemonic_and_seed(strength, wordlist, passphrase, source)?;
    tracing::info!(bits = strength.bits(), words = mnemonic.len(), "generated mnemonic");
    Ok(GeneratedReport {
        bits: strength.bits(),
        words: mnemonic.len(),
        mnemonic: mnemonic.phrase(),
        seed: seed.to_hex(),
    })
}

/// Derive the seed of an existing phrase.
///
/// Words are checked against `wordlist` so typos are caught before they
/// silently produce a different seed.
pub fn mnemonic_seed(
    phrase: &str,
    wordlist: &Wordlist,
    passphrase: &str,
) -> anyhow::Result<SeedReport> {
    let mnemonic = Mnemonic::from_phrase(phrase);
    mnemonic
        .strength()
        .context("phrase has an unsupported number of words")?;
    if let Some(unknown) = mnemonic
        .words()
        .iter()
        .find(|w| wordlist.index_of(w).is_none())
    {
        bail!("word {unknown:?} is not in the wordlist");
    }
    let seed = to_seed(&mnemonic, passphrase)?;
    Ok(SeedReport { seed: seed.to_hex() })
}

pub fn base58_encode(hex_input: &str) -> anyhow::Result<EncodedReport> {
    let bytes = decode_hex(hex_input)?;
    Ok(EncodedReport {
        encoded: base58::encode(&bytes),
    })
}

pub fn base58_decode(text: &str) -> anyhow::Result<DecodedReport> {
    let bytes = base58::decode(text)?;
    Ok(DecodedReport {
        hex: hex::encode(bytes),
    })
}

pub fn check_encode(version: u8, hex_input: &str) -> anyhow::Result<EncodedReport> {
    let payload = decode_hex(hex_input)?;
    Ok(EncodedReport {
        encoded: base58check::encode(version, &payload),
    })
}

/// Decode a Base58Check string; verify its checksum unless `verify` is false.
pub fn check_decode(text: &str, verify: bool) -> anyhow::Result<CheckReport> {
    let decoded = base58check::decode(text)?;
    let verified = if verify {
        base58check::verify(&decoded)?;
        Some(true)
    } else {
        tracing::warn!("checksum verification skipped");
        None
    };
    Ok(CheckReport {
        version: decoded.version,
        payload: hex::encode(&decoded.payload),
        checksum: decoded.checksum.to_string(),
        verified,
    })
}

fn decode_hex(input: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(trimmed).with_context(|| format!("invalid hex input {input:?}"))
}

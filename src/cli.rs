use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::Config;
use crate::crlset::{CrlSet, ParseError, SPKI_HASH_LEN};
use crate::export::{self, CertificateError};
use crate::update::{UpdateClient, UpdateError};

#[derive(Debug, Parser)]
#[command(name = "crlset-tools")]
#[command(about = "Download and parse Chrome CRLSets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download the current CRLSet and write its raw bytes to stdout
    Fetch,
    /// List revoked serials, optionally only those under one certificate's key
    Dump {
        /// CRLSet file to read
        crl_set: PathBuf,
        /// Certificate (PEM or DER) selecting the issuing key to filter by
        certificate: Option<PathBuf>,
    },
    /// List the policy SPKI fingerprints carried in the header
    #[command(name = "dumpSPKIs")]
    DumpSpkis {
        /// CRLSet file to read
        crl_set: PathBuf,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Update(#[from] UpdateError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Certificate(#[from] CertificateError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Execute one command against explicit sinks: records go to `out`,
/// per-entry diagnostics to `diag`. Any returned error means exit status 1.
pub async fn run(
    command: Command,
    config: &Config,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Fetch => {
            let client = UpdateClient::new(config.update.clone())?;
            let bytes = client.fetch().await?;
            out.write_all(&bytes)?;
        }
        Command::Dump {
            crl_set,
            certificate,
        } => {
            let filter = match certificate {
                Some(path) => Some(export::spki_hash(&read_file(&path)?)?),
                None => None,
            };
            let buf = read_file(&crl_set)?;
            let set = CrlSet::parse(&buf)?;
            dump_serials(&set, filter, out)?;
        }
        Command::DumpSpkis { crl_set } => {
            let buf = read_file(&crl_set)?;
            let set = CrlSet::parse(&buf)?;
            for entry in export::policy_spkis(set.header()) {
                match entry {
                    Ok(spki) => writeln!(out, "\t\t\\\\x{}", hex::encode(spki))?,
                    Err(err) => writeln!(diag, "{err}")?,
                }
            }
        }
    }
    Ok(())
}

fn dump_serials(
    set: &CrlSet<'_>,
    filter: Option<[u8; SPKI_HASH_LEN]>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match filter {
        None => {
            for record in export::revoked_serials(set, None) {
                let record = record?;
                writeln!(
                    out,
                    "\\\\x{}\t\\\\x{}\t",
                    hex::encode(record.spki),
                    hex::encode(record.serial)
                )?;
            }
        }
        Some(spki) => {
            for record in export::revoked_serials(set, Some(spki)) {
                writeln!(out, "{}", hex::encode(record?.serial))?;
            }
        }
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

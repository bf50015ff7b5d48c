use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use validator::Validate;

use crate::core::primes::{PrimeCache, PrimeError};
use crate::models::{Address, Driver, NewAddress, NewDriver};
use crate::services::text::{count_consonants, count_vowels, extract_street_name};

/// Errors that can occur while loading input documents
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unrecognized address on line {line}: {content:?}")]
    UnrecognizedAddress { line: usize, content: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Prime(#[from] PrimeError),
}

fn read_document(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Non-blank lines with their 1-based line numbers
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Parse one address per line, keeping only the street name
pub fn parse_addresses(text: &str) -> Result<Vec<Address>, InputError> {
    content_lines(text)
        .map(|(line, content)| -> Result<Address, InputError> {
            let street = extract_street_name(content).ok_or_else(|| InputError::UnrecognizedAddress {
                line,
                content: content.to_string(),
            })?;

            let record = NewAddress {
                name: street.to_string(),
            };
            record.validate()?;

            Ok(Address::new(record.name))
        })
        .collect()
}

/// Parse one driver per line; the whole line is the driver's name
pub fn parse_drivers(text: &str, cache: &mut PrimeCache) -> Result<Vec<Driver>, InputError> {
    content_lines(text)
        .map(|(_, content)| -> Result<Driver, InputError> {
            let record = NewDriver {
                name: content.to_string(),
                vowel_count: count_vowels(content),
                consonant_count: count_consonants(content),
            };
            record.validate()?;

            Ok(Driver::new(record.name, record.vowel_count, record.consonant_count, cache)?)
        })
        .collect()
}

/// Load the address document from disk
pub fn load_addresses(path: impl AsRef<Path>) -> Result<Vec<Address>, InputError> {
    let path = path.as_ref();
    let addresses = parse_addresses(&read_document(path)?)?;
    tracing::debug!("Loaded {} addresses from {}", addresses.len(), path.display());
    Ok(addresses)
}

/// Load the driver document from disk
pub fn load_drivers(path: impl AsRef<Path>, cache: &mut PrimeCache) -> Result<Vec<Driver>, InputError> {
    let path = path.as_ref();
    let drivers = parse_drivers(&read_document(path)?, cache)?;
    tracing::debug!("Loaded {} drivers from {}", drivers.len(), path.display());
    Ok(drivers)
}

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::alphabet;
use crate::charset::{CharacterSet, SetAlgebra};

/// Hard limit on how many bytes of a file participate in encoding; content
/// past this limit is silently dropped.
pub const MAX_INPUT_LENGTH: usize = 256;

/// Errors that can occur while sourcing the bytes of a set.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The named file could not be opened or read.
    #[error("could not read '{}': {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Fold a byte sequence into a set: each recognized byte sets the bit at its
/// alphabet position, and unrecognized bytes contribute nothing. Order and
/// repetition in the input are irrelevant to the result.
pub fn encode(bytes: &[u8]) -> CharacterSet {
    let mut set: CharacterSet = 0;
    for &byte in bytes {
        if let Some(position) = alphabet::position_of(byte) {
            set |= 1 << position;
        }
    }
    set
}

/// Encode the contents of the file at `path`, considering at most
/// [`MAX_INPUT_LENGTH`] bytes. Only the bytes actually read are encoded.
pub fn encode_file(path: &Path) -> Result<CharacterSet, EncodeError> {
    let file = File::open(path).map_err(|source| EncodeError::FileUnreadable {
        path: path.to_owned(),
        source,
    })?;

    let mut buffer = Vec::with_capacity(MAX_INPUT_LENGTH);
    file.take(MAX_INPUT_LENGTH as u64)
        .read_to_end(&mut buffer)
        .map_err(|source| EncodeError::FileUnreadable {
            path: path.to_owned(),
            source,
        })?;

    Ok(encode(&buffer))
}

/// Expand a set into the string of its member symbols, highest alphabet
/// position first, visiting every position down to and including 0. The
/// result's length always equals the set's cardinality.
pub fn decode(set: CharacterSet) -> String {
    let mut decoded = String::with_capacity(set.cardinality() as usize);
    for position in (0..64_u8).rev() {
        if set & (1 << position) != 0 {
            decoded.push(alphabet::symbol_at(position));
        }
    }
    decoded
}

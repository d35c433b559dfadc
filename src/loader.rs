use std::fs;
use std::path::Path;

use miette::Result;

use crate::error;
use crate::runtime::MEMORY_MAX;

/// An object image: big-endian words prefixed by their load address.
///
/// No header, no checksum, no relocation. The first word of the file is the
/// origin; every following word occupies the next consecutive address.
#[derive(Debug, PartialEq, Eq)]
pub struct Image {
    origin: u16,
    words: Vec<u16>,
}

impl Image {
    /// Read and byte-swap an image file.
    pub fn read_from(path: &Path) -> Result<Image> {
        let bytes = fs::read(path).map_err(|err| error::load_failure(path, err))?;
        Self::from_bytes(&bytes).ok_or_else(|| error::load_truncated(path))
    }

    /// `None` indicates the file is too short to hold an origin word.
    ///
    /// Words that would land past the top of memory are dropped, as is a
    /// trailing odd byte. Short images are fine; they simply leave the rest
    /// of memory zeroed.
    pub fn from_bytes(bytes: &[u8]) -> Option<Image> {
        let [hi, lo, rest @ ..] = bytes else {
            return None;
        };
        let origin = u16::from_be_bytes([*hi, *lo]);
        let max_read = MEMORY_MAX - origin as usize;
        let words = rest
            .chunks_exact(2)
            .take(max_read)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        Some(Image { origin, words })
    }

    pub fn origin(&self) -> u16 {
        self.origin
    }

    pub fn words(&self) -> &[u16] {
        &self.words
    }
}

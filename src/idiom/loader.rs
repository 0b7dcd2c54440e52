//! Loading idioms from text sources.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use rand::Rng;

use crate::error::{IdiomGraphError, Result};
use crate::idiom::Idiom;
use crate::idiom::sample::sample_idioms;

/// Reads one idiom per line and produces a deduplicated idiom set.
///
/// Lines that are not exactly four characters after trimming are skipped.
/// The set keeps the order in which idioms were first seen.
#[derive(Debug, Clone)]
pub struct IdiomLoader {
    /// Maximum number of idioms to keep; `<= 0` disables sampling.
    sample_size: i64,
}

impl IdiomLoader {
    /// Create a loader that samples down to `sample_size` idioms.
    pub fn new(sample_size: i64) -> Self {
        IdiomLoader { sample_size }
    }

    /// Create a loader that never samples.
    pub fn unlimited() -> Self {
        IdiomLoader { sample_size: -1 }
    }

    /// Normalize and deduplicate raw lines.
    pub fn load_lines<I, S>(&self, lines: I) -> Vec<Idiom>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut idioms = Vec::new();
        let mut skipped = 0usize;

        for line in lines {
            match Idiom::parse(line.as_ref()) {
                Some(idiom) => {
                    if seen.insert(idiom.clone()) {
                        idioms.push(idiom);
                    }
                }
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("Skipped {skipped} lines that are not four-character idioms");
        }
        idioms
    }

    /// Read idioms from a buffered reader.
    ///
    /// A read failure is reported as missing input for `origin`.
    pub fn load_reader<R: BufRead>(&self, reader: R, origin: &Path) -> Result<Vec<Idiom>> {
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(|e| IdiomGraphError::missing_input(origin, e))?;
        Ok(self.load_lines(lines))
    }

    /// Read idioms from a file.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Idiom>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| IdiomGraphError::missing_input(path, e))?;
        let idioms = self.load_reader(BufReader::new(file), path)?;
        info!("A total of {} idioms are loaded from {}", idioms.len(), path.display());
        Ok(idioms)
    }

    /// Apply the configured sampling to a loaded idiom set.
    pub fn sample<R: Rng + ?Sized>(&self, idioms: Vec<Idiom>, rng: &mut R) -> Vec<Idiom> {
        sample_idioms(idioms, self.sample_size, rng)
    }
}

impl Default for IdiomLoader {
    fn default() -> Self {
        IdiomLoader::new(2000)
    }
}

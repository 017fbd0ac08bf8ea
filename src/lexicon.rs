/*! Lexicon loading

A [Lexicon] maps sentence identifiers to replacement comment values. The
source format is a text file of records separated by one blank line, each
record being exactly two lines: the key, then the value. Both are trimmed.

Any record that is not exactly two lines makes loading fail with
[Error::MalformedLexicon].
!*/
use std::{collections::HashMap, fs, path::Path};

use crate::error::Error;

/// Sentence-id to replacement-comment mapping.
#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(src)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, Error> {
        let mut entries = HashMap::new();
        for record in content.trim().split("\n\n") {
            let lines: Vec<&str> = record.lines().collect();
            if lines.len() != 2 {
                return Err(Error::MalformedLexicon {
                    record: record.to_owned(),
                    lines: lines.len(),
                });
            }
            entries.insert(lines[0].trim().to_owned(), lines[1].trim().to_owned());
        }
        Ok(Self { entries })
    }

    /// Looks `id` up. Absence is an error: every identifier reaching a
    /// substitution must be covered by the lexicon.
    pub fn get(&self, id: &str) -> Result<&str, Error> {
        self.entries
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingLexiconEntry(id.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/*! Morphosemantic-links extraction

Reduces the WordNet morphosemantic-links CSV resource to its unique
(verb, noun) pairings. Sense annotations (`%`-delimited suffixes) are
stripped, so `run%2:38:00::,...,jog%2:38:00::` and a later row with other
senses of the same lemmas collapse into a single `run,jog` line.

The resource is line-oriented: each data line is parsed on its own, and a
blank line is a structural error, not a record separator.

Nothing is written before the whole resource has been consumed.
!*/
use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::Path,
};

use itertools::Itertools;
use log::info;
use serde::Serialize;

use crate::error::Error;

/// Column holding the verb lemma.
const VERB_COLUMN: usize = 0;
/// Column holding the noun lemma.
const NOUN_COLUMN: usize = 3;

/// One deduplicated verb/noun pairing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    pub verb: String,
    pub noun: String,
}

impl Pair {
    pub fn new(verb: &str, noun: &str) -> Self {
        Self {
            verb: strip_sense(verb).to_owned(),
            noun: strip_sense(noun).to_owned(),
        }
    }
}

/// Keeps only the lemma, cutting at the first `%` sense separator.
fn strip_sense(field: &str) -> &str {
    field.split('%').next().unwrap_or(field)
}

/// Parses one data line into its fields. A blank line yields no record at
/// all from the csv parser and counts as a single empty field, so it fails
/// the arity check like any other short row.
fn parse_row(line: &str, lineno: u64) -> Result<csv::StringRecord, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let record = match rdr.records().next() {
        Some(record) => record?,
        None => csv::StringRecord::from(vec![""]),
    };
    if record.len() <= NOUN_COLUMN {
        return Err(Error::ShortCsvRow {
            line: lineno,
            fields: record.len(),
        });
    }
    Ok(record)
}

/// Collects the deduplicated pairs of a whole resource. The first line is
/// the header, skipped whatever it holds; every data line must carry at
/// least four fields.
///
/// Lines are trimmed whole; the fields themselves are kept unchanged, so
/// interior whitespace survives into the pairs.
pub fn collect_pairs<R: Read>(src: R) -> Result<HashSet<Pair>, Error> {
    let mut pairs = HashSet::new();
    for (idx, line) in BufReader::new(src).lines().enumerate() {
        let line = line?;
        if idx == 0 {
            continue;
        }
        let record = parse_row(line.trim(), idx as u64 + 1)?;
        pairs.insert(Pair::new(&record[VERB_COLUMN], &record[NOUN_COLUMN]));
    }
    Ok(pairs)
}

/// Runs the extraction over `src`, printing one `verb,noun` line per unique
/// pair to stdout, lexicographically sorted.
pub fn extract(src: &Path) -> Result<(), Error> {
    info!("extracting morphosemantic pairs from {:?}", src);

    let pairs = collect_pairs(File::open(src)?)?;
    info!("{} unique pairs", pairs.len());

    let stdout = io::stdout();
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(stdout.lock());
    for pair in pairs.into_iter().sorted() {
        out.serialize(pair)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_sense_suffix() {
        assert_eq!(strip_sense("run%1"), "run");
        // cut at the first separator only
        assert_eq!(strip_sense("dog%n%2"), "dog");
        assert_eq!(strip_sense("plain"), "plain");
        assert_eq!(strip_sense(""), "");
    }

    #[test]
    fn dedups_suffixed_rows() {
        let pairs =
            collect_pairs("a,b,c,d\nrun%1,x,y,jog%2\nrun%3,x,y,jog%4\n".as_bytes()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert!(pairs.contains(&Pair::new("run", "jog")));
    }

    #[test]
    fn header_is_always_skipped() {
        // even a header that looks like data never becomes a pair
        let pairs = collect_pairs("eat%1,x,y,meal%1\ndrink%1,x,y,cup%1\n".as_bytes()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert!(pairs.contains(&Pair::new("drink", "cup")));
    }

    #[test]
    fn collection_is_idempotent() {
        let content = "a,b,c,d\nrun%1,x,y,jog%2\nwalk,x,y,stroll\nrun%3,x,y,jog%4\n";
        let first = collect_pairs(content.as_bytes()).unwrap();
        let second = collect_pairs(content.as_bytes()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let pairs = collect_pairs("a,b,c,d\nv%1,x,y,n%1,extra,columns\n".as_bytes()).unwrap();
        assert!(pairs.contains(&Pair::new("v", "n")));
    }

    #[test]
    fn short_row_is_fatal() {
        let res = collect_pairs("a,b,c,d\nv%1,x,y\n".as_bytes());
        assert!(matches!(
            res,
            Err(Error::ShortCsvRow { line: 2, fields: 3 })
        ));
    }

    #[test]
    fn blank_data_line_is_fatal() {
        let res = collect_pairs("a,b,c,d\nrun%1,x,y,jog%2\n\nwalk,x,y,stroll\n".as_bytes());
        assert!(matches!(
            res,
            Err(Error::ShortCsvRow { line: 3, fields: 1 })
        ));
    }

    #[test]
    fn fields_keep_interior_whitespace() {
        // only the line is trimmed whole, as-is fields pass through
        let pairs = collect_pairs("a,b,c,d\n  run, x, y, jog  \n".as_bytes()).unwrap();
        assert!(pairs.contains(&Pair::new("run", " jog")));
    }
}

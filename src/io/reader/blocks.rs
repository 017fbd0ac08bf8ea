/*! Reading facilities

[BlockReader] implements [Iterator] in order to properly iterate on alignment
records: each item is one blank-line-delimited block, as an ordered sequence
of lines.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Read},
    path::Path,
};

use crate::error::Error;

/// Reader that yields blocks of lines
/// that are blank-line separated.
#[derive(Debug)]
pub struct BlockReader<T> {
    lines: Lines<BufReader<T>>,
}

impl BlockReader<File> {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        Ok(Self::new(handle))
    }
}

impl<T> BlockReader<T>
where
    T: Read,
{
    pub fn new(src: T) -> Self {
        Self {
            lines: BufReader::new(src).lines(),
        }
    }
}

impl<T> Iterator for BlockReader<T>
where
    T: Read,
{
    type Item = Result<Vec<String>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut ret = Vec::new();
        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };
            // cut at empty line, tolerating runs of them between records
            if line.trim().is_empty() {
                if ret.is_empty() {
                    continue;
                }
                return Some(Ok(ret));
            }
            // trim_end to remove eventual trailing whitespace.
            ret.push(line.trim_end().to_owned());
        }

        // close eventual last block
        if ret.is_empty() {
            None
        } else {
            Some(Ok(ret))
        }
    }
}

/*! Alignment-file reading

A [BlockReader] iterates on the blank-line-delimited records of an alignment
file, yielding each record as its ordered lines.
!*/
mod blocks;

pub use blocks::BlockReader;

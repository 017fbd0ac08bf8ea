/*! Corpus preparation operations

Contains the two batch operations: lexicon-driven comment substitution over
alignment files, and morphosemantic-links pair extraction.
!*/
pub mod comments;
pub mod morphosem;

pub mod amr;
pub mod error;
pub mod io;
pub mod lexicon;
pub mod processing;

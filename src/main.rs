//! # amr-prep
//!
//! Small batch utilities for AMR alignment corpus preparation.
//!
//! ```sh
//! amr-prep 0.2.0
//! AMR corpus preparation tools.
//!
//! USAGE:
//!     amr-prep <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help                Prints this message or the help of the given subcommand(s)
//!     morphosemantics     Deduplicate the (verb, noun) morphosemantic pairings of a CSV resource
//!     replace-comments    Substitute a comment annotation using a lexicon
//! ```
//!
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use amr_prep::error::Error;
use amr_prep::processing::{comments, morphosem};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::AmrPrep::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::AmrPrep::ReplaceComments(c) => {
            comments::replace_comments(&c.lexicon, &c.data, &c.key, c.remove_node_edge_and_root)?;
        }
        cli::AmrPrep::Morphosemantics(m) => {
            morphosem::extract(&m.src)?;
        }
    };
    Ok(())
}

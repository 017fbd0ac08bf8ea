//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "amr-prep", about = "AMR corpus preparation tools.")]
/// Holds every command that is callable by the `amr-prep` command.
pub enum AmrPrep {
    #[structopt(about = "Substitute a comment annotation using a lexicon")]
    ReplaceComments(ReplaceComments),
    #[structopt(about = "Deduplicate the (verb, noun) morphosemantic pairings of a CSV resource")]
    Morphosemantics(Morphosemantics),
}

#[derive(Debug, StructOpt)]
/// ReplaceComments command and parameters.
///
/// ```sh
/// amr-prep replace-comments [FLAGS] --data <data> --key <key> --lexicon <lexicon>
///
/// FLAGS:
///     -h, --help                        Prints help information
///         --remove-node-edge-and-root   drop node/edge/root comment lines
///     -V, --version                     Prints version information
///
/// OPTIONS:
///         --data <data>          path to the alignment file
///         --key <key>            comment-field key to substitute (amr-root, usually)
///         --lexicon <lexicon>    path to the lexicon file
/// ```
pub struct ReplaceComments {
    #[structopt(parse(from_os_str), long = "lexicon", help = "path to the lexicon file")]
    pub lexicon: PathBuf,
    #[structopt(parse(from_os_str), long = "data", help = "path to the alignment file")]
    pub data: PathBuf,
    #[structopt(
        long = "key",
        help = "comment-field key to substitute (amr-root, usually)"
    )]
    pub key: String,
    #[structopt(
        long = "remove-node-edge-and-root",
        help = "drop node/edge/root comment lines"
    )]
    pub remove_node_edge_and_root: bool,
}

#[derive(Debug, StructOpt)]
/// Morphosemantics command and parameters.
pub struct Morphosemantics {
    #[structopt(parse(from_os_str), help = "path to the morphosemantic-links CSV")]
    pub src: PathBuf,
}

/*! Comment substitution

Rewrites one targeted comment annotation of every alignment record: the line
starting with `# ::<key>` is replaced by the lexicon value stored under the
record's sentence identifier. Every other comment line passes through
verbatim, the graph body follows, then a blank line.

Optionally drops the `# ::node`, `# ::edge` and `# ::root` alignment
metadata lines.
!*/
use std::{
    io::{self, BufWriter, Write},
    path::Path,
};

use log::info;

use crate::{amr::Alignment, error::Error, io::reader::BlockReader, lexicon::Lexicon};

const DROP_MARKERS: [&str; 3] = ["# ::node", "# ::edge", "# ::root"];

/// Rewrites a single block into `out`.
///
/// The drop filter is checked before the signature: with
/// `remove_node_edge_and_root` set, a node/edge/root line is dropped even
/// when it also matches the signature.
pub fn replace_block<W: Write>(
    block: &[String],
    lexicon: &Lexicon,
    signature: &str,
    remove_node_edge_and_root: bool,
    out: &mut W,
) -> Result<(), Error> {
    let alignment = Alignment::new(block)?;

    for line in block {
        if remove_node_edge_and_root && DROP_MARKERS.iter().any(|m| line.starts_with(m)) {
            continue;
        }
        if line.starts_with('#') {
            if line.starts_with(signature) {
                writeln!(out, "{}", lexicon.get(alignment.id())?)?;
            } else {
                writeln!(out, "{}", line)?;
            }
        }
        // non-comment lines are not re-emitted: the graph body comes from
        // the parsed alignment, once, below.
    }

    writeln!(out, "{}", alignment.graph())?;
    writeln!(out)?;
    Ok(())
}

/// Runs comment substitution over a whole alignment file, block by block,
/// writing to stdout. Aborts on the first error; earlier blocks may already
/// have been flushed.
pub fn replace_comments(
    lexicon: &Path,
    data: &Path,
    key: &str,
    remove_node_edge_and_root: bool,
) -> Result<(), Error> {
    let lexicon = Lexicon::from_path(lexicon)?;
    let signature = format!("# ::{}", key);
    info!(
        "substituting '{}' comments in {:?} ({} lexicon entries)",
        signature,
        data,
        lexicon.len()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for block in BlockReader::from_path(data)? {
        replace_block(
            &block?,
            &lexicon,
            &signature,
            remove_node_edge_and_root,
            &mut out,
        )?;
    }
    out.flush()?;

    info!("comment substitution done");
    Ok(())
}

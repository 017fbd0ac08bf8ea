/*! Alignment records

An [Alignment] is one parsed record of an alignment file: the sentence
identifier from its `# ::id` comment, and the serialized graph body (every
non-comment line, joined).

No AMR syntax validation happens here: the graph body is carried as an opaque
string.
!*/
use crate::error::Error;

const ID_MARKER: &str = "# ::id";

/// One parsed alignment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    id: String,
    graph: String,
}

/// Strips `marker` from `line`, ensuring the marker is a whole field
/// (`# ::id` must not match `# ::idx`).
fn field_value<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    match rest.chars().next() {
        Some(c) if c.is_whitespace() => Some(rest),
        None => Some(rest),
        Some(_) => None,
    }
}

impl Alignment {
    pub fn new(block: &[String]) -> Result<Self, Error> {
        let mut id = None;
        let mut body = Vec::new();

        for line in block {
            if let Some(rest) = field_value(line, ID_MARKER) {
                id = rest.split_whitespace().next().map(String::from);
            } else if !line.starts_with('#') {
                body.push(line.as_str());
            }
        }

        let id = id.ok_or_else(|| {
            Error::MissingId(block.first().cloned().unwrap_or_default())
        })?;
        if body.is_empty() {
            return Err(Error::EmptyGraph(id));
        }

        Ok(Self {
            id,
            graph: body.join("\n"),
        })
    }

    /// The sentence identifier, used as lexicon key.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The serialized graph body.
    pub fn graph(&self) -> &str {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn parse() {
        let b = block(&[
            "# ::id bolt-eng-DF-1_0047",
            "# ::snt Hello there.",
            "# ::alignments 0-1",
            "(h / hello",
            "   :mode expressive)",
        ]);

        let a = Alignment::new(&b).unwrap();
        assert_eq!(a.id(), "bolt-eng-DF-1_0047");
        // comment lines never reach the body
        assert_eq!(a.graph(), "(h / hello\n   :mode expressive)");
    }

    #[test]
    fn id_keeps_first_token_only() {
        let b = block(&["# ::id s1 ::date 2015-01-01", "(a / a)"]);
        assert_eq!(Alignment::new(&b).unwrap().id(), "s1");
    }

    #[test]
    fn id_marker_is_a_whole_field() {
        // `# ::idx` is a different annotation, not an identifier
        let b = block(&["# ::idx 4", "# ::id s1", "(a / a)"]);
        assert_eq!(Alignment::new(&b).unwrap().id(), "s1");
    }

    #[test]
    fn missing_id() {
        let b = block(&["# ::snt no identifier", "(a / a)"]);
        assert!(matches!(Alignment::new(&b), Err(Error::MissingId(_))));
    }

    #[test]
    fn empty_graph() {
        let b = block(&["# ::id s1", "# ::snt comments only"]);
        assert!(matches!(Alignment::new(&b), Err(Error::EmptyGraph(_))));
    }
}

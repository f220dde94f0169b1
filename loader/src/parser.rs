//! Turtle adapter.
//!
//! Parses Turtle text with `sophia_turtle` and converts every statement into
//! the crate's own [`Triple`] representation. Blank node labels are made
//! unique per parse so graphs of different documents can be merged safely.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use sophia_api::source::TripleSource;
use sophia_api::term::{Term as _, TermKind};
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::turtle;
use tracing::debug;

use crate::document::{Document, Origin};
use crate::error::LoadError;
use crate::graph::{Graph, Literal, Term, Triple};

static PARSE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Parses a Turtle document.
///
/// # Errors
///
/// Returns [`LoadError::Syntax`] if `source` is not valid Turtle.
pub fn parse_turtle(source: &str, origin: Option<Origin>) -> Result<Document, LoadError> {
    let scope = PARSE_COUNTER.fetch_add(1, Ordering::Relaxed);
    let origin_label = origin
        .as_ref()
        .map_or_else(|| "<input>".to_owned(), ToString::to_string);

    let mut graph = Graph::new();
    let mut conversion_error = None;
    turtle::parse_str(source)
        .for_each_triple(|t| {
            match (
                convert(t.s(), scope),
                convert(t.p(), scope),
                convert(t.o(), scope),
            ) {
                (Some(subject), Some(Term::Iri(predicate)), Some(object)) => {
                    graph.insert(Triple::new(subject, predicate, object));
                }
                _ => {
                    conversion_error.get_or_insert_with(|| "unsupported term".to_owned());
                }
            }
        })
        .map_err(|e| LoadError::Syntax {
            origin: origin_label.clone(),
            message: e.to_string(),
        })?;
    if let Some(message) = conversion_error {
        return Err(LoadError::Syntax {
            origin: origin_label,
            message,
        });
    }

    debug!(origin = %origin_label, triples = graph.len(), "parsed document");
    Ok(Document::new(graph, header(source), origin))
}

/// Reads and parses a Turtle file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or
/// [`LoadError::Syntax`] if it is not valid Turtle.
pub fn parse_file(path: &Path) -> Result<Document, LoadError> {
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_turtle(&source, Some(Origin::File(path.to_path_buf())))
}

fn convert<T: sophia_api::term::Term>(term: T, scope: usize) -> Option<Term> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::Iri(iri.as_str().to_owned())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Term::Blank(format!("d{scope}-{}", id.as_str()))),
        TermKind::Literal => {
            let lexical = term.lexical_form()?.to_string();
            let datatype = term.datatype()?.as_str().to_owned();
            let language = term.language_tag().map(|tag| tag.as_str().to_owned());
            Some(Term::Literal(Literal {
                lexical,
                datatype,
                language,
            }))
        }
        _ => None,
    }
}

/// The leading block of `#` comment lines, without the markers.
fn header(source: &str) -> Option<String> {
    let lines: Vec<&str> = source
        .lines()
        .map(str::trim_start)
        .take_while(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim())
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

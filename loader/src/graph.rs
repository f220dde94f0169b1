//! Untyped RDF graphs.
//!
//! A [`Graph`] is the parsed, not yet interpreted content of one or more
//! documents: a duplicate-free list of [`Triple`]s with an index by subject.
//! Everything above this module reads the graph through
//! [`AttributeResolver`](crate::attributes::AttributeResolver).

use std::collections::{HashMap, HashSet};
use std::fmt;

use samm_metamodel::model::iris::{RDF_FIRST, RDF_NIL, RDF_REST, RDF_TYPE, XSD_STRING};

/// A literal: lexical form, datatype IRI and optional language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// Lexical form as written.
    pub lexical: String,
    /// Datatype IRI (`rdf:langString` for language-tagged literals).
    pub datatype: String,
    /// Language tag of a language-tagged literal.
    pub language: Option<String>,
}

/// A node of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// A named resource.
    Iri(String),
    /// An anonymous resource, labelled uniquely within a session.
    Blank(String),
    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    /// Creates an `xsd:string` literal.
    pub fn string(lexical: impl Into<String>) -> Self {
        Self::typed(lexical, XSD_STRING)
    }

    /// Creates a literal of the given datatype.
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::Literal(Literal {
            lexical: lexical.into(),
            datatype: datatype.into(),
            language: None,
        })
    }

    /// Creates a language-tagged literal.
    pub fn lang_string(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self::Literal(Literal {
            lexical: lexical.into(),
            datatype: samm_metamodel::model::iris::RDF_LANG_STRING.to_owned(),
            language: Some(language.into()),
        })
    }

    /// The IRI of a named resource.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The literal, if this is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// True for IRIs and blank nodes.
    #[must_use]
    pub fn is_resource(&self) -> bool {
        !matches!(self, Self::Literal(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::Blank(label) => write!(f, "_:{label}"),
            Self::Literal(Literal {
                lexical,
                language: Some(language),
                ..
            }) => write!(f, "{lexical:?}@{language}"),
            Self::Literal(Literal {
                lexical, datatype, ..
            }) => write!(f, "{lexical:?}^^<{datatype}>"),
        }
    }
}

/// One statement of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject: an IRI or a blank node.
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: Term,
}

impl Triple {
    /// Creates a triple.
    pub fn new(subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

/// A set of triples indexed by subject, keeping insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
    by_subject: HashMap<Term, Vec<usize>>,
    subjects: Vec<Term>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `triple`; returns false if the graph already contained it.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        let index = self.triples.len();
        match self.by_subject.get_mut(&triple.subject) {
            Some(indices) => indices.push(index),
            None => {
                self.subjects.push(triple.subject.clone());
                self.by_subject.insert(triple.subject.clone(), vec![index]);
            }
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Adds every triple of `other`.
    pub fn merge(&mut self, other: &Graph) {
        for triple in &other.triples {
            self.insert(triple.clone());
        }
    }

    /// Number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// True if the graph has no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// All triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Distinct subjects in order of first appearance.
    pub fn subjects(&self) -> impl Iterator<Item = &Term> {
        self.subjects.iter()
    }

    /// Triples whose subject is `subject`.
    pub fn triples_about<'a>(&'a self, subject: &Term) -> impl Iterator<Item = &'a Triple> + 'a {
        self.by_subject
            .get(subject)
            .into_iter()
            .flatten()
            .filter_map(|&index| self.triples.get(index))
    }

    /// Objects of `subject predicate ?o`, in insertion order.
    pub fn objects<'a>(
        &'a self,
        subject: &Term,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples_about(subject)
            .filter(move |t| t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// First object of `subject predicate ?o`.
    #[must_use]
    pub fn object<'a>(&'a self, subject: &Term, predicate: &'a str) -> Option<&'a Term> {
        self.objects(subject, predicate).next()
    }

    /// IRIs asserted as `rdf:type` of `subject`.
    pub fn types_of<'a>(&'a self, subject: &Term) -> impl Iterator<Item = &'a str> + 'a {
        self.objects(subject, RDF_TYPE).filter_map(Term::as_iri)
    }

    /// True if `subject rdf:type type_iri` is in the graph.
    #[must_use]
    pub fn has_type(&self, subject: &Term, type_iri: &str) -> bool {
        self.types_of(subject).any(|t| t == type_iri)
    }

    /// True if `subject` has at least one `rdf:type`.
    #[must_use]
    pub fn is_typed(&self, subject: &Term) -> bool {
        self.types_of(subject).next().is_some()
    }

    /// Unrolls the RDF collection starting at `head`.
    ///
    /// `rdf:nil` is the empty list. Returns `None` if `head` is not a
    /// well-formed collection (missing `rdf:first`/`rdf:rest`, or a cycle).
    #[must_use]
    pub fn list<'a>(&'a self, head: &Term) -> Option<Vec<&'a Term>> {
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        let mut current = head.clone();
        loop {
            if current.as_iri() == Some(RDF_NIL) {
                return Some(items);
            }
            if !matches!(current, Term::Blank(_)) || !visited.insert(current.clone()) {
                return None;
            }
            let mut firsts = self.objects(&current, RDF_FIRST);
            let first = firsts.next()?;
            if firsts.next().is_some() {
                return None;
            }
            items.push(first);
            current = self.object(&current, RDF_REST)?.clone();
        }
    }

    /// True if `term` is the head of a well-formed RDF collection.
    #[must_use]
    pub fn is_list(&self, term: &Term) -> bool {
        self.list(term).is_some()
    }

    /// Every IRI appearing as subject, predicate or object.
    pub fn iris(&self) -> impl Iterator<Item = &str> {
        self.triples.iter().flat_map(|t| {
            t.subject
                .as_iri()
                .into_iter()
                .chain(std::iter::once(t.predicate.as_str()))
                .chain(t.object.as_iri())
        })
    }

    /// Named subjects carrying at least one `rdf:type`.
    pub fn typed_iris(&self) -> impl Iterator<Item = &str> {
        self.subjects
            .iter()
            .filter(|s| self.is_typed(s))
            .filter_map(Term::as_iri)
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(triple);
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(label: &str) -> Term {
        Term::Blank(label.to_owned())
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut graph = Graph::new();
        let t = Triple::new(Term::iri("urn:a"), RDF_TYPE, Term::iri("urn:T"));
        assert!(graph.insert(t.clone()));
        assert!(!graph.insert(t));
        assert_eq!(graph.len(), 1);
        assert!(graph.has_type(&Term::iri("urn:a"), "urn:T"));
    }

    #[test]
    fn unrolls_lists_in_order() {
        let graph: Graph = [
            Triple::new(blank("l1"), RDF_FIRST, Term::iri("urn:x")),
            Triple::new(blank("l1"), RDF_REST, blank("l2")),
            Triple::new(blank("l2"), RDF_FIRST, Term::iri("urn:y")),
            Triple::new(blank("l2"), RDF_REST, Term::iri(RDF_NIL)),
        ]
        .into_iter()
        .collect();
        let items = graph.list(&blank("l1")).unwrap();
        assert_eq!(items, vec![&Term::iri("urn:x"), &Term::iri("urn:y")]);
        assert_eq!(graph.list(&Term::iri(RDF_NIL)), Some(Vec::new()));
    }

    #[test]
    fn malformed_lists_are_not_lists() {
        let graph: Graph = [
            Triple::new(blank("l1"), RDF_FIRST, Term::iri("urn:x")),
            Triple::new(blank("l1"), RDF_REST, blank("l1")),
            Triple::new(blank("open"), RDF_FIRST, Term::iri("urn:x")),
        ]
        .into_iter()
        .collect();
        assert!(!graph.is_list(&blank("l1")));
        assert!(!graph.is_list(&blank("open")));
        assert!(!graph.is_list(&Term::iri("urn:x")));
    }

    #[test]
    fn iris_cover_every_position() {
        let graph: Graph = [Triple::new(
            Term::iri("urn:s"),
            "urn:p",
            Term::iri("urn:o"),
        )]
        .into_iter()
        .collect();
        let iris: Vec<_> = graph.iris().collect();
        assert_eq!(iris, vec!["urn:s", "urn:p", "urn:o"]);
    }
}

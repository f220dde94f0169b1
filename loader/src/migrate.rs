//! Migration of documents written against older meta-model versions.

use crate::document::Document;
use crate::error::LoadError;

/// Rewrites a document to the current meta-model version.
///
/// Applied to every document right after it is obtained, before it takes part
/// in resolution. Implementations must be idempotent.
pub trait Migrator {
    /// Migrates `document`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the document cannot be migrated.
    fn migrate(&self, document: Document) -> Result<Document, LoadError>;
}

/// Leaves documents unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityMigrator;

impl Migrator for IdentityMigrator {
    fn migrate(&self, document: Document) -> Result<Document, LoadError> {
        Ok(document)
    }
}

impl<F> Migrator for F
where
    F: Fn(Document) -> Result<Document, LoadError>,
{
    fn migrate(&self, document: Document) -> Result<Document, LoadError> {
        self(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn identity_keeps_the_document() {
        let document = Document::new(Graph::new(), Some("# header".into()), None);
        let migrated = IdentityMigrator.migrate(document).unwrap();
        assert_eq!(migrated.header(), Some("# header"));
    }

    #[test]
    fn closures_migrate() {
        let strip_header =
            |document: Document| Ok::<_, LoadError>(Document::new(document.graph().clone(), None, None));
        let document = Document::new(Graph::new(), Some("# header".into()), None);
        assert_eq!(strip_header.migrate(document).unwrap().header(), None);
    }
}

use std::path::Path;

use crate::core::signature::SPACER_COUNT;
use crate::core::spacer::Spacer;
use crate::core::types::SpacerId;
use crate::parsing::fasta::parse_spacer_file;
use crate::reference::ReferenceError;

/// The 43-spacer reference set, sorted by identifier.
///
/// Sorting happens at construction so every downstream ordered view (count
/// vectors, signature bits) follows the identifier order without re-sorting.
#[derive(Debug, Clone)]
pub struct SpacerReference {
    spacers: Vec<Spacer>,
}

impl SpacerReference {
    /// Build a reference set, sorting by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::DuplicateSpacer`] on a repeated identifier
    /// or [`ReferenceError::WrongSpacerCount`] unless exactly
    /// [`SPACER_COUNT`] spacers are given.
    pub fn new(mut spacers: Vec<Spacer>) -> Result<Self, ReferenceError> {
        spacers.sort_by(|a, b| a.id.cmp(&b.id));

        if let Some(duplicate) = spacers.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(ReferenceError::DuplicateSpacer(duplicate[0].id.to_string()));
        }
        if spacers.len() != SPACER_COUNT {
            return Err(ReferenceError::WrongSpacerCount(spacers.len()));
        }

        Ok(Self { spacers })
    }

    /// Load a reference set from a FASTA file.
    ///
    /// # Errors
    ///
    /// Returns a [`ReferenceError`] if the file cannot be parsed or does not
    /// hold exactly [`SPACER_COUNT`] uniquely named spacers.
    pub fn load_from_file(path: &Path) -> Result<Self, ReferenceError> {
        Self::new(parse_spacer_file(path)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spacer> {
        self.spacers.iter()
    }

    /// Identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &SpacerId> {
        self.spacers.iter().map(|spacer| &spacer.id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spacers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spacers.is_empty()
    }
}

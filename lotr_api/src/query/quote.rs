use std::fmt;

use super::common::{Filter, Query};

/// Fields of a quote record that can be filtered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteField {
    Id,
    Dialog,
    Movie,
    Character,
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                QuoteField::Id => "_id",
                QuoteField::Dialog => "dialog",
                QuoteField::Movie => "movie",
                QuoteField::Character => "character",
            }
        )
    }
}

/// Filter set for listing quotes. Entries render in the order they were
/// added.
#[derive(Clone, Debug, Default)]
pub struct QuoteQuery {
    entries: Vec<(QuoteField, Option<Filter>)>,
}

impl Query for QuoteQuery {
    type Field = QuoteField;

    fn entries(&self) -> &[(QuoteField, Option<Filter>)] {
        &self.entries
    }
}

impl QuoteQuery {
    pub fn with_filter(mut self, field: QuoteField, filter: Filter) -> Self {
        self.entries.push((field, Some(filter)));
        self
    }

    /// Declares a field as not filtered. The entry is kept but contributes
    /// nothing to the query string.
    pub fn without_filter(mut self, field: QuoteField) -> Self {
        self.entries.push((field, None));
        self
    }
}

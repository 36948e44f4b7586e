use std::fmt;

use super::common::{Filter, Query};

/// Fields of a movie record that can be filtered on. `Display` yields the
/// wire name used in query strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovieField {
    Id,
    Name,
    RuntimeInMinutes,
    BudgetInMillions,
    BoxOfficeRevenueInMillions,
    AcademyAwardNominations,
    AcademyAwardWins,
    RottenTomatoesScore,
}

impl fmt::Display for MovieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MovieField::Id => "_id",
                MovieField::Name => "name",
                MovieField::RuntimeInMinutes => "runtimeInMinutes",
                MovieField::BudgetInMillions => "budgetInMillions",
                MovieField::BoxOfficeRevenueInMillions => "boxOfficeRevenueInMillions",
                MovieField::AcademyAwardNominations => "academyAwardNominations",
                MovieField::AcademyAwardWins => "academyAwardWins",
                MovieField::RottenTomatoesScore => "rottenTomatoesScore",
            }
        )
    }
}

/// Filter set for listing movies. Entries render in the order they were
/// added.
#[derive(Clone, Debug, Default)]
pub struct MovieQuery {
    entries: Vec<(MovieField, Option<Filter>)>,
}

impl Query for MovieQuery {
    type Field = MovieField;

    fn entries(&self) -> &[(MovieField, Option<Filter>)] {
        &self.entries
    }
}

impl MovieQuery {
    pub fn with_filter(mut self, field: MovieField, filter: Filter) -> Self {
        self.entries.push((field, Some(filter)));
        self
    }

    /// Declares a field as not filtered. The entry is kept but contributes
    /// nothing to the query string.
    pub fn without_filter(mut self, field: MovieField) -> Self {
        self.entries.push((field, None));
        self
    }
}

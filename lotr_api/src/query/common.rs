//! Shared query infrastructure: the [`Filter`] type, its comparison operators
//! and values, and the [`Query`] trait that renders a filter set into a
//! resource path with a query string.

use std::fmt;

/// Comparison operator for a single filter. Each variant renders as the
/// literal token the API expects in the query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterComparison {
    Equal,
    NotEqual,
    /// Matches records where the field is present. Renders as the bare field
    /// name, no operator and no value.
    Exists,
    /// Matches records where the field is absent. Renders as `!` followed by
    /// the field name, the only operator that precedes its field.
    DoesNotExist,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl fmt::Display for FilterComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FilterComparison::Equal => "=",
                FilterComparison::NotEqual => "!=",
                FilterComparison::Exists => "",
                FilterComparison::DoesNotExist => "!",
                FilterComparison::LessThan => "<",
                FilterComparison::LessThanOrEqual => "<=",
                FilterComparison::GreaterThan => ">",
                FilterComparison::GreaterThanOrEqual => ">=",
            }
        )
    }
}

/// A single filter value: a string or number.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => write!(f, "{}", s),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
        }
    }
}

/// The value side of a filter: either one scalar or a list of scalars. Lists
/// render joined with `,`, which the API interprets as "any of".
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Scalar(s) => write!(f, "{}", s),
            FilterValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Scalar(Scalar::Str(s.to_string()))
    }
}
impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Scalar(Scalar::Str(s))
    }
}
impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Scalar(Scalar::Int(n))
    }
}
impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        FilterValue::Scalar(Scalar::Float(n))
    }
}
impl From<Vec<&str>> for FilterValue {
    fn from(items: Vec<&str>) -> Self {
        FilterValue::List(items.into_iter().map(|s| Scalar::Str(s.to_string())).collect())
    }
}
impl From<Vec<String>> for FilterValue {
    fn from(items: Vec<String>) -> Self {
        FilterValue::List(items.into_iter().map(Scalar::Str).collect())
    }
}
impl From<Vec<i64>> for FilterValue {
    fn from(items: Vec<i64>) -> Self {
        FilterValue::List(items.into_iter().map(Scalar::Int).collect())
    }
}

/// A comparison against one field of an entity.
///
/// For [`FilterComparison::Exists`] and [`FilterComparison::DoesNotExist`]
/// the value is ignored even if present.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub comparison: FilterComparison,
    pub value: Option<FilterValue>,
}

impl Filter {
    /// A filter comparing the field against the given value.
    pub fn new(comparison: FilterComparison, value: impl Into<FilterValue>) -> Self {
        Self {
            comparison,
            value: Some(value.into()),
        }
    }

    /// A filter matching records where the field is present.
    pub fn exists() -> Self {
        Self {
            comparison: FilterComparison::Exists,
            value: None,
        }
    }

    /// A filter matching records where the field is absent.
    pub fn does_not_exist() -> Self {
        Self {
            comparison: FilterComparison::DoesNotExist,
            value: None,
        }
    }

    /// Renders this filter as one query-string fragment for the given field
    /// name. Values are inserted verbatim, with no percent-encoding; the API
    /// expects raw `<`, `>`, and `,` characters in its query strings.
    pub(crate) fn to_fragment(&self, field: &str) -> String {
        match self.comparison {
            FilterComparison::Exists => field.to_string(),
            FilterComparison::DoesNotExist => format!("{}{}", self.comparison, field),
            comparison => {
                let value = match &self.value {
                    // Joining is only attempted for a non-empty list; an empty
                    // list falls through to its plain string form, which is
                    // also empty.
                    Some(FilterValue::List(items)) if !items.is_empty() => items
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(","),
                    Some(value) => value.to_string(),
                    None => String::new(),
                };
                format!("{}{}{}", field, comparison, value)
            }
        }
    }
}

/// Trait implemented by all query builders. Renders the accumulated filters
/// onto a base resource path, in the order they were added.
pub trait Query {
    /// The enum of field names this query may filter on.
    type Field: fmt::Display;

    /// The accumulated filter entries. An entry with a `None` filter is a
    /// placeholder declaring the field as "not filtered" and is skipped.
    fn entries(&self) -> &[(Self::Field, Option<Filter>)];

    /// Appends the compiled query string to the base path. With no eligible
    /// entries the base path is returned unchanged, without a `?`.
    fn to_path(&self, base: &str) -> String {
        let fragments: Vec<String> = self
            .entries()
            .iter()
            .filter_map(|(field, filter)| {
                filter
                    .as_ref()
                    .map(|f| f.to_fragment(&field.to_string()))
            })
            .collect();

        if fragments.is_empty() {
            return base.to_string();
        }
        format!("{}?{}", base, fragments.join("&"))
    }
}

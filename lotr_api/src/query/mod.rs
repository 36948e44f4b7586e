mod common;
pub use self::common::{Filter, FilterComparison, FilterValue, Query, Scalar};

mod movie;
pub use self::movie::{MovieField, MovieQuery};

mod quote;
pub use self::quote::{QuoteField, QuoteQuery};

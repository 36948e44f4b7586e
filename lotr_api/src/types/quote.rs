use serde::{Deserialize, Serialize};

/// A quote record from the API. `movie` and `character` are record IDs
/// referencing the movie and character collections.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: String,

    pub dialog: String,

    pub movie: String,

    pub character: String,
}

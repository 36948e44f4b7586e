mod response;
pub use self::response::GetResponse;

mod movie;
pub use self::movie::Movie;

mod quote;
pub use self::quote::Quote;

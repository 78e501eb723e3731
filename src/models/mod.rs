mod mapping;

pub use mapping::{ErrorResponse, Mapping, ShortenResponse};

pub mod http_error;
pub mod responses;

pub use http_error::*;

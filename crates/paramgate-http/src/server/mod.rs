pub mod lifecycle;
pub mod server;

pub use lifecycle::*;
pub use server::*;

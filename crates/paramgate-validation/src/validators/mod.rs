//! Built-in validators for common parameter shapes

pub mod boolean;
pub mod integer;
pub mod one_of;
pub mod pattern;
pub mod required;

pub use boolean::BooleanValidator;
pub use integer::IntegerValidator;
pub use one_of::OneOfValidator;
pub use pattern::PatternValidator;
pub use required::RequiredValidator;

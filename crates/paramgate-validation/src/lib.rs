//! # paramgate-validation
//!
//! Framework-agnostic core of the paramgate validation stage: per-field
//! validators, the per-route validation mapping, the merged parameter
//! source and the error report produced by a single validation pass.

pub mod mapping;
pub mod outcome;
pub mod report;
pub mod source;
pub mod traits;
pub mod validate;
pub mod validators;

// Re-exports for easy access
pub use mapping::ValidationMapping;
pub use outcome::ValidationOutcome;
pub use report::ErrorReport;
pub use source::ParamSource;
pub use traits::ParamValidator;
pub use validate::validate;

// Built-in validators
pub use validators::{
    boolean::BooleanValidator,
    integer::IntegerValidator,
    one_of::OneOfValidator,
    pattern::PatternValidator,
    required::RequiredValidator,
};

//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod tag;
pub mod question;

pub use validation::ValidationError;
pub use tag::{NewTag, Tag, TagId, TagSlug};
pub use question::{NewQuestion, Question, QuestionId, VoteType};

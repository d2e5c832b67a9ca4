pub mod catalog;
pub mod error;
pub mod member;
pub mod scope;
pub mod tally;
pub mod validation;

pub use catalog::{Profile, REQUIRED_APIS};
pub use error::AppError;
pub use member::{DEFAULT_MEMBER, Member, MemberType};
pub use scope::Scope;
pub use tally::{OperationFailure, OperationTally, PhaseReport, ResourceResult};

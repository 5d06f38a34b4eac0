//! Request-scoped applicant and mark data submitted by the client.

mod schema;
mod validation;

pub use schema::{ApplicantDetails, ChatMessage, ChatRole, TrademarkIntake, DEFAULT_COUNTRY};
pub use validation::{EmailAddress, IntakeError, NiceClass};

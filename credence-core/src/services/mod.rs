//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod credential;
mod users;
mod validator;

pub use credential::CredentialService;
pub use users::UserService;
pub use validator::Validator;

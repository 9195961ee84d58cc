//! Application services for the login flow.

mod login;

pub use login::{AuthService, AuthServiceError, AuthServiceResult, CallbackParams};

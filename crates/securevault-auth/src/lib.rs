//! SecureVault Authentication Layer
//!
//! - **Credential rules**: registration and login input checks
//! - **Session persistence**: the active email under a fixed local key
//! - **Session restore**: re-reading the account from the remote store
//!
//! Authentication itself is the store's exact email + PIN match; this crate
//! holds no secrets and issues no tokens.

pub mod config;
pub mod credentials;
pub mod error;
pub mod session;

pub use config::{SessionConfig, SESSION_KEY};
pub use credentials::{is_valid_pin, validate_login, validate_registration};
pub use error::{AuthError, AuthResult};
pub use session::{FileSessionStore, MemorySessionStore, SessionManager, SessionStore};

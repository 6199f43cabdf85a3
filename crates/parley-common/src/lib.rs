pub mod errors;
pub mod id;

pub use errors::SettingsError;
pub use id::SessionId;

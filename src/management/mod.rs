mod auth;
mod store;

pub use auth::TokenManager;
pub use auth::is_expired;
pub use store::EnvTokenStore;
pub use store::FileTokenStore;
pub use store::TokenStore;

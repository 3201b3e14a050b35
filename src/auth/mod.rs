pub mod cookies;
pub mod sessions;
pub mod token;

pub use sessions::SessionStore;

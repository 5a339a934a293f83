//! HTTP request handlers.

mod chat;
mod health;
mod intent;

pub use chat::chat;
pub use health::health;
pub use intent::intent;

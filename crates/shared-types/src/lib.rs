pub mod chat;
pub mod course;
pub mod error;
pub mod stats;
pub mod user;

pub use chat::*;
pub use course::*;
pub use error::*;
pub use stats::*;
pub use user::*;

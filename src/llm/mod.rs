pub mod gemini;
pub mod proxy;

mod llm;
pub use llm::*;
pub mod messages;
pub use messages::*;

pub mod error;
pub use error::*;

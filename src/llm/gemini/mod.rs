mod client;
mod config;
mod generative_model;
mod llm;
mod schema;

pub use client::*;
pub use config::*;
pub use generative_model::*;
pub use llm::Gemini;
pub use schema::*;

mod config;
mod llm;
#[cfg(test)]
mod tests;

pub use config::*;
pub use llm::*;

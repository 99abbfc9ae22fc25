pub mod llm;
pub mod probe;

//! Checks the Gemini API through the `Client` style.
use llm_probe::probe::{self, ProbeEnv};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    probe::load_dotenv();

    let env = ProbeEnv::from_env();
    let mut out = std::io::stdout().lock();
    probe::genai(&mut out, &env).await?;
    Ok(())
}

use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let openai_api_hostname = env::var("PARLEY_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key =
            env::var("OPENAI_API_KEY").unwrap_or_else(|_| "thiswontworkforopenai".to_string());
        let openai_model =
            env::var("PARLEY_LLM_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string());

        Self {
            openai_api_hostname,
            openai_api_key,
            openai_model,
        }
    }
}

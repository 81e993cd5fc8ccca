pub mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Debug, Clone)]
    pub struct Config {
        pub db_url: String,
        #[serde(default = "default_port")]
        pub port: u16,
        #[serde(default)]
        pub openai_api_key: String,
        #[serde(default = "default_openai_base_url")]
        pub openai_base_url: String,
        #[serde(default = "default_openai_model")]
        pub openai_model: String,
        #[serde(default)]
        pub slack_webhook_url: Option<String>,
    }

    impl Config {
        /// Loads configuration from environment variables.
        pub fn from_env() -> anyhow::Result<Self> {
            let settings = config::Config::builder()
                .add_source(config::Environment::default())
                .build()?;

            let config: Config = settings.try_deserialize()?;
            Ok(config)
        }
    }

    fn default_port() -> u16 {
        8000
    }

    fn default_openai_base_url() -> String {
        "https://api.openai.com/v1".to_string()
    }

    fn default_openai_model() -> String {
        "gpt-4o-mini".to_string()
    }

}

pub mod entities;
pub mod slack;
pub mod summarizer;
pub mod summary;
pub mod todo;
pub mod web;

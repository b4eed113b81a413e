use clap::{ArgAction, Parser};

use crate::errors::ServerError;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(env = "HOST", long, default_value_t = String::from("0.0.0.0"))]
    pub host: String,

    #[arg(env = "PORT", long, default_value_t = 3000)]
    pub port: u16,

    /// Seconds before an in-flight request is answered with 408
    #[arg(env = "TIMEOUT_SECS", long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// In-flight requests allowed before new ones are shed with 503
    #[arg(env = "CONCURRENCY_LIMIT", long, default_value_t = 1024)]
    pub concurrency_limit: usize,

    /// Maximum request body size in bytes
    #[arg(env = "BODY_LIMIT", long, default_value_t = 64 * 1024)]
    pub body_limit: usize,

    /// Serve Swagger UI and the OpenAPI document
    #[arg(env = "DOCS", long, default_value_t = true, action = ArgAction::Set)]
    pub docs: bool,
}

impl Args {
    pub fn load() -> Result<Args, ServerError> {
        // A missing .env is fine, a broken one is not
        if let Err(error) = dotenvy::dotenv() {
            if !error.not_found() {
                return Err(error.into());
            }
        }

        Ok(Args::parse())
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

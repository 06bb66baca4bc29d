use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub local_storage: bool,
    pub auth_secret: String,
    pub mail_relay_url: String,
    pub mail_relay_api_key: String,
    pub mail_from: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "carebook.db".to_string()),
            local_storage: env::var("LOCAL_STORAGE")
                .map(|v| parse_switch(&v))
                .unwrap_or(true),
            auth_secret: env::var("AUTH_SECRET")
                .or_else(|_| env::var("NEXTAUTH_SECRET"))
                .unwrap_or_default(),
            mail_relay_url: env::var("MAIL_RELAY_URL").unwrap_or_default(),
            mail_relay_api_key: env::var("MAIL_RELAY_API_KEY").unwrap_or_default(),
            mail_from: env::var("EMAIL_USER")
                .unwrap_or_else(|_| "no-reply@care.xyz".to_string()),
        }
    }
}

fn parse_switch(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "off" | "false" | "0" | "no"
    )
}

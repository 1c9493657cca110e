use std::{env, time::Duration};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use rakshan_contact::Recipient;
use rakshan_notification::{EmailJsConfig, SmsConfig};
use serde::Deserialize;
use url::Url;
use validator::ValidateEmail;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub sms: SmsConfig,
    #[serde(default)]
    pub business: BusinessConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Business details shown in the footer and used as the inquiry recipient.
#[derive(Debug, Deserialize, Clone)]
pub struct BusinessConfig {
    #[serde(default = "default_business_name")]
    pub name: String,
    #[serde(default = "default_business_email")]
    pub email: String,
    #[serde(default = "default_business_phone")]
    pub phone: String,
    #[serde(default = "default_business_address")]
    pub address: String,
    #[serde(default = "default_business_tagline")]
    pub tagline: String,
    #[serde(default = "default_business_hours")]
    pub hours: Vec<String>,
    #[serde(default = "default_business_facebook_url")]
    pub facebook_url: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: default_business_name(),
            email: default_business_email(),
            phone: default_business_phone(),
            address: default_business_address(),
            tagline: default_business_tagline(),
            hours: default_business_hours(),
            facebook_url: default_business_facebook_url(),
        }
    }
}

impl BusinessConfig {
    pub fn recipient(&self) -> Recipient {
        Recipient {
            email: self.email.to_owned(),
            phone: self.phone.to_owned(),
        }
    }

    /// Phone number for a `tel:` link, spaces stripped.
    pub fn phone_href(&self) -> String {
        self.phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect()
    }

    pub fn maps_url(&self) -> String {
        let query = format!("{} {}", self.name, self.address)
            .split([' ', ','])
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("+");

        format!("https://maps.google.com/?q={query}")
    }
}

fn default_business_name() -> String {
    "RAKSHAN KITCHEN".to_string()
}

fn default_business_email() -> String {
    "rakshankitchenlimited@gmail.com".to_string()
}

fn default_business_phone() -> String {
    "+91 9310123565".to_string()
}

fn default_business_address() -> String {
    "Sector 7, Rohini, Delhi, 110085".to_string()
}

fn default_business_tagline() -> String {
    "Crafting luxury kitchen spaces with precision and passion since 1999.".to_string()
}

fn default_business_hours() -> Vec<String> {
    vec![
        "Monday - Saturday".to_string(),
        "10:00 AM - 8:00 PM".to_string(),
        "Sunday: Closed".to_string(),
    ]
}

fn default_business_facebook_url() -> String {
    "https://www.facebook.com/rakshankitchen".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl HttpConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (EMAILJS_PUBLIC_KEY, SMS_ENDPOINT, etc.)
    /// 2. Prefixed environment variables (RAKSHAN__EMAILJS__PUBLIC_KEY, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignore if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("RAKSHAN")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("EMAILJS_PUBLIC_KEY", "emailjs.public_key"),
            ("EMAILJS_PRIVATE_KEY", "emailjs.private_key"),
            ("EMAILJS_SERVICE_ID", "emailjs.service_id"),
            ("EMAILJS_TEMPLATE_ID", "emailjs.template_id"),
            ("SMS_ENDPOINT", "sms.endpoint"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Refuse to start with settings that would send malformed requests
    pub fn validate(&self) -> Result<(), String> {
        if self.emailjs.public_key.trim().is_empty() {
            return Err("EmailJS public key must be configured".to_string());
        }
        if self.emailjs.service_id.trim().is_empty() {
            return Err("EmailJS service id must be configured".to_string());
        }
        if self.emailjs.template_id.trim().is_empty() {
            return Err("EmailJS template id must be configured".to_string());
        }
        if http_url(&self.emailjs.api_url).is_none() {
            return Err("EmailJS api url must be an http(s) URL".to_string());
        }
        let Some(sms_endpoint) = http_url(&self.sms.endpoint) else {
            return Err("SMS endpoint must be an http(s) URL".to_string());
        };
        if self.points_at_self(&sms_endpoint) {
            return Err(
                "SMS endpoint must be the SMS forwarding service, not this server".to_string(),
            );
        }
        if !self.business.email.validate_email() {
            return Err("Business email must be a valid email address".to_string());
        }
        if self.business.phone.trim().is_empty() {
            return Err("Business phone must be configured".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.http.request_timeout_secs == 0 {
            return Err("HTTP request timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Config {
    /// This server has no SMS route, an endpoint on its own address would 404.
    fn points_at_self(&self, endpoint: &Url) -> bool {
        let Some(host) = endpoint.host_str() else {
            return false;
        };

        let same_host =
            host == self.server.host || (is_loopback(host) && is_loopback(&self.server.host));

        same_host && endpoint.port_or_known_default() == Some(self.server.port)
    }
}

fn http_url(value: &str) -> Option<Url> {
    Url::parse(value.trim())
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

fn is_loopback(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "0.0.0.0" | "[::1]" | "::1")
}

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3333";
const DEFAULT_STORAGE_REGION: &str = "us-east-1";
const DEFAULT_STORAGE_ROOT: &str = "files";
const DEFAULT_BIRTHDAY_CRON: &str = "0 0 9 * * *";
const DEFAULT_NOTIFY_ROLE: &str = "rh";

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub from: String,
    pub api_url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
    /// Custom S3-compatible endpoint (MinIO, Spaces...). AWS when absent.
    pub endpoint: Option<String>,
    pub access_key: String,
    pub secret_key: String,
    pub root_path: String,
    pub public_url: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Secret from which the bank field encryption key is derived.
    pub app_key: String,
    /// Slugs of the business units whose employees get birthday reminders.
    pub active_business_units: Vec<String>,

    pub mail: MailConfig,
    pub storage: StorageConfig,

    pub birthday_cron: String,
    pub birthday_notify_role: String,
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Splits a comma separated slug list, dropping blanks and normalizing case.
pub fn parse_business_units(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|slug| slug.trim().to_lowercase())
        .filter(|slug| !slug.is_empty())
        .collect()
}

/// Public base URL of stored objects when none is configured explicitly.
fn default_public_url(bucket: &str, region: &str, endpoint: Option<&str>) -> String {
    match endpoint {
        Some(endpoint) => format!("{}/{}", endpoint.trim_end_matches('/'), bucket),
        None => format!("https://{}.s3.{}.amazonaws.com", bucket, region),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let active_business_units = parse_business_units(&required("ACTIVE_BUSINESS_UNITS")?);
        if active_business_units.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "ACTIVE_BUSINESS_UNITS".to_string(),
                reason: "at least one business unit slug is required".to_string(),
            }
            .into());
        }

        let bucket = required("STORAGE_BUCKET")?;
        let region =
            optional("STORAGE_REGION").unwrap_or_else(|| DEFAULT_STORAGE_REGION.to_string());
        let endpoint = optional("STORAGE_ENDPOINT");
        let public_url = optional("STORAGE_PUBLIC_URL")
            .unwrap_or_else(|| default_public_url(&bucket, &region, endpoint.as_deref()));

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            app_key: required("APP_KEY")?,
            active_business_units,
            mail: MailConfig {
                from: required("MAIL_FROM")?,
                api_url: required("MAIL_API_URL")?,
                api_key: optional("MAIL_API_KEY"),
            },
            storage: StorageConfig {
                access_key: required("STORAGE_ACCESS_KEY")?,
                secret_key: required("STORAGE_SECRET_KEY")?,
                root_path: optional("STORAGE_ROOT_PATH")
                    .unwrap_or_else(|| DEFAULT_STORAGE_ROOT.to_string()),
                public_url: public_url.trim_end_matches('/').to_string(),
                bucket,
                region,
                endpoint,
            },
            birthday_cron: optional("BIRTHDAY_CRON")
                .unwrap_or_else(|| DEFAULT_BIRTHDAY_CRON.to_string()),
            birthday_notify_role: optional("BIRTHDAY_NOTIFY_ROLE")
                .unwrap_or_else(|| DEFAULT_NOTIFY_ROLE.to_string()),
        })
    }
}

#[cfg(test)]
impl Config {
    /// Configuration for tests; nothing here reaches a real service.
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            app_key: "test-app-key".to_string(),
            active_business_units: vec!["norte".to_string()],
            mail: MailConfig {
                from: "no-reply@example.com".to_string(),
                api_url: "http://localhost:0/send".to_string(),
                api_key: None,
            },
            storage: StorageConfig {
                bucket: "personnel".to_string(),
                region: DEFAULT_STORAGE_REGION.to_string(),
                endpoint: None,
                access_key: "test".to_string(),
                secret_key: "test".to_string(),
                root_path: DEFAULT_STORAGE_ROOT.to_string(),
                public_url: "https://cdn.example.com".to_string(),
            },
            birthday_cron: DEFAULT_BIRTHDAY_CRON.to_string(),
            birthday_notify_role: DEFAULT_NOTIFY_ROLE.to_string(),
        }
    }
}

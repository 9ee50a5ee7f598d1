use serde::Deserialize;

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.oeg-kraken.energy/v1/graphql/";
pub const DEFAULT_USER_AGENT: &str = "OctopusDashboard/1.0";

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Directory holding the dashboard frontend
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    #[serde(default = "default_upstream_url")]
    pub url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_upstream_url() -> String {
    DEFAULT_UPSTREAM_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            url: default_upstream_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

/// Raw tariff prices as found in the environment. Validation happens per
/// request so a missing price only breaks `/api/config`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct TariffSettings {
    pub low_price: Option<String>,
    pub standard_price: Option<String>,
    pub high_price: Option<String>,
}

pub const TARIFF_LOW_KEY: &str = "TARIFF_LOW_PRICE";
pub const TARIFF_STANDARD_KEY: &str = "TARIFF_STANDARD_PRICE";
pub const TARIFF_HIGH_KEY: &str = "TARIFF_HIGH_PRICE";

/// `config/gateway.*` (optional) overlaid with `GATEWAY__SECTION__KEY`
/// environment variables.
pub fn load_gateway_config() -> anyhow::Result<GatewayConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/gateway").required(false))
        .add_source(
            config::Environment::with_prefix("GATEWAY")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_tariff_settings() -> anyhow::Result<TariffSettings> {
    tariff_settings_from(config::Environment::with_prefix("TARIFF").prefix_separator("_"))
}

fn tariff_settings_from(source: config::Environment) -> anyhow::Result<TariffSettings> {
    let settings = config::Config::builder().add_source(source).build()?;

    Ok(settings.try_deserialize()?)
}

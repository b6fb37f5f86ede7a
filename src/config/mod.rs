use std::net::Ipv6Addr;

pub mod cli;
pub mod settings;

pub use cli::Cli;
pub use settings::{Settings, SnmpVersion};

/// Хост не задан: проверку запускать не на чем
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("host name or ip must be supplied.")]
pub struct MissingHost;

/// Конфигурация одного запуска проверки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub version: SnmpVersion,
    /// Базовые настройки
    pub settings: Settings,
}

impl AppConfig {
    /// Собирает конфигурацию из аргументов командной строки
    pub fn from_cli(cli: Cli) -> Result<Self, MissingHost> {
        let host = cli
            .host
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .ok_or(MissingHost)?;

        let mut settings = Settings::default();
        settings.connection.port = cli.port;
        settings.connection.timeout = cli.timeout;
        settings.connection.retries = cli.retries;
        settings.connection.max_repetitions = cli.max_repetitions;
        settings.v2c.community = cli.community;

        Ok(Self {
            host,
            version: cli.snmp_version,
            settings,
        })
    }

    pub fn community(&self) -> &str {
        &self.settings.v2c.community
    }

    /// Адрес агента в виде host:port. IPv6 берётся в скобки; зона (`%2`)
    /// остаётся внутри скобок, host с уже указанным портом не трогаем
    pub fn target(&self) -> String {
        let port = self.settings.connection.port;
        let host = self.host.as_str();

        if let Some(bare) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
            format!("[{}]:{}", bare, port)
        } else if is_ipv6_literal(host) {
            format!("[{}]:{}", host, port)
        } else if host.contains(':') {
            host.to_string()
        } else {
            format!("{}:{}", host, port)
        }
    }
}

fn is_ipv6_literal(host: &str) -> bool {
    let address = host.split_once('%').map_or(host, |(address, _zone)| address);
    address.parse::<Ipv6Addr>().is_ok()
}

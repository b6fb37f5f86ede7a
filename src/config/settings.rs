use clap::ValueEnum;

/// Версия протокола SNMP
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnmpVersion {
    #[value(name = "1")]
    V1,
    #[value(name = "2c")]
    V2c,
}

/// Базовые настройки проверки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Настройки подключения
    pub connection: ConnectionSettings,
    /// Настройки SNMPv2c
    pub v2c: SnmpV2cSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// Порт агента
    pub port: u16,
    /// Таймаут одного SNMP запроса (секунды)
    pub timeout: u64,
    /// Количество повторов при таймауте
    pub retries: u32,
    /// max-repetitions для GETBULK
    pub max_repetitions: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnmpV2cSettings {
    /// Community string
    pub community: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            connection: ConnectionSettings {
                port: 161,
                timeout: 10,
                retries: 2,
                max_repetitions: 10,
            },
            v2c: SnmpV2cSettings {
                community: "public".to_string(),
            },
        }
    }
}

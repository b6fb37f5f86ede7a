use std::fmt;

use crate::snmp::WalkError;

/// Статус проверки и его код выхода для системы мониторинга
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    /// Зарезервирован: текущая логика его не выставляет
    #[allow(dead_code)]
    Warning,
    Critical,
    Unknown,
}

impl Status {
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Итог запуска: одна строка в stdout и код выхода
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: Status,
    pub message: String,
}

impl Verdict {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Status::Ok, message)
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Status::Critical, message)
    }

    /// Ошибка в аргументах командной строки, до любого сетевого обмена
    pub fn usage(detail: impl fmt::Display) -> Self {
        Self::new(Status::Unknown, format!("Error: {}", detail))
    }

    /// Транспорт: "UNKNOWN: <диагностика>"; агент: "<error-status> at <oid|?>"
    pub fn from_walk_error(err: &WalkError) -> Self {
        match err {
            WalkError::Transport(diag) => Self::new(Status::Unknown, format!("UNKNOWN: {}", diag)),
            WalkError::Agent { .. } => Self::new(Status::Unknown, err.to_string()),
        }
    }

    /// Всё непредвиденное. Сообщение сворачивается в одну строку
    pub fn unexpected(detail: impl fmt::Display) -> Self {
        let detail = detail.to_string();
        let detail = detail.split_whitespace().collect::<Vec<_>>().join(" ");
        Self::new(Status::Unknown, format!("UNKNOWN: Unexpected error: {}", detail))
    }
}

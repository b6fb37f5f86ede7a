use thiserror::Error;

/// Ошибки обхода MIB. Любая из них обрывает проверку
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// Сеть, таймаут, битый ответ
    #[error("{0}")]
    Transport(String),

    /// Агент вернул error-status в PDU
    #[error("{status} at {}", .failed_oid.as_deref().unwrap_or("?"))]
    Agent {
        status: String,
        failed_oid: Option<String>,
    },
}

impl WalkError {
    pub fn agent(error_status: u32, failed_oid: Option<String>) -> Self {
        WalkError::Agent {
            status: error_status_name(error_status),
            failed_oid,
        }
    }
}

/// Имя error-status по RFC 3416
pub fn error_status_name(code: u32) -> String {
    let name = match code {
        0 => "noError",
        1 => "tooBig",
        2 => "noSuchName",
        3 => "badValue",
        4 => "readOnly",
        5 => "genErr",
        6 => "noAccess",
        7 => "wrongType",
        8 => "wrongLength",
        9 => "wrongEncoding",
        10 => "wrongValue",
        11 => "noCreation",
        12 => "inconsistentValue",
        13 => "resourceUnavailable",
        14 => "commitFailed",
        15 => "undoFailed",
        16 => "authorizationError",
        17 => "notWritable",
        18 => "inconsistentName",
        other => return format!("errorStatus({})", other),
    };
    name.to_string()
}

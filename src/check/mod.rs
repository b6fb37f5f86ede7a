use tracing::error;

pub mod evaluator;
pub mod verdict;

pub use evaluator::evaluate;
pub use verdict::Verdict;

use crate::collector::LagCollector;
use crate::config::AppConfig;
use crate::snmp::{SnmpClient, TableWalker, WalkError};

/// Собирает состояние LAG и выносит вердикт. Ошибка обхода даёт UNKNOWN,
/// до оценки дело не доходит.
pub async fn run_check<W: TableWalker>(walker: &mut W) -> Verdict {
    match LagCollector::collect(walker).await {
        Ok(snapshot) => evaluate(&snapshot),
        Err(e) => {
            error!(error = %e, "Обход MIB прерван");
            Verdict::from_walk_error(&e)
        }
    }
}

/// Полный запуск проверки против реального агента
pub async fn check_agent(config: &AppConfig) -> Verdict {
    let mut client = match SnmpClient::connect(config).await {
        Ok(client) => client,
        Err(e) => return Verdict::from_walk_error(&WalkError::Transport(format!("{:#}", e))),
    };
    run_check(&mut client).await
}

use tracing::info;

pub mod aggregation;
pub mod interfaces;
pub mod types;

pub use aggregation::{AGGREGATION_COLUMNS, read_memberships};
pub use interfaces::{INTERFACE_COLUMNS, classify_interfaces};
pub use types::LagSnapshot;

use crate::snmp::{TableWalker, WalkError};

/// Коллектор состояния LAG: два последовательных обхода по одной сессии
pub struct LagCollector;

impl LagCollector {
    /// Обходит ifTable, затем dot3adAggPortTable. Первая ошибка обрывает сбор
    pub async fn collect<W: TableWalker>(walker: &mut W) -> Result<LagSnapshot, WalkError> {
        let if_rows = walker.walk_columns(&INTERFACE_COLUMNS).await?;
        let inventory = classify_interfaces(&if_rows);

        let agg_rows = walker.walk_columns(&AGGREGATION_COLUMNS).await?;
        let memberships = read_memberships(&agg_rows);

        info!(
            interfaces = if_rows.len(),
            ports = inventory.ports.len(),
            aggregates = inventory.aggregates.len(),
            members = memberships.len(),
            "Состояние LAG собрано"
        );

        Ok(LagSnapshot {
            inventory,
            memberships,
        })
    }
}

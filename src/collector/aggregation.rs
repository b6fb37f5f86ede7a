use tracing::debug;

use super::types::LagMembership;
use crate::snmp::TableRow;
use crate::snmp::oid::{DOT3AD_AGG_PORT_ATTACHED_AGG_ID, DOT3AD_AGG_PORT_SELECTED_AGG_ID, MibColumn};

/// Колонки dot3adAggPortTable в порядке обхода
pub const AGGREGATION_COLUMNS: [MibColumn; 2] =
    [DOT3AD_AGG_PORT_SELECTED_AGG_ID, DOT3AD_AGG_PORT_ATTACHED_AGG_ID];

const COL_SELECTED: usize = 0;
const COL_ATTACHED: usize = 1;

/// Выбирает из dot3adAggPortTable порты, которые действительно состоят в LAG.
///
/// ifIndex порта берётся из суффикса экземпляра (INDEX dot3adAggPortIndex).
/// Порт, у которого selected aggregate равен собственному ifIndex, в LAG не
/// входит и отбрасывается. Порядок обхода сохраняется.
pub fn read_memberships(rows: &[TableRow]) -> Vec<LagMembership> {
    let mut memberships = Vec::new();

    for row in rows {
        let Some(port_index) = row.instance.index().and_then(|i| i64::try_from(i).ok()) else {
            debug!(instance = ?row.instance, "Не удалось извлечь ifIndex из OID, пропускаем");
            continue;
        };
        let (Some(selected_agg_id), Some(attached_agg_id)) =
            (row.integer(COL_SELECTED), row.integer(COL_ATTACHED))
        else {
            debug!(port_index, "Нечисловые AggID, пропускаем");
            continue;
        };

        if selected_agg_id == port_index {
            continue;
        }

        memberships.push(LagMembership {
            port_index,
            selected_agg_id,
            attached_agg_id,
        });
    }

    debug!(members = memberships.len(), "Членство в LAG прочитано");
    memberships
}

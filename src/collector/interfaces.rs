use tracing::debug;

use super::types::{IF_TYPE_ETHERNET_CSMACD, IF_TYPE_IEEE8023AD_LAG, InterfaceInventory};
use crate::snmp::TableRow;
use crate::snmp::oid::{IF_DESCR, IF_INDEX, IF_TYPE, MibColumn};

/// Колонки ifTable в порядке обхода
pub const INTERFACE_COLUMNS: [MibColumn; 3] = [IF_INDEX, IF_DESCR, IF_TYPE];

const COL_INDEX: usize = 0;
const COL_DESCR: usize = 1;
const COL_TYPE: usize = 2;

/// Раскладывает строки ifTable на физические порты и агрегаты.
/// Остальные типы интерфейсов (loopback, туннели и т.п.) пропускаются.
pub fn classify_interfaces(rows: &[TableRow]) -> InterfaceInventory {
    let mut inventory = InterfaceInventory::default();

    for row in rows {
        let (Some(index), Some(if_type)) = (row.integer(COL_INDEX), row.integer(COL_TYPE)) else {
            debug!(instance = ?row.instance, "Строка ifTable без ifIndex/ifType, пропускаем");
            continue;
        };
        let descr = row.text(COL_DESCR).unwrap_or_default().to_string();

        match if_type {
            IF_TYPE_ETHERNET_CSMACD => {
                inventory.ports.insert(index, descr);
            }
            IF_TYPE_IEEE8023AD_LAG => {
                inventory.aggregates.insert(index, descr);
            }
            _ => {}
        }
    }

    debug!(
        ports = inventory.ports.len(),
        aggregates = inventory.aggregates.len(),
        "Интерфейсы классифицированы"
    );
    inventory
}

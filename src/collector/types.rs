use std::collections::HashMap;

/// ifType ethernetCsmacd
pub const IF_TYPE_ETHERNET_CSMACD: i64 = 6;
/// ifType ieee8023adLag
pub const IF_TYPE_IEEE8023AD_LAG: i64 = 161;

/// Интерфейсы устройства, разложенные по типу: ifIndex -> ifDescr
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceInventory {
    /// Физические Ethernet порты
    pub ports: HashMap<i64, String>,
    /// Агрегаты 802.3ad
    pub aggregates: HashMap<i64, String>,
}

impl InterfaceInventory {
    /// Имя порта или пустая строка, если порт не найден
    pub fn port_name(&self, index: i64) -> &str {
        self.ports.get(&index).map(String::as_str).unwrap_or_default()
    }

    /// Имя агрегата или пустая строка, если агрегат не найден
    pub fn aggregate_name(&self, index: i64) -> &str {
        self.aggregates.get(&index).map(String::as_str).unwrap_or_default()
    }
}

/// Порт, состоящий в LAG
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LagMembership {
    pub port_index: i64,
    pub selected_agg_id: i64,
    pub attached_agg_id: i64,
}

impl LagMembership {
    /// Порт выбран в агрегат, но коммутатор его не присоединил
    pub fn is_inactive(&self) -> bool {
        self.selected_agg_id != self.attached_agg_id
    }
}

/// Всё, что собрано с устройства за один запуск
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LagSnapshot {
    pub inventory: InterfaceInventory,
    pub memberships: Vec<LagMembership>,
}

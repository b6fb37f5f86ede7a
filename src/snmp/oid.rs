use anyhow::Result;
use snmp2::Oid;

/// Колонка MIB-таблицы, которую обходим через GETNEXT/GETBULK
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MibColumn {
    pub name: &'static str,
    pub root: &'static [u64],
}

// IF-MIB::ifTable
pub const IF_INDEX: MibColumn = MibColumn {
    name: "ifIndex",
    root: &[1, 3, 6, 1, 2, 1, 2, 2, 1, 1],
};
pub const IF_DESCR: MibColumn = MibColumn {
    name: "ifDescr",
    root: &[1, 3, 6, 1, 2, 1, 2, 2, 1, 2],
};
pub const IF_TYPE: MibColumn = MibColumn {
    name: "ifType",
    root: &[1, 3, 6, 1, 2, 1, 2, 2, 1, 3],
};

// IEEE8023-LAG-MIB::dot3adAggPortTable
pub const DOT3AD_AGG_PORT_SELECTED_AGG_ID: MibColumn = MibColumn {
    name: "dot3adAggPortSelectedAggID",
    root: &[1, 2, 840, 10006, 300, 43, 1, 2, 1, 1, 12],
};
pub const DOT3AD_AGG_PORT_ATTACHED_AGG_ID: MibColumn = MibColumn {
    name: "dot3adAggPortAttachedAggID",
    root: &[1, 2, 840, 10006, 300, 43, 1, 2, 1, 1, 13],
};

/// Собирает Oid из числовых компонент
pub fn to_oid(components: &[u64]) -> Result<Oid<'static>> {
    Oid::from(components)
        .map_err(|e| anyhow::anyhow!("Cannot build OID from {:?}: {:?}", components, e))
}

/// Раскладывает Oid на числовые компоненты; None, если компонента не влезает в u64
pub fn oid_components(oid: &Oid<'_>) -> Option<Vec<u64>> {
    oid.iter().map(|arcs| arcs.collect())
}

/// Точечная запись компонент, как её печатает net-snmp
pub fn dotted(components: &[u64]) -> String {
    components
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Суффикс экземпляра строки таблицы (INDEX из MIB), без корня колонки
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct InstanceKey(pub Vec<u64>);

impl InstanceKey {
    /// Первая компонента суффикса. Для ifTable и dot3adAggPortTable это ifIndex
    pub fn index(&self) -> Option<u64> {
        self.0.first().copied()
    }

    pub fn components(&self) -> &[u64] {
        &self.0
    }
}

/// Значение ячейки, приведённое к владеющему типу
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Integer(i64),
    Text(String),
    Other(String),
}

impl ColumnValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ColumnValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ColumnValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Одна строка совместного обхода нескольких колонок
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub instance: InstanceKey,
    pub values: Vec<ColumnValue>,
}

impl TableRow {
    pub fn integer(&self, column: usize) -> Option<i64> {
        self.values.get(column).and_then(ColumnValue::as_integer)
    }

    pub fn text(&self, column: usize) -> Option<&str> {
        self.values.get(column).and_then(ColumnValue::as_text)
    }
}

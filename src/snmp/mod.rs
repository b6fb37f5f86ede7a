pub mod client;
pub mod error;
pub mod oid;
pub mod row;
pub mod walk;

#[cfg(test)]
pub mod agent;
#[cfg(test)]
pub mod fake;

pub use client::SnmpClient;
pub use error::WalkError;
pub use oid::MibColumn;
pub use row::TableRow;

/// Обход нескольких колонок MIB-таблицы синхронно, по строкам.
///
/// Реализация отдаёт строки в порядке обхода; ошибка транспорта или
/// error-status от агента обрывает обход целиком, частичный результат
/// не возвращается.
pub trait TableWalker {
    async fn walk_columns(&mut self, columns: &[MibColumn]) -> Result<Vec<TableRow>, WalkError>;
}

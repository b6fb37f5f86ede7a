use tracing::{debug, trace};

use super::error::WalkError;
use super::oid::{MibColumn, dotted};
use super::row::{ColumnValue, InstanceKey, TableRow};

/// Varbind из ответа агента; value = None для endOfMibView/noSuchObject/noSuchInstance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Varbind {
    pub oid: Vec<u64>,
    pub value: Option<ColumnValue>,
}

/// Собирает строки таблицы из ответов GETNEXT/GETBULK, обходя колонки синхронно.
///
/// Ответ раскладывается на куски по одной varbind на колонку. Обход
/// заканчивается, как только любая колонка выходит за свой корень (без
/// перехода в соседние поддеревья) или агент сообщает endOfMibView.
pub struct RowAssembler<'a> {
    columns: &'a [MibColumn],
    cursors: Vec<Vec<u64>>,
    rows: Vec<TableRow>,
    done: bool,
}

impl<'a> RowAssembler<'a> {
    pub fn new(columns: &'a [MibColumn]) -> Self {
        Self {
            columns,
            cursors: columns.iter().map(|c| c.root.to_vec()).collect(),
            rows: Vec::new(),
            done: columns.is_empty(),
        }
    }

    /// OID, с которых начинается следующий запрос
    pub fn cursors(&self) -> &[Vec<u64>] {
        &self.cursors
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn feed(&mut self, varbinds: &[Varbind]) -> Result<(), WalkError> {
        let width = self.columns.len();
        if width == 0 {
            self.done = true;
            return Ok(());
        }
        let mut advanced = false;

        for chunk in varbinds.chunks_exact(width) {
            let leaves_table = self
                .columns
                .iter()
                .zip(chunk)
                .any(|(column, vb)| vb.value.is_none() || !vb.oid.starts_with(column.root));
            if leaves_table {
                self.done = true;
                return Ok(());
            }

            for (cursor, vb) in self.cursors.iter().zip(chunk) {
                if vb.oid <= *cursor {
                    return Err(WalkError::Transport(format!(
                        "OID not increasing: {} after {}",
                        dotted(&vb.oid),
                        dotted(cursor)
                    )));
                }
            }

            let instance = InstanceKey(chunk[0].oid[self.columns[0].root.len()..].to_vec());
            for (column, vb) in self.columns.iter().zip(chunk).skip(1) {
                if vb.oid[column.root.len()..] != *instance.components() {
                    debug!(
                        column = column.name,
                        oid = %dotted(&vb.oid),
                        "Колонка разошлась с первой по индексу строки"
                    );
                }
            }

            trace!(instance = %dotted(instance.components()), "строка таблицы");
            self.rows.push(TableRow {
                instance,
                values: chunk.iter().filter_map(|vb| vb.value.clone()).collect(),
            });
            self.cursors = chunk.iter().map(|vb| vb.oid.clone()).collect();
            advanced = true;
        }

        // Пустой или обрезанный ответ без единой полной строки: дальше идти некуда
        if !advanced {
            self.done = true;
        }

        Ok(())
    }

    pub fn into_rows(self) -> Vec<TableRow> {
        self.rows
    }
}

use std::collections::VecDeque;

use super::row::{ColumnValue, InstanceKey};
use super::{MibColumn, TableRow, TableWalker, WalkError};

/// Заранее записанные ответы на обходы, по одному на вызов walk_columns
#[derive(Debug, Default)]
pub struct FakeWalker {
    responses: VecDeque<Result<Vec<TableRow>, WalkError>>,
    pub walked: Vec<Vec<&'static str>>,
}

impl FakeWalker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, response: Result<Vec<TableRow>, WalkError>) -> Self {
        self.responses.push_back(response);
        self
    }

    pub fn rows(self, rows: Vec<TableRow>) -> Self {
        self.respond(Ok(rows))
    }
}

impl TableWalker for FakeWalker {
    async fn walk_columns(&mut self, columns: &[MibColumn]) -> Result<Vec<TableRow>, WalkError> {
        self.walked.push(columns.iter().map(|c| c.name).collect());
        self.responses
            .pop_front()
            .unwrap_or_else(|| Err(WalkError::Transport("no scripted response".into())))
    }
}

/// Строка ifTable: ifIndex, ifDescr, ifType
pub fn if_row(index: i64, descr: &str, if_type: i64) -> TableRow {
    TableRow {
        instance: InstanceKey(vec![index as u64]),
        values: vec![
            ColumnValue::Integer(index),
            ColumnValue::Text(descr.to_string()),
            ColumnValue::Integer(if_type),
        ],
    }
}

/// Строка dot3adAggPortTable: selected, attached
pub fn agg_row(port: u64, selected: i64, attached: i64) -> TableRow {
    TableRow {
        instance: InstanceKey(vec![port]),
        values: vec![ColumnValue::Integer(selected), ColumnValue::Integer(attached)],
    }
}

use anyhow::{Context, Result};
use snmp2::{AsyncSession, Oid, Pdu, Value};
use tokio::time::{Duration, timeout};
use tracing::{debug, info, warn};

use super::TableWalker;
use super::error::WalkError;
use super::oid::{MibColumn, dotted, oid_components, to_oid};
use super::row::{ColumnValue, TableRow};
use super::walk::{RowAssembler, Varbind};
use crate::config::{AppConfig, SnmpVersion};

// В SNMPv1 агент отвечает noSuchName, когда GETNEXT упирается в конец MIB
const V1_NO_SUCH_NAME: u32 = 2;

/// SNMP клиент поверх AsyncSession: v1 обходит через GETNEXT, v2c через GETBULK
pub struct SnmpClient {
    session: AsyncSession,
    target: String,
    community: String,
    version: SnmpVersion,
    timeout: Duration,
    retries: u32,
    max_repetitions: u32,
}

impl SnmpClient {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let target = config.target();
        let community = config.community().to_string();
        let session = open_session(&target, &community, config.version).await?;

        debug!(agent = %target, version = ?config.version, "SNMP сессия создана");

        Ok(Self {
            session,
            target,
            community,
            version: config.version,
            timeout: Duration::from_secs(config.settings.connection.timeout),
            retries: config.settings.connection.retries,
            max_repetitions: config.settings.connection.max_repetitions,
        })
    }

    /// Новый сокет вместо старого: опоздавшие ответы на прошлые запросы
    /// уходят в закрытый порт и больше не попадаются следующему запросу
    async fn reopen(&mut self) -> Result<(), WalkError> {
        self.session = open_session(&self.target, &self.community, self.version)
            .await
            .map_err(|e| WalkError::Transport(format!("{:#}", e)))?;
        Ok(())
    }

    async fn fetch(&mut self, cursors: &[Vec<u64>]) -> Result<Vec<Varbind>, WalkError> {
        let oids = cursors
            .iter()
            .map(|c| to_oid(c))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| WalkError::Transport(format!("{:#}", e)))?;

        match self.version {
            SnmpVersion::V2c => self.getbulk(&oids).await,
            SnmpVersion::V1 => {
                // GETNEXT в snmp2 берёт один OID, поэтому строка собирается по колонкам
                let mut row = Vec::with_capacity(oids.len());
                for oid in &oids {
                    let mut varbinds = self.getnext(oid).await?;
                    if varbinds.is_empty() {
                        return Ok(Vec::new());
                    }
                    row.append(&mut varbinds);
                }
                Ok(row)
            }
        }
    }

    async fn getbulk(&mut self, oids: &[Oid<'static>]) -> Result<Vec<Varbind>, WalkError> {
        let refs: Vec<&Oid<'_>> = oids.iter().collect();
        let mut attempt = 0;

        loop {
            let failure = match timeout(
                self.timeout,
                self.session.getbulk(&refs, 0, self.max_repetitions),
            )
            .await
            {
                Ok(Ok(pdu)) => return decode_response(pdu, self.version),
                Ok(Err(e)) => Some(e),
                Err(_) => None,
            };
            self.recover("GETBULK", failure, &mut attempt).await?;
        }
    }

    async fn getnext(&mut self, oid: &Oid<'_>) -> Result<Vec<Varbind>, WalkError> {
        let mut attempt = 0;

        loop {
            let failure = match timeout(self.timeout, self.session.getnext(oid)).await {
                Ok(Ok(pdu)) => return decode_response(pdu, self.version),
                Ok(Err(e)) => Some(e),
                Err(_) => None,
            };
            self.recover("GETNEXT", failure, &mut attempt).await?;
        }
    }

    /// Решает судьбу неудачного запроса; `failure = None` значит таймаут.
    ///
    /// Таймаут повторяется по тому же сокету: snmp2 не сдвигает request-id,
    /// и опоздавший ответ на первую копию тоже подходит. Чужой request-id
    /// значит, что в сокете лежит дубль ответа на прошлый запрос; snmp2 к
    /// этому моменту уже сдвинул request-id, поэтому сессия открывается заново.
    async fn recover(
        &mut self,
        request: &str,
        failure: Option<snmp2::Error>,
        attempt: &mut u32,
    ) -> Result<(), WalkError> {
        match failure {
            Some(snmp2::Error::RequestIdMismatch) if *attempt < self.retries => {
                *attempt += 1;
                warn!(attempt = *attempt, request, "Stale SNMP reply, reopening session");
                self.reopen().await
            }
            Some(e) => Err(WalkError::Transport(format!(
                "SNMP {} request failed: {}",
                request, e
            ))),
            None if *attempt < self.retries => {
                *attempt += 1;
                warn!(attempt = *attempt, request, "SNMP request timed out, retrying");
                Ok(())
            }
            None => Err(timed_out(self.timeout, *attempt)),
        }
    }
}

impl TableWalker for SnmpClient {
    async fn walk_columns(&mut self, columns: &[MibColumn]) -> Result<Vec<TableRow>, WalkError> {
        let names: Vec<&str> = columns.iter().map(|c| c.name).collect();
        debug!(columns = ?names, "Начинаем обход таблицы");

        let mut assembler = RowAssembler::new(columns);
        let mut requests = 0usize;

        while !assembler.is_done() {
            let cursors = assembler.cursors().to_vec();
            let varbinds = self.fetch(&cursors).await?;
            requests += 1;
            assembler.feed(&varbinds)?;
        }

        let rows = assembler.into_rows();
        info!(columns = ?names, rows = rows.len(), requests, "Обход таблицы завершён");
        Ok(rows)
    }
}

fn timed_out(per_request: Duration, retries: u32) -> WalkError {
    WalkError::Transport(format!(
        "No SNMP response received before timeout ({}s, {} retries)",
        per_request.as_secs(),
        retries
    ))
}

async fn open_session(target: &str, community: &str, version: SnmpVersion) -> Result<AsyncSession> {
    let community = community.as_bytes();
    match version {
        SnmpVersion::V1 => AsyncSession::new_v1(target, community, 0).await,
        SnmpVersion::V2c => AsyncSession::new_v2c(target, community, 0).await,
    }
    .with_context(|| format!("Failed to create SNMP session to {}", target))
}

/// Переводит PDU в владеющие varbind'ы до следующего запроса по той же сессии
fn decode_response(pdu: Pdu<'_>, version: SnmpVersion) -> Result<Vec<Varbind>, WalkError> {
    let error_status = pdu.error_status;
    let error_index = pdu.error_index;

    let mut varbinds = Vec::new();
    for (oid, value) in pdu.varbinds {
        let components = oid_components(&oid)
            .ok_or_else(|| WalkError::Transport(format!("Malformed OID in response: {}", oid)))?;
        varbinds.push(Varbind {
            oid: components,
            value: column_value(&value),
        });
    }
    interpret_status(error_status, error_index, varbinds, version)
}

/// error-status ответа: 0 отдаёт varbind'ы как есть, noSuchName в v1 значит
/// конец MIB, остальное становится ошибкой агента с OID по error-index
fn interpret_status(
    error_status: u32,
    error_index: u32,
    varbinds: Vec<Varbind>,
    version: SnmpVersion,
) -> Result<Vec<Varbind>, WalkError> {
    if error_status == 0 {
        return Ok(varbinds);
    }

    if version == SnmpVersion::V1 && error_status == V1_NO_SUCH_NAME {
        debug!("noSuchName в SNMPv1: конец MIB");
        return Ok(Vec::new());
    }

    let failed_oid = (error_index as usize)
        .checked_sub(1)
        .and_then(|i| varbinds.get(i))
        .map(|vb| dotted(&vb.oid));
    Err(WalkError::agent(error_status, failed_oid))
}

fn column_value(value: &Value<'_>) -> Option<ColumnValue> {
    match value {
        Value::EndOfMibView | Value::NoSuchObject | Value::NoSuchInstance => None,
        Value::Integer(n) => Some(ColumnValue::Integer(*n)),
        Value::Counter32(n) | Value::Unsigned32(n) | Value::Timeticks(n) => {
            Some(ColumnValue::Integer(i64::from(*n)))
        }
        Value::OctetString(bytes) => Some(ColumnValue::Text(
            String::from_utf8_lossy(bytes).into_owned(),
        )),
        other => Some(ColumnValue::Other(format!("{:?}", other))),
    }
}

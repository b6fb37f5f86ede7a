use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::ops::Bound::{Excluded, Unbounded};
use std::sync::Arc;

use tokio::net::UdpSocket;
use tokio::time::{Duration, sleep};

use super::oid::MibColumn;
use super::row::ColumnValue;

const SEQUENCE: u8 = 0x30;
const INTEGER: u8 = 0x02;
const OCTET_STRING: u8 = 0x04;
const OBJECT_IDENTIFIER: u8 = 0x06;
const GET_NEXT: u8 = 0xA1;
const RESPONSE: u8 = 0xA2;
const GET_BULK: u8 = 0xA5;

/// SNMP агент на 127.0.0.1 со статической MIB: отвечает на GETNEXT и GETBULK
/// так, как это делает настоящий агент, и умеет задержать первый ответ или
/// вернуть error-status на заданный по счёту запрос.
#[derive(Debug, Default, Clone)]
pub struct FakeAgent {
    mib: BTreeMap<Vec<u64>, ColumnValue>,
    first_reply_delay: Option<Duration>,
    failing_request: Option<(usize, u32)>,
}

#[derive(Debug, Clone)]
enum Cell {
    Value(ColumnValue),
    Null,
    EndOfMibView,
}

impl FakeAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, column: MibColumn, cells: &[(u64, ColumnValue)]) -> Self {
        for (index, value) in cells {
            self.mib.insert([column.root, &[*index]].concat(), value.clone());
        }
        self
    }

    pub fn delay_first_reply(mut self, delay: Duration) -> Self {
        self.first_reply_delay = Some(delay);
        self
    }

    /// Запрос номер `nth` (с единицы) получает error-status с error-index 1
    pub fn fail_request(mut self, nth: usize, error_status: u32) -> Self {
        self.failing_request = Some((nth, error_status));
        self
    }

    pub async fn start(self) -> SocketAddr {
        let socket = Arc::new(UdpSocket::bind("127.0.0.1:0").await.unwrap());
        let addr = socket.local_addr().unwrap();
        tokio::spawn(self.serve(socket));
        addr
    }

    async fn serve(self, socket: Arc<UdpSocket>) {
        let mut buf = vec![0u8; 65_535];
        let mut served = 0usize;

        loop {
            let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                return;
            };
            served += 1;
            let Some(reply) = self.answer(&buf[..len], served) else {
                continue;
            };

            match self.first_reply_delay {
                Some(delay) if served == 1 => {
                    let socket = Arc::clone(&socket);
                    tokio::spawn(async move {
                        sleep(delay).await;
                        let _ = socket.send_to(&reply, peer).await;
                    });
                }
                _ => {
                    let _ = socket.send_to(&reply, peer).await;
                }
            }
        }
    }

    fn answer(&self, datagram: &[u8], served: usize) -> Option<Vec<u8>> {
        let request = Request::parse(datagram)?;

        if let Some((nth, error_status)) = self.failing_request {
            if nth == served {
                let echoed = request.oids.iter().map(|oid| (oid.clone(), Cell::Null)).collect();
                return Some(request.reply(error_status, 1, echoed));
            }
        }

        let cells = match request.pdu_type {
            GET_NEXT => {
                let oid = request.oids.first()?;
                match self.next(oid) {
                    Some(cell) => vec![cell],
                    // v1 не знает endOfMibView
                    None if request.version == 0 => {
                        return Some(request.reply(2, 1, vec![(oid.clone(), Cell::Null)]));
                    }
                    None => vec![(oid.clone(), Cell::EndOfMibView)],
                }
            }
            GET_BULK => self.bulk(&request.oids, request.max_repetitions),
            _ => return None,
        };
        Some(request.reply(0, 0, cells))
    }

    fn next(&self, oid: &[u64]) -> Option<(Vec<u64>, Cell)> {
        self.mib
            .range::<[u64], _>((Excluded(oid), Unbounded))
            .next()
            .map(|(next, value)| (next.clone(), Cell::Value(value.clone())))
    }

    fn bulk(&self, oids: &[Vec<u64>], max_repetitions: i64) -> Vec<(Vec<u64>, Cell)> {
        let mut cursors = oids.to_vec();
        let mut cells = Vec::new();

        for _ in 0..max_repetitions.max(1) {
            let mut exhausted = true;
            for cursor in cursors.iter_mut() {
                match self.next(cursor) {
                    Some((oid, cell)) => {
                        *cursor = oid.clone();
                        cells.push((oid, cell));
                        exhausted = false;
                    }
                    None => cells.push((cursor.clone(), Cell::EndOfMibView)),
                }
            }
            if exhausted {
                break;
            }
        }
        cells
    }
}

struct Request {
    version: i64,
    community: Vec<u8>,
    pdu_type: u8,
    request_id: i64,
    max_repetitions: i64,
    oids: Vec<Vec<u64>>,
}

impl Request {
    fn parse(datagram: &[u8]) -> Option<Self> {
        let (_, message, _) = read_tlv(datagram)?;
        let (_, version, rest) = read_tlv(message)?;
        let (_, community, rest) = read_tlv(rest)?;
        let (pdu_type, pdu, _) = read_tlv(rest)?;
        let (_, request_id, rest) = read_tlv(pdu)?;
        // у GETBULK здесь non-repeaters и max-repetitions, у GETNEXT нули
        let (_, _, rest) = read_tlv(rest)?;
        let (_, max_repetitions, rest) = read_tlv(rest)?;
        let (_, mut list, _) = read_tlv(rest)?;

        let mut oids = Vec::new();
        while !list.is_empty() {
            let (_, varbind, rest) = read_tlv(list)?;
            let (_, oid, _) = read_tlv(varbind)?;
            oids.push(decode_oid(oid));
            list = rest;
        }

        Some(Self {
            version: decode_integer(version),
            community: community.to_vec(),
            pdu_type,
            request_id: decode_integer(request_id),
            max_repetitions: decode_integer(max_repetitions),
            oids,
        })
    }

    fn reply(&self, error_status: u32, error_index: u32, cells: Vec<(Vec<u64>, Cell)>) -> Vec<u8> {
        let varbinds: Vec<u8> = cells
            .iter()
            .flat_map(|(oid, cell)| tlv(SEQUENCE, &[encode_oid(oid), cell.encode()].concat()))
            .collect();
        let pdu = [
            integer(self.request_id),
            integer(error_status.into()),
            integer(error_index.into()),
            tlv(SEQUENCE, &varbinds),
        ]
        .concat();
        let message = [
            integer(self.version),
            tlv(OCTET_STRING, &self.community),
            tlv(RESPONSE, &pdu),
        ]
        .concat();
        tlv(SEQUENCE, &message)
    }
}

impl Cell {
    fn encode(&self) -> Vec<u8> {
        match self {
            Cell::Value(ColumnValue::Integer(n)) => integer(*n),
            Cell::Value(ColumnValue::Text(text)) => tlv(OCTET_STRING, text.as_bytes()),
            Cell::Value(ColumnValue::Other(_)) | Cell::Null => vec![0x05, 0x00],
            Cell::EndOfMibView => vec![0x82, 0x00],
        }
    }
}

/// (tag, содержимое, остаток буфера)
fn read_tlv(buf: &[u8]) -> Option<(u8, &[u8], &[u8])> {
    let tag = *buf.first()?;
    let first = usize::from(*buf.get(1)?);
    let (header, len) = if first < 0x80 {
        (2, first)
    } else {
        let width = first & 0x7f;
        let len = buf
            .get(2..2 + width)?
            .iter()
            .fold(0usize, |acc, b| (acc << 8) | usize::from(*b));
        (2 + width, len)
    };
    let content = buf.get(header..header + len)?;
    Some((tag, content, &buf[header + len..]))
}

fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let len = content.len();
    let mut out = vec![tag];
    match len {
        0..=0x7f => out.push(len as u8),
        0x80..=0xff => out.extend([0x81, len as u8]),
        _ => out.extend([0x82, (len >> 8) as u8, len as u8]),
    }
    out.extend_from_slice(content);
    out
}

fn integer(n: i64) -> Vec<u8> {
    let bytes = n.to_be_bytes();
    let mut start = 0;
    while start < 7
        && ((bytes[start] == 0x00 && bytes[start + 1] & 0x80 == 0)
            || (bytes[start] == 0xff && bytes[start + 1] & 0x80 != 0))
    {
        start += 1;
    }
    tlv(INTEGER, &bytes[start..])
}

fn decode_integer(content: &[u8]) -> i64 {
    let sign = if content.first().is_some_and(|b| b & 0x80 != 0) { -1 } else { 0 };
    content.iter().fold(sign, |acc, b| (acc << 8) | i64::from(*b))
}

fn encode_oid(components: &[u64]) -> Vec<u8> {
    let mut content = Vec::new();
    push_base128(components[0] * 40 + components[1], &mut content);
    for arc in &components[2..] {
        push_base128(*arc, &mut content);
    }
    tlv(OBJECT_IDENTIFIER, &content)
}

fn push_base128(mut arc: u64, out: &mut Vec<u8>) {
    let mut groups = vec![(arc & 0x7f) as u8];
    arc >>= 7;
    while arc > 0 {
        groups.push((arc & 0x7f) as u8 | 0x80);
        arc >>= 7;
    }
    out.extend(groups.iter().rev());
}

fn decode_oid(content: &[u8]) -> Vec<u64> {
    let mut arcs = Vec::new();
    let mut acc = 0u64;
    for b in content {
        acc = (acc << 7) | u64::from(b & 0x7f);
        if b & 0x80 == 0 {
            arcs.push(acc);
            acc = 0;
        }
    }
    let Some(&first) = arcs.first() else {
        return arcs;
    };
    let (a, b) = if first < 80 { (first / 40, first % 40) } else { (2, first - 80) };
    [vec![a, b], arcs[1..].to_vec()].concat()
}

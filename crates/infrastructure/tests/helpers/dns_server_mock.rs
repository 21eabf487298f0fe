#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::{Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

pub const NOERROR: u8 = 0;
pub const SERVFAIL: u8 = 2;
pub const NXDOMAIN: u8 = 3;
pub const REFUSED: u8 = 5;

#[derive(Clone)]
struct ZoneEntry {
    rcode: u8,
    records: Vec<Record>,
    truncate_over_udp: bool,
}

/// Canned responses keyed by `(fqdn, type)`. Unknown pairs get an empty
/// NOERROR answer.
#[derive(Clone, Default)]
pub struct MockZone {
    entries: HashMap<(String, RecordType), ZoneEntry>,
    udp_delay: Option<Duration>,
    stray_udp_reply: bool,
    tcp_silent: bool,
}

impl MockZone {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(name: &str, record_type: RecordType) -> (String, RecordType) {
        let mut name = name.to_ascii_lowercase();
        if !name.ends_with('.') {
            name.push('.');
        }
        (name, record_type)
    }

    pub fn answer(mut self, name: &str, record_type: RecordType, records: Vec<Record>) -> Self {
        self.entries.insert(
            Self::key(name, record_type),
            ZoneEntry {
                rcode: NOERROR,
                records,
                truncate_over_udp: false,
            },
        );
        self
    }

    pub fn rcode(mut self, name: &str, record_type: RecordType, rcode: u8) -> Self {
        self.entries.insert(
            Self::key(name, record_type),
            ZoneEntry {
                rcode,
                records: Vec::new(),
                truncate_over_udp: false,
            },
        );
        self
    }

    /// Over UDP, answers with TC set and no records; over TCP, with `records`.
    pub fn truncated(mut self, name: &str, record_type: RecordType, records: Vec<Record>) -> Self {
        self.entries.insert(
            Self::key(name, record_type),
            ZoneEntry {
                rcode: NOERROR,
                records,
                truncate_over_udp: true,
            },
        );
        self
    }

    /// Holds every UDP reply back by `delay`.
    pub fn udp_delay(mut self, delay: Duration) -> Self {
        self.udp_delay = Some(delay);
        self
    }

    /// Sends a copy of each UDP reply with a wrong ID ahead of the real one.
    pub fn stray_udp_reply(mut self) -> Self {
        self.stray_udp_reply = true;
        self
    }

    /// Accepts TCP queries but never answers them.
    pub fn tcp_silent(mut self) -> Self {
        self.tcp_silent = true;
        self
    }

    fn respond(&self, query: &[u8], over_tcp: bool) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;
        let question = request.queries().first()?.clone();

        let entry = self
            .entries
            .get(&Self::key(&question.name().to_ascii(), question.query_type()))
            .cloned()
            .unwrap_or(ZoneEntry {
                rcode: NOERROR,
                records: Vec::new(),
                truncate_over_udp: false,
            });
        let truncated = entry.truncate_over_udp && !over_tcp;

        let mut response = Message::new(request.id(), MessageType::Response, OpCode::Query);
        response.add_query(question);

        let mut buf = Vec::with_capacity(512);
        {
            let mut encoder = BinEncoder::new(&mut buf);
            response.emit(&mut encoder).ok()?;
        }

        if !truncated {
            // uncompressed, so each record can be appended on its own
            for record in &entry.records {
                let mut record_buf = Vec::new();
                let mut encoder = BinEncoder::new(&mut record_buf);
                encoder.set_canonical_form(true);
                record.emit(&mut encoder).ok()?;
                buf.extend_from_slice(&record_buf);
            }
        }

        let answer_count = if truncated { 0 } else { entry.records.len() as u16 };
        // QR, RD, TC when truncated; RA plus rcode; ANCOUNT
        buf[2] = 0x80 | 0x01 | if truncated { 0x02 } else { 0x00 };
        buf[3] = 0x80 | (entry.rcode & 0x0f);
        buf[6..8].copy_from_slice(&answer_count.to_be_bytes());

        Some(buf)
    }
}

/// UDP and TCP DNS server on the same loopback port, serving a [`MockZone`].
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown: Vec<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(zone: MockZone) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let zone = Arc::new(zone);
        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));

        let (udp_shutdown_tx, mut udp_shutdown_rx) = oneshot::channel();
        let (tcp_shutdown_tx, mut tcp_shutdown_rx) = oneshot::channel();

        {
            let zone = Arc::clone(&zone);
            let counter = Arc::clone(&udp_queries);
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                loop {
                    tokio::select! {
                        _ = &mut udp_shutdown_rx => break,
                        result = socket.recv_from(&mut buf) => {
                            if let Ok((len, peer)) = result {
                                counter.fetch_add(1, Ordering::SeqCst);
                                if let Some(response) = zone.respond(&buf[..len], false) {
                                    if let Some(delay) = zone.udp_delay {
                                        tokio::time::sleep(delay).await;
                                    }
                                    if zone.stray_udp_reply {
                                        let mut stray = response.clone();
                                        stray[0] ^= 0xff;
                                        let _ = socket.send_to(&stray, peer).await;
                                    }
                                    let _ = socket.send_to(&response, peer).await;
                                }
                            }
                        }
                    }
                }
            });
        }

        {
            let zone = Arc::clone(&zone);
            let counter = Arc::clone(&tcp_queries);
            tokio::spawn(async move {
                loop {
                    tokio::select! {
                        _ = &mut tcp_shutdown_rx => break,
                        accepted = listener.accept() => {
                            let Ok((mut stream, _)) = accepted else { continue };
                            counter.fetch_add(1, Ordering::SeqCst);
                            let zone = Arc::clone(&zone);
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if zone.tcp_silent {
                                    std::future::pending::<()>().await;
                                }
                                if let Some(response) = zone.respond(&query, true) {
                                    let len = (response.len() as u16).to_be_bytes();
                                    let _ = stream.write_all(&len).await;
                                    let _ = stream.write_all(&response).await;
                                }
                            });
                        }
                    }
                }
            });
        }

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown: vec![udp_shutdown_tx, tcp_shutdown_tx],
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        for tx in self.shutdown.drain(..) {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        for tx in self.shutdown.drain(..) {
            let _ = tx.send(());
        }
    }
}

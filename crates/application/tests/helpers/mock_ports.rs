#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_census_application::ports::{
    DomainSource, RecordResolver, RecordSink, RecordSinkFactory,
};
use ferrous_census_domain::{Answer, AnswerData, CanonicalRecord, DomainError, RecordType};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

// ── Domain source ──────────────────────────────────────────────────────────

pub struct MockDomainSource {
    lines: VecDeque<Result<String, DomainError>>,
}

impl MockDomainSource {
    pub fn new(domains: &[&str]) -> Self {
        Self {
            lines: domains.iter().map(|d| Ok(d.to_string())).collect(),
        }
    }

    pub fn from_owned(domains: Vec<String>) -> Self {
        Self {
            lines: domains.into_iter().map(Ok).collect(),
        }
    }

    /// Appends a read failure after the lines queued so far.
    pub fn then_fail(mut self, message: &str) -> Self {
        self.lines
            .push_back(Err(DomainError::SourceError(message.to_string())));
        self
    }
}

#[async_trait]
impl DomainSource for MockDomainSource {
    async fn next_domain(&mut self) -> Result<Option<String>, DomainError> {
        match self.lines.pop_front() {
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }
}

// ── Resolver ───────────────────────────────────────────────────────────────

type Key = (String, RecordType);

/// Fake resolver with scripted answers and a call log.
///
/// Pairs without a scripted response answer with an empty list.
pub struct MockRecordResolver {
    responses: Mutex<HashMap<Key, Result<Vec<Answer>, DomainError>>>,
    default_answers: Mutex<Option<Box<dyn Fn(&str, RecordType) -> Vec<Answer> + Send + Sync>>>,
    calls: Mutex<Vec<Key>>,
    delay: Mutex<Option<Duration>>,
    answers_returned: AtomicUsize,
}

impl MockRecordResolver {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            default_answers: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            delay: Mutex::new(None),
            answers_returned: AtomicUsize::new(0),
        }
    }

    pub fn set_answers(&self, domain: &str, record_type: RecordType, answers: Vec<Answer>) {
        self.responses
            .lock()
            .unwrap()
            .insert((domain.to_string(), record_type), Ok(answers));
    }

    pub fn set_error(&self, domain: &str, record_type: RecordType, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert((domain.to_string(), record_type), Err(error));
    }

    /// Answers for any pair that has no scripted response.
    pub fn set_default<F>(&self, f: F)
    where
        F: Fn(&str, RecordType) -> Vec<Answer> + Send + Sync + 'static,
    {
        *self.default_answers.lock().unwrap() = Some(Box::new(f));
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> Vec<Key> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, domain: &str) -> Vec<RecordType> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(d, _)| d == domain)
            .map(|(_, rt)| *rt)
            .collect()
    }

    pub fn answers_returned(&self) -> usize {
        self.answers_returned.load(Ordering::SeqCst)
    }
}

impl Default for MockRecordResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordResolver for MockRecordResolver {
    async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<Answer>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((domain.to_string(), record_type));

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self
            .responses
            .lock()
            .unwrap()
            .get(&(domain.to_string(), record_type))
            .cloned();

        let result = match scripted {
            Some(result) => result,
            None => Ok(self
                .default_answers
                .lock()
                .unwrap()
                .as_ref()
                .map(|f| f(domain, record_type))
                .unwrap_or_default()),
        };

        if let Ok(answers) = &result {
            self.answers_returned
                .fetch_add(answers.len(), Ordering::SeqCst);
        }
        result
    }
}

// ── Sink ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct SinkShared {
    stored: Mutex<Vec<CanonicalRecord>>,
    failing_domains: Mutex<HashSet<String>>,
    opened: AtomicUsize,
    closed: AtomicUsize,
    inserts_started: AtomicUsize,
}

/// Hands out sinks that write into one shared in-memory table.
pub struct MockSinkFactory {
    shared: Arc<SinkShared>,
    fail_open_after: Option<usize>,
    gate: Option<Arc<Semaphore>>,
}

impl MockSinkFactory {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(SinkShared::default()),
            fail_open_after: None,
            gate: None,
        }
    }

    /// The `n+1`th call to `open` fails.
    pub fn failing_open_after(mut self, n: usize) -> Self {
        self.fail_open_after = Some(n);
        self
    }

    /// Every insert waits for a permit from `gate` before completing.
    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn fail_inserts_for(&self, domain: &str) {
        self.shared
            .failing_domains
            .lock()
            .unwrap()
            .insert(domain.to_string());
    }

    pub fn stored(&self) -> Vec<CanonicalRecord> {
        self.shared.stored.lock().unwrap().clone()
    }

    pub fn opened(&self) -> usize {
        self.shared.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.shared.closed.load(Ordering::SeqCst)
    }

    pub fn inserts_started(&self) -> usize {
        self.shared.inserts_started.load(Ordering::SeqCst)
    }
}

impl Default for MockSinkFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordSinkFactory for MockSinkFactory {
    async fn open(&self) -> Result<Box<dyn RecordSink>, DomainError> {
        let opened = self.shared.opened.load(Ordering::SeqCst);
        if self.fail_open_after.is_some_and(|n| opened >= n) {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        self.shared.opened.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(MockSink {
            shared: Arc::clone(&self.shared),
            gate: self.gate.clone(),
        }))
    }
}

struct MockSink {
    shared: Arc<SinkShared>,
    gate: Option<Arc<Semaphore>>,
}

#[async_trait]
impl RecordSink for MockSink {
    async fn insert(&mut self, record: &CanonicalRecord) -> Result<(), DomainError> {
        self.shared.inserts_started.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            let _permit = gate.acquire().await.unwrap();
        }

        if self
            .shared
            .failing_domains
            .lock()
            .unwrap()
            .contains(record.domain())
        {
            return Err(DomainError::DatabaseError("duplicate entry".to_string()));
        }

        self.shared.stored.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), DomainError> {
        self.shared.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ── Answer helpers ─────────────────────────────────────────────────────────

pub fn ns(host: &str) -> Answer {
    Answer::from_data("example.com.", 300, AnswerData::NS(host.to_string()))
}

pub fn a(ip: &str) -> Answer {
    Answer::from_data("example.com.", 300, AnswerData::A(ip.parse().unwrap()))
}

pub fn cname(target: &str) -> Answer {
    Answer::from_data("example.com.", 300, AnswerData::CNAME(target.to_string()))
}

use std::cell::{Cell, RefCell};

use log::{error, info, warn};

use crate::config::GateConfig;

use super::clock::{Clock, SystemClock};
use super::error::SubmitError;
use super::record::SubmissionRecord;
use super::store::{LocalStorageStore, SubmissionStore};
use super::transport::{GlooTransport, NotifyPayload, NotifyTransport};
use super::validation::{check_honeypot, validate_email};

/// Where a single attempt currently is. Rejected, accepted and failed
/// attempts all land back on `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Sending,
}

/// A submission the backend took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accepted {
    pub record: SubmissionRecord,
}

pub type BrowserGate = SubmissionGate<LocalStorageStore, GlooTransport, SystemClock>;

/// Decides whether an email may be sent to the form backend and keeps the
/// rate-limit record.
///
/// The honeypot and rate limit only exist in the page. Anyone posting to the
/// endpoint directly skips both, and several tabs each keep their own
/// in-memory copy of the record.
pub struct SubmissionGate<S, T, C> {
    config: GateConfig,
    store: S,
    transport: T,
    clock: C,
    record: RefCell<SubmissionRecord>,
    phase: Cell<Phase>,
}

impl BrowserGate {
    pub fn from_browser(config: GateConfig) -> Self {
        let store = LocalStorageStore::new(config.storage_key.clone());
        let transport = GlooTransport::new(config.endpoint.clone());
        Self::new(config, store, transport, SystemClock)
    }
}

impl<S: SubmissionStore, T: NotifyTransport, C: Clock> SubmissionGate<S, T, C> {
    /// Builds the gate and reads the stored record once.
    pub fn new(config: GateConfig, store: S, transport: T, clock: C) -> Self {
        let record = match store.load() {
            Ok(Some(record)) => record,
            Ok(None) => SubmissionRecord::default(),
            Err(e) => {
                warn!("Ignoring stored submission record: {}", e);
                SubmissionRecord::default()
            }
        };

        Self {
            config,
            store,
            transport,
            clock,
            record: RefCell::new(record),
            phase: Cell::new(Phase::Idle),
        }
    }

    pub fn validate(&self, email: &str) -> Result<(), SubmitError> {
        validate_email(email)
    }

    pub fn check_anti_bot(&self, honeypot: &str) -> Result<(), SubmitError> {
        check_honeypot(honeypot)
    }

    /// Resets an expired window and checks the cap in one borrow of the record.
    pub fn check_rate_limit(&self, now: i64) -> Result<(), SubmitError> {
        self.record
            .borrow_mut()
            .admit(now, self.config.window_ms, self.config.max_submissions)
            .map_err(|retry_after_ms| SubmitError::RateLimited { retry_after_ms })
    }

    fn screen(&self, email: &str, honeypot: &str) -> Result<(), SubmitError> {
        self.validate(email)?;
        self.check_anti_bot(honeypot)?;
        self.check_rate_limit(self.clock.now_millis())
    }

    pub async fn submit(&self, email: &str, honeypot: &str) -> Result<Accepted, SubmitError> {
        if self.phase.get() != Phase::Idle {
            return Err(SubmitError::InFlight);
        }

        self.phase.set(Phase::Validating);
        if let Err(e) = self.screen(email, honeypot) {
            warn!("Submission rejected: {}", e);
            self.phase.set(Phase::Idle);
            return Err(e);
        }

        let payload = NotifyPayload::new(email, self.clock.now_millis(), &self.config.source);
        self.phase.set(Phase::Sending);
        let sent = self.transport.send(&payload).await;
        self.phase.set(Phase::Idle);

        if let Err(e) = sent {
            error!("Notify request failed: {}", e);
            return Err(e.into());
        }

        let record = {
            let mut record = self.record.borrow_mut();
            record.register(self.clock.now_millis());
            *record
        };
        if let Err(e) = self.store.save(&record) {
            warn!("Could not persist submission record: {}", e);
        }
        info!("Email submitted, {} in the current window", record.count);

        Ok(Accepted { record })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::notify::clock::FixedClock;
    use crate::notify::store::MemoryStore;
    use crate::notify::transport::ScriptedTransport;

    const NOW: i64 = 1_700_000_000_000;

    fn build_gate(store: MemoryStore, status: u16) -> SubmissionGate<MemoryStore, ScriptedTransport, FixedClock> {
        SubmissionGate::new(
            GateConfig::default(),
            store,
            ScriptedTransport::answering(status),
            FixedClock::at(NOW),
        )
    }

    #[test]
    fn first_submission_is_sent_and_recorded() {
        let gate = build_gate(MemoryStore::default(), 200);

        let accepted = block_on(gate.submit("a@b.com", "")).unwrap();

        assert_eq!(gate.transport.calls(), 1);
        assert!(gate.transport.bodies.borrow()[0].contains("\"a@b.com\""));
        let expected = SubmissionRecord { last_submission: Some(NOW), count: 1 };
        assert_eq!(accepted.record, expected);
        assert_eq!(gate.store.stored(), Some(expected));
        assert_eq!(gate.phase.get(), Phase::Idle);
    }

    #[test]
    fn filled_honeypot_never_reaches_the_network() {
        for email in ["a@b.com", "not-an-email", ""] {
            let gate = build_gate(MemoryStore::default(), 200);
            assert!(block_on(gate.submit(email, "bot text")).is_err());
            assert_eq!(gate.transport.calls(), 0);
            assert_eq!(gate.store.writes.get(), 0);
        }
    }

    #[test]
    fn checks_run_in_order() {
        let gate = build_gate(
            MemoryStore::with_record(SubmissionRecord { last_submission: Some(NOW), count: 3 }),
            200,
        );
        assert!(matches!(block_on(gate.submit(" ", "bot")), Err(SubmitError::EmptyInput)));
        assert!(matches!(block_on(gate.submit("nope", "bot")), Err(SubmitError::InvalidFormat)));
        assert!(matches!(block_on(gate.submit("a@b.com", "bot")), Err(SubmitError::BotDetected)));
        assert!(matches!(block_on(gate.submit("a@b.com", "")), Err(SubmitError::RateLimited { .. })));
    }

    #[test]
    fn fourth_submission_inside_the_window_is_rejected() {
        let store = MemoryStore::with_record(SubmissionRecord {
            last_submission: Some(NOW - 30_000),
            count: 3,
        });
        let gate = build_gate(store, 200);

        let err = block_on(gate.submit("a@b.com", "")).unwrap_err();

        assert!(matches!(err, SubmitError::RateLimited { retry_after_ms: 30_000 }));
        assert_eq!(gate.transport.calls(), 0);
    }

    #[test]
    fn elapsed_window_resets_before_the_attempt() {
        let store = MemoryStore::with_record(SubmissionRecord {
            last_submission: Some(NOW - 70_000),
            count: 3,
        });
        let gate = build_gate(store, 200);

        assert!(gate.check_rate_limit(NOW).is_ok());
        assert_eq!(gate.record.borrow().count, 0);

        let accepted = block_on(gate.submit("a@b.com", "")).unwrap();
        assert_eq!(gate.transport.calls(), 1);
        assert_eq!(accepted.record, SubmissionRecord { last_submission: Some(NOW), count: 1 });
    }

    #[test]
    fn server_error_leaves_the_stored_record_alone() {
        let before = SubmissionRecord { last_submission: Some(NOW - 10_000), count: 1 };
        let gate = build_gate(MemoryStore::with_record(before), 500);

        let err = block_on(gate.submit("a@b.com", "")).unwrap_err();

        assert!(matches!(err, SubmitError::TransportFailure(_)));
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
        assert_eq!(gate.transport.calls(), 1);
        assert_eq!(gate.store.writes.get(), 0);
        assert_eq!(gate.store.stored(), Some(before));
        assert_eq!(gate.phase.get(), Phase::Idle);
    }

    #[test]
    fn three_accepted_then_blocked_until_the_window_passes() {
        let gate = build_gate(MemoryStore::default(), 200);
        for n in 1..=3 {
            let accepted = block_on(gate.submit("a@b.com", "")).unwrap();
            assert_eq!(accepted.record.count, n);
        }
        assert!(matches!(block_on(gate.submit("a@b.com", "")), Err(SubmitError::RateLimited { .. })));

        gate.clock.0.set(NOW + 60_000);
        assert!(block_on(gate.submit("a@b.com", "")).is_ok());
        assert_eq!(gate.record.borrow().count, 1);
        assert_eq!(gate.transport.calls(), 4);
    }

    #[test]
    fn corrupt_storage_starts_empty() {
        let gate = build_gate(MemoryStore::with_raw("{not json"), 200);
        assert_eq!(*gate.record.borrow(), SubmissionRecord::default());
        assert!(block_on(gate.submit("a@b.com", "")).is_ok());
    }

    #[test]
    fn refuses_a_second_attempt_while_sending() {
        let gate = build_gate(MemoryStore::default(), 200);
        gate.phase.set(Phase::Sending);
        assert!(matches!(block_on(gate.submit("a@b.com", "")), Err(SubmitError::InFlight)));
        assert_eq!(gate.transport.calls(), 0);
    }
}

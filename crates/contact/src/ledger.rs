use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use rakshan_shared::{Error, Result};

use crate::SubmissionPayload;

const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
struct Entry {
    in_flight: bool,
    delivered_email: Option<SubmissionPayload>,
    touched_at: Instant,
}

/// Tracks submissions across requests: which one is in flight and which ones
/// already reached the email service.
#[derive(Clone, Debug)]
pub struct SubmissionLedger {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
    ttl: Duration,
}

impl Default for SubmissionLedger {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl SubmissionLedger {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Default::default(),
            ttl,
        }
    }

    /// Reserves `id` for one delivery attempt. Fails with [`Error::Pending`]
    /// while another attempt holds the reservation.
    pub fn begin(&self, id: &str) -> Result<Reservation> {
        let now = Instant::now();
        let mut entries = self.lock();

        entries.retain(|_, entry| entry.in_flight || now.duration_since(entry.touched_at) < self.ttl);

        let entry = entries.entry(id.to_owned()).or_insert(Entry {
            in_flight: false,
            delivered_email: None,
            touched_at: now,
        });

        if entry.in_flight {
            return Err(Error::Pending);
        }

        entry.in_flight = true;
        entry.touched_at = now;

        Ok(Reservation {
            ledger: self.clone(),
            id: id.to_owned(),
            delivered_email: entry.delivered_email.clone(),
            completed: false,
        })
    }

    pub fn is_in_flight(&self, id: &str) -> bool {
        self.lock().get(id).is_some_and(|entry| entry.in_flight)
    }

    pub fn email_delivered(&self, id: &str) -> bool {
        self.lock()
            .get(id)
            .is_some_and(|entry| entry.delivered_email.is_some())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Exclusive hold on one submission. Dropping it releases the in-flight flag.
#[derive(Debug)]
pub struct Reservation {
    ledger: SubmissionLedger,
    id: String,
    delivered_email: Option<SubmissionPayload>,
    completed: bool,
}

impl Reservation {
    /// True when an earlier attempt already emailed exactly this payload.
    pub fn email_delivered(&self, payload: &SubmissionPayload) -> bool {
        self.delivered_email.as_ref() == Some(payload)
    }

    pub fn mark_email_delivered(&mut self, payload: &SubmissionPayload) {
        self.delivered_email = Some(payload.clone());

        if let Some(entry) = self.ledger.lock().get_mut(&self.id) {
            entry.delivered_email = Some(payload.clone());
            entry.touched_at = Instant::now();
        }
    }

    /// Both deliveries went through, forget the submission.
    pub fn complete(mut self) {
        self.ledger.lock().remove(&self.id);
        self.completed = true;
    }
}

impl Drop for Reservation {
    fn drop(&mut self) {
        if self.completed {
            return;
        }

        if let Some(entry) = self.ledger.lock().get_mut(&self.id) {
            entry.in_flight = false;
            entry.touched_at = Instant::now();
        }
    }
}

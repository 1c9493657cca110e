use std::{str::FromStr, sync::Arc};

use anyhow::Context;
use rakshan_shared::{Error, Result};
use validator::Validate;

use crate::{
    ContactForm, EmailDispatcher, Recipient, Reservation, Service, SmsNotifier, SubmissionLedger,
    SubmissionPayload, SubmissionStatus, SubmitFormInput,
};

/// Runs the contact form submission: email first, then SMS.
#[derive(Clone)]
pub struct Command {
    email: Arc<dyn EmailDispatcher>,
    sms: Arc<dyn SmsNotifier>,
    recipient: Recipient,
    ledger: SubmissionLedger,
}

impl Command {
    pub fn new(
        email: impl EmailDispatcher + 'static,
        sms: impl SmsNotifier + 'static,
        recipient: Recipient,
    ) -> Self {
        Self {
            email: Arc::new(email),
            sms: Arc::new(sms),
            recipient,
            ledger: SubmissionLedger::default(),
        }
    }

    pub fn ledger(&self) -> &SubmissionLedger {
        &self.ledger
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// Validates `input` and delivers it.
    ///
    /// Returns an error only when the submission is refused before any network
    /// call: invalid input or an attempt already in flight. Delivery failures are
    /// logged and reported through `form.status`, with the fields left intact for
    /// a retry. A retry of the same submission skips the email step when that
    /// exact payload already went through.
    #[tracing::instrument(skip_all, fields(submission_id = %form.submission_id))]
    pub async fn submit_form(&self, form: &mut ContactForm, input: SubmitFormInput) -> Result<()> {
        if form.status.is_pending() {
            return Err(Error::Pending);
        }

        input.validate()?;

        let mut reservation = self.ledger.begin(&form.submission_id)?;
        form.status = SubmissionStatus::Pending;

        let service = Service::from_str(&input.service).ok();
        let payload = SubmissionPayload::new(&input, service, &self.recipient);

        match self.deliver(&payload, &mut reservation).await {
            Ok(_) => {
                reservation.complete();
                form.reset();
                form.status = SubmissionStatus::Succeeded;

                tracing::info!(service = %payload.service, "Contact form delivered");
            }
            Err(err) => {
                form.status = SubmissionStatus::Failed;

                tracing::error!(error = ?err, "Failed to deliver contact form");
            }
        }

        Ok(())
    }

    async fn deliver(
        &self,
        payload: &SubmissionPayload,
        reservation: &mut Reservation,
    ) -> anyhow::Result<()> {
        if reservation.email_delivered(payload) {
            tracing::info!("Email already delivered for this submission, skipping");
        } else {
            self.email
                .send(payload)
                .await
                .context("email dispatch failed")?;
            reservation.mark_email_delivered(payload);
        }

        self.sms
            .notify(payload)
            .await
            .context("sms notification failed")?;

        Ok(())
    }
}

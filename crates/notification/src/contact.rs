use std::time::Duration;

use rakshan_contact::{Command, Recipient};

use crate::{EmailJsClient, EmailJsConfig, SmsConfig, SmsEndpointClient};

/// Wires the EmailJS and SMS clients into a contact command.
pub fn command(
    emailjs: &EmailJsConfig,
    sms: &SmsConfig,
    recipient: Recipient,
    timeout: Duration,
) -> anyhow::Result<Command> {
    Ok(Command::new(
        EmailJsClient::new(emailjs, timeout)?,
        SmsEndpointClient::new(sms, timeout)?,
        recipient,
    ))
}

pub mod contact;
mod emailjs;
mod sms;

pub use emailjs::*;
pub use sms::*;

use std::time::Duration;

pub(crate) fn http_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("rakshan/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

//! Transactional mail via the Mailgun HTTP API

use shared::models::{Payment, Reservation};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const MAILGUN_API_BASE: &str = "https://api.mailgun.net/v3";

/// Mailgun client bound to one sending domain
#[derive(Clone)]
pub struct Mailer {
    client: reqwest::Client,
    api_key: String,
    domain: String,
    from: String,
}

impl Mailer {
    pub fn new(api_key: impl Into<String>, domain: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            domain: domain.into(),
            from: from.into(),
        }
    }

    async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), BoxError> {
        let resp = self
            .client
            .post(format!("{MAILGUN_API_BASE}/{}/messages", self.domain))
            .basic_auth("api", Some(&self.api_key))
            .form(&[
                ("from", self.from.as_str()),
                ("to", to),
                ("subject", subject),
                ("text", text),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("Mailgun returned {status}: {body}").into());
        }
        Ok(())
    }

    pub async fn send_payment_confirmation(&self, payment: &Payment) -> Result<(), BoxError> {
        let body_text = format!(
            "Thank you for your order.\n\n\
             Transaction: {}\n\
             Amount: ${:.2}\n\
             Items: {}\n\n\
             We will let you know once it is delivered.",
            payment.transaction_id,
            payment.price,
            payment.menu_item_ids.len()
        );
        self.send(&payment.email, "Bistro order confirmation", &body_text)
            .await?;
        tracing::info!(to = %payment.email, "Payment confirmation sent");
        Ok(())
    }

    pub async fn send_reservation_received(&self, booking: &Reservation) -> Result<(), BoxError> {
        let body_text = format!(
            "We received your table request for {} guest(s) on {} at {}.\n\
             Status: pending. We will confirm it shortly.",
            booking.guests, booking.date, booking.time
        );
        self.send(&booking.email, "Bistro reservation received", &body_text)
            .await?;
        tracing::info!(to = %booking.email, "Reservation notice sent");
        Ok(())
    }
}

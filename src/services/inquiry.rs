//! Corporate inquiry form: validation and email rendering.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Deserialize;

use crate::services::mailer::{Mailer, MailerError};

const INQUIRY_TEMPLATE: &str = include_str!("../../templates/corporate_inquiry.html");
const NOT_PROVIDED: &str = "Not provided";

/// `{{KEY}}` slots in the inquiry template.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Z_]+)\}\}").expect("placeholder pattern is valid"));

#[derive(Debug, thiserror::Error)]
pub enum InquiryError {
    #[error("Name and email are required")]
    MissingRequired,
    #[error("Email address is invalid")]
    InvalidEmail,
    #[error("Email service is not configured")]
    NotConfigured,
    #[error(transparent)]
    Delivery(#[from] MailerError),
}

/// Form body as posted by the site. Every field is optional on the wire;
/// `name` and `email` are enforced by [`InquiryRequest::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRequest {
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub franchise_locations: Option<String>,
    pub hear_about_us: Option<String>,
    pub start_timeline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub company_name: Option<String>,
    pub phone_number: Option<String>,
    pub franchise_locations: Option<String>,
    pub hear_about_us: Option<String>,
    pub start_timeline: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') || normalized.contains(char::is_whitespace) {
        return None;
    }
    Some(normalized)
}

impl InquiryRequest {
    /// # Errors
    ///
    /// `MissingRequired` if name or email is absent or blank,
    /// `InvalidEmail` if the address has no usable `local@domain` shape.
    pub fn validate(self) -> Result<Inquiry, InquiryError> {
        let (Some(name), Some(raw_email)) = (non_blank(self.name), non_blank(self.email)) else {
            return Err(InquiryError::MissingRequired);
        };
        let email = normalize_email(&raw_email).ok_or(InquiryError::InvalidEmail)?;

        Ok(Inquiry {
            name,
            email,
            company_name: non_blank(self.company_name),
            phone_number: non_blank(self.phone_number),
            franchise_locations: non_blank(self.franchise_locations),
            hear_about_us: non_blank(self.hear_about_us),
            start_timeline: non_blank(self.start_timeline),
        })
    }
}

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn field(value: Option<&String>) -> String {
    value.map_or_else(|| NOT_PROVIDED.to_owned(), |v| escape_html(v))
}

impl Inquiry {
    #[must_use]
    pub fn subject(&self) -> String {
        let who = self.company_name.as_deref().unwrap_or(&self.name);
        format!("New Corporate Inquiry: {who}")
    }

    /// Fill the template in a single pass so submitted text that looks
    /// like a placeholder is rendered as-is.
    #[must_use]
    pub fn render_html(&self) -> String {
        PLACEHOLDER
            .replace_all(INQUIRY_TEMPLATE, |caps: &Captures| match &caps[1] {
                "NAME" => escape_html(&self.name),
                "COMPANY_NAME" => field(self.company_name.as_ref()),
                "EMAIL" => escape_html(&self.email),
                "PHONE_NUMBER" => field(self.phone_number.as_ref()),
                "FRANCHISE_LOCATIONS" => field(self.franchise_locations.as_ref()),
                "HEAR_ABOUT_US" => field(self.hear_about_us.as_ref()),
                "START_TIMELINE" => field(self.start_timeline.as_ref()),
                _ => caps[0].to_owned(),
            })
            .into_owned()
    }
}

/// Validate and forward an inquiry. Returns the provider message id.
pub async fn submit_inquiry(mailer: Option<&dyn Mailer>, request: InquiryRequest) -> Result<String, InquiryError> {
    let inquiry = request.validate()?;
    let mailer = mailer.ok_or(InquiryError::NotConfigured)?;
    let id = mailer.send_html(&inquiry.subject(), &inquiry.render_html()).await?;
    tracing::info!(%id, company = inquiry.company_name.as_deref().unwrap_or("-"), "corporate inquiry forwarded");
    Ok(id)
}

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod tests;

use super::*;
use std::sync::Mutex;

struct RecordingMailer {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send_html(&self, subject: &str, html: &str) -> Result<String, MailerError> {
        self.sent
            .lock()
            .expect("mock mutex should lock")
            .push((subject.to_owned(), html.to_owned()));
        Ok("email_123".into())
    }
}

fn request(name: &str, email: &str) -> InquiryRequest {
    InquiryRequest { name: Some(name.into()), email: Some(email.into()), ..InquiryRequest::default() }
}

#[test]
fn deserializes_camel_case_body() {
    let body = r#"{"name":"Ada","companyName":"Harbor","email":"ada@harbor.test","phoneNumber":"555","franchiseLocations":"12","hearAboutUs":"Referral","startTimeline":"Q3"}"#;
    let req: InquiryRequest = serde_json::from_str(body).unwrap();
    assert_eq!(req.company_name.as_deref(), Some("Harbor"));
    assert_eq!(req.franchise_locations.as_deref(), Some("12"));
    assert_eq!(req.start_timeline.as_deref(), Some("Q3"));
}

#[test]
fn blank_name_or_email_is_missing() {
    assert!(matches!(request("   ", "a@b.test").validate(), Err(InquiryError::MissingRequired)));
    assert!(matches!(request("Ada", "").validate(), Err(InquiryError::MissingRequired)));
    assert!(matches!(InquiryRequest::default().validate(), Err(InquiryError::MissingRequired)));
}

#[test]
fn malformed_email_is_invalid() {
    for bad in ["ada", "@harbor.test", "ada@", "a@b@c", "a da@b.test"] {
        assert!(matches!(request("Ada", bad).validate(), Err(InquiryError::InvalidEmail)), "{bad}");
    }
}

#[test]
fn validate_trims_and_normalizes() {
    let mut req = request(" Ada ", " ADA@Harbor.Test ");
    req.company_name = Some("  ".into());
    let inquiry = req.validate().unwrap();
    assert_eq!(inquiry.name, "Ada");
    assert_eq!(inquiry.email, "ada@harbor.test");
    assert_eq!(inquiry.company_name, None);
}

#[test]
fn subject_prefers_company_name() {
    let mut inquiry = request("Ada", "ada@harbor.test").validate().unwrap();
    assert_eq!(inquiry.subject(), "New Corporate Inquiry: Ada");
    inquiry.company_name = Some("Harbor Coffee".into());
    assert_eq!(inquiry.subject(), "New Corporate Inquiry: Harbor Coffee");
}

#[test]
fn render_escapes_and_fills_placeholders() {
    let mut req = request("<script>alert(1)</script>", "ada@harbor.test");
    req.hear_about_us = Some("Tom & Jerry's".into());
    let html = req.validate().unwrap().render_html();
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("Tom &amp; Jerry&#39;s"));
    assert!(html.contains(NOT_PROVIDED));
    assert!(!html.contains("{{"));
}

#[test]
fn placeholder_text_in_fields_is_rendered_verbatim() {
    let mut req = request("{{EMAIL}}", "ada@harbor.test");
    req.company_name = Some("Acme {{START_TIMELINE}}".into());
    req.start_timeline = Some("Q3".into());
    let html = req.validate().unwrap().render_html();

    assert!(html.contains("<td><strong>Name</strong></td><td>{{EMAIL}}</td>"));
    assert!(html.contains("<td><strong>Company</strong></td><td>Acme {{START_TIMELINE}}</td>"));
    assert!(html.contains("<td><strong>Email</strong></td><td>ada@harbor.test</td>"));
    assert!(html.contains("<td><strong>Start timeline</strong></td><td>Q3</td>"));
    assert_eq!(html.matches("ada@harbor.test").count(), 1);
}

#[tokio::test]
async fn submit_without_mailer_is_not_configured() {
    let err = submit_inquiry(None, request("Ada", "ada@harbor.test")).await;
    assert!(matches!(err, Err(InquiryError::NotConfigured)));
}

#[tokio::test]
async fn submit_validates_before_checking_config() {
    let err = submit_inquiry(None, request("", "ada@harbor.test")).await;
    assert!(matches!(err, Err(InquiryError::MissingRequired)));
}

#[tokio::test]
async fn submit_sends_rendered_email() {
    let mailer = RecordingMailer { sent: Mutex::new(Vec::new()) };
    let id = submit_inquiry(Some(&mailer), request("Ada", "ada@harbor.test"))
        .await
        .unwrap();
    assert_eq!(id, "email_123");

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "New Corporate Inquiry: Ada");
    assert!(sent[0].1.contains("ada@harbor.test"));
}

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::error::EmailError;

// Dotted domain, each label made of letters, digits and inner hyphens.
static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
        .expect("domain pattern compiles")
});

pub fn validate_email(raw: &str) -> Result<String, EmailError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(EmailError::Whitespace);
    }
    let (local, domain) = email.split_once('@').ok_or(EmailError::MissingAt)?;
    if domain.contains('@') {
        return Err(EmailError::MultipleAt);
    }
    if local.is_empty() {
        return Err(EmailError::EmptyLocalPart);
    }
    if !DOMAIN_RE.is_match(domain) {
        return Err(EmailError::InvalidDomain);
    }
    Ok(email.to_string())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum LeadStep {
    #[default]
    CollectingEmail,
    Confirmed,
}

/// Where a confirmed lead goes. The site ships without a backend, so the only
/// implementation just records it in the console.
pub trait LeadSink {
    fn submit_lead(&self, email: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulatedLeadSink;

impl LeadSink for SimulatedLeadSink {
    fn submit_lead(&self, email: &str) {
        info!("Strategy session requested for {}", email);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LeadFormState {
    step: LeadStep,
    email: String,
    #[serde(skip)]
    draft: String,
}

impl LeadFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> LeadStep {
        self.step
    }

    /// Last confirmed address. Kept after [`reset`](Self::reset) until a new
    /// one is confirmed.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Refused input leaves the form collecting, the caller shows the error.
    pub fn submit(&mut self, email: &str) -> Result<(), EmailError> {
        let email = validate_email(email)?;
        self.email = email;
        self.step = LeadStep::Confirmed;
        Ok(())
    }

    pub fn submit_draft(&mut self, sink: &impl LeadSink) -> Result<(), EmailError> {
        let draft = self.draft.clone();
        self.submit(&draft)?;
        sink.submit_lead(&self.email);
        Ok(())
    }

    /// "Use a different email".
    pub fn reset(&mut self) {
        self.step = LeadStep::CollectingEmail;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink(RefCell<Vec<String>>);

    impl LeadSink for RecordingSink {
        fn submit_lead(&self, email: &str) {
            self.0.borrow_mut().push(email.to_string());
        }
    }

    #[test]
    fn empty_email_stays_collecting() {
        let mut form = LeadFormState::new();
        assert_eq!(form.submit(""), Err(EmailError::Empty));
        assert_eq!(form.step(), LeadStep::CollectingEmail);
    }

    #[test]
    fn valid_email_confirms_and_reset_goes_back() {
        let mut form = LeadFormState::new();
        form.submit("a@b.com").unwrap();
        assert_eq!(form.step(), LeadStep::Confirmed);
        assert_eq!(form.email(), "a@b.com");

        form.reset();
        assert_eq!(form.step(), LeadStep::CollectingEmail);
        assert_eq!(form.email(), "a@b.com");
    }

    #[test]
    fn failed_resubmit_keeps_previous_email() {
        let mut form = LeadFormState::new();
        form.submit("first@company.com").unwrap();
        form.reset();
        assert!(form.submit("nope").is_err());
        assert_eq!(form.step(), LeadStep::CollectingEmail);
        assert_eq!(form.email(), "first@company.com");
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert_eq!(validate_email("   "), Err(EmailError::Empty));
        assert_eq!(validate_email("name company.com"), Err(EmailError::Whitespace));
        assert_eq!(validate_email("name.company.com"), Err(EmailError::MissingAt));
        assert_eq!(validate_email("a@b@c.com"), Err(EmailError::MultipleAt));
        assert_eq!(validate_email("@company.com"), Err(EmailError::EmptyLocalPart));
        assert_eq!(validate_email("name@"), Err(EmailError::InvalidDomain));
        assert_eq!(validate_email("name@localhost"), Err(EmailError::InvalidDomain));
        assert_eq!(validate_email("name@-bad.com"), Err(EmailError::InvalidDomain));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_email("  name@company.co.in "), Ok("name@company.co.in".to_string()));
    }

    #[test]
    fn draft_submission_hands_lead_to_sink() {
        let sink = RecordingSink::default();
        let mut form = LeadFormState::new();
        form.set_draft("ops@adani.com");
        form.submit_draft(&sink).unwrap();
        assert_eq!(*sink.0.borrow(), vec!["ops@adani.com".to_string()]);

        form.reset();
        form.set_draft("broken");
        assert_eq!(form.submit_draft(&sink), Err(EmailError::MissingAt));
        assert_eq!(sink.0.borrow().len(), 1);
    }
}

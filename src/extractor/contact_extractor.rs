// src/extractor/contact_extractor.rs
use crate::models::ContactRecord;
use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, info};

pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
}

impl ContactExtractor {
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"(?i)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b").unwrap(),
            phone_regex: Regex::new(r"\b[987][0-9]{9}\b").unwrap(),
        }
    }

    /// Extracts all email and phone matches from `text` and pairs them by
    /// position: the i-th email goes with the i-th phone, or the empty string
    /// when the phone list is shorter. The pairing is positional, not
    /// semantic; an email and phone in one record need not come from the same
    /// logical record in the source. Phones beyond the email count are
    /// discarded.
    pub fn extract(&self, text: &str) -> Vec<ContactRecord> {
        let emails: Vec<&str> = self
            .email_regex
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();
        let phones: Vec<&str> = self
            .phone_regex
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();

        if phones.len() > emails.len() {
            debug!(
                "Discarding {} phone matches beyond the email count",
                phones.len() - emails.len()
            );
        }

        let mut seen_emails = HashSet::new();
        let mut seen_phones = HashSet::new();
        let mut records = Vec::new();

        for (index, email) in emails.iter().enumerate() {
            let phone = phones.get(index).copied().unwrap_or("");

            // A record survives if it contributes an unseen email or an
            // unseen non-empty phone; an all-seen (or email-seen, phone-empty)
            // record is a duplicate. Values are compared verbatim, without
            // case or whitespace normalization.
            let new_email = seen_emails.insert(*email);
            let new_phone = !phone.is_empty() && seen_phones.insert(phone);

            if new_email || new_phone {
                records.push(ContactRecord {
                    email: (*email).to_string(),
                    phone: phone.to_string(),
                });
            }
        }

        info!(
            "Extracted {} contact records from {} email and {} phone matches",
            records.len(),
            emails.len(),
            phones.len()
        );
        records
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

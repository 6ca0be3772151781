pub mod escape;
pub mod format;

use tracing::debug;

use crate::common::{
    metadata::PayloadKind,
    records::{ContactRecord, EmailRecord, Records, SmsRecord, SocialRecord, WifiRecord},
};

/// Builds the payload for `kind` from the matching record, ignoring all others.
///
/// Returns an empty string when the record for `kind` is blank. Callers must treat a blank
/// result as "no payload" and never hand it to a renderer.
pub fn build(kind: PayloadKind, records: &Records) -> String {
    if is_blank(kind, records) {
        debug!(?kind, "blank record, no payload");
        return String::new();
    }

    let payload = match kind {
        PayloadKind::Url => format::url(&records.url),
        PayloadKind::Wifi => format::wifi(&records.wifi),
        PayloadKind::ContactCard => format::contact_card(&records.contact),
        PayloadKind::Email => format::email(&records.email),
        PayloadKind::Sms => format::sms(&records.sms),
        PayloadKind::SocialProfile => format::social_profile(&records.social),
    };
    debug!(?kind, len = payload.len(), "built payload");
    payload
}

fn is_blank(kind: PayloadKind, records: &Records) -> bool {
    match kind {
        PayloadKind::Url => records.url.trim().is_empty(),
        PayloadKind::Wifi => records.wifi.is_blank(),
        PayloadKind::ContactCard => records.contact.is_blank(),
        PayloadKind::Email => records.email.is_blank(),
        PayloadKind::Sms => records.sms.is_blank(),
        PayloadKind::SocialProfile => records.social.is_blank(),
    }
}

pub struct PayloadBuilder {
    kind: PayloadKind,
    records: Records,
}

impl PayloadBuilder {
    pub fn new(kind: PayloadKind) -> Self {
        Self { kind, records: Records::default() }
    }

    pub fn with_records(kind: PayloadKind, records: Records) -> Self {
        Self { kind, records }
    }

    pub fn kind(&mut self, kind: PayloadKind) -> &mut Self {
        self.kind = kind;
        self
    }

    pub fn url(&mut self, url: &str) -> &mut Self {
        self.records.url = url.to_string();
        self
    }

    pub fn wifi(&mut self, wifi: WifiRecord) -> &mut Self {
        self.records.wifi = wifi;
        self
    }

    pub fn contact(&mut self, contact: ContactRecord) -> &mut Self {
        self.records.contact = contact;
        self
    }

    pub fn email(&mut self, email: EmailRecord) -> &mut Self {
        self.records.email = email;
        self
    }

    pub fn sms(&mut self, sms: SmsRecord) -> &mut Self {
        self.records.sms = sms;
        self
    }

    pub fn social(&mut self, social: SocialRecord) -> &mut Self {
        self.records.social = social;
        self
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn metadata(&self) -> String {
        format!("{{ Kind: {:?}, Blank: {} }}", self.kind, self.is_blank())
    }

    pub fn is_blank(&self) -> bool {
        is_blank(self.kind, &self.records)
    }

    pub fn build(&self) -> String {
        debug!("Building payload {}", self.metadata());
        build(self.kind, &self.records)
    }
}

#[cfg(test)]
mod payload_builder_tests {
    use test_case::test_case;

    use super::{build, PayloadBuilder};
    use crate::common::{
        metadata::PayloadKind,
        records::{
            ContactRecord, EmailRecord, Records, Security, SmsRecord, SocialPlatform, SocialRecord,
            WifiRecord,
        },
    };

    fn filled_records() -> Records {
        Records {
            url: "https://a.com".to_string(),
            wifi: WifiRecord::new("Home", "p@ss", Security::Wpa),
            contact: ContactRecord {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                ..Default::default()
            },
            email: EmailRecord::new("a@b.com", "Hi there", "Hello"),
            sms: SmsRecord::new("123", "yo"),
            social: SocialRecord::new(SocialPlatform::Linkedin, "ada"),
        }
    }

    #[test_case(PayloadKind::Url, "https://a.com")]
    #[test_case(PayloadKind::Wifi, "WIFI:T:WPA;S:Home;P:p@ss;;")]
    #[test_case(PayloadKind::ContactCard, "BEGIN:VCARD\nVERSION:3.0\nFN:Ada Lovelace\nORG:\nTEL:\nEMAIL:\nADR:\nEND:VCARD")]
    #[test_case(PayloadKind::Email, "mailto:a@b.com?subject=Hi%20there&body=Hello")]
    #[test_case(PayloadKind::Sms, "sms:123?body=yo")]
    #[test_case(PayloadKind::SocialProfile, "https://linkedin.com/in/ada")]
    fn test_build_selects_encoder(kind: PayloadKind, exp: &str) {
        assert_eq!(build(kind, &filled_records()), exp);
    }

    #[test_case(PayloadKind::Url)]
    #[test_case(PayloadKind::Wifi)]
    #[test_case(PayloadKind::ContactCard)]
    #[test_case(PayloadKind::Email)]
    #[test_case(PayloadKind::Sms)]
    #[test_case(PayloadKind::SocialProfile)]
    fn test_build_blank_record(kind: PayloadKind) {
        assert_eq!(build(kind, &Records::default()), "");
    }

    #[test]
    fn test_build_ignores_other_records() {
        let mut records = Records::default();
        records.wifi = WifiRecord::new("Home", "p@ss", Security::Wpa);
        assert_eq!(build(PayloadKind::Url, &records), "");

        records.url = "   ".to_string();
        assert_eq!(build(PayloadKind::Url, &records), "");
    }

    #[test]
    fn test_builder_chain() {
        let mut builder = PayloadBuilder::new(PayloadKind::Url);
        builder.url("https://a.com").sms(SmsRecord::new("123", "hi"));
        assert_eq!(builder.build(), "https://a.com");

        builder.kind(PayloadKind::Sms);
        assert_eq!(builder.build(), "sms:123?body=hi");
        assert_eq!(builder.records().url, "https://a.com");
    }

    #[test]
    fn test_metadata() {
        let mut builder = PayloadBuilder::new(PayloadKind::Email);
        assert_eq!(builder.metadata(), "{ Kind: Email, Blank: true }");
        builder.email(EmailRecord::new("a@b.com", "", ""));
        assert_eq!(builder.metadata(), "{ Kind: Email, Blank: false }");
    }

    #[test]
    fn test_with_records() {
        let builder = PayloadBuilder::with_records(PayloadKind::Wifi, filled_records());
        assert!(!builder.is_blank());
        assert_eq!(builder.build(), "WIFI:T:WPA;S:Home;P:p@ss;;");
    }
}

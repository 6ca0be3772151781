use crate::common::records::{ContactRecord, EmailRecord, SmsRecord, SocialRecord, WifiRecord};

use super::escape::{uri_component, vcard_text, wifi_field};

// Format encoders. Each one is total: missing fields become empty substitutions.
//------------------------------------------------------------------------------

pub fn url(text: &str) -> String {
    text.to_string()
}

pub fn wifi(rec: &WifiRecord) -> String {
    let hidden = if rec.hidden { "H:true;" } else { "" };
    format!(
        "WIFI:T:{};S:{};P:{};{hidden};",
        wifi_field(rec.security.token()),
        wifi_field(&rec.ssid),
        wifi_field(&rec.password),
    )
}

pub fn contact_card(rec: &ContactRecord) -> String {
    [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{} {}", vcard_text(&rec.first_name), vcard_text(&rec.last_name)),
        format!("ORG:{}", vcard_text(&rec.company)),
        format!("TEL:{}", vcard_text(&rec.phone)),
        format!("EMAIL:{}", vcard_text(&rec.email)),
        format!("ADR:{}", vcard_text(&rec.address)),
        "END:VCARD".to_string(),
    ]
    .join("\n")
}

pub fn email(rec: &EmailRecord) -> String {
    format!("mailto:{}?subject={}&body={}", rec.to, uri_component(&rec.subject), uri_component(&rec.body))
}

pub fn sms(rec: &SmsRecord) -> String {
    format!("sms:{}?body={}", rec.phone, uri_component(&rec.message))
}

pub fn social_profile(rec: &SocialRecord) -> String {
    match rec.platform {
        Some(p) => format!("https://{}/{}{}", p.domain(), p.handle_prefix(), rec.username),
        None => String::new(),
    }
}

#[cfg(test)]
mod format_tests {
    use test_case::test_case;

    use super::*;
    use crate::common::records::{Security, SocialPlatform};

    #[test]
    fn test_url_identity() {
        assert_eq!(url("https://a.com"), "https://a.com");
        assert_eq!(url("example.com/no scheme"), "example.com/no scheme");
    }

    #[test_case(WifiRecord::new("Home", "p@ss", Security::Wpa), "WIFI:T:WPA;S:Home;P:p@ss;;")]
    #[test_case(WifiRecord::new("Cafe", "", Security::None), "WIFI:T:nopass;S:Cafe;P:;;")]
    #[test_case(WifiRecord::new("Lab", "x", Security::Other("SAE".to_string())), "WIFI:T:SAE;S:Lab;P:x;;")]
    #[test_case(WifiRecord::new("my;net", "a:b\\c", Security::Wep), "WIFI:T:WEP;S:my\\;net;P:a\\:b\\\\c;;")]
    fn test_wifi(rec: WifiRecord, exp: &str) {
        assert_eq!(wifi(&rec), exp);
    }

    #[test]
    fn test_wifi_hidden() {
        let mut rec = WifiRecord::new("Home", "p@ss", Security::Wpa);
        rec.hidden = true;
        assert_eq!(wifi(&rec), "WIFI:T:WPA;S:Home;P:p@ss;H:true;;");
    }

    #[test]
    fn test_contact_card() {
        let rec = ContactRecord {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(
            contact_card(&rec),
            "BEGIN:VCARD\nVERSION:3.0\nFN:Ada Lovelace\nORG:\nTEL:\nEMAIL:\nADR:\nEND:VCARD"
        );
    }

    #[test]
    fn test_contact_card_full() {
        let rec = ContactRecord {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            company: "US Navy".to_string(),
            phone: "+1 555 0100".to_string(),
            email: "grace@navy.mil".to_string(),
            address: "Arlington, VA".to_string(),
        };
        let card = contact_card(&rec);
        let lines: Vec<&str> = card.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[3], "ORG:US Navy");
        assert_eq!(lines[4], "TEL:+1 555 0100");
        assert_eq!(lines[6], "ADR:Arlington\\, VA");
    }

    #[test_case(EmailRecord::new("a@b.com", "Hi there", "Hello"), "mailto:a@b.com?subject=Hi%20there&body=Hello")]
    #[test_case(EmailRecord::new("a@b.com", "", ""), "mailto:a@b.com?subject=&body=")]
    #[test_case(EmailRecord::new("x+y@b.com", "Q&A", "1+1=2"), "mailto:x+y@b.com?subject=Q%26A&body=1%2B1%3D2")]
    fn test_email(rec: EmailRecord, exp: &str) {
        assert_eq!(email(&rec), exp);
    }

    #[test_case(SmsRecord::new("+15550100", "On my way!"), "sms:+15550100?body=On%20my%20way!")]
    #[test_case(SmsRecord::new("123", ""), "sms:123?body=")]
    fn test_sms(rec: SmsRecord, exp: &str) {
        assert_eq!(sms(&rec), exp);
    }

    #[test_case(SocialPlatform::Instagram, "https://instagram.com/ada")]
    #[test_case(SocialPlatform::Twitter, "https://twitter.com/ada")]
    #[test_case(SocialPlatform::Facebook, "https://facebook.com/ada")]
    #[test_case(SocialPlatform::Linkedin, "https://linkedin.com/in/ada")]
    #[test_case(SocialPlatform::Tiktok, "https://tiktok.com/@ada")]
    #[test_case(SocialPlatform::Youtube, "https://youtube.com/@ada")]
    fn test_social_profile(platform: SocialPlatform, exp: &str) {
        assert_eq!(social_profile(&SocialRecord::new(platform, "ada")), exp);
    }

    #[test]
    fn test_social_profile_unknown_platform() {
        let rec = SocialRecord { platform: None, username: "ada".to_string() };
        assert_eq!(social_profile(&rec), "");
    }
}

use std::{
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize};

// Records are plain form state. Blank checks trim whitespace, nothing else is validated.

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

// Wi-Fi
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Clone, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Security {
    #[default]
    Wpa,
    Wep,
    None,
    // Unknown tokens are kept verbatim
    Other(String),
}

impl Security {
    pub fn token(&self) -> &str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::None => "nopass",
            Self::Other(t) => t,
        }
    }
}

impl From<&str> for Security {
    fn from(token: &str) -> Self {
        match token {
            "WPA" => Self::Wpa,
            "WEP" => Self::Wep,
            "nopass" => Self::None,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Security {
    fn from(token: String) -> Self {
        Self::from(token.as_str())
    }
}

impl From<Security> for String {
    fn from(security: Security) -> Self {
        security.token().to_string()
    }
}

impl Display for Security {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(self.token())
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct WifiRecord {
    pub ssid: String,
    pub password: String,
    pub security: Security,
    pub hidden: bool,
}

impl WifiRecord {
    pub fn new(ssid: &str, password: &str, security: Security) -> Self {
        Self { ssid: ssid.to_string(), password: password.to_string(), security, hidden: false }
    }

    pub fn is_blank(&self) -> bool {
        blank(&self.ssid) && blank(&self.password)
    }
}

// Contact card
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[derive(Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactRecord {
    pub fn is_blank(&self) -> bool {
        [&self.first_name, &self.last_name, &self.company, &self.phone, &self.email, &self.address]
            .iter()
            .all(|f| blank(f))
    }
}

// Email
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct EmailRecord {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailRecord {
    pub fn new(to: &str, subject: &str, body: &str) -> Self {
        Self { to: to.to_string(), subject: subject.to_string(), body: body.to_string() }
    }

    pub fn is_blank(&self) -> bool {
        blank(&self.to) && blank(&self.subject) && blank(&self.body)
    }
}

// SMS
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct SmsRecord {
    pub phone: String,
    pub message: String,
}

impl SmsRecord {
    pub fn new(phone: &str, message: &str) -> Self {
        Self { phone: phone.to_string(), message: message.to_string() }
    }

    pub fn is_blank(&self) -> bool {
        blank(&self.phone) && blank(&self.message)
    }
}

// Social profile
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Twitter,
    Facebook,
    Linkedin,
    Tiktok,
    Youtube,
}

impl SocialPlatform {
    pub const ALL: [Self; 6] = [
        Self::Instagram,
        Self::Twitter,
        Self::Facebook,
        Self::Linkedin,
        Self::Tiktok,
        Self::Youtube,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Linkedin => "linkedin",
            Self::Tiktok => "tiktok",
            Self::Youtube => "youtube",
        }
    }

    pub fn domain(self) -> &'static str {
        match self {
            Self::Instagram => "instagram.com",
            Self::Twitter => "twitter.com",
            Self::Facebook => "facebook.com",
            Self::Linkedin => "linkedin.com",
            Self::Tiktok => "tiktok.com",
            Self::Youtube => "youtube.com",
        }
    }

    /// Path segment placed before the username.
    pub fn handle_prefix(self) -> &'static str {
        match self {
            Self::Linkedin => "in/",
            Self::Tiktok | Self::Youtube => "@",
            _ => "",
        }
    }
}

impl FromStr for SocialPlatform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|p| p.id().eq_ignore_ascii_case(s.trim())).ok_or(())
    }
}

// Unknown platform ids become `None` instead of failing the whole form
fn lenient_platform<'de, D>(deserializer: D) -> Result<Option<SocialPlatform>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<String>::deserialize(deserializer)?;
    Ok(id.and_then(|id| id.parse().ok()))
}

#[derive(Debug, PartialEq, Eq, Clone)]
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct SocialRecord {
    #[serde(deserialize_with = "lenient_platform")]
    pub platform: Option<SocialPlatform>,
    pub username: String,
}

impl Default for SocialRecord {
    fn default() -> Self {
        Self { platform: Some(SocialPlatform::Instagram), username: String::new() }
    }
}

impl SocialRecord {
    pub fn new(platform: SocialPlatform, username: &str) -> Self {
        Self { platform: Some(platform), username: username.to_string() }
    }

    pub fn is_blank(&self) -> bool {
        self.platform.is_none() || blank(&self.username)
    }
}

// Records
//------------------------------------------------------------------------------

/// Every per-kind form state at once. Only the part matching the active kind is read.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Records {
    pub url: String,
    pub wifi: WifiRecord,
    #[serde(rename = "vcard")]
    pub contact: ContactRecord,
    pub email: EmailRecord,
    pub sms: SmsRecord,
    pub social: SocialRecord,
}

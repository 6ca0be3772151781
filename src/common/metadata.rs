use std::{
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::error::QRError;

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
pub enum ECLevel {
    L = 0,
    #[default]
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    /// Approximate share of codewords that can be restored.
    pub fn recovery_percent(self) -> u8 {
        match self {
            Self::L => 7,
            Self::M => 15,
            Self::Q => 25,
            Self::H => 30,
        }
    }
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let level = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(level)
    }
}

impl FromStr for ECLevel {
    type Err = QRError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "L" | "l" => Ok(Self::L),
            "M" | "m" => Ok(Self::M),
            "Q" | "q" => Ok(Self::Q),
            "H" | "h" => Ok(Self::H),
            other => Err(QRError::InvalidECLevel(other.to_string())),
        }
    }
}

// Payload kind
//------------------------------------------------------------------------------

/// Selects which format encoder produces the payload.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    #[default]
    Url,
    Wifi,
    #[serde(rename = "vcard")]
    ContactCard,
    Email,
    Sms,
    #[serde(rename = "social")]
    SocialProfile,
}

impl PayloadKind {
    pub const ALL: [Self; 6] =
        [Self::Url, Self::Wifi, Self::ContactCard, Self::Email, Self::Sms, Self::SocialProfile];
}

// Content kind
//------------------------------------------------------------------------------

/// Shape of a decoded text, as assigned by the classifier.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum ContentKind {
    WifiConfig,
    MailTo,
    SmsTo,
    TelTo,
    VCard,
    GeoLocation,
    HttpUrl,
    VEvent,
    KnownSocialUrl,
    Unclassified,
}

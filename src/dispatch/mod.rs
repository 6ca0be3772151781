pub mod platform;

use tracing::{debug, warn};
use url::Url;

pub use platform::{Capabilities, MapsLink, WifiSettingsLink};

use crate::{
    common::{
        download::DownloadFile,
        error::{QRError, QRResult},
        metadata::ContentKind,
    },
    reader::extract::{geo_point, wifi_fields},
};

// Effects
//------------------------------------------------------------------------------

/// Side effects available to the dispatcher. Implemented by the host (browser, OS shell) and by
/// test doubles.
pub trait Effects {
    /// Hands a URI to the platform's default scheme handler.
    fn open_external(&self, uri: &str) -> QRResult<()>;

    /// Opens a URL in a new browsing context.
    fn open_url(&self, url: &str) -> QRResult<()>;

    fn download(&self, file: &DownloadFile) -> QRResult<()>;

    fn show(&self, notice: &Notice) -> QRResult<()>;
}

/// Information presented to the user synchronously.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Notice {
    pub title: String,
    pub fields: Vec<(String, String)>,
}

// Action
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Action {
    OpenExternal(String),
    OpenUrl(String),
    Download(DownloadFile),
    Show(Notice),
    // No user-facing effect; text kept for display only
    Retain(String),
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum DispatchOutcome {
    Performed(Action),
    Failed,
}

fn wifi_action(text: &str, caps: &Capabilities) -> QRResult<Action> {
    let wifi = wifi_fields(text)?;
    match caps.wifi_link {
        Some(link) => Ok(Action::OpenExternal(link.link(&wifi))),
        None => Ok(Action::Show(Notice {
            title: "Wi-Fi network".to_string(),
            fields: vec![
                ("Network".to_string(), wifi.ssid),
                ("Password".to_string(), wifi.password),
                ("Security".to_string(), wifi.security.token().to_string()),
            ],
        })),
    }
}

fn geo_action(text: &str, caps: &Capabilities) -> QRResult<Action> {
    let link = caps.maps.link(geo_point(text)?);
    if caps.maps.is_web() {
        Ok(Action::OpenUrl(link))
    } else {
        Ok(Action::OpenExternal(link))
    }
}

fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https") && url.has_host()
}

// Only http(s) URLs reach a browsing context
fn url_action(text: &str, kind: ContentKind) -> QRResult<Action> {
    let malformed = || QRError::MalformedUrl(text.to_string());
    match Url::parse(text) {
        Ok(url) if is_web_url(&url) => Ok(Action::OpenUrl(text.to_string())),
        Ok(_) => Err(malformed()),
        // Social profiles are recognised without a scheme
        Err(_) if kind == ContentKind::KnownSocialUrl => {
            if text.chars().any(char::is_whitespace) {
                return Err(malformed());
            }
            let prefixed = format!("https://{text}");
            match Url::parse(&prefixed) {
                Ok(url) if is_web_url(&url) => Ok(Action::OpenUrl(prefixed)),
                _ => Err(malformed()),
            }
        }
        Err(_) => Err(malformed()),
    }
}

/// Decides the action for a classified text without performing it.
pub fn plan(kind: ContentKind, text: &str, caps: &Capabilities) -> QRResult<Action> {
    match kind {
        ContentKind::WifiConfig => wifi_action(text, caps),
        ContentKind::MailTo | ContentKind::SmsTo | ContentKind::TelTo => {
            Ok(Action::OpenExternal(text.to_string()))
        }
        ContentKind::VCard => Ok(Action::Download(DownloadFile::contact_card(text))),
        ContentKind::GeoLocation => geo_action(text, caps),
        ContentKind::HttpUrl | ContentKind::KnownSocialUrl => url_action(text, kind),
        ContentKind::VEvent => Ok(Action::Download(DownloadFile::calendar_event(text))),
        ContentKind::Unclassified => Ok(Action::Retain(text.to_string())),
    }
}

// Dispatcher
//------------------------------------------------------------------------------

pub struct Dispatcher<E> {
    effects: E,
    caps: Capabilities,
}

impl<E: Effects> Dispatcher<E> {
    pub fn new(effects: E, caps: Capabilities) -> Self {
        Self { effects, caps }
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.caps
    }

    /// Plans and performs the action for `kind`. Every failure is logged and absorbed; nothing is
    /// retried.
    pub fn dispatch(&self, kind: ContentKind, text: &str) -> DispatchOutcome {
        let action = match plan(kind, text, &self.caps) {
            Ok(a) => a,
            Err(e) => {
                warn!(?kind, error = %e, "dispatch failed");
                return DispatchOutcome::Failed;
            }
        };

        match self.perform(&action) {
            Ok(()) => {
                debug!(?kind, ?action, "dispatched");
                DispatchOutcome::Performed(action)
            }
            Err(e) => {
                warn!(?kind, error = %e, "dispatch failed");
                DispatchOutcome::Failed
            }
        }
    }

    fn perform(&self, action: &Action) -> QRResult<()> {
        match action {
            Action::OpenExternal(uri) => self.effects.open_external(uri),
            Action::OpenUrl(url) => self.effects.open_url(url),
            Action::Download(file) => self.effects.download(file),
            Action::Show(notice) => self.effects.show(notice),
            Action::Retain(text) => {
                debug!(len = text.len(), "retained unclassified content");
                Ok(())
            }
        }
    }
}

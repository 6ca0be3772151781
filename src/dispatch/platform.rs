use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    builder::escape::uri_component,
    common::records::WifiRecord,
    reader::extract::GeoPoint,
};

static IOS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)iphone|ipad|ipod").expect("valid user agent pattern"));
static ANDROID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)android").expect("valid user agent pattern"));

// Wi-Fi settings link
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum WifiSettingsLink {
    Ios,
    Android,
}

impl WifiSettingsLink {
    pub fn link(self, wifi: &WifiRecord) -> String {
        let ssid = uri_component(&wifi.ssid);
        let password = uri_component(&wifi.password);
        match self {
            Self::Ios => format!("App-Prefs:root=WIFI&ssid={ssid}&password={password}"),
            Self::Android => format!(
                "intent:#Intent;action=android.settings.WIFI_SETTINGS;S.ssid={ssid};S.password={password};end"
            ),
        }
    }
}

// Maps link
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum MapsLink {
    Apple,
    Geo,
    #[default]
    Web,
}

impl MapsLink {
    pub fn link(self, p: GeoPoint<'_>) -> String {
        let GeoPoint { lat, lng } = p;
        match self {
            Self::Apple => format!("maps://?q={lat},{lng}"),
            Self::Geo => format!("geo:{lat},{lng}?q={lat},{lng}"),
            Self::Web => format!("https://www.google.com/maps?q={lat},{lng}"),
        }
    }

    /// Web links go to a browsing context, the others to the platform's scheme handler.
    pub fn is_web(self) -> bool {
        self == Self::Web
    }
}

// Capabilities
//------------------------------------------------------------------------------

/// What the host platform can do. Injected into the dispatcher so decisions never depend on
/// sniffing at dispatch time.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct Capabilities {
    pub wifi_link: Option<WifiSettingsLink>,
    pub maps: MapsLink,
}

impl Capabilities {
    pub fn desktop() -> Self {
        Self { wifi_link: None, maps: MapsLink::Web }
    }

    pub fn ios() -> Self {
        Self { wifi_link: Some(WifiSettingsLink::Ios), maps: MapsLink::Apple }
    }

    pub fn android() -> Self {
        Self { wifi_link: Some(WifiSettingsLink::Android), maps: MapsLink::Geo }
    }

    pub fn from_user_agent(user_agent: &str) -> Self {
        if IOS_REGEX.is_match(user_agent) {
            Self::ios()
        } else if ANDROID_REGEX.is_match(user_agent) {
            Self::android()
        } else {
            Self::desktop()
        }
    }

    pub fn supports_wifi_link(&self) -> bool {
        self.wifi_link.is_some()
    }
}

#[cfg(test)]
mod platform_tests {
    use test_case::test_case;

    use super::{Capabilities, MapsLink, WifiSettingsLink};
    use crate::{
        common::records::{Security, WifiRecord},
        reader::extract::GeoPoint,
    };

    #[test_case("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)", Capabilities::ios())]
    #[test_case("Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)", Capabilities::ios())]
    #[test_case("Mozilla/5.0 (Linux; Android 14; Pixel 8)", Capabilities::android())]
    #[test_case("Mozilla/5.0 (Windows NT 10.0; Win64; x64)", Capabilities::desktop())]
    #[test_case("", Capabilities::desktop())]
    fn test_from_user_agent(ua: &str, exp: Capabilities) {
        assert_eq!(Capabilities::from_user_agent(ua), exp);
    }

    #[test]
    fn test_wifi_link_encodes_fields() {
        let wifi = WifiRecord::new("My Net", "p&ss", Security::Wpa);
        assert_eq!(
            WifiSettingsLink::Ios.link(&wifi),
            "App-Prefs:root=WIFI&ssid=My%20Net&password=p%26ss"
        );
        assert_eq!(
            WifiSettingsLink::Android.link(&wifi),
            "intent:#Intent;action=android.settings.WIFI_SETTINGS;S.ssid=My%20Net;S.password=p%26ss;end"
        );
    }

    #[test_case(MapsLink::Apple, "maps://?q=37.5,-122.25")]
    #[test_case(MapsLink::Geo, "geo:37.5,-122.25?q=37.5,-122.25")]
    #[test_case(MapsLink::Web, "https://www.google.com/maps?q=37.5,-122.25")]
    fn test_maps_link(maps: MapsLink, exp: &str) {
        assert_eq!(maps.link(GeoPoint { lat: "37.5", lng: "-122.25" }), exp);
    }

    #[test]
    fn test_defaults_to_desktop() {
        assert_eq!(Capabilities::default(), Capabilities::desktop());
        assert!(!Capabilities::desktop().supports_wifi_link());
        assert!(Capabilities::android().supports_wifi_link());
    }
}

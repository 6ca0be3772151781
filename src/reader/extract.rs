use super::GEO_REGEX;
use crate::{
    builder::escape::unescape_wifi_field,
    common::{
        error::{QRError, QRResult},
        records::{Security, WifiRecord},
    },
};

// Wi-Fi
//------------------------------------------------------------------------------

// Splits on `sep` unless it is backslash-escaped. Escapes are left in place.
fn split_unescaped(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            _ if c == sep => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Re-parses the fields of a `WIFI:` payload. Field order is not significant; `S` is required,
/// a missing `T` means an open network and a missing `P` an empty password.
pub fn wifi_fields(text: &str) -> QRResult<WifiRecord> {
    let body = text.strip_prefix("WIFI:").ok_or(QRError::MalformedWifi)?;

    let mut ssid = None;
    let mut rec = WifiRecord { security: Security::None, ..Default::default() };
    for field in split_unescaped(body, ';') {
        // `;;` terminates the record
        if field.is_empty() {
            break;
        }
        let (key, value) = field.split_once(':').ok_or(QRError::MalformedWifi)?;
        let value = unescape_wifi_field(value);
        match key {
            "T" => rec.security = Security::from(value),
            "S" => ssid = Some(value),
            "P" => rec.password = value,
            "H" => rec.hidden = value.eq_ignore_ascii_case("true"),
            _ => {}
        }
    }

    rec.ssid = ssid.ok_or(QRError::MalformedWifi)?;
    Ok(rec)
}

// Geo location
//------------------------------------------------------------------------------

/// Coordinates exactly as written in the payload.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct GeoPoint<'a> {
    pub lat: &'a str,
    pub lng: &'a str,
}

fn within(deg: &str, limit: f64) -> bool {
    deg.parse::<f64>().is_ok_and(|v| v.abs() <= limit)
}

/// Reads `geo:<lat>,<lng>[;params][?query]`. Both values must be signed decimals in range.
pub fn geo_point(text: &str) -> QRResult<GeoPoint<'_>> {
    let caps = GEO_REGEX.captures(text).ok_or(QRError::MalformedGeo)?;
    let (Some(lat), Some(lng)) = (caps.get(1), caps.get(2)) else {
        return Err(QRError::MalformedGeo);
    };

    let point = GeoPoint { lat: lat.as_str(), lng: lng.as_str() };
    if !within(point.lat, 90.0) || !within(point.lng, 180.0) {
        return Err(QRError::MalformedGeo);
    }
    Ok(point)
}

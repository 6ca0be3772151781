use encoding_rs::WINDOWS_1252;

/// Turns raw symbol bytes into text. Valid UTF-8 is taken as-is; anything else is read as
/// ISO-8859-1, the QR byte mode default, via its windows-1252 superset.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => WINDOWS_1252.decode_without_bom_handling(bytes).0.into_owned(),
    }
}

#[cfg(test)]
mod text_tests {
    use super::decode_text;

    #[test]
    fn test_utf8() {
        assert_eq!(decode_text("Hello, world!🌎".as_bytes()), "Hello, world!🌎");
        assert_eq!(decode_text(b""), "");
    }

    #[test]
    fn test_latin1_fallback() {
        // "café" in ISO-8859-1
        assert_eq!(decode_text(b"caf\xe9"), "café");
        assert_eq!(decode_text(b"WIFI:T:WPA;S:M\xfcller;P:x;;"), "WIFI:T:WPA;S:Müller;P:x;;");
    }
}

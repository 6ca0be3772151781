// Download file
//------------------------------------------------------------------------------

/// A file offered to the user for download.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DownloadFile {
    pub name: String,
    pub media_type: &'static str,
    pub contents: Vec<u8>,
}

impl DownloadFile {
    pub fn new(name: &str, media_type: &'static str, contents: impl Into<Vec<u8>>) -> Self {
        Self { name: name.to_string(), media_type, contents: contents.into() }
    }

    pub fn contact_card(vcard: &str) -> Self {
        Self::new("contact.vcf", "text/vcard", vcard)
    }

    pub fn calendar_event(vevent: &str) -> Self {
        Self::new("event.ics", "text/calendar", vevent)
    }
}

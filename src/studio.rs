use image::RgbaImage;
use tracing::{debug, warn};

use crate::{
    builder,
    common::{
        metadata::{ContentKind, PayloadKind},
        records::Records,
    },
    dispatch::{DispatchOutcome, Dispatcher, Effects},
    reader::{classify, text::decode_text},
    render::{logo::overlay_logo, Artifact, Latest, RenderOptions, SymbolReader, SymbolRenderer},
};

// Outcomes
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Clone)]
pub enum GenerateOutcome {
    Rendered(Artifact),
    // Record was blank, renderer not called
    Blank,
    // A newer request was issued while rendering
    Superseded,
    Failed,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ScanOutcome {
    Dispatched { text: String, kind: ContentKind, outcome: DispatchOutcome },
    NotFound,
    Superseded,
    Failed,
}

// Studio
//------------------------------------------------------------------------------

/// Generate and scan session over an external renderer and reader.
///
/// Only the newest generate request may replace the current artifact and only the newest scan
/// is dispatched. Collaborator failures are logged and reported through the outcome.
pub struct Studio<R, S> {
    renderer: R,
    reader: S,
    options: RenderOptions,
    logo: Option<RgbaImage>,
    artifact: Latest<Artifact>,
    scan: Latest<String>,
}

impl<R: SymbolRenderer, S: SymbolReader> Studio<R, S> {
    pub fn new(renderer: R, reader: S) -> Self {
        Self {
            renderer,
            reader,
            options: RenderOptions::default(),
            logo: None,
            artifact: Latest::new(),
            scan: Latest::new(),
        }
    }

    pub fn options(&mut self, options: RenderOptions) -> &mut Self {
        self.options = options;
        self
    }

    pub fn logo(&mut self, logo: Option<RgbaImage>) -> &mut Self {
        self.logo = logo;
        self
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.options
    }

    /// The artifact of the newest completed generate request.
    pub fn current(&self) -> Option<Artifact> {
        self.artifact.get()
    }

    /// Text of the newest dispatched scan.
    pub fn last_scan(&self) -> Option<String> {
        self.scan.get()
    }

    pub async fn generate(&self, kind: PayloadKind, records: &Records) -> GenerateOutcome {
        let ticket = self.artifact.begin();

        let payload = builder::build(kind, records);
        if payload.trim().is_empty() {
            debug!(?kind, "nothing to render");
            return GenerateOutcome::Blank;
        }

        if let Err(e) = self.options.validate() {
            warn!(?kind, error = %e, "generation failed");
            return GenerateOutcome::Failed;
        }

        debug!(?kind, options = %self.options.metadata(), "rendering");
        let mut artifact = match self.renderer.render(&payload, &self.options).await {
            Ok(a) => a,
            Err(e) => {
                warn!(?kind, error = %e, "generation failed");
                return GenerateOutcome::Failed;
            }
        };

        match (&self.logo, &mut artifact) {
            (Some(logo), Artifact::Raster(img)) => overlay_logo(img, logo),
            (Some(_), Artifact::Vector(_)) => debug!("logo skipped for vector artifact"),
            _ => (),
        }

        if !self.artifact.commit(ticket, artifact.clone()) {
            debug!(?kind, "stale render dropped");
            return GenerateOutcome::Superseded;
        }
        GenerateOutcome::Rendered(artifact)
    }

    pub async fn scan<E: Effects>(&self, image: &RgbaImage, dispatcher: &Dispatcher<E>) -> ScanOutcome {
        let ticket = self.scan.begin();

        let (w, h) = image.dimensions();
        debug!(w, h, "reading symbol");
        let bytes = match self.reader.read(image).await {
            Ok(Some(b)) => b,
            Ok(None) => {
                debug!("no code found");
                return ScanOutcome::NotFound;
            }
            Err(e) => {
                warn!(error = %e, "scan failed");
                return ScanOutcome::Failed;
            }
        };

        let text = decode_text(&bytes);
        if !self.scan.commit(ticket, text.clone()) {
            debug!("stale scan dropped");
            return ScanOutcome::Superseded;
        }

        let kind = classify(&text);
        let outcome = dispatcher.dispatch(kind, &text);
        ScanOutcome::Dispatched { text, kind, outcome }
    }
}

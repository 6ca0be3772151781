//! # qrstudio
//!
//! A Rust library for building QR payloads from structured records and for acting on the text
//! decoded from a QR symbol. Symbol rendering and symbol reading are delegated to external
//! collaborators behind the [`SymbolRenderer`] and [`SymbolReader`] traits.
//!
//! ## Features
//!
//! - **Payload Building**: URL, Wi-Fi, vCard 3.0, mailto, SMS and social profile payloads
//! - **Content Classification**: Ordered rules mapping decoded text to a [`ContentKind`]
//! - **Action Dispatch**: One action per kind, performed through an injected [`Effects`] handle
//! - **Studio Session**: Last-write-wins generation, logo overlay and PNG/SVG export
//!
//! ## Quick Start
//!
//! ### Building a Payload
//!
//! ```rust
//! use qrstudio::{PayloadBuilder, PayloadKind, Security, WifiRecord};
//!
//! let mut builder = PayloadBuilder::new(PayloadKind::Wifi);
//! builder.wifi(WifiRecord::new("Home", "p@ss", Security::Wpa));
//! assert_eq!(builder.build(), "WIFI:T:WPA;S:Home;P:p@ss;;");
//!
//! // Blank records produce no payload
//! builder.kind(PayloadKind::Email);
//! assert_eq!(builder.build(), "");
//! ```
//!
//! ### Classifying Decoded Text
//!
//! ```rust
//! use qrstudio::{classify, ContentKind};
//!
//! assert_eq!(classify("WIFI:T:WPA;S:Home;P:p@ss;;"), ContentKind::WifiConfig);
//! assert_eq!(classify("instagram.com/someone"), ContentKind::KnownSocialUrl);
//! assert_eq!(classify("https://example.com"), ContentKind::HttpUrl);
//! assert_eq!(classify("hello"), ContentKind::Unclassified);
//! ```
//!
//! ### Planning an Action
//!
//! ```rust
//! use qrstudio::{plan, Action, Capabilities, ContentKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let action = plan(ContentKind::GeoLocation, "geo:40.7,-74.0", &Capabilities::desktop())?;
//! assert_eq!(action, Action::OpenUrl("https://www.google.com/maps?q=40.7,-74.0".to_string()));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction, recommended with a logo overlay

pub mod builder;
pub mod common;
pub mod dispatch;
pub mod reader;
pub mod render;
pub mod studio;

pub use builder::{build, PayloadBuilder};
pub use common::*;
pub use dispatch::{plan, Action, Capabilities, DispatchOutcome, Dispatcher, Effects, Notice};
pub use reader::classify;
pub use render::{Artifact, ArtifactFormat, RenderOptions, SymbolReader, SymbolRenderer};
pub use studio::{GenerateOutcome, ScanOutcome, Studio};

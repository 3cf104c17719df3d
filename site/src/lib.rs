//! # readywrite-site
//!
//! The ReadyWrite landing page as Leptos components, driven entirely by a
//! content catalog.
//!
//! The same components render in two places:
//!
//! - **Static export** (feature `ssr`, default): [`render_page`] produces a
//!   complete HTML document. The `readywrite` CLI writes it to disk.
//! - **Browser** (feature `csr`): the `landing` crate mounts
//!   [`components::LandingPage`] and wires real callbacks and an
//!   [`intake::HttpIntake`] (feature `intake-http`).
//!
//! ## Quick Start
//!
//! ```rust
//! use readywrite_site::{render_page, Catalog, clock::FixedClock};
//!
//! let catalog = Catalog::readywrite();
//! catalog.validate().expect("shipped catalog is valid");
//!
//! let clock = FixedClock::new_year(2030).expect("valid year");
//! let html = render_page(&catalog, &clock);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("© 2030 ReadyWrite."));
//! ```
//!
//! ## Architecture
//!
//! - [`catalog`] - every piece of copy, loadable from JSON/TOML
//! - [`state`] - the two interaction state machines (mobile nav, lead form)
//! - [`components`] - Leptos UI components
//! - [`actions`] - host callbacks invoked by CTAs
//! - [`intake`] - where captured leads are sent
//! - [`clock`] - injectable date source for the copyright year
//! - [`styles`] - CSS constants

pub mod actions;
pub mod catalog;
pub mod clock;
pub mod components;
pub mod error;
pub mod intake;
pub mod state;
pub mod styles;

use std::sync::Arc;

use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;
use tracing::info;

pub use actions::{CtaSource, PageActions};
pub use catalog::Catalog;
pub use clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use error::{CatalogError, IntakeError};

use components::SiteDocument;

/// Render the full landing page as a static HTML document.
///
/// CTAs are inert and the lead form has no intake, so the output is a
/// self-contained snapshot. `clock` is read once; the copyright year is
/// fixed for the whole document.
///
/// The catalog is rendered as given. Call [`Catalog::validate`] first to
/// reject authoring defects.
pub fn render_page(catalog: &Catalog, clock: &dyn Clock) -> String {
    let pinned: SharedClock = Arc::new(FixedClock(clock.today()));
    let catalog = Arc::new(catalog.clone());

    let owner = Owner::new();
    let html = owner.with(|| {
        view! {
            <SiteDocument catalog=catalog actions=PageActions::inert() clock=pinned />
        }
        .to_html()
    });
    info!(bytes = html.len(), "rendered landing page");

    // Leptos doesn't emit a doctype
    format!("<!DOCTYPE html>\n{html}")
}

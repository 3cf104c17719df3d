//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (static export only)
//! └── LandingPage
//!     ├── NavigationShell
//!     │   ├── LogoMark
//!     │   └── NavAnchors (desktop bar + mobile panel)
//!     ├── HeroPanel
//!     │   ├── MetricsStrip
//!     │   └── LiveDraftPreview
//!     ├── Section<StepRecord>        #how
//!     ├── Section<FeatureRecord>     #features
//!     │   └── UseCaseStrip
//!     ├── Section<Testimonial>       #results
//!     ├── Section<PricingTier>       #pricing
//!     ├── Section<ExampleShowcase>   #examples
//!     ├── LeadCaptureForm            #updates
//!     ├── Section<FaqEntry>          #faq
//!     └── Footer
//!         └── NavAnchors (Product column)
//! ```
//!
//! In the browser, mount [`LandingPage`] directly and put [`crate::styles::SITE_CSS`]
//! in a `<style>` tag; [`crate::render_page`] wraps it in [`SiteDocument`].

mod cards;
mod document;
mod footer;
mod hero;
mod icons;
mod lead;
mod nav;
mod page;
mod primitives;
mod section;

pub use cards::{ExampleCard, FaqCard, FeatureCard, PricingCard, StepCard, TestimonialCard};
pub use document::SiteDocument;
pub use footer::Footer;
pub use hero::{HeroPanel, LiveDraftPreview, MetricsStrip};
pub use icons::Icon;
pub use lead::LeadCaptureForm;
pub use nav::{LogoMark, NavAnchors, NavigationShell};
pub use page::{LandingPage, UseCaseStrip};
pub use primitives::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, Pill, Separator, SkeletonLines,
};
pub use section::{Section, SectionTitle};

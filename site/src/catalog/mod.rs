//! Content catalog: every piece of copy the page renders.
//!
//! The catalog is the only customization surface of the site. It is loaded
//! eagerly (compiled-in via [`Catalog::readywrite`] or from a JSON/TOML file via
//! [`Catalog::load`]) and shared read-only by every component.
//!
//! # Example
//!
//! ```rust
//! use readywrite_site::catalog::{Catalog, SectionId};
//!
//! let catalog = Catalog::readywrite();
//! catalog.validate().expect("shipped catalog is valid");
//!
//! assert_eq!(catalog.brand.name, "ReadyWrite");
//! assert!(catalog.nav.iter().any(|link| link.target == SectionId::Pricing));
//! ```

mod readywrite;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CatalogError;

/// Anchor-addressable regions of the page.
///
/// Navigation targets are typed, so a nav entry cannot point at an anchor the
/// page does not render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Top,
    How,
    Features,
    Results,
    Pricing,
    Examples,
    Updates,
    Faq,
}

impl SectionId {
    /// All anchors in page order.
    pub const ALL: [SectionId; 8] = [
        SectionId::Top,
        SectionId::How,
        SectionId::Features,
        SectionId::Results,
        SectionId::Pricing,
        SectionId::Examples,
        SectionId::Updates,
        SectionId::Faq,
    ];

    /// The `id` attribute value of the section element.
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Top => "top",
            SectionId::How => "how",
            SectionId::Features => "features",
            SectionId::Results => "results",
            SectionId::Pricing => "pricing",
            SectionId::Examples => "examples",
            SectionId::Updates => "updates",
            SectionId::Faq => "faq",
        }
    }

    /// In-page link to the section (`#how`).
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Named glyphs used by catalog records and page chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconRef {
    Mic,
    FileAudio,
    Sparkles,
    Wand,
    BookOpen,
    ShieldCheck,
    Download,
    CheckCircle,
    ArrowRight,
    Quote,
    PlayCircle,
    Mail,
    Phone,
    MapPin,
    Menu,
    Close,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    /// Short line under the logo mark ("Write by voice").
    pub byline: String,
    pub tagline: String,
    pub subtagline: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub login_label: String,
    /// Accessible name of the mobile menu toggle.
    pub menu_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: SectionId,
}

/// Eyebrow / title / description block shared by every section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SectionHeading {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn eyebrow(mut self, eyebrow: impl Into<String>) -> Self {
        self.eyebrow = Some(eyebrow.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Headings for each catalog-driven section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCopy {
    pub how: SectionHeading,
    pub features: SectionHeading,
    pub testimonials: SectionHeading,
    pub pricing: SectionHeading,
    pub examples: SectionHeading,
    pub faq: SectionHeading,
    /// Badge on the highlighted pricing tier.
    pub featured_badge: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewChapter {
    pub label: String,
    pub title: String,
    /// Skeleton line widths in percent.
    pub lines: Vec<u8>,
}

/// The illustrative, non-interactive "live draft" card in the hero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPreview {
    pub title: String,
    pub subtitle: String,
    pub badge: String,
    pub chapters: Vec<PreviewChapter>,
    pub modes_label: String,
    pub modes: Vec<String>,
    pub primary_action: String,
    pub secondary_action: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub pills: Vec<String>,
    pub metrics: Vec<Metric>,
    pub reassurance: String,
    pub preview: DraftPreview,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub icon: IconRef,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Display ordinal ("01"); must parse as a number.
    pub ordinal: String,
    pub title: String,
    pub description: String,
    pub icon: IconRef,
}

/// Audience line and transformation badges under the feature grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCases {
    pub title: String,
    pub audiences: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub highlighted: bool,
    pub benefits: Vec<String>,
    pub cta: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub attribution: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleShowcase {
    pub title: String,
    pub tag: String,
    pub description: String,
    pub preview_label: String,
    /// Skeleton line widths in percent.
    pub lines: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Copy for the lead capture card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadCopy {
    pub title: String,
    pub description: String,
    pub perks: Vec<String>,
    pub email_label: String,
    pub placeholder: String,
    pub button: String,
    pub fine_print: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub blurb: String,
    pub product_heading: String,
    pub company_heading: String,
    pub contact_heading: String,
    pub company_links: Vec<ExternalLink>,
    pub contact: ContactDetails,
    pub demo_label: String,
}

/// The complete, immutable description of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub brand: BrandConfig,
    pub nav: Vec<NavLink>,
    pub hero: HeroContent,
    pub sections: SectionCopy,
    pub steps: Vec<StepRecord>,
    pub features: Vec<FeatureRecord>,
    pub use_cases: UseCases,
    pub testimonials: Vec<Testimonial>,
    pub pricing: Vec<PricingTier>,
    pub examples: Vec<ExampleShowcase>,
    pub lead: LeadCopy,
    pub faq: Vec<FaqEntry>,
    pub footer: FooterContent,
}

impl Catalog {
    /// The compiled-in ReadyWrite catalog.
    pub fn readywrite() -> Self {
        readywrite::catalog()
    }

    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(source).map_err(|e| CatalogError::Parse {
            origin: "<json>".into(),
            message: e.to_string(),
        })
    }

    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        toml::from_str(source).map_err(|e| CatalogError::Parse {
            origin: "<toml>".into(),
            message: e.to_string(),
        })
    }

    /// Load a catalog file, picking the format from its extension.
    ///
    /// Loading does not validate; call [`Catalog::validate`] before rendering.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = match extension.as_str() {
            "json" => Self::from_json_str(&content),
            "toml" => Self::from_toml_str(&content),
            other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
        };

        let catalog = parsed.map_err(|err| match err {
            CatalogError::Parse { message, .. } => CatalogError::Parse {
                origin: path.display().to_string(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path.display(), "loaded catalog");
        Ok(catalog)
    }

    /// The tier rendered with the featured badge, if any.
    pub fn highlighted_tier(&self) -> Option<&PricingTier> {
        self.pricing.iter().find(|tier| tier.highlighted)
    }

    /// Check every authoring invariant. Returns the first violation found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let result = self.check_invariants();
        if let Err(err) = &result {
            warn!(error = %err, "catalog failed validation");
        }
        result
    }

    fn check_invariants(&self) -> Result<(), CatalogError> {
        let brand_fields = [
            ("name", &self.brand.name),
            ("byline", &self.brand.byline),
            ("tagline", &self.brand.tagline),
            ("subtagline", &self.brand.subtagline),
            ("cta_primary", &self.brand.cta_primary),
            ("cta_secondary", &self.brand.cta_secondary),
            ("login_label", &self.brand.login_label),
            ("menu_label", &self.brand.menu_label),
        ];
        if let Some((field, _)) = brand_fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(CatalogError::EmptyBrandField(field));
        }

        let mut titles = HashSet::new();
        for feature in &self.features {
            if !titles.insert(feature.title.as_str()) {
                return Err(CatalogError::DuplicateFeature(feature.title.clone()));
            }
        }

        let mut previous: Option<(u32, &str)> = None;
        for step in &self.steps {
            let value: u32 = step
                .ordinal
                .trim()
                .parse()
                .map_err(|_| CatalogError::InvalidOrdinal(step.ordinal.clone()))?;
            if let Some((prev_value, prev_label)) = previous {
                if value <= prev_value {
                    return Err(CatalogError::StepOrder {
                        previous: prev_label.to_string(),
                        current: step.ordinal.clone(),
                    });
                }
            }
            previous = Some((value, step.ordinal.as_str()));
        }

        let highlighted: Vec<String> = self
            .pricing
            .iter()
            .filter(|tier| tier.highlighted)
            .map(|tier| tier.name.clone())
            .collect();
        if highlighted.len() > 1 {
            return Err(CatalogError::MultipleHighlighted(highlighted));
        }

        if let Some(idx) = self.testimonials.iter().position(|t| {
            t.quote.trim().is_empty() || t.attribution.trim().is_empty()
        }) {
            return Err(CatalogError::EmptyTestimonial(idx));
        }

        let mut questions = HashSet::new();
        for entry in &self.faq {
            if !questions.insert(entry.question.as_str()) {
                return Err(CatalogError::DuplicateQuestion(entry.question.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn tier(name: &str, highlighted: bool) -> PricingTier {
        PricingTier {
            name: name.into(),
            price: "$1".into(),
            period: "/mo".into(),
            description: "tier".into(),
            highlighted,
            benefits: vec!["one".into()],
            cta: "Buy".into(),
        }
    }

    #[test]
    fn shipped_catalog_is_valid() {
        let catalog = Catalog::readywrite();
        catalog.validate().expect("shipped catalog must validate");
    }

    #[test]
    fn shipped_catalog_highlights_exactly_one_tier() {
        let catalog = Catalog::readywrite();
        let highlighted = catalog.pricing.iter().filter(|t| t.highlighted).count();
        assert!(highlighted <= 1);
        assert_eq!(catalog.highlighted_tier().map(|t| t.name.as_str()), Some("Pro"));
    }

    #[test]
    fn shipped_nav_covers_the_documented_anchors() {
        let catalog = Catalog::readywrite();
        let targets: Vec<&str> = catalog.nav.iter().map(|l| l.target.anchor()).collect();
        assert_eq!(targets, vec!["how", "features", "pricing", "examples", "faq"]);
    }

    #[test]
    fn two_highlighted_tiers_are_rejected() {
        let mut catalog = Catalog::readywrite();
        catalog.pricing = vec![tier("A", true), tier("B", false), tier("C", true)];

        match catalog.validate() {
            Err(CatalogError::MultipleHighlighted(names)) => {
                assert_eq!(names, vec!["A".to_string(), "C".to_string()]);
            }
            other => panic!("expected MultipleHighlighted, got {other:?}"),
        }
    }

    #[test]
    fn no_highlighted_tier_is_allowed() {
        let mut catalog = Catalog::readywrite();
        catalog.pricing = vec![tier("A", false), tier("B", false)];
        assert!(catalog.validate().is_ok());
        assert!(catalog.highlighted_tier().is_none());
    }

    #[test]
    fn empty_brand_field_is_rejected() {
        let mut catalog = Catalog::readywrite();
        catalog.brand.cta_secondary = "   ".into();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::EmptyBrandField("cta_secondary"))
        ));
    }

    #[test]
    fn duplicate_feature_title_is_rejected() {
        let mut catalog = Catalog::readywrite();
        let first = catalog.features[0].clone();
        catalog.features.push(first);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateFeature(title)) if title == "Voice-first writing"
        ));
    }

    #[test]
    fn step_ordinals_must_strictly_increase() {
        let mut catalog = Catalog::readywrite();
        catalog.steps[2].ordinal = "02".into();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::StepOrder { previous, current }) if previous == "02" && current == "02"
        ));

        catalog.steps[2].ordinal = "three".into();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidOrdinal(label)) if label == "three"
        ));
    }

    #[test]
    fn blank_testimonial_is_rejected() {
        let mut catalog = Catalog::readywrite();
        catalog.testimonials[1].attribution = String::new();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::EmptyTestimonial(1))
        ));
    }

    #[test]
    fn duplicate_faq_question_is_rejected() {
        let mut catalog = Catalog::readywrite();
        let mut dup = catalog.faq[0].clone();
        dup.answer = "Different answer".into();
        catalog.faq.push(dup);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateQuestion(_))
        ));
    }

    #[test]
    fn json_catalog_round_trips_through_load() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("catalog.json");
        let json = serde_json::to_string_pretty(&Catalog::readywrite()).expect("serialize");
        std::fs::write(&path, json).expect("write catalog");

        let loaded = Catalog::load(&path).expect("load json catalog");
        assert_eq!(loaded, Catalog::readywrite());
    }

    #[test]
    fn toml_catalog_loads() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("catalog.toml");
        let toml = toml::to_string(&Catalog::readywrite()).expect("serialize toml");
        let mut file = std::fs::File::create(&path).expect("create catalog");
        file.write_all(toml.as_bytes()).expect("write catalog");

        let loaded = Catalog::load(&path).expect("load toml catalog");
        assert_eq!(loaded.brand.name, "ReadyWrite");
        assert_eq!(loaded.faq.len(), 4);
    }

    #[test]
    fn unknown_nav_target_fails_to_parse() {
        let mut value = serde_json::to_value(Catalog::readywrite()).expect("to value");
        value["nav"][0]["target"] = serde_json::Value::String("blog".into());

        let err = Catalog::from_json_str(&value.to_string()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn unsupported_extension_is_reported() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("catalog.yaml");
        std::fs::write(&path, "brand: {}").expect("write");

        assert!(matches!(
            Catalog::load(&path),
            Err(CatalogError::UnsupportedFormat(ext)) if ext == "yaml"
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = Catalog::load(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn section_anchors_are_unique() {
        let anchors: HashSet<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), SectionId::ALL.len());
        assert_eq!(SectionId::Faq.href(), "#faq");
    }
}

//! Whole-page properties of the static render.

use once_cell::sync::Lazy;
use pretty_assertions::assert_eq;
use readywrite_site::catalog::{NavLink, SectionId};
use readywrite_site::{Catalog, FixedClock, render_page};
use regex::Regex;

static NAV_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"class="(nav-link|mobile-link|footer-link)" data-nav="([a-z]+)">([^<]+)</a>"#)
        .expect("valid pattern")
});

fn render(catalog: &Catalog) -> String {
    let clock = FixedClock::new_year(2026).expect("valid year");
    render_page(catalog, &clock)
}

/// `(anchor, label)` pairs for one render site, in document order.
fn links_in(html: &str, class: &str) -> Vec<(String, String)> {
    NAV_ANCHOR
        .captures_iter(html)
        .filter(|caps| &caps[1] == class)
        .map(|caps| (caps[2].to_string(), caps[3].to_string()))
        .collect()
}

fn expected(links: &[NavLink]) -> Vec<(String, String)> {
    links
        .iter()
        .map(|link| (link.target.anchor().to_string(), link.label.clone()))
        .collect()
}

#[test]
fn header_panel_and_footer_links_match_catalog() {
    let catalog = Catalog::readywrite();
    let html = render(&catalog);

    let desktop = links_in(&html, "nav-link");
    assert_eq!(desktop, expected(&catalog.nav));
    assert_eq!(links_in(&html, "mobile-link"), desktop);
    assert_eq!(links_in(&html, "footer-link"), desktop);
}

#[test]
fn reordered_nav_stays_in_sync_everywhere() {
    let mut catalog = Catalog::readywrite();
    catalog.nav.reverse();
    catalog.nav.retain(|link| link.target != SectionId::Examples);
    catalog.nav.push(NavLink {
        label: "Stories".into(),
        target: SectionId::Results,
    });
    let html = render(&catalog);

    let want = expected(&catalog.nav);
    assert_eq!(links_in(&html, "nav-link"), want);
    assert_eq!(links_in(&html, "mobile-link"), want);
    assert_eq!(links_in(&html, "footer-link"), want);
}

#[test]
fn every_nav_target_resolves_to_a_section() {
    let catalog = Catalog::readywrite();
    let html = render(&catalog);

    for link in &catalog.nav {
        let id = format!(r#"id="{}""#, link.target.anchor());
        assert_eq!(html.matches(&id).count(), 1, "{} -> {id}", link.label);
    }
}

#[test]
fn sections_render_in_page_order() {
    let html = render(&Catalog::readywrite());

    let positions: Vec<usize> = SectionId::ALL
        .iter()
        .map(|section| {
            let id = format!(r#"id="{}""#, section.anchor());
            html.find(&id)
                .unwrap_or_else(|| panic!("missing anchor {id}"))
        })
        .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    let faq = positions[positions.len() - 1];
    let footer = html.find("<footer").expect("footer rendered");
    assert!(faq < footer);
}

#[test]
fn one_card_per_record() {
    let catalog = Catalog::readywrite();
    let html = render(&catalog);

    let count = |class: &str| html.matches(&format!(r#"class="card {class}""#)).count();
    assert_eq!(count("step-card"), catalog.steps.len());
    assert_eq!(count("feature-card"), catalog.features.len());
    assert_eq!(count("testimonial-card"), catalog.testimonials.len());
    assert_eq!(count("example-card"), catalog.examples.len());
    assert_eq!(count("faq-card"), catalog.faq.len());
    assert_eq!(
        html.matches(r#"class="card pricing-card"#).count(),
        catalog.pricing.len()
    );
}

#[test]
fn empty_lists_keep_their_headings() {
    let mut catalog = Catalog::readywrite();
    catalog.faq.clear();
    catalog.testimonials.clear();
    let html = render(&catalog);

    assert!(html.contains(&catalog.sections.faq.title));
    assert!(html.contains(r#"id="faq""#));
    assert_eq!(html.matches("faq-card").count(), 0);
    assert_eq!(html.matches("testimonial-card").count(), 0);
}

#[test]
fn year_follows_injected_clock() {
    let catalog = Catalog::readywrite();
    for year in [2019, 2026, 2077] {
        let clock = FixedClock::new_year(year).expect("valid year");
        let html = render_page(&catalog, &clock);
        let line = format!("© {year} ReadyWrite. All rights reserved.");
        assert_eq!(html.matches(&line).count(), 1);
    }
}

#[test]
fn static_export_has_single_highlighted_tier() {
    let catalog = Catalog::readywrite();
    catalog.validate().expect("shipped catalog is valid");

    let html = render(&catalog);
    assert_eq!(html.matches("Most popular").count(), 1);
    assert_eq!(html.matches("pricing-card highlighted").count(), 1);
}

#[test]
fn interface_labels_come_from_catalog() {
    let mut catalog = Catalog::readywrite();
    catalog.brand.login_label = "Sign in".into();
    catalog.brand.menu_label = "Open navigation".into();
    catalog.sections.featured_badge = "Best value".into();
    catalog.lead.email_label = "Your inbox".into();
    catalog.footer.product_heading = "Explore".into();
    catalog.footer.company_heading = "About us".into();
    catalog.footer.contact_heading = "Reach us".into();
    let html = render(&catalog);

    assert_eq!(html.matches("Sign in").count(), 2);
    assert!(html.contains(r#"aria-label="Open navigation""#));
    assert_eq!(html.matches("Best value").count(), 1);
    assert!(html.contains(">Your inbox<"));
    assert!(html.contains(">Explore<"));
    assert!(html.contains(">About us<"));
    assert!(html.contains(">Reach us<"));

    for shipped in ["Log in", "Toggle menu", "Most popular"] {
        assert!(!html.contains(shipped), "{shipped}");
    }
    for heading in [">Product<", ">Company<", ">Contact<", ">Email<"] {
        assert!(!html.contains(heading), "{heading}");
    }
}

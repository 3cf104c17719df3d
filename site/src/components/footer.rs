//! Footer: brand blurb, CTAs, link columns, contact and copyright.

use leptos::prelude::*;

use super::{Button, ButtonVariant, Icon, LogoMark, NavAnchors, Separator};
use crate::actions::{CtaSource, PageActions, cta};
use crate::catalog::{BrandConfig, FooterContent, IconRef, NavLink};

fn footer_ctas(actions: &PageActions) -> (Callback<()>, Callback<()>) {
    (
        cta(actions.start_signup, CtaSource::Footer),
        cta(actions.play_demo, CtaSource::Footer),
    )
}

/// Site footer. The Product column reuses [`NavAnchors`] with the same
/// catalog links as the header, and `year` is computed once by the page.
#[component]
pub fn Footer(
    brand: BrandConfig,
    links: Vec<NavLink>,
    content: FooterContent,
    year: i32,
    actions: PageActions,
) -> impl IntoView {
    let FooterContent {
        blurb,
        product_heading,
        company_heading,
        contact_heading,
        company_links,
        contact,
        demo_label,
    } = content;
    let (signup, demo) = footer_ctas(&actions);
    let copyright = format!("© {year} {}. All rights reserved.", brand.name);
    let mailto = format!("mailto:{}", contact.email);

    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <LogoMark name=brand.name byline=brand.byline />
                        <p class="footer-blurb">{blurb}</p>
                        <div class="footer-actions">
                            <Button on_press=signup>{brand.cta_primary}</Button>
                            <Button variant=ButtonVariant::Outline on_press=demo>
                                {demo_label}
                            </Button>
                        </div>
                    </div>

                    <div class="footer-column">
                        <div class="footer-heading">{product_heading}</div>
                        <nav class="footer-links" aria-label="Footer">
                            <NavAnchors links=links class="footer-link" />
                        </nav>
                    </div>

                    <div class="footer-column">
                        <div class="footer-heading">{company_heading}</div>
                        <div class="footer-links">
                            {company_links
                                .into_iter()
                                .map(|link| view! { <a href=link.href class="footer-link">{link.label}</a> })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="footer-column">
                        <div class="footer-heading">{contact_heading}</div>
                        <ul class="footer-contact">
                            <li>
                                <Icon icon=IconRef::Mail class="icon-sm" />
                                <a href=mailto class="footer-link">{contact.email}</a>
                            </li>
                            <li>
                                <Icon icon=IconRef::Phone class="icon-sm" />
                                <span>{contact.phone}</span>
                            </li>
                            <li>
                                <Icon icon=IconRef::MapPin class="icon-sm" />
                                <span>{contact.location}</span>
                            </li>
                        </ul>
                    </div>
                </div>

                <Separator />
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}

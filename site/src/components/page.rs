//! The whole landing page, assembled from the catalog.

use std::sync::Arc;

use leptos::prelude::*;
use tracing::debug;

use super::{
    Badge, BadgeVariant, ExampleCard, FaqCard, FeatureCard, Footer, HeroPanel, LeadCaptureForm,
    NavigationShell, PricingCard, Section, StepCard, TestimonialCard,
};
use crate::actions::PageActions;
use crate::catalog::{
    Catalog, ExampleShowcase, FaqEntry, FeatureRecord, PricingTier, SectionId, StepRecord,
    Testimonial, UseCases,
};
use crate::clock::{SharedClock, display_year};

/// Audience line and transformation badges under the feature grid.
#[component]
pub fn UseCaseStrip(use_cases: UseCases) -> impl IntoView {
    view! {
        <div class="use-cases">
            <div>
                <div class="use-cases-title">{use_cases.title}</div>
                <div class="use-cases-audiences">{use_cases.audiences}</div>
            </div>
            <div class="use-cases-tags">
                {use_cases
                    .tags
                    .into_iter()
                    .map(|tag| view! { <Badge variant=BadgeVariant::Soft>{tag}</Badge> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Nav, hero, the catalog sections, lead capture, FAQ, footer, in that order.
///
/// The copyright year is read from `clock` once, when the page is built.
#[component]
pub fn LandingPage(catalog: Arc<Catalog>, actions: PageActions, clock: SharedClock) -> impl IntoView {
    let year = display_year(clock.as_ref());
    debug!(year, "composing landing page");

    let start_signup = actions.start_signup;
    let featured_badge = catalog.sections.featured_badge.clone();
    let sections = catalog.sections.clone();
    let use_cases = catalog.use_cases.clone();

    view! {
        <NavigationShell
            brand=catalog.brand.clone()
            links=catalog.nav.clone()
            actions=actions.clone()
        />
        <main>
            <HeroPanel
                brand=catalog.brand.clone()
                hero=catalog.hero.clone()
                actions=actions.clone()
            />
            <Section
                id=SectionId::How
                heading=sections.how
                records=catalog.steps.clone()
                card=|step: StepRecord| view! { <StepCard step=step /> }
            />
            <Section
                id=SectionId::Features
                heading=sections.features
                records=catalog.features.clone()
                card=|feature: FeatureRecord| view! { <FeatureCard feature=feature /> }
            >
                <UseCaseStrip use_cases=use_cases />
            </Section>
            <Section
                id=SectionId::Results
                heading=sections.testimonials
                records=catalog.testimonials.clone()
                card=|testimonial: Testimonial| view! { <TestimonialCard testimonial=testimonial /> }
            />
            <Section
                id=SectionId::Pricing
                heading=sections.pricing
                records=catalog.pricing.clone()
                card=move |tier: PricingTier| {
                    view! {
                        <PricingCard tier=tier badge=featured_badge.clone() start_signup=start_signup />
                    }
                }
            />
            <Section
                id=SectionId::Examples
                heading=sections.examples
                records=catalog.examples.clone()
                card=|example: ExampleShowcase| view! { <ExampleCard example=example /> }
                grid="grid-2"
            />
            <LeadCaptureForm copy=catalog.lead.clone() intake=actions.intake.clone() />
            <Section
                id=SectionId::Faq
                heading=sections.faq
                records=catalog.faq.clone()
                card=|entry: FaqEntry| view! { <FaqCard entry=entry /> }
                grid="grid-2"
            />
        </main>
        <Footer
            brand=catalog.brand.clone()
            links=catalog.nav.clone()
            content=catalog.footer.clone()
            year=year
            actions=actions.clone()
        />
    }
}

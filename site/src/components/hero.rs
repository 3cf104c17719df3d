//! Hero: tagline, CTAs, metrics strip and the live-draft preview card.

use leptos::prelude::*;

use super::{Badge, BadgeVariant, Button, ButtonVariant, Card, Icon, Pill, Separator, SkeletonLines};
use crate::actions::{CtaSource, PageActions, cta};
use crate::catalog::{BrandConfig, DraftPreview, HeroContent, IconRef, Metric, SectionId};

/// Press handlers for the hero's signup and demo buttons.
fn hero_ctas(actions: &PageActions) -> (Callback<()>, Callback<()>) {
    (
        cta(actions.start_signup, CtaSource::Hero),
        cta(actions.play_demo, CtaSource::Hero),
    )
}

#[component]
pub fn HeroPanel(brand: BrandConfig, hero: HeroContent, actions: PageActions) -> impl IntoView {
    let HeroContent {
        pills,
        metrics,
        reassurance,
        preview,
    } = hero;
    let (signup, demo) = hero_ctas(&actions);

    view! {
        <section id=SectionId::Top.anchor() class="hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <div class="hero-pills">
                        {pills.into_iter().map(|pill| view! { <Pill>{pill}</Pill> }).collect_view()}
                    </div>
                    <h1 class="hero-title fade-up">{brand.tagline}</h1>
                    <p class="hero-subtitle fade-up">{brand.subtagline}</p>

                    <div class="hero-actions">
                        <Button class="btn-lg" on_press=signup>
                            {brand.cta_primary}
                            <Icon icon=IconRef::ArrowRight class="icon-sm" />
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            class="btn-lg"
                            on_press=demo
                        >
                            <Icon icon=IconRef::PlayCircle class="icon-sm" />
                            {brand.cta_secondary}
                        </Button>
                    </div>

                    <MetricsStrip metrics=metrics />

                    <p class="hero-reassurance">
                        <Icon icon=IconRef::CheckCircle class="icon-sm" />
                        <span>{reassurance}</span>
                    </p>
                </div>

                <LiveDraftPreview preview=preview />
            </div>
        </section>
    }
}

#[component]
pub fn MetricsStrip(metrics: Vec<Metric>) -> impl IntoView {
    view! {
        <div class="metrics">
            {metrics
                .into_iter()
                .map(|metric| {
                    view! {
                        <div class="metric">
                            <div class="metric-value">{metric.value}</div>
                            <div class="metric-label">{metric.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Illustrative draft card. Its buttons are decorative and stay disabled.
#[component]
pub fn LiveDraftPreview(preview: DraftPreview) -> impl IntoView {
    let DraftPreview {
        title,
        subtitle,
        badge,
        chapters,
        modes_label,
        modes,
        primary_action,
        secondary_action,
    } = preview;

    view! {
        <Card class="draft-preview">
            <div class="draft-head">
                <div>
                    <div class="draft-title">{title}</div>
                    <div class="draft-subtitle">{subtitle}</div>
                </div>
                <Badge>{badge}</Badge>
            </div>
            <Separator />
            <div class="draft-chapters">
                {chapters
                    .into_iter()
                    .map(|chapter| {
                        view! {
                            <div class="draft-chapter">
                                <div class="draft-chapter-label">{chapter.label}</div>
                                <div class="draft-chapter-title">{chapter.title}</div>
                                <SkeletonLines lines=chapter.lines />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="draft-modes">
                <div class="draft-modes-label">{modes_label}</div>
                <div class="draft-mode-badges">
                    {modes
                        .into_iter()
                        .map(|mode| view! { <Badge variant=BadgeVariant::Soft>{mode}</Badge> })
                        .collect_view()}
                </div>
            </div>
            <div class="draft-actions">
                <Button class="btn-block" disabled=true>
                    <Icon icon=IconRef::Wand class="icon-sm" />
                    {primary_action}
                </Button>
                <Button variant=ButtonVariant::Outline class="btn-block" disabled=true>
                    <Icon icon=IconRef::Download class="icon-sm" />
                    {secondary_action}
                </Button>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::recording::{self, Call};
    use crate::catalog::Catalog;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn hero_buttons_report_hero_source() {
        let (actions, calls) = recording::actions();
        let (signup, demo) = hero_ctas(&actions);

        signup.run(());
        demo.run(());
        assert_eq!(
            calls.take(),
            vec![Call::Signup(CtaSource::Hero), Call::Demo(CtaSource::Hero)]
        );
    }

    #[test]
    fn hero_renders_brand_copy_and_metrics() {
        let catalog = Catalog::readywrite();
        let html = view! {
            <HeroPanel
                brand=catalog.brand.clone()
                hero=catalog.hero.clone()
                actions=PageActions::inert()
            />
        }
        .to_html();

        assert!(html.contains(r#"id="top""#));
        assert!(html.contains(&catalog.brand.tagline));
        assert!(html.contains(&catalog.brand.subtagline));
        assert_eq!(html.matches(r#"class="metric""#).count(), 3);
        assert!(html.contains("No credit card required to start."));
        assert_eq!(html.matches(r#"class="pill""#).count(), catalog.hero.pills.len());
    }

    #[test]
    fn preview_buttons_are_inert() {
        let catalog = Catalog::readywrite();
        let html = view! { <LiveDraftPreview preview=catalog.hero.preview.clone() /> }.to_html();

        assert_eq!(html.matches("disabled").count(), 2);
        assert_eq!(html.matches(r#"class="draft-chapter""#).count(), 2);
        assert!(html.contains("The Moment the Idea Hit Me"));
    }
}

//! Per-record card templates used with [`super::Section`].

use leptos::prelude::*;

use super::{Badge, BadgeVariant, Button, ButtonVariant, Card, Icon, Separator, SkeletonLines};
use crate::actions::{CtaSource, cta};
use crate::catalog::{
    ExampleShowcase, FaqEntry, FeatureRecord, IconRef, PricingTier, StepRecord, Testimonial,
};

#[component]
pub fn StepCard(step: StepRecord) -> impl IntoView {
    view! {
        <Card class="step-card">
            <div class="step-head">
                <div>
                    <div class="step-ordinal">{step.ordinal}</div>
                    <h3 class="card-title">{step.title}</h3>
                </div>
                <div class="icon-tile">
                    <Icon icon=step.icon />
                </div>
            </div>
            <p class="card-text">{step.description}</p>
        </Card>
    }
}

#[component]
pub fn FeatureCard(feature: FeatureRecord) -> impl IntoView {
    view! {
        <Card class="feature-card">
            <div class="feature-head">
                <div class="icon-tile">
                    <Icon icon=feature.icon />
                </div>
                <h3 class="card-title">{feature.title}</h3>
            </div>
            <p class="card-text">{feature.description}</p>
        </Card>
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let quote = format!("“{}”", testimonial.quote);
    let attribution = format!("— {}", testimonial.attribution);
    view! {
        <Card class="testimonial-card">
            <Icon icon=IconRef::Quote class="icon muted" />
            <blockquote class="testimonial-quote">{quote}</blockquote>
            <div class="testimonial-attribution">{attribution}</div>
        </Card>
    }
}

fn tier_cta(start_signup: Callback<CtaSource>, tier: &str) -> Callback<()> {
    cta(start_signup, CtaSource::Pricing { tier: tier.to_string() })
}

/// Pricing tier. The highlighted tier gets `badge` and the primary button;
/// the others get outline buttons.
#[component]
pub fn PricingCard(
    tier: PricingTier,
    badge: String,
    start_signup: Callback<CtaSource>,
) -> impl IntoView {
    let PricingTier {
        name,
        price,
        period,
        description,
        highlighted,
        benefits,
        cta,
    } = tier;

    let card_class = if highlighted {
        "pricing-card highlighted"
    } else {
        "pricing-card"
    };
    let variant = if highlighted {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };
    let on_press = tier_cta(start_signup, &name);

    view! {
        <Card class=card_class>
            <div class="pricing-head">
                <div>
                    <h3 class="pricing-name">{name}</h3>
                    <p class="card-text">{description}</p>
                </div>
                {highlighted.then(|| view! { <Badge>{badge}</Badge> })}
            </div>
            <div class="pricing-price">
                <span class="price">{price}</span>
                <span class="period">{period}</span>
            </div>
            <Button variant=variant class="btn-block" on_press=on_press>
                {cta}
            </Button>
            <Separator />
            <ul class="benefits">
                {benefits
                    .into_iter()
                    .map(|benefit| {
                        view! {
                            <li class="benefit">
                                <Icon icon=IconRef::CheckCircle class="icon-sm" />
                                <span>{benefit}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Card>
    }
}

#[component]
pub fn ExampleCard(example: ExampleShowcase) -> impl IntoView {
    view! {
        <Card class="example-card">
            <div class="example-head">
                <h3 class="card-title">{example.title}</h3>
                <Badge variant=BadgeVariant::Soft>{example.tag}</Badge>
            </div>
            <p class="card-text">{example.description}</p>
            <div class="preview-box">
                <div class="preview-label">{example.preview_label}</div>
                <SkeletonLines lines=example.lines />
            </div>
        </Card>
    }
}

#[component]
pub fn FaqCard(entry: FaqEntry) -> impl IntoView {
    view! {
        <Card class="faq-card">
            <h3 class="faq-question">{entry.question}</h3>
            <p class="card-text">{entry.answer}</p>
        </Card>
    }
}

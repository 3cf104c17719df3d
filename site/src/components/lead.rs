//! Email capture card wired to a [`LeadIntake`].

use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;

use super::{Badge, BadgeVariant, Button, Card};
use crate::catalog::{LeadCopy, SectionId};
use crate::error::IntakeError;
use crate::intake::{Lead, SharedIntake};
use crate::state::{LeadForm, SubmitOutcome};

/// Run one intake call. `None` when it was aborted before finishing.
async fn deliver(
    intake: SharedIntake,
    lead: Lead,
    registration: AbortRegistration,
) -> Option<Result<(), IntakeError>> {
    Abortable::new(intake.submit(lead), registration).await.ok()
}

#[component]
pub fn LeadCaptureForm(copy: LeadCopy, intake: SharedIntake) -> impl IntoView {
    let form = RwSignal::new(LeadForm::new());

    // Pending submission, aborted on teardown so nothing writes to a
    // disposed signal.
    let in_flight: Arc<Mutex<Option<AbortHandle>>> = Arc::default();
    let pending = Arc::clone(&in_flight);
    on_cleanup(move || {
        if let Some(handle) = pending.lock().ok().and_then(|mut slot| slot.take()) {
            debug!("aborting lead submission on teardown");
            handle.abort();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(SubmitOutcome::Dispatch(lead)) = form.try_update(|f| f.on_submit()) else {
            return;
        };

        let (handle, registration) = AbortHandle::new_pair();
        if let Ok(mut slot) = in_flight.lock() {
            *slot = Some(handle);
        }
        let intake = Arc::clone(&intake);
        let in_flight = Arc::clone(&in_flight);
        spawn_local(async move {
            if let Some(result) = deliver(intake, lead, registration).await {
                form.try_update(|f| f.complete(result));
                if let Ok(mut slot) = in_flight.lock() {
                    slot.take();
                }
            }
        });
    };

    let LeadCopy {
        title,
        description,
        perks,
        email_label,
        placeholder,
        button,
        fine_print,
    } = copy;

    view! {
        <section id=SectionId::Updates.anchor() class="section lead-section">
            <div class="container">
                <Card class="lead-card">
                    <div class="lead-grid">
                        <div class="lead-copy">
                            <h2 class="section-title">{title}</h2>
                            <p class="section-description">{description}</p>
                            <div class="lead-perks">
                                {perks
                                    .into_iter()
                                    .map(|perk| view! { <Badge variant=BadgeVariant::Soft>{perk}</Badge> })
                                    .collect_view()}
                            </div>
                        </div>

                        <form class="lead-form" novalidate=true on:submit=on_submit>
                            <label class="lead-label" for="lead-email">{email_label}</label>
                            <div class="lead-row">
                                <input
                                    id="lead-email"
                                    class="input"
                                    type="email"
                                    name="email"
                                    autocomplete="email"
                                    placeholder=placeholder
                                    prop:value=move || form.with(|f| f.draft().to_string())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.on_email_change(value));
                                    }
                                />
                                <Button
                                    kind="submit"
                                    disabled=Signal::derive(move || form.with(LeadForm::is_submitting))
                                >
                                    {button}
                                </Button>
                            </div>
                            <p
                                class=move || {
                                    form.with(|f| {
                                        f.notice().map(|n| n.tone.class()).unwrap_or("lead-notice")
                                    })
                                }
                                role="status"
                                aria-live="polite"
                            >
                                {move || form.with(|f| f.notice().map(|n| n.text).unwrap_or_default())}
                            </p>
                            <p class="lead-fine-print">{fine_print}</p>
                        </form>
                    </div>
                </Card>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::intake::{LeadIntake, UnconfiguredIntake};
    use futures::executor::block_on;
    use futures::future::{FutureExt, LocalBoxFuture};
    use leptos::tachys::view::RenderHtml;

    #[derive(Default)]
    struct Recording(Mutex<Vec<Lead>>);

    impl LeadIntake for Recording {
        fn submit(&self, lead: Lead) -> LocalBoxFuture<'static, Result<(), IntakeError>> {
            if let Ok(mut leads) = self.0.lock() {
                leads.push(lead);
            }
            futures::future::ready(Ok(())).boxed_local()
        }
    }

    #[test]
    fn delivered_lead_completes_the_form() {
        let intake = Arc::new(Recording::default());
        let mut form = LeadForm::new();
        form.on_email_change("a@b.com");
        let SubmitOutcome::Dispatch(lead) = form.on_submit() else {
            panic!("valid draft should dispatch");
        };

        let (_handle, registration) = AbortHandle::new_pair();
        let result = block_on(deliver(intake.clone(), lead, registration));
        assert_eq!(result, Some(Ok(())));

        form.complete(result.expect("not aborted"));
        let notice = form.notice().expect("acknowledgment");
        assert_eq!(notice.text, "Thanks! We’ll reach out to: a@b.com");

        let recorded = intake.0.lock().expect("lock");
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].email, "a@b.com");
    }

    #[test]
    fn aborted_submission_reports_nothing() {
        let (handle, registration) = AbortHandle::new_pair();
        handle.abort();
        let result = block_on(deliver(Arc::new(Recording::default()), Lead::new("a@b.com"), registration));
        assert_eq!(result, None);
    }

    #[test]
    fn failed_delivery_surfaces_error() {
        let (_handle, registration) = AbortHandle::new_pair();
        let result = block_on(deliver(Arc::new(UnconfiguredIntake), Lead::new("a@b.com"), registration));
        assert_eq!(result, Some(Err(IntakeError::NotConfigured)));
    }

    #[test]
    fn renders_copy_and_anchor() {
        let catalog = Catalog::readywrite();
        let html = view! {
            <LeadCaptureForm copy=catalog.lead.clone() intake=Arc::new(UnconfiguredIntake) />
        }
        .to_html();

        assert!(html.contains(r#"id="updates""#));
        assert!(html.contains(r#"placeholder="you@example.com""#));
        assert!(html.contains("Notify me"));
        assert!(html.contains(r#"role="status""#));
        assert!(html.contains(r#"type="submit""#));
        assert!(!html.contains("disabled"));
    }
}

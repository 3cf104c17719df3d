// ReadyWrite landing page, browser build (Leptos 0.8 CSR, served by trunk).
//
// Endpoints are baked in at build time:
//   READYWRITE_INTAKE_URL  lead intake (POST JSON)      default /api/leads, resolved against the page origin
//   READYWRITE_SIGNUP_URL  signup / trial flow          default /signup
//   READYWRITE_LOGIN_URL   login page                   default /login
//   READYWRITE_DEMO_URL    demo video, opens a new tab  default /demo

use std::sync::Arc;

use leptos::prelude::*;
use tracing::{error, info, warn};
use wasm_bindgen::JsValue;

use readywrite_site::components::LandingPage;
use readywrite_site::intake::{HttpIntake, SharedIntake, UnconfiguredIntake};
use readywrite_site::styles::SITE_CSS;
use readywrite_site::{Catalog, CtaSource, PageActions, SharedClock, SystemClock};

const INTAKE_URL: &str = match option_env!("READYWRITE_INTAKE_URL") {
    Some(url) => url,
    None => "/api/leads",
};
const SIGNUP_URL: &str = match option_env!("READYWRITE_SIGNUP_URL") {
    Some(url) => url,
    None => "/signup",
};
const LOGIN_URL: &str = match option_env!("READYWRITE_LOGIN_URL") {
    Some(url) => url,
    None => "/login",
};
const DEMO_URL: &str = match option_env!("READYWRITE_DEMO_URL") {
    Some(url) => url,
    None => "/demo",
};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&JsValue::from_str(&format!("logger unavailable: {err}")));
    }

    // An invalid shipped catalog is a build defect: leave the page unmounted.
    let catalog = Catalog::readywrite();
    if let Err(err) = catalog.validate() {
        error!(error = %err, "shipped catalog is invalid; not mounting");
        return;
    }
    info!("mounting landing page");

    let catalog = Arc::new(catalog);
    leptos::mount::mount_to_body(move || view! { <App catalog=catalog /> });
}

/// Full-page navigation to `url`.
fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(url) {
        warn!(url, ?err, "navigation failed");
    }
}

fn signup_url(source: &CtaSource) -> String {
    let source: String = js_sys::encode_uri_component(&source.to_string()).into();
    let separator = if SIGNUP_URL.contains('?') { '&' } else { '?' };
    format!("{SIGNUP_URL}{separator}source={source}")
}

/// HTTP intake for `INTAKE_URL`, resolved against the page origin.
///
/// A bad endpoint disables lead capture (the form reports a failure) rather
/// than the page.
fn lead_intake() -> SharedIntake {
    let origin = web_sys::window().and_then(|window| window.location().origin().ok());
    let intake = match origin.as_deref() {
        Some(origin) => HttpIntake::resolve(origin, INTAKE_URL),
        None => HttpIntake::new(INTAKE_URL),
    };
    match intake {
        Ok(intake) => {
            info!(endpoint = intake.endpoint(), "lead intake ready");
            Arc::new(intake)
        }
        Err(err) => {
            error!(error = %err, "lead intake disabled");
            Arc::new(UnconfiguredIntake)
        }
    }
}

fn browser_actions() -> PageActions {
    PageActions {
        start_signup: Callback::new(|source: CtaSource| {
            info!(%source, "start signup");
            navigate(&signup_url(&source));
        }),
        play_demo: Callback::new(|source: CtaSource| {
            info!(%source, "play demo");
            let opened = web_sys::window().map(|w| w.open_with_url_and_target(DEMO_URL, "_blank"));
            if let Some(Err(err)) = opened {
                warn!(?err, "could not open demo");
            }
        }),
        login: Callback::new(|_: ()| navigate(LOGIN_URL)),
        intake: lead_intake(),
    }
}

#[component]
fn App(catalog: Arc<Catalog>) -> impl IntoView {
    let clock: SharedClock = Arc::new(SystemClock);

    view! {
        <style>{SITE_CSS}</style>
        <LandingPage catalog=catalog actions=browser_actions() clock=clock />
    }
}

//! Host-supplied side effects.
//!
//! The page never performs navigation or I/O itself; every control invokes
//! one of these callbacks with a payload describing where it was activated.

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;
use tracing::debug;

use crate::intake::{SharedIntake, UnconfiguredIntake};

/// Which control fired a call-to-action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CtaSource {
    Header,
    MobilePanel,
    Hero,
    Pricing { tier: String },
    Footer,
}

impl fmt::Display for CtaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CtaSource::Header => write!(f, "header"),
            CtaSource::MobilePanel => write!(f, "mobile-panel"),
            CtaSource::Hero => write!(f, "hero"),
            CtaSource::Pricing { tier } => write!(f, "pricing:{tier}"),
            CtaSource::Footer => write!(f, "footer"),
        }
    }
}

#[derive(Clone)]
pub struct PageActions {
    /// Begin signup / trial.
    pub start_signup: Callback<CtaSource>,
    /// Play the product demo.
    pub play_demo: Callback<CtaSource>,
    pub login: Callback<()>,
    pub intake: SharedIntake,
}

impl PageActions {
    /// Callbacks that only log. Used for static export and previews.
    pub fn inert() -> Self {
        Self {
            start_signup: Callback::new(|source: CtaSource| {
                debug!(%source, "start_signup (inert)");
            }),
            play_demo: Callback::new(|source: CtaSource| {
                debug!(%source, "play_demo (inert)");
            }),
            login: Callback::new(|_: ()| debug!("login (inert)")),
            intake: Arc::new(UnconfiguredIntake),
        }
    }
}

/// Button press handler that reports `source` to `callback`.
pub fn cta(callback: Callback<CtaSource>, source: CtaSource) -> Callback<()> {
    Callback::new(move |_: ()| callback.run(source.clone()))
}

impl fmt::Debug for PageActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageActions").finish_non_exhaustive()
    }
}

/// [`PageActions`] that record every call, for handler tests.
#[cfg(test)]
pub(crate) mod recording {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Call {
        Signup(CtaSource),
        Demo(CtaSource),
        Login,
    }

    #[derive(Clone, Default)]
    pub struct Calls(Arc<Mutex<Vec<Call>>>);

    impl Calls {
        fn push(&self, call: Call) {
            if let Ok(mut calls) = self.0.lock() {
                calls.push(call);
            }
        }

        /// Everything recorded so far, clearing the log.
        pub fn take(&self) -> Vec<Call> {
            self.0.lock().map(|mut calls| calls.drain(..).collect()).unwrap_or_default()
        }
    }

    pub fn actions() -> (PageActions, Calls) {
        let calls = Calls::default();
        let (signup, demo, login) = (calls.clone(), calls.clone(), calls.clone());
        let actions = PageActions {
            start_signup: Callback::new(move |source: CtaSource| signup.push(Call::Signup(source))),
            play_demo: Callback::new(move |source: CtaSource| demo.push(Call::Demo(source))),
            login: Callback::new(move |_: ()| login.push(Call::Login)),
            intake: Arc::new(UnconfiguredIntake),
        };
        (actions, calls)
    }
}

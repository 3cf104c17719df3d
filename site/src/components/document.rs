//! Root document for static export: `<html>`, `<head>` with inlined CSS, and
//! the landing page as the body.

use std::sync::Arc;

use leptos::prelude::*;

use super::LandingPage;
use crate::actions::PageActions;
use crate::catalog::Catalog;
use crate::clock::SharedClock;
use crate::styles::{CSP, SITE_CSS};

#[component]
pub fn SiteDocument(catalog: Arc<Catalog>, actions: PageActions, clock: SharedClock) -> impl IntoView {
    let title = format!("{} | {}", catalog.brand.name, catalog.brand.byline);
    let description = catalog.brand.subtagline.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <LandingPage catalog=catalog actions=actions clock=clock />
            </body>
        </html>
    }
}

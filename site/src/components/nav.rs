//! Sticky header: logo, desktop links, and the collapsible mobile panel.

use leptos::prelude::*;

use super::{Button, ButtonVariant, Icon, Separator};
use crate::actions::{CtaSource, PageActions, cta};
use crate::catalog::{BrandConfig, IconRef, NavLink, SectionId};
use crate::state::{Disclosure, NavEvent};

/// Brand mark: monogram tile, name and byline. Links back to the top.
#[component]
pub fn LogoMark(name: String, byline: String) -> impl IntoView {
    let monogram: String = name.chars().take(1).collect();
    view! {
        <a href=SectionId::Top.href() class="logo">
            <span class="logo-tile">{monogram}</span>
            <span class="logo-text">
                <span class="logo-name">{name}</span>
                <span class="logo-byline">{byline}</span>
            </span>
        </a>
    }
}

/// One anchor per catalog nav entry, in catalog order.
///
/// Shared by the desktop bar, the mobile panel and the footer so the three
/// lists cannot drift apart.
#[component]
pub fn NavAnchors(
    links: Vec<NavLink>,
    #[prop(default = "nav-link")] class: &'static str,
    /// Fired after a link is followed
    #[prop(optional, into)]
    on_follow: Option<Callback<()>>,
) -> impl IntoView {
    links
        .into_iter()
        .map(|link| {
            view! {
                <a
                    href=link.target.href()
                    class=class
                    data-nav=link.target.anchor()
                    on:click=move |_| {
                        if let Some(callback) = on_follow {
                            callback.run(());
                        }
                    }
                >
                    {link.label}
                </a>
            }
        })
        .collect_view()
}

/// Press handlers for the header's buttons and links.
///
/// Controls inside the mobile panel collapse it before running their action.
#[derive(Clone, Copy)]
struct ShellHandlers {
    header_cta: Callback<()>,
    login: Callback<()>,
    panel_cta: Callback<()>,
    panel_login: Callback<()>,
    follow_link: Callback<()>,
}

impl ShellHandlers {
    fn new(actions: &PageActions, disclosure: RwSignal<Disclosure>) -> Self {
        let collapse = move || disclosure.update(|state| *state = state.apply(NavEvent::LinkActivated));
        let login = actions.login;
        let signup = cta(actions.start_signup, CtaSource::MobilePanel);

        Self {
            header_cta: cta(actions.start_signup, CtaSource::Header),
            login,
            panel_cta: Callback::new(move |_: ()| {
                collapse();
                signup.run(());
            }),
            panel_login: Callback::new(move |_: ()| {
                collapse();
                login.run(());
            }),
            follow_link: Callback::new(move |_: ()| collapse()),
        }
    }
}

#[component]
pub fn NavigationShell(brand: BrandConfig, links: Vec<NavLink>, actions: PageActions) -> impl IntoView {
    let disclosure = RwSignal::new(Disclosure::default());
    let handlers = ShellHandlers::new(&actions, disclosure);

    let cta_label = brand.cta_primary.clone();
    let login_label = brand.login_label.clone();
    let panel_links = links.clone();

    view! {
        <header class="site-header">
            <div class="container header-inner">
                <LogoMark name=brand.name byline=brand.byline />

                <nav class="nav-desktop" aria-label="Primary">
                    <NavAnchors links=links />
                </nav>

                <div class="header-actions">
                    <Button variant=ButtonVariant::Ghost on_press=handlers.login>
                        {brand.login_label}
                    </Button>
                    <Button on_press=handlers.header_cta>{brand.cta_primary}</Button>
                </div>

                <button
                    type="button"
                    class="menu-toggle"
                    aria-controls="mobile-nav"
                    aria-label=brand.menu_label
                    aria-expanded=move || disclosure.get().is_open().to_string()
                    on:click=move |_| disclosure.update(|state| *state = state.apply(NavEvent::Toggle))
                >
                    {move || {
                        let icon = if disclosure.get().is_open() {
                            IconRef::Close
                        } else {
                            IconRef::Menu
                        };
                        view! { <Icon icon=icon /> }
                    }}
                </button>
            </div>

            <div id="mobile-nav" class="mobile-panel" class:open=move || disclosure.get().is_open()>
                <div class="container mobile-panel-inner">
                    <NavAnchors links=panel_links class="mobile-link" on_follow=handlers.follow_link />
                    <Separator />
                    <div class="mobile-actions">
                        <Button variant=ButtonVariant::Outline on_press=handlers.panel_login>
                            {login_label}
                        </Button>
                        <Button on_press=handlers.panel_cta>{cta_label}</Button>
                    </div>
                </div>
            </div>
        </header>
    }
}

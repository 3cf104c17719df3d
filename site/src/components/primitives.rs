//! Small presentational building blocks: button, card, badge, pill, separator.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    /// Extra classes appended after the variant classes
    #[prop(default = "")]
    class: &'static str,
    /// `type` attribute; `submit` inside forms
    #[prop(default = "button")]
    kind: &'static str,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        variant.class().to_string()
    } else {
        format!("{} {}", variant.class(), class)
    };

    view! {
        <button
            type=kind
            class=class
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |_| {
                if let Some(callback) = on_press {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
pub fn Card(
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };
    view! {
        <div class=class>
            <div class="card-content">{children()}</div>
        </div>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Solid,
    Soft,
}

#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    let class = match variant {
        BadgeVariant::Solid => "badge",
        BadgeVariant::Soft => "badge badge-soft",
    };
    view! { <span class=class>{children()}</span> }
}

#[component]
pub fn Pill(children: Children) -> impl IntoView {
    view! { <span class="pill">{children()}</span> }
}

#[component]
pub fn Separator() -> impl IntoView {
    view! { <hr class="separator" /> }
}

/// Placeholder text lines of the given widths (percent).
#[component]
pub fn SkeletonLines(lines: Vec<u8>) -> impl IntoView {
    view! {
        <div class="skeleton">
            {lines
                .into_iter()
                .map(|width| {
                    let style = format!("width: {}%", width.min(100));
                    view! { <div class="skeleton-line" style=style></div> }
                })
                .collect_view()}
        </div>
    }
}

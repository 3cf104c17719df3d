//! Inline SVG glyphs (Lucide-style, 24px stroke icons).

use leptos::prelude::*;

use crate::catalog::IconRef;

impl IconRef {
    /// SVG path data (`d` attribute) for the glyph.
    pub fn path(self) -> &'static str {
        match self {
            IconRef::Mic => "M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3zM19 10v2a7 7 0 0 1-14 0v-2M12 19v3",
            IconRef::FileAudio => "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8zM14 2v6h6M10 17a2 2 0 1 1-4 0 2 2 0 0 1 4 0zM10 17v-6l4 2",
            IconRef::Sparkles => "M9.94 14.06 8 21l-1.94-6.94L0 12l6.06-1.94L8 3l1.94 7.06L16 12zM19 2v4M21 4h-4",
            IconRef::Wand => "M15 4V2M15 16v-2M8 9h2M20 9h2M17.8 11.8 19 13M17.8 6.2 19 5M3 21l9-9M12.2 6.2 11 5",
            IconRef::BookOpen => "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2zM22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            IconRef::ShieldCheck => "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10zM9 12l2 2 4-4",
            IconRef::Download => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3",
            IconRef::CheckCircle => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM9 12l2 2 4-4",
            IconRef::ArrowRight => "M5 12h14M12 5l7 7-7 7",
            IconRef::Quote => "M3 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2H4c-1.25 0-2 .75-2 2v6c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 0-1 1v3c0 1 0 1 1 1zM15 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2h-4c-1.25 0-2 .75-2 2v6c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z",
            IconRef::PlayCircle => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM10 8l6 4-6 4z",
            IconRef::Mail => "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6",
            IconRef::Phone => "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
            IconRef::MapPin => "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            IconRef::Menu => "M4 6h16M4 12h16M4 18h16",
            IconRef::Close => "M18 6 6 18M6 6l12 12",
        }
    }
}

/// Renders a catalog glyph as inline SVG.
///
/// ```rust,ignore
/// view! { <Icon icon=IconRef::Mic class="icon-md" /> }
/// ```
#[component]
pub fn Icon(
    icon: IconRef,
    /// CSS class on the `<svg>` element
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=icon.path()></path>
        </svg>
    }
}

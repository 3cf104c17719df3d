//! The shared section scaffold.
//!
//! Every catalog list (steps, features, testimonials, pricing, examples, FAQ)
//! renders through [`Section`]: a centered heading block followed by one card
//! per record, produced by a per-record template closure.

use leptos::prelude::*;

use super::{Badge, BadgeVariant};
use crate::catalog::{SectionHeading, SectionId};

/// Eyebrow badge, title and description. Missing parts render nothing.
#[component]
pub fn SectionTitle(heading: SectionHeading) -> impl IntoView {
    let SectionHeading {
        eyebrow,
        title,
        description,
    } = heading;

    view! {
        <div class="section-header">
            {eyebrow.map(|eyebrow| {
                view! {
                    <div class="section-eyebrow">
                        <Badge variant=BadgeVariant::Soft>{eyebrow}</Badge>
                    </div>
                }
            })}
            <h2 class="section-title">{title}</h2>
            {description.map(|description| {
                view! { <p class="section-description">{description}</p> }
            })}
        </div>
    }
}

/// Titled, optionally anchored section with one grid item per record.
///
/// Records keep their declared order. An empty list still renders the heading.
/// `children`, when given, renders after the grid.
#[component]
pub fn Section<T, F, V>(
    #[prop(optional)] id: Option<SectionId>,
    heading: SectionHeading,
    records: Vec<T>,
    /// Per-record card template
    card: F,
    /// Grid layout modifier (`grid-3`, `grid-2`, ...)
    #[prop(default = "grid-3")]
    grid: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView
where
    T: 'static,
    F: Fn(T) -> V + 'static,
    V: IntoView + 'static,
{
    let grid_class = format!("section-grid {grid}");
    let items = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            view! { <div class="section-item" data-index=index.to_string()>{card(record)}</div> }
        })
        .collect_view();

    view! {
        <section id=id.map(SectionId::anchor) class="section">
            <div class="container">
                <SectionTitle heading=heading />
                <div class=grid_class>{items}</div>
                {children.map(|children| children())}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render(heading: SectionHeading, records: Vec<&'static str>) -> String {
        view! {
            <Section
                id=SectionId::Features
                heading=heading
                records=records
                card=|record: &'static str| view! { <p class="item">{record}</p> }
            />
        }
        .to_html()
    }

    fn items(html: &str) -> Vec<String> {
        html.split(r#"<p class="item">"#)
            .skip(1)
            .filter_map(|chunk| chunk.split("</p>").next())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn one_item_per_record_in_order() {
        let html = render(SectionHeading::new("Title"), vec!["gamma", "alpha", "beta"]);

        assert_eq!(html.matches(r#"class="section-item""#).count(), 3);
        assert_eq!(items(&html), vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn empty_records_still_render_heading() {
        let html = render(SectionHeading::new("Nothing yet"), vec![]);

        assert!(html.contains("Nothing yet"));
        assert_eq!(html.matches(r#"class="section-item""#).count(), 0);
    }

    #[test]
    fn anchor_is_attached() {
        let html = render(SectionHeading::new("Title"), vec!["a"]);
        assert!(html.contains(r#"id="features""#));
    }

    #[test]
    fn optional_heading_parts_are_omitted() {
        let html = render(SectionHeading::new("Bare"), vec!["a"]);
        assert!(!html.contains("section-eyebrow"));
        assert!(!html.contains("section-description"));

        let full = render(
            SectionHeading::new("Full").eyebrow("Eyebrow").description("Desc"),
            vec!["a"],
        );
        assert!(full.contains("section-eyebrow"));
        assert!(full.contains("Eyebrow"));
        assert!(full.contains(r#"<p class="section-description">Desc</p>"#));
    }

    #[test]
    fn works_for_struct_records() {
        #[derive(Clone)]
        struct Row {
            name: &'static str,
            n: u32,
        }

        let rows = vec![Row { name: "x", n: 1 }, Row { name: "y", n: 2 }];
        let html = view! {
            <Section
                heading=SectionHeading::new("Rows")
                records=rows
                card=|row: Row| view! { <p class="item">{format!("{}={}", row.name, row.n)}</p> }
                grid="grid-2"
            />
        }
        .to_html();

        assert_eq!(items(&html), vec!["x=1", "y=2"]);
        assert!(html.contains("section-grid grid-2"));
        assert!(!html.contains(" id="));
    }
}

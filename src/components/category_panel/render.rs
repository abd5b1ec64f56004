//! HTML rendering for the category panel.

use std::fmt::Write;

use crate::components::notice;
use crate::config::selectors::CATEGORY_INDEX_ATTR;
use crate::core::{escape_attr, escape_html};
use crate::models::{Category, CategorySelection, Loadable};

use super::css;

/// Render the category cards, marking the selected one.
///
/// Cards appear in input order; each carries its index so a delegated
/// click handler can map it back to its category.
pub fn render_category_panel(
    state: &Loadable<Vec<Category>>,
    selection: &CategorySelection,
) -> String {
    let categories = match state {
        Loadable::Idle => return String::new(),
        Loadable::Failed(err) => return notice::render_error(err),
        Loadable::Loaded(categories) => categories,
    };

    let mut html = format!(
        r#"<div class="card {}"><div class="card-group">"#,
        css::group
    );
    for (i, category) in categories.iter().enumerate() {
        let selected = if selection.is_selected(i) {
            css::selected
        } else {
            ""
        };
        let _ = write!(
            html,
            r#"<div class="card {card}"><div class="card-body {body} {selected}" {attr}="{i}"><h4 class="card-title {title}">{name}</h4><img class="{thumb}" src="{photo}" alt="" draggable="false"></div></div>"#,
            card = css::card,
            body = css::body,
            selected = selected,
            attr = CATEGORY_INDEX_ATTR,
            i = i,
            title = css::title,
            name = escape_html(&category.item_name),
            thumb = css::thumbnail,
            photo = escape_attr(&category.item_photo),
        );
    }
    html.push_str("</div></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoadError;
    use crate::models::Endpoint;

    fn categories(names: &[&str]) -> Vec<Category> {
        names
            .iter()
            .map(|name| Category {
                item_name: name.to_string(),
                item_photo: format!("/img/{}.png", name.to_lowercase()),
                item_key: None,
            })
            .collect()
    }

    fn card_titles(html: &str) -> Vec<String> {
        html.split("<h4 class=\"card-title ")
            .skip(1)
            .filter_map(|rest| {
                let start = rest.find('>')? + 1;
                let end = rest.find("</h4>")?;
                Some(rest[start..end].to_string())
            })
            .collect()
    }

    fn selected_count(html: &str) -> usize {
        html.matches(&format!(" {}\" {}=", css::selected, CATEGORY_INDEX_ATTR))
            .count()
    }

    #[test]
    fn test_one_card_per_category_in_order() {
        let list = categories(&["Totems", "Gapples", "Elytra", "Armor"]);
        let html = render_category_panel(
            &Loadable::Loaded(list),
            &CategorySelection::default(),
        );
        assert_eq!(card_titles(&html), vec!["Totems", "Gapples", "Elytra", "Armor"]);
        for i in 0..4 {
            assert!(html.contains(&format!("{}=\"{}\"", CATEGORY_INDEX_ATTR, i)));
        }
        assert!(html.contains("src=\"/img/elytra.png\""));
        assert_eq!(selected_count(&html), 0);
    }

    #[test]
    fn test_only_latest_selection_is_marked() {
        let list = categories(&["Weapons", "Armor", "Food"]);
        let mut selection = CategorySelection::default();
        selection.select(0, &list[0]);
        selection.select(1, &list[1]);

        let html = render_category_panel(&Loadable::Loaded(list), &selection);
        assert_eq!(selected_count(&html), 1);
        assert!(html.contains(&format!(
            "{} {}\" {}=\"1\"",
            css::body,
            css::selected,
            CATEGORY_INDEX_ATTR
        )));
        assert_eq!(selection.name(), "Armor");
    }

    #[test]
    fn test_names_and_photos_are_escaped() {
        let list = vec![Category {
            item_name: "<script>alert(1)</script>".to_string(),
            item_photo: "x\" onerror=\"alert(1)".to_string(),
            item_key: None,
        }];
        let html = render_category_panel(&Loadable::Loaded(list), &CategorySelection::default());
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("src=\"x&quot; onerror=&quot;alert(1)\""));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_idle_and_failed() {
        let idle = render_category_panel(&Loadable::Idle, &CategorySelection::default());
        assert!(idle.is_empty());

        let failed = render_category_panel(
            &Loadable::Failed(LoadError::Empty(Endpoint::Categories)),
            &CategorySelection::default(),
        );
        assert!(failed.contains("No categories available"));
        assert!(card_titles(&failed).is_empty());
    }
}

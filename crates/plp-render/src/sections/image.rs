//! Image column - thumbnail or initials placeholder, plus the wishlist toggle.

use plp_catalog::ListItem;
use plp_core::StoreSettings;

use crate::abbr::abbreviate;
use crate::markup::Element;
use crate::sections::wishlist_icon;

/// Render the image column for a row.
pub fn render_image(item: &ListItem, title: &str, settings: &StoreSettings, abbr_len: usize) -> Element {
    let link = Element::new("a")
        .class("product-link product-list-link")
        .attr("href", item.href());

    let link = match item.image() {
        Some(src) => link.child(
            Element::void("img")
                .class("website-image h-100 w-100")
                .attr("itemprop", "image")
                .attr("alt", title)
                .attr("src", src),
        ),
        None => link.style("text-decoration: none").child(
            Element::new("div")
                .class("card-img-top no-image-list")
                .text(abbreviate(title, abbr_len)),
        ),
    };

    let wishlist = item
        .wishlist_eligible(settings.enable_wishlist)
        .then(|| wishlist_icon(item));

    Element::new("div")
        .class("col-2 border text-center rounded list-image")
        .child(link)
        .child_opt(wishlist)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wishlist_on() -> StoreSettings {
        StoreSettings {
            enable_wishlist: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_thumbnail() {
        let item = ListItem {
            website_image: Some("/files/mug.png".into()),
            route: Some("mug".into()),
            ..ListItem::new("MUG")
        };
        let html = render_image(&item, "Red Mug", &StoreSettings::default(), 2).render();

        assert!(html.contains(r#"href="/mug""#));
        assert!(html.contains(r#"src="/files/mug.png""#));
        assert!(html.contains(r#"alt="Red Mug""#));
        assert!(!html.contains("no-image-list"));
    }

    #[test]
    fn test_placeholder_uses_initials() {
        let item = ListItem::new("MUG");
        let html = render_image(&item, "Red Mug", &StoreSettings::default(), 2).render();

        assert!(html.contains(r#"<div class="card-img-top no-image-list">RM</div>"#));
        assert!(html.contains(r#"style="text-decoration: none""#));
        assert!(html.contains(r#"href="/#""#));
    }

    #[test]
    fn test_wishlist_only_for_simple_items() {
        let simple = ListItem::new("MUG");
        let variant = ListItem {
            has_variants: true,
            ..ListItem::new("SHIRT")
        };

        assert!(render_image(&simple, "Mug", &wishlist_on(), 2).render().contains("like-action-list"));
        assert!(!render_image(&variant, "Shirt", &wishlist_on(), 2).render().contains("like-action-list"));
        assert!(!render_image(&simple, "Mug", &StoreSettings::default(), 2).render().contains("like-action-list"));
    }
}

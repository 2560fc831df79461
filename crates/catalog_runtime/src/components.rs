//! Catalog UI composition: the browsing grid, the category browser, and the detail page.

mod category_modal;
mod detail;
mod grid;
mod sentinel;

pub use category_modal::CategoryModal;
pub use detail::IconDetail;
pub use grid::CatalogGrid;

/// Route of the detail page for `id`.
pub fn icon_detail_href(id: &str) -> String {
    format!("/icon/{id}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn detail_href_embeds_record_id() {
        assert_eq!(icon_detail_href("golden-retriever"), "/icon/golden-retriever");
    }
}

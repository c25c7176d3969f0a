//! Name search over the loaded collection

use crate::product::Product;

/// Case-insensitive substring match on `name`, keeping source order.
/// An empty term matches everything.
pub fn filter_by_name(products: &[Product], term: &str) -> Vec<Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductId;

    fn named(names: &[&str]) -> Vec<Product> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Product {
                id: ProductId::new(i.to_string()),
                name: name.to_string(),
                description: format!("{} description", name),
                price: "1.00".into(),
            })
            .collect()
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let products = named(&["Widget", "Gadget", "Widge-Pro"]);

        for term in ["widg", "WIDG", "Widg"] {
            let found = filter_by_name(&products, term);
            assert_eq!(names(&found), vec!["Widget", "Widge-Pro"], "term {:?}", term);
        }
    }

    #[test]
    fn test_empty_term_returns_everything() {
        let products = named(&["Widget", "Gadget"]);
        assert_eq!(filter_by_name(&products, ""), products);
    }

    #[test]
    fn test_description_is_not_searched() {
        let products = named(&["Widget"]);
        assert!(filter_by_name(&products, "description").is_empty());
    }
}

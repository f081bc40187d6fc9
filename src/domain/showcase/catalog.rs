//! The seeded showcase catalog.
//!
//! Reference data only: never mutated at runtime, so one lazily-built
//! static serves every reader.

use once_cell::sync::Lazy;

use crate::domain::budget::Category;
use crate::domain::foundation::{Money, ShowcaseItemId};

use super::ShowcaseItem;

static CATALOG: Lazy<Vec<ShowcaseItem>> = Lazy::new(|| {
    let item = |id: &str, title: &str, description: &str, category, price_reais: i64, image: &str| {
        ShowcaseItem {
            id: ShowcaseItemId::new(id).expect("seeded catalog id is non-empty"),
            title: title.to_string(),
            description: description.to_string(),
            category,
            price: Money::from_centavos(price_reais * 100),
            image: image.to_string(),
        }
    };

    vec![
        item(
            "s1",
            "Ilha Gastronômica: Frutos do Mar",
            "Seleção premium com ostras frescas, camarões, ceviche e paella ao vivo.",
            Category::Venue,
            3800,
            "https://images.unsplash.com/photo-1559339352-11d035aa65de?auto=format&fit=crop&q=80&w=800",
        ),
        item(
            "s2",
            "Decoração: Túnel de Luzes",
            "Túnel iluminado instagramável para entrada dos noivos e fotos dos convidados.",
            Category::Decor,
            2200,
            "https://images.unsplash.com/photo-1519741497674-611481863552?auto=format&fit=crop&q=80&w=800",
        ),
        item(
            "s3",
            "Bar Premium: Gin Experience",
            "Estação exclusiva de Gin Tônica com especiarias e botânicos variados.",
            Category::Drink,
            2900,
            "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?auto=format&fit=crop&q=80&w=800",
        ),
        item(
            "s4",
            "Pista de Dança Personalizada",
            "Adesivagem de piso com monograma do casal e design exclusivo.",
            Category::Decor,
            1500,
            "https://images.unsplash.com/photo-1545128485-c400e7702796?auto=format&fit=crop&q=80&w=800",
        ),
        item(
            "s5",
            "Buffet da Madrugada: Mini Pizzas",
            "Rodada de pizzas artesanais servidas em pranchas de madeira.",
            Category::Venue,
            1600,
            "https://images.unsplash.com/photo-1513104890138-7c749659a591?auto=format&fit=crop&q=80&w=800",
        ),
        item(
            "s6",
            "Trio de Jazz para Coquetel",
            "Música ao vivo elegante para o momento de recepção e pôr do sol.",
            Category::Music,
            2800,
            "https://images.unsplash.com/photo-1415201364774-f6f0bb35f28f?auto=format&fit=crop&q=80&w=800",
        ),
        item(
            "s7",
            "Lembrancinha: Suculentas",
            "Mini suculentas em vasinhos de juta com tag de agradecimento.",
            Category::Extra,
            850,
            "https://images.unsplash.com/photo-1459416493396-b4b947988bf5?auto=format&fit=crop&q=80&w=800",
        ),
        item(
            "s8",
            "Fogos Indoor (Sparkles)",
            "Efeito visual frio para a primeira dança ou corte do bolo.",
            Category::Extra,
            1200,
            "https://images.unsplash.com/photo-1563293887-c10b7410c554?auto=format&fit=crop&q=80&w=800",
        ),
    ]
});

/// The full catalog, in display order.
pub fn catalog() -> &'static [ShowcaseItem] {
    &CATALOG
}

/// Looks up a catalog entry by id.
pub fn find_item(id: &ShowcaseItemId) -> Option<&'static ShowcaseItem> {
    CATALOG.iter().find(|item| &item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eight_entries_with_unique_ids() {
        let items = catalog();
        assert_eq!(items.len(), 8);

        let mut ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn find_item_locates_known_entries() {
        let id = ShowcaseItemId::new("s2").unwrap();
        let item = find_item(&id).unwrap();
        assert_eq!(item.price, Money::from_centavos(220_000));
        assert_eq!(item.category, Category::Decor);
    }

    #[test]
    fn find_item_returns_none_for_unknown_id() {
        let id = ShowcaseItemId::new("s99").unwrap();
        assert!(find_item(&id).is_none());
    }
}

//! The bundled Crunchwise snack range.

use crate::catalog::{Category, Nutrition, Product, ProductSize};

fn sizes(packs: &[(&str, f64)]) -> Vec<ProductSize> {
    packs
        .iter()
        .map(|&(size, price)| ProductSize {
            size: size.into(),
            price,
        })
        .collect()
}

fn nutrition(
    calories: &str,
    protein: &str,
    carbohydrates: &str,
    fat: &str,
    fiber: &str,
) -> Nutrition {
    Nutrition {
        calories: calories.into(),
        protein: protein.into(),
        carbohydrates: carbohydrates.into(),
        fat: fat.into(),
        fiber: fiber.into(),
    }
}

fn category(id: &str, name: &str, description: &str) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        image: format!("/images/categories/{id}.jpg"),
    }
}

pub(crate) fn categories() -> Vec<Category> {
    vec![
        category(
            "makhana",
            "Makhana",
            "Roasted fox nuts, never fried, in bold Indian flavours.",
        ),
        category(
            "chips",
            "Chips",
            "Baked millet and vegetable chips with all of the crunch.",
        ),
        category(
            "namkeen",
            "Namkeen",
            "Classic tea-time namkeen, roasted instead of deep fried.",
        ),
        category(
            "trail-mix",
            "Trail Mix",
            "Nuts, seeds and berries for the long afternoons.",
        ),
    ]
}

pub(crate) fn products() -> Vec<Product> {
    vec![
        Product {
            id: "makhana01".into(),
            name: "Peri Peri Makhana".into(),
            description: "Slow roasted makhana tossed in a fiery peri peri seasoning.".into(),
            category: "Makhana".into(),
            image: "/images/products/makhana01.jpg".into(),
            sizes: sizes(&[("30g", 49.0), ("75g", 99.0), ("200g", 249.0)]),
            ingredients: "Fox nuts (85%), rice bran oil, peri peri seasoning (chilli, garlic, \
                          onion, salt, lemon powder)"
                .into(),
            nutrition: nutrition("115 kcal", "3.2g", "17g", "3.9g", "2.1g"),
            featured: true,
        },
        Product {
            id: "makhana02".into(),
            name: "Himalayan Pink Salt Makhana".into(),
            description: "Just makhana, a little ghee and pink salt. Nothing to hide.".into(),
            category: "Makhana".into(),
            image: "/images/products/makhana02.jpg".into(),
            sizes: sizes(&[("30g", 49.0), ("75g", 99.0)]),
            ingredients: "Fox nuts (92%), ghee, Himalayan pink salt".into(),
            nutrition: nutrition("112 kcal", "3.4g", "18g", "3.1g", "2.3g"),
            featured: true,
        },
        Product {
            id: "makhana03".into(),
            name: "Cream & Onion Makhana".into(),
            description: "The cream and onion you grew up with, on a lighter snack.".into(),
            category: "Makhana".into(),
            image: "/images/products/makhana03.jpg".into(),
            sizes: sizes(&[("75g", 109.0)]),
            ingredients: "Fox nuts (84%), sunflower oil, milk solids, onion powder, parsley, salt"
                .into(),
            nutrition: nutrition("118 kcal", "3.3g", "17g", "4.2g", "2.0g"),
            featured: false,
        },
        Product {
            id: "chips01".into(),
            name: "Ragi Masala Chips".into(),
            description: "Baked finger millet chips with a tangy chaat masala dust.".into(),
            category: "Chips".into(),
            image: "/images/products/chips01.jpg".into(),
            sizes: sizes(&[("55g", 60.0), ("150g", 150.0)]),
            ingredients: "Ragi flour (45%), rice flour, corn starch, rice bran oil, chaat masala, \
                          salt"
                .into(),
            nutrition: nutrition("128 kcal", "2.4g", "20g", "4.4g", "1.8g"),
            featured: true,
        },
        Product {
            id: "chips02".into(),
            name: "Beetroot Chips".into(),
            description: "Thin sliced beetroot, baked until crisp, lightly salted.".into(),
            category: "Chips".into(),
            image: "/images/products/chips02.jpg".into(),
            sizes: sizes(&[("55g", 70.0)]),
            ingredients: "Beetroot (80%), sunflower oil, salt".into(),
            nutrition: nutrition("131 kcal", "1.6g", "16g", "6.5g", "3.0g"),
            featured: false,
        },
        Product {
            id: "namkeen01".into(),
            name: "Roasted Moong Dal".into(),
            description: "Crunchy split moong, roasted with turmeric and a squeeze of lime.".into(),
            category: "Namkeen".into(),
            image: "/images/products/namkeen01.jpg".into(),
            sizes: sizes(&[("150g", 90.0), ("400g", 210.0)]),
            ingredients: "Split moong dal (90%), rice bran oil, turmeric, salt, citric acid".into(),
            nutrition: nutrition("140 kcal", "7.1g", "16g", "5.2g", "2.6g"),
            featured: false,
        },
        Product {
            id: "namkeen02".into(),
            name: "Baked Aloo Bhujia".into(),
            description: "Our take on the Bikaneri classic, baked in small batches.".into(),
            category: "Namkeen".into(),
            image: "/images/products/namkeen02.jpg".into(),
            sizes: sizes(&[("150g", 85.0), ("400g", 199.0)]),
            ingredients: "Potato (40%), gram flour, moth bean flour, sunflower oil, spices, salt"
                .into(),
            nutrition: nutrition("152 kcal", "4.8g", "15g", "8.0g", "2.2g"),
            featured: false,
        },
        Product {
            id: "trailmix01".into(),
            name: "Berry Nut Trail Mix".into(),
            description: "Almonds, cashews, pumpkin seeds and sun dried cranberries.".into(),
            category: "Trail Mix".into(),
            image: "/images/products/trailmix01.jpg".into(),
            sizes: sizes(&[("40g", 75.0), ("200g", 325.0)]),
            ingredients: "Almonds, cashews, pumpkin seeds, cranberries (cranberry, sugar, \
                          sunflower oil), black raisins"
                .into(),
            nutrition: nutrition("168 kcal", "4.9g", "14g", "10.6g", "2.7g"),
            featured: true,
        },
    ]
}

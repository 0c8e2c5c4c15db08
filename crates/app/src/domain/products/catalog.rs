//! Fixed mouthguard catalog seeded before every sync.

use crate::domain::products::models::NewProduct;

const CENTS: i64 = 100;

/// Surcharge for the premium finishes.
pub const PREMIUM_SURCHARGE: i64 = 180 * CENTS;

const GUARD_CODES: [(&str, i64); 3] = [
    ("MG Standard", 800),
    ("Ortho (T)", 850),
    ("Ortho (T&B)", 980),
];

const PLAIN_COLOURS: [&str; 10] = [
    "Red", "Blue", "Green", "Black", "Purple", "Pink", "Orange", "Yellow", "White", "Clear",
];

const PREMIUM_COLOURS: [&str; 5] = [
    "Gold (+ R180)",
    "Silver (+ R180)",
    "Galaxy (+ R180)",
    "Dual Colour (+ R180)",
    "Tri Colour (+ R180)",
];

const CLEAR_ONLY: [(&str, i64); 3] = [("Rubberised", 980), ("Retainer", 1600), ("Bleaching", 1600)];

fn product(code: &str, colour: &str, base_price: i64, colour_surcharge: i64) -> NewProduct {
    NewProduct {
        product_code: code.to_string(),
        colour_selection: colour.to_string(),
        base_price: base_price * CENTS,
        colour_surcharge,
    }
}

/// Every catalog product in seeding order.
#[must_use]
pub fn catalog() -> Vec<NewProduct> {
    let guards = GUARD_CODES.iter().flat_map(|&(code, price)| {
        let plain = PLAIN_COLOURS
            .iter()
            .map(move |colour| product(code, colour, price, 0));

        let premium = PREMIUM_COLOURS
            .iter()
            .map(move |colour| product(code, colour, price, PREMIUM_SURCHARGE));

        plain.chain(premium)
    });

    let clear = CLEAR_ONLY
        .iter()
        .map(|&(code, price)| product(code, "Clear", price, 0));

    guards.chain(clear).collect()
}

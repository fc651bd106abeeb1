use grubmaster_shared::shopping::ShoppingItem;

/// Camp supplies added to every list regardless of the menu.
pub fn staples(headcount: u32) -> [ShoppingItem; 2] {
    [
        ShoppingItem {
            item: "paper towels".to_owned(),
            unit: "roll".to_owned(),
            qty: headcount.div_ceil(4) as f64,
        },
        ShoppingItem {
            item: "trash bags".to_owned(),
            unit: "ea".to_owned(),
            qty: 2.0,
        },
    ]
}

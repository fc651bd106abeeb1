use grubmaster_shared::recipe::Recipe;
use serde_json::json;

use crate::normalize::normalize;

/// Starter catalog: one main, side and drink for every meal plus a Dutch oven dessert.
pub fn seed_catalog() -> Vec<Recipe> {
    [
        json!({
            "id": "seed-pot-pie",
            "name": "Dutch Oven Chicken & Veg Pot Pie",
            "mealType": "dinner",
            "course": "main",
            "serves": 8,
            "tags": { "dutchOven": true, "car": true },
            "ingredients": [
                { "item": "chicken thighs", "qtyPerPerson": 0.25, "unit": "lb" },
                { "item": "mixed veg (frozen)", "qtyPerPerson": 0.5, "unit": "cup" },
                { "item": "gravy mix", "qtyPerPerson": 0.25, "unit": "packet" },
                { "item": "biscuit dough", "qtyPerPerson": 1, "unit": "biscuit" }
            ],
            "steps": ["Brown chicken", "Add veg + gravy", "Top w/ biscuits, bake 20–25m"]
        }),
        json!({
            "id": "seed-campfire-corn",
            "name": "Campfire Corn",
            "mealType": "dinner",
            "course": "side",
            "tags": { "car": true, "canoe": true },
            "ingredients": [{ "item": "corn on the cob", "qtyPerPerson": 1, "unit": "ear" }],
            "steps": ["Wrap in foil w/ butter + salt", "Roast over coals ~12–15m"]
        }),
        json!({
            "id": "seed-lemonade",
            "name": "Lemonade",
            "mealType": "dinner",
            "course": "drink",
            "tags": { "backpacking": true, "car": true, "canoe": true },
            "ingredients": [{ "item": "lemonade mix", "qtyPerPerson": 0.5, "unit": "scoop" }],
            "steps": ["Mix with water per instructions"]
        }),
        json!({
            "id": "seed-cobbler",
            "name": "Dutch Oven Cobbler",
            "mealType": "dinner",
            "course": "dessert",
            "tags": { "dutchOven": true, "car": true },
            "ingredients": [
                { "item": "canned pie filling", "qtyPerPerson": 0.4, "unit": "cup" },
                { "item": "cake mix", "qtyPerPerson": 0.1, "unit": "box" },
                { "item": "butter", "qtyPerPerson": 0.5, "unit": "tbsp" }
            ],
            "steps": ["Layer filling, dry mix, butter pats", "Bake in DO until bubbling"]
        }),
        json!({
            "id": "seed-oatmeal",
            "name": "Oatmeal Packs",
            "mealType": "breakfast",
            "course": "main",
            "tags": { "backpacking": true, "car": true, "canoe": true },
            "ingredients": [
                { "item": "instant oatmeal", "qtyPerPerson": 1.5, "unit": "packet" },
                { "item": "dried fruit", "qtyPerPerson": 0.25, "unit": "cup" }
            ],
            "steps": ["Boil water", "Mix & serve"]
        }),
        json!({
            "id": "seed-banana",
            "name": "Banana",
            "mealType": "breakfast",
            "course": "side",
            "tags": { "backpacking": true, "car": true, "canoe": true },
            "ingredients": [{ "item": "banana", "qtyPerPerson": 1, "unit": "ea" }],
            "steps": ["Serve with oatmeal"]
        }),
        json!({
            "id": "seed-hot-cocoa",
            "name": "Hot Cocoa",
            "mealType": "breakfast",
            "course": "drink",
            "tags": { "backpacking": true, "car": true, "canoe": true },
            "ingredients": [{ "item": "cocoa mix", "qtyPerPerson": 1, "unit": "packet" }],
            "steps": ["Add to hot water & stir"]
        }),
        json!({
            "id": "seed-pbj",
            "name": "PB&J + Fruit",
            "mealType": "lunch",
            "course": "main",
            "tags": { "backpacking": true, "car": true, "canoe": true },
            "ingredients": [
                { "item": "bread", "qtyPerPerson": 2, "unit": "slice" },
                { "item": "peanut butter", "qtyPerPerson": 2, "unit": "tbsp" },
                { "item": "jelly", "qtyPerPerson": 1, "unit": "tbsp" }
            ],
            "steps": ["Assemble sandwiches"]
        }),
        json!({
            "id": "seed-chips",
            "name": "Chips",
            "mealType": "lunch",
            "course": "side",
            "tags": { "car": true, "canoe": true },
            "ingredients": [{ "item": "chips", "qtyPerPerson": 1, "unit": "bag (snack)" }],
            "steps": ["Serve with sandwiches"]
        }),
        json!({
            "id": "seed-water",
            "name": "Water",
            "mealType": "lunch",
            "course": "drink",
            "tags": { "backpacking": true, "car": true, "canoe": true },
            "ingredients": [{ "item": "water", "qtyPerPerson": 16, "unit": "oz" }],
            "steps": ["Hydrate!"]
        }),
    ]
    .iter()
    .map(normalize)
    .collect()
}

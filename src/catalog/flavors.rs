//! Built-in Folia flavor lineup.

use super::{ColorTokens, Ingredient, Nutrition, Variant};

const SPARKLING_WATER: Ingredient = Ingredient {
    name: "Sparkling Water",
    description: "Sourced from alpine springs.",
};

const CANE_SUGAR: Ingredient = Ingredient {
    name: "Organic Cane Sugar",
    description: "Just a touch of sweetness.",
};

pub const FLAVORS: &[Variant] = &[
    Variant {
        id: "blackberry",
        display_name: "Wild Blackberry",
        colors: ColorTokens { primary: "#2c0412", background: "#14171A", text: "#f5f5dc" },
        texture_path: "assets/textures/wild_blackberry.jpg",
        ingredients: &[
            SPARKLING_WATER,
            Ingredient {
                name: "Wild Blackberry Puree",
                description: "For a rich, authentic flavor.",
            },
            CANE_SUGAR,
        ],
        nutrition: Nutrition { calories: "15", sugar: "3g", carbohydrates: "4g" },
    },
    Variant {
        id: "apple",
        display_name: "Crisp Apple",
        colors: ColorTokens { primary: "#58732c", background: "#4C6425", text: "#272d56" },
        texture_path: "assets/textures/crisp_apple.jpg",
        ingredients: &[
            SPARKLING_WATER,
            Ingredient {
                name: "Green Apple Concentrate",
                description: "For a sharp, clean taste.",
            },
            Ingredient {
                name: "A Hint of Stevia",
                description: "For zero-calorie sweetness.",
            },
        ],
        nutrition: Nutrition { calories: "10", sugar: "2g", carbohydrates: "3g" },
    },
    Variant {
        id: "peach",
        display_name: "Sweet Peach",
        colors: ColorTokens { primary: "#ffe5b4", background: "#978E7B", text: "#272d56" },
        texture_path: "assets/textures/sweet_peach.jpg",
        ingredients: &[
            SPARKLING_WATER,
            Ingredient {
                name: "White Peach Nectar",
                description: "For a soft, fragrant flavor.",
            },
            CANE_SUGAR,
        ],
        nutrition: Nutrition { calories: "15", sugar: "3g", carbohydrates: "4g" },
    },
    Variant {
        id: "cherry",
        display_name: "Tart Cherry",
        colors: ColorTokens { primary: "#b91c1c", background: "#4C1418", text: "#e5e4e2" },
        texture_path: "assets/textures/tart_cherry.jpg",
        ingredients: &[
            SPARKLING_WATER,
            Ingredient {
                name: "Sour Cherry Juice",
                description: "For a bold, tangy experience.",
            },
            CANE_SUGAR,
        ],
        nutrition: Nutrition { calories: "20", sugar: "4g", carbohydrates: "5g" },
    },
];

/// Secondary model shown on the limited-edition pages. Not selectable.
pub const LIMITED_EDITION: Variant = Variant {
    id: "icy-blueberry",
    display_name: "Icy Blueberry",
    colors: ColorTokens { primary: "#312581", background: "#2d3047", text: "#e5e4e2" },
    texture_path: "assets/textures/icy_blueberry.jpg",
    ingredients: &[
        SPARKLING_WATER,
        Ingredient {
            name: "Blueberry Extract",
            description: "Cold-pressed, finished with mint.",
        },
        CANE_SUGAR,
    ],
    nutrition: Nutrition { calories: "15", sugar: "3g", carbohydrates: "4g" },
};

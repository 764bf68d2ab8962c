//! Offline recipe and ingredient synthesis
//!
//! Used whenever the model cannot produce a valid answer. Everything here is
//! a pure function of its input: no clock, no randomness, no I/O.

use crate::domain::{DetectedIngredients, Difficulty, GeneratedRecipe};

/// Illustrative list returned when image analysis is impossible
pub const FALLBACK_INGREDIENTS: [&str; 5] =
    ["tomates", "oignons", "ail", "carottes", "pommes de terre"];

/// Placeholder in instruction skeletons, replaced by the remaining ingredients
const OTHERS_SLOT: &str = "{others}";

/// Slot filler when nothing else was provided
const NO_OTHERS: &str = "sel et poivre";

/// At most this many ingredients fill the slot
const MAX_SLOT_ITEMS: usize = 3;

/// Ingredient list used when the input names nothing usable
const PANTRY_BASICS: [&str; 3] = ["sel", "poivre", "huile d'olive"];

struct RecipeTemplate {
    keywords: &'static [&'static str],
    title: fn(&str) -> String,
    cooking_time: u32,
    servings: u32,
    difficulty: Difficulty,
    steps: &'static [&'static str],
}

/// Checked in this order; the first class with a matching ingredient wins.
static TEMPLATES: [RecipeTemplate; 3] = [
    RecipeTemplate {
        keywords: &[
            "poulet", "dinde", "canard", "volaille", "pintade", "chicken", "turkey", "duck",
        ],
        title: |main| format!("{} au four et aux herbes", capitalize(main)),
        cooking_time: 45,
        servings: 4,
        difficulty: Difficulty::Moyen,
        steps: &[
            "Préchauffer le four à 200°C.",
            "Assaisonner la volaille de sel, de poivre et d'herbes de Provence.",
            "Disposer la volaille dans un plat avec {others}.",
            "Enfourner 40 minutes en arrosant régulièrement avec le jus de cuisson.",
            "Laisser reposer 5 minutes avant de découper et de servir.",
        ],
    },
    RecipeTemplate {
        keywords: &[
            "saumon", "thon", "cabillaud", "poisson", "truite", "colin", "merlu", "sardine",
            "maquereau", "dorade", "salmon", "tuna", "cod", "fish",
        ],
        title: |main| format!("Papillote de {}", main.to_lowercase()),
        cooking_time: 25,
        servings: 2,
        difficulty: Difficulty::Facile,
        steps: &[
            "Préchauffer le four à 180°C.",
            "Déposer le poisson sur une feuille de papier cuisson avec {others}.",
            "Arroser d'un filet d'huile d'olive et de jus de citron, saler et poivrer.",
            "Refermer la papillote et cuire 20 minutes.",
        ],
    },
    RecipeTemplate {
        keywords: &[
            "pâte", "pate", "spaghetti", "penne", "tagliatelle", "fusilli", "macaroni",
            "lasagne", "linguine", "nouille", "pasta", "noodle",
        ],
        title: |main| format!("Poêlée de {}", main.to_lowercase()),
        cooking_time: 20,
        servings: 2,
        difficulty: Difficulty::Facile,
        steps: &[
            "Cuire les pâtes dans une grande casserole d'eau bouillante salée.",
            "Pendant ce temps, faire revenir {others} dans une poêle avec un filet d'huile d'olive.",
            "Égoutter les pâtes et les mélanger à la poêlée.",
            "Servir aussitôt, avec du fromage râpé si désiré.",
        ],
    },
];

static GENERIC_TEMPLATE: RecipeTemplate = RecipeTemplate {
    keywords: &[],
    title: |main| {
        if main.is_empty() {
            "Recette express".to_string()
        } else {
            format!("Recette express : {}", main.to_lowercase())
        }
    },
    cooking_time: 30,
    servings: 2,
    difficulty: Difficulty::Facile,
    steps: &[
        "Laver et préparer tous les ingrédients.",
        "Faire chauffer un filet d'huile dans une poêle à feu moyen.",
        "Faire revenir l'ingrédient principal une dizaine de minutes avec {others}.",
        "Rectifier l'assaisonnement et servir chaud.",
    ],
};

/// Deterministic stand-in for the model.
pub struct FallbackSynthesizer;

impl FallbackSynthesizer {
    /// Build a recipe from the ingredient names alone.
    ///
    /// Never fails, and the result always passes
    /// [`SchemaValidator::validate_recipe`](crate::infrastructure::SchemaValidator::validate_recipe).
    /// The returned `ingredients` are the non-blank input entries, verbatim and
    /// in order, or a few pantry staples when there are none.
    pub fn fallback_recipe(ingredients: &[String]) -> GeneratedRecipe {
        let ingredients: Vec<String> = ingredients
            .iter()
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .collect();

        let (template, main_idx) = select_template(&ingredients);
        let main = main_idx.map(|i| ingredients[i].trim()).unwrap_or_default();

        let others: Vec<&str> = ingredients
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != main_idx)
            .map(|(_, name)| name.trim())
            .filter(|name| name.to_lowercase() != main.to_lowercase())
            .take(MAX_SLOT_ITEMS)
            .collect();
        let others = if others.is_empty() {
            NO_OTHERS.to_string()
        } else {
            others.join(", ")
        };

        let title = (template.title)(main);
        let ingredients = if ingredients.is_empty() {
            PANTRY_BASICS.iter().map(|s| s.to_string()).collect()
        } else {
            ingredients
        };

        GeneratedRecipe {
            title,
            ingredients,
            instructions: template
                .steps
                .iter()
                .map(|step| step.replace(OTHERS_SLOT, &others))
                .collect(),
            cooking_time: template.cooking_time,
            servings: template.servings,
            difficulty: template.difficulty,
        }
    }

    /// The fixed illustrative ingredient list
    pub fn fallback_ingredients() -> DetectedIngredients {
        FALLBACK_INGREDIENTS.iter().map(|s| s.to_string()).collect()
    }
}

/// Template to use and the index of the ingredient it is built around
fn select_template(ingredients: &[String]) -> (&'static RecipeTemplate, Option<usize>) {
    for template in &TEMPLATES {
        if let Some(idx) = ingredients
            .iter()
            .position(|name| mentions_any(name, template.keywords))
        {
            return (template, Some(idx));
        }
    }

    (&GENERIC_TEMPLATE, (!ingredients.is_empty()).then_some(0))
}

/// Word-level match, tolerating a plural `s` or `x`
fn mentions_any(name: &str, keywords: &[&str]) -> bool {
    let lowered = name.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .any(|word| {
            let singular = word
                .strip_suffix('s')
                .or_else(|| word.strip_suffix('x'))
                .unwrap_or(word);
            keywords.contains(&word) || keywords.contains(&singular)
        })
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub const RECIPE_PROMPT: &str = r#"Tu es un chef cuisinier expert. Crée une recette savoureuse et réalisable avec ces ingrédients :
{ingredients}

Rédige la recette en {language}. Tu peux ajouter des ingrédients de base (sel, poivre, huile, eau).

Réponds UNIQUEMENT avec un objet JSON, sans texte autour, au format suivant :
{
  "title": "Nom de la recette",
  "ingredients": ["quantité et ingrédient", "..."],
  "instructions": ["Étape 1", "Étape 2", "..."],
  "cooking_time": 30,
  "servings": 4,
  "difficulty": "Facile"
}

Contraintes :
- "cooking_time" est un nombre entier de minutes supérieur à 0.
- "servings" est un nombre entier de personnes supérieur à 0.
- "difficulty" vaut exactement "Facile", "Moyen" ou "Difficile".
"#;

pub const VISION_PROMPT: &str = r#"Analyse cette photo et liste les ingrédients alimentaires visibles.

Règles :
- Uniquement des aliments (pas d'ustensiles, d'emballages ni de meubles).
- Des noms précis ("tomates cerises", "blanc de poulet") plutôt que des catégories ("légumes", "viande").
- Un nom par ingrédient, en {language}, sans quantité.

Réponds UNIQUEMENT avec un tableau JSON de chaînes, par exemple :
["tomates", "oignons", "basilic"]

Si aucun aliment n'est visible, réponds [].
"#;

pub struct PromptBuilder;

impl PromptBuilder {
    /// Recipe prompt listing each ingredient on its own bullet line
    pub fn build_recipe_prompt(ingredients: &[String], language: &str) -> String {
        let list = ingredients
            .iter()
            .map(|name| format!("- {}", name.trim()))
            .collect::<Vec<_>>()
            .join("\n");

        // ingredient names are user text and go in last
        RECIPE_PROMPT
            .replace("{language}", language)
            .replace("{ingredients}", &list)
    }

    pub fn build_vision_prompt(language: &str) -> String {
        VISION_PROMPT.replace("{language}", language)
    }
}

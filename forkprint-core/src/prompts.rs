//! Prompt templates for the inference calls.

/// Prompt for text-path ingredient inference.
pub fn dish_ingredients_prompt(dish: &str) -> String {
    format!(
        r#"List the likely ingredients of the dish "{dish}" as structured JSON.

For each ingredient provide:
- name: The ingredient name.
- estimated_quantity: A rough quantity for one serving (e.g., "200g", "1 cup", "2 pieces", "medium").
- category: One of "meat", "seafood", "dairy", "grain", "produce", "oil".

Also provide a top-level confidence between 0 and 1 for how certain you are about this ingredient list.

Respond with ONLY a JSON object, no other text. Example format:
{{
  "ingredients": [
    {{"name": "chicken breast", "estimated_quantity": "200g", "category": "meat"}},
    {{"name": "rice", "estimated_quantity": "150g", "category": "grain"}}
  ],
  "confidence": 0.85
}}"#
    )
}

/// Prompt for image-path ingredient inference.
pub fn image_ingredients_prompt() -> &'static str {
    r#"Identify the dish in this photo and list its likely ingredients as structured JSON.

Provide:
- dish_name: The name of the dish you see.
- ingredients: For each ingredient, its name, a rough estimated_quantity for the pictured portion (e.g., "200g", "1 cup", "medium"), and a category that is one of "meat", "seafood", "dairy", "grain", "produce", "oil".
- confidence: A number between 0 and 1 for how certain you are.

Respond with ONLY a JSON object, no other text. Example format:
{
  "dish_name": "Margherita Pizza",
  "ingredients": [
    {"name": "wheat flour", "estimated_quantity": "250g", "category": "grain"},
    {"name": "mozzarella", "estimated_quantity": "125g", "category": "dairy"}
  ],
  "confidence": 0.7
}"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_prompt_contains_dish_and_format() {
        let prompt = dish_ingredients_prompt("Pizza Margherita");
        assert!(prompt.contains("Pizza Margherita"));
        assert!(prompt.contains("estimated_quantity"));
        assert!(prompt.contains("JSON object"));
    }

    #[test]
    fn test_image_prompt_asks_for_dish_name() {
        let prompt = image_ingredients_prompt();
        assert!(prompt.contains("dish_name"));
        assert!(prompt.contains("confidence"));
    }
}

use dialoguer::{Confirm, Select};

use crate::error::Result;

/// Ask which declared food an unknown plan entry meant.
///
/// Returns `None` when the user picks none of the suggestions.
pub fn prompt_food_choice(unknown: &str, suggestions: &[String]) -> Result<Option<String>> {
    if suggestions.is_empty() {
        println!("No matching food found for '{}'", unknown);
        return Ok(None);
    }

    if suggestions.len() == 1 {
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", suggestions[0]))
            .default(true)
            .interact()?;
        return Ok(confirm.then(|| suggestions[0].clone()));
    }

    let mut options = suggestions.to_vec();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt(format!("'{}' is not a declared food. Which did you mean?", unknown))
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < suggestions.len()).then(|| suggestions[selection].clone()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

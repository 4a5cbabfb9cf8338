//! Interactive prompts for values not given on the command line

use dialoguer::{Input, Password};

/// Use `given` if present, otherwise ask
pub fn text(prompt: &str, given: Option<String>) -> anyhow::Result<String> {
    match given {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

/// Hidden entry, confirmed on registration
pub fn password(given: Option<String>) -> anyhow::Result<String> {
    match given {
        Some(value) => Ok(value),
        None => Ok(Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?),
    }
}

/// Hidden 4-digit PIN; format is checked by the vault, not here
pub fn pin(given: Option<String>, confirm: bool) -> anyhow::Result<String> {
    if let Some(value) = given {
        return Ok(value);
    }

    let prompt = Password::new().with_prompt("4-digit PIN");
    let prompt = if confirm {
        prompt.with_confirmation("Confirm PIN", "PINs do not match")
    } else {
        prompt
    };
    Ok(prompt.interact()?)
}

//! Interactive prompts.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::error::{OutpostError, Result};

/// Convert dialoguer errors to OutpostError.
fn map_dialoguer_err(e: dialoguer::Error) -> OutpostError {
    OutpostError::Io(e.into())
}

/// Ask a yes/no question on the given terminal.
pub fn confirm_on(term: &Term, question: &str, default: bool) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no question on the terminal; anything but `y`/`yes` is a no.
pub fn ask_yes_no(question: &str) -> AppResult<bool> {
    warning(question);

    print!("Continue? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    Ok(ans == "y" || ans == "yes")
}

use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::utils::digits::to_ascii_digits;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Normalize { text } = cmd {
        println!("{}", to_ascii_digits(&text.join(" ")));
    }
    Ok(())
}

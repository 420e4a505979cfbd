use bst_core::xp_for;
use colored::Colorize;

pub fn run(rating: &str) -> Result<(), String> {
    let xp = xp_for(rating.trim()).map_err(|e| e.to_string())?;
    println!("  CR {}: {} XP", rating.trim().bold(), xp);
    Ok(())
}

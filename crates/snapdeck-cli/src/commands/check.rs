use std::path::Path;

use anyhow::{Context, Result};

use snapdeck_core::{Deck, SectionKind};

/// Validate a deck file and print its section inventory.
pub fn run(path: &Path) -> Result<()> {
    let deck =
        Deck::load(path).with_context(|| format!("failed to load deck {}", path.display()))?;

    println!("{}: {} sections", deck.title, deck.sections.len());
    println!("  hero: {}", deck.hero.heading);
    for section in &deck.sections {
        let kind = match &section.kind {
            SectionKind::Text { .. } => "text".to_string(),
            SectionKind::Cards { cards } => format!("cards ({})", cards.len()),
            SectionKind::Contact { lines } => format!("contact ({})", lines.len()),
        };
        println!("  #{:<12} {:<20} [{}]", section.id, section.title, kind);
    }

    Ok(())
}

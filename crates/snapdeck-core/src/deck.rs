//! Deck document model.
//!
//! A deck is the fixed document structure the registry is built from: a hero
//! (header) followed by top-level sections in document order. Decks are
//! loaded once at startup; sections are never added or removed at runtime.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A complete deck: hero plus ordered sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Deck title, shown in the nav bar.
    #[serde(default = "default_deck_title")]
    pub title: String,
    #[serde(default)]
    pub hero: Hero,
    /// Top-level sections in document order.
    #[serde(default, rename = "section")]
    pub sections: Vec<SectionDef>,
}

/// The header region. Hosts the scroll-indicator control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default = "default_hero_heading")]
    pub heading: String,
    #[serde(default)]
    pub tagline: String,
    /// Label on the scroll-indicator control at the bottom of the hero.
    #[serde(default = "default_indicator_label")]
    pub indicator_label: String,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            heading: default_hero_heading(),
            tagline: String::new(),
            indicator_label: default_indicator_label(),
        }
    }
}

/// One navigable section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDef {
    /// Anchor identifier, used by nav-bar links and absolute intents.
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub kind: SectionKind,
}

/// Section body variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionKind {
    /// Plain prose.
    Text { body: String },
    /// A row of hover-highlightable cards.
    Cards {
        #[serde(rename = "card")]
        cards: Vec<Card>,
    },
    /// Short contact lines.
    Contact { lines: Vec<String> },
}

/// One card in a `Cards` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub blurb: String,
}

impl Deck {
    /// Load and validate a deck from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let deck: Deck =
            toml::from_str(&content).map_err(|e| Error::Deck(e.to_string()))?;
        deck.validate()?;
        Ok(deck)
    }

    /// Built-in demo deck, used when no deck file is given.
    pub fn sample() -> Self {
        Self {
            title: "snapdeck".to_string(),
            hero: Hero {
                heading: "A deck that snaps".to_string(),
                tagline: "Scroll, press, or click. One section at a time.".to_string(),
                indicator_label: default_indicator_label(),
            },
            sections: vec![
                SectionDef {
                    id: "about".to_string(),
                    title: "About".to_string(),
                    kind: SectionKind::Text {
                        body: "snapdeck replaces continuous scrolling with discrete \
                               jumps between full-viewport sections. Wheel, keyboard, \
                               and nav-bar clicks all feed one navigation controller; \
                               while a snap is in flight, further input is dropped, \
                               never queued."
                            .to_string(),
                    },
                },
                SectionDef {
                    id: "projects".to_string(),
                    title: "Projects".to_string(),
                    kind: SectionKind::Cards {
                        cards: vec![
                            Card {
                                name: "dotfield".to_string(),
                                blurb: "Background lattice, rebuilt on resize.".to_string(),
                            },
                            Card {
                                name: "wanderglow".to_string(),
                                blurb: "An ambient glow that drifts at random.".to_string(),
                            },
                            Card {
                                name: "fadecurtain".to_string(),
                                blurb: "Entrance fades keyed to visibility.".to_string(),
                            },
                        ],
                    },
                },
                SectionDef {
                    id: "contact".to_string(),
                    title: "Contact".to_string(),
                    kind: SectionKind::Contact {
                        lines: vec![
                            "mail: hello@snapdeck.dev".to_string(),
                            "git:  github.com/snapdeck".to_string(),
                        ],
                    },
                },
            ],
        }
    }

    /// Reject empty and duplicate section identifiers.
    pub fn validate(&self) -> Result<()> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            let id = section.id.as_str();
            if id.is_empty() {
                return Err(Error::Deck(format!(
                    "section '{}' has an empty id",
                    section.title
                )));
            }
            if seen.contains(&id) {
                return Err(Error::Deck(format!("duplicate section id '{}'", id)));
            }
            seen.push(id);
        }
        Ok(())
    }
}

fn default_deck_title() -> String {
    "snapdeck".to_string()
}

fn default_hero_heading() -> String {
    "Untitled deck".to_string()
}

fn default_indicator_label() -> String {
    "scroll".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_deck_is_valid() {
        let deck = Deck::sample();
        assert!(deck.validate().is_ok());
        assert_eq!(deck.sections.len(), 3);
        assert_eq!(deck.sections[0].id, "about");
    }

    #[test]
    fn test_parse_minimal_deck() {
        let toml_src = r#"
            title = "demo"

            [hero]
            heading = "Hello"

            [[section]]
            id = "about"
            title = "About"
            kind = "text"
            body = "hi"
        "#;
        let deck: Deck = toml::from_str(toml_src).unwrap();
        assert!(deck.validate().is_ok());
        assert_eq!(deck.title, "demo");
        assert_eq!(deck.sections.len(), 1);
        assert!(matches!(deck.sections[0].kind, SectionKind::Text { .. }));
    }

    #[test]
    fn test_parse_cards_section() {
        let toml_src = r#"
            [[section]]
            id = "projects"
            title = "Projects"
            kind = "cards"

            [[section.card]]
            name = "one"
            blurb = "first"

            [[section.card]]
            name = "two"
        "#;
        let deck: Deck = toml::from_str(toml_src).unwrap();
        match &deck.sections[0].kind {
            SectionKind::Cards { cards } => {
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[0].name, "one");
                assert!(cards[1].blurb.is_empty());
            }
            other => panic!("expected cards section, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut deck = Deck::sample();
        deck.sections[1].id = "about".to_string();
        assert!(deck.validate().is_err());
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut deck = Deck::sample();
        deck.sections[0].id = String::new();
        assert!(deck.validate().is_err());
    }
}

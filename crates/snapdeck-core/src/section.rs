//! Section registry and viewport locator.
//!
//! The registry is the ordered list of navigable regions, built once from the
//! deck: ordinal 0 is the hero, followed by each section in document order.
//! Geometry is never stored on a section; it comes through [`SectionLayout`]
//! and is recomputed on demand, since the presented offset changes every
//! frame while a snap animation runs.

use crate::deck::Deck;

/// One navigable entry in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Anchor identifier. `None` for the hero.
    pub id: Option<String>,
    /// Position in the registry, fixed at build time.
    pub index: usize,
    pub title: String,
}

/// Ordered list of navigable sections. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Build the registry: hero first, then each section in deck order.
    pub fn from_deck(deck: &Deck) -> Self {
        let mut sections = Vec::with_capacity(deck.sections.len() + 1);
        sections.push(Section {
            id: None,
            index: 0,
            title: deck.hero.heading.clone(),
        });
        for def in &deck.sections {
            sections.push(Section {
                id: Some(def.id.clone()),
                index: sections.len(),
                title: def.title.clone(),
            });
        }
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Ordinal of the section with the given identifier.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|s| s.id.as_deref() == Some(id))
    }

    /// Largest valid ordinal, if the registry is non-empty.
    pub fn last_index(&self) -> Option<usize> {
        self.sections.len().checked_sub(1)
    }
}

/// Current top/bottom edges of a section, in rows relative to the viewport
/// origin. `top` is negative once the section has scrolled past the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionGeometry {
    pub top: i32,
    pub bottom: i32,
}

/// Seam between the registry and whatever is actually presenting sections.
///
/// The locator only ever asks for current geometry; implementations must not
/// cache it across frames.
pub trait SectionLayout {
    /// Geometry of the section at `index`, or `None` if the layout does not
    /// currently place it.
    fn geometry(&self, index: usize) -> Option<SectionGeometry>;

    /// Viewport height in rows.
    fn viewport_height(&self) -> u16;
}

/// Production layout: sections are full-viewport and contiguous, so section
/// `i` spans rows `[i*h, (i+1)*h)` in content space and its viewport-relative
/// edges follow directly from the presented offset.
#[derive(Debug, Clone, Copy)]
pub struct UniformLayout {
    /// Presented scroll offset in rows.
    pub offset: u16,
    pub viewport_height: u16,
    /// Number of sections the layout places.
    pub count: usize,
}

impl SectionLayout for UniformLayout {
    fn geometry(&self, index: usize) -> Option<SectionGeometry> {
        if index >= self.count || self.viewport_height == 0 {
            return None;
        }
        let h = self.viewport_height as i32;
        let top = index as i32 * h - self.offset as i32;
        Some(SectionGeometry {
            top,
            bottom: top + h,
        })
    }

    fn viewport_height(&self) -> u16 {
        self.viewport_height
    }
}

/// Find the section currently straddling the vertical midpoint of the
/// viewport: the first, in registry order, with `top <= h/2 <= bottom`.
///
/// Returns `None` mid-transition or in gaps; callers must treat that as
/// "ignore this intent" rather than guessing.
pub fn locate_current<L: SectionLayout>(
    registry: &SectionRegistry,
    layout: &L,
) -> Option<usize> {
    let midpoint = i32::from(layout.viewport_height() / 2);
    registry.iter().find_map(|section| {
        let geo = layout.geometry(section.index)?;
        (geo.top <= midpoint && midpoint <= geo.bottom).then_some(section.index)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    fn registry() -> SectionRegistry {
        SectionRegistry::from_deck(&Deck::sample())
    }

    #[test]
    fn test_registry_order_and_ids() {
        let reg = registry();
        // Hero + About + Projects + Contact
        assert_eq!(reg.len(), 4);
        assert_eq!(reg.get(0).unwrap().id, None);
        assert_eq!(reg.index_of("about"), Some(1));
        assert_eq!(reg.index_of("projects"), Some(2));
        assert_eq!(reg.index_of("contact"), Some(3));
        assert_eq!(reg.index_of("missing"), None);
        assert_eq!(reg.last_index(), Some(3));
    }

    #[test]
    fn test_empty_registry() {
        let reg = SectionRegistry::default();
        assert!(reg.is_empty());
        assert_eq!(reg.last_index(), None);
        let layout = UniformLayout {
            offset: 0,
            viewport_height: 40,
            count: 0,
        };
        assert_eq!(locate_current(&reg, &layout), None);
    }

    #[test]
    fn test_locate_at_rest() {
        let reg = registry();
        let mut layout = UniformLayout {
            offset: 0,
            viewport_height: 40,
            count: reg.len(),
        };
        assert_eq!(locate_current(&reg, &layout), Some(0));

        layout.offset = 40;
        assert_eq!(locate_current(&reg, &layout), Some(1));

        layout.offset = 120;
        assert_eq!(locate_current(&reg, &layout), Some(3));
    }

    #[test]
    fn test_locate_mid_transition_picks_midpoint_owner() {
        let reg = registry();
        // Halfway between hero and About: the midpoint row (20) sits in
        // About's span [10, 50).
        let layout = UniformLayout {
            offset: 30,
            viewport_height: 40,
            count: reg.len(),
        };
        assert_eq!(locate_current(&reg, &layout), Some(1));
    }

    #[test]
    fn test_locate_none_in_gap() {
        struct GappyLayout;
        impl SectionLayout for GappyLayout {
            fn geometry(&self, index: usize) -> Option<SectionGeometry> {
                // Every section is entirely above the midpoint.
                Some(SectionGeometry {
                    top: -100 - index as i32 * 40,
                    bottom: -60 - index as i32 * 40,
                })
            }
            fn viewport_height(&self) -> u16 {
                40
            }
        }
        assert_eq!(locate_current(&registry(), &GappyLayout), None);
    }

    #[test]
    fn test_zero_height_viewport_locates_nothing() {
        let reg = registry();
        let layout = UniformLayout {
            offset: 0,
            viewport_height: 0,
            count: reg.len(),
        };
        assert_eq!(locate_current(&reg, &layout), None);
    }
}

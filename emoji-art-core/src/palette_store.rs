//! Ordered palette list with a circular cursor.
//!
//! The store always holds at least one palette, and every index given to it
//! wraps around the list, so there is no out-of-range index.

use crate::{ArtError, ArtResult, Palette, PaletteId};

/// Name of the fallback palette used when no builtins exist.
const FALLBACK_NAME: &str = "Warning";

/// Glyphs of the fallback palette.
const FALLBACK_EMOJIS: &str = "⚠️";

/// A named, never-empty list of palettes.
#[derive(Debug, Clone)]
pub struct PaletteStore {
    name: String,
    palettes: Vec<Palette>,
    cursor: isize,
}

impl PaletteStore {
    /// Create a store seeded with [`Palette::builtins`].
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_palettes(name, Palette::builtins())
    }

    /// Create a store with the given palettes, or a single fallback palette
    /// if `palettes` is empty.
    #[must_use]
    pub fn with_palettes(name: impl Into<String>, palettes: Vec<Palette>) -> Self {
        let palettes = if palettes.is_empty() {
            vec![Palette::new(FALLBACK_NAME, FALLBACK_EMOJIS)]
        } else {
            palettes
        };
        Self {
            name: name.into(),
            palettes,
            cursor: 0,
        }
    }

    /// The store's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All palettes in order.
    #[must_use]
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// Replace every palette. An empty list is refused and the current
    /// palettes are kept; returns whether the replacement happened.
    pub fn set_palettes(&mut self, palettes: Vec<Palette>) -> bool {
        if palettes.is_empty() {
            tracing::warn!(store = %self.name, "Refusing to empty palette store");
            return false;
        }
        self.palettes = palettes;
        true
    }

    /// Look up a palette by id.
    #[must_use]
    pub fn palette(&self, id: PaletteId) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// Mutable access to a palette by id.
    pub fn palette_mut(&mut self, id: PaletteId) -> Option<&mut Palette> {
        self.palettes.iter_mut().find(|p| p.id == id)
    }

    /// The cursor, wrapped into the current list.
    #[must_use]
    pub fn cursor_index(&self) -> usize {
        self.bounds_checked(self.cursor)
    }

    /// Move the cursor. Any value is accepted and wrapped, so `-1` selects
    /// the last palette.
    pub fn set_cursor_index(&mut self, index: isize) {
        self.cursor = to_isize(self.bounds_checked(index));
    }

    /// The palette under the cursor.
    #[must_use]
    pub fn current(&self) -> &Palette {
        &self.palettes[self.cursor_index()]
    }

    /// Insert a palette at `at` (default: the cursor), wrapped into range.
    ///
    /// If a palette with the same id is already present it is moved to that
    /// index and replaced by `palette`.
    pub fn insert(&mut self, palette: Palette, at: Option<isize>) {
        let index = self.bounds_checked(at.unwrap_or(self.cursor));
        if let Some(existing) = self.position(palette.id) {
            self.palettes.remove(existing);
            tracing::info!(store = %self.name, palette = %palette.name, from = existing, to = index, "Moved palette");
        } else {
            tracing::info!(store = %self.name, palette = %palette.name, at = index, "Inserted palette");
        }
        self.palettes.insert(index, palette);
    }

    /// Create and insert a palette.
    pub fn insert_named(&mut self, name: impl Into<String>, emojis: &str, at: Option<isize>) {
        self.insert(Palette::new(name, emojis), at);
    }

    /// Add a palette at the end. A palette with the same id is moved to the
    /// end and replaced.
    pub fn append(&mut self, palette: Palette) {
        if let Some(existing) = self.position(palette.id) {
            self.palettes.remove(existing);
        }
        tracing::info!(store = %self.name, palette = %palette.name, "Appended palette");
        self.palettes.push(palette);
    }

    /// Create and append a palette.
    pub fn append_named(&mut self, name: impl Into<String>, emojis: &str) {
        self.append(Palette::new(name, emojis));
    }

    /// Remove a palette.
    ///
    /// # Errors
    ///
    /// Returns [`ArtError::LastPalette`] if it is the only palette, or
    /// [`ArtError::PaletteNotFound`] if no palette has that id.
    pub fn remove(&mut self, id: PaletteId) -> ArtResult<Palette> {
        let index = self.position(id).ok_or(ArtError::PaletteNotFound(id))?;
        if self.palettes.len() == 1 {
            return Err(ArtError::LastPalette);
        }
        let removed = self.palettes.remove(index);
        tracing::info!(store = %self.name, palette = %removed.name, "Removed palette");
        Ok(removed)
    }

    /// Number of palettes. At least one while the never-empty invariant holds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Whether the store holds no palettes; `false` while the never-empty
    /// invariant holds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    fn position(&self, id: PaletteId) -> Option<usize> {
        self.palettes.iter().position(|p| p.id == id)
    }

    #[allow(clippy::cast_sign_loss)] // rem_euclid with a positive modulus is never negative
    fn bounds_checked(&self, index: isize) -> usize {
        index.rem_euclid(to_isize(self.palettes.len())) as usize
    }
}

#[allow(clippy::cast_possible_wrap)] // Vec lengths never exceed isize::MAX
fn to_isize(value: usize) -> isize {
    value as isize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(names: &[&str]) -> PaletteStore {
        PaletteStore::with_palettes(
            "Test",
            names.iter().map(|name| Palette::new(*name, "😀")).collect(),
        )
    }

    fn names(store: &PaletteStore) -> Vec<&str> {
        store.palettes().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_new_uses_builtins() {
        let store = PaletteStore::new("Main");
        assert_eq!(store.name(), "Main");
        assert_eq!(store.len(), Palette::builtins().len());
    }

    #[test]
    fn test_empty_seed_gets_fallback() {
        let store = PaletteStore::with_palettes("Empty", Vec::new());
        assert_eq!(store.len(), 1);
        assert_eq!(store.current().name, "Warning");
        assert_eq!(store.current().emojis(), "⚠️");
    }

    #[test]
    fn test_cannot_be_emptied() {
        let mut store = store_of(&["a", "b"]);
        assert!(!store.set_palettes(Vec::new()));
        assert_eq!(names(&store), vec!["a", "b"]);
        assert!(!store.is_empty());

        assert!(store.set_palettes(vec![Palette::new("c", "")]));
        assert_eq!(names(&store), vec!["c"]);
    }

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut store = store_of(&["a", "b", "c"]);
        store.set_cursor_index(4);
        assert_eq!(store.cursor_index(), 1);
        store.set_cursor_index(-1);
        assert_eq!(store.cursor_index(), 2);
        store.set_cursor_index(-7);
        assert_eq!(store.cursor_index(), 2);
        assert_eq!(store.current().name, "c");
    }

    #[test]
    fn test_cursor_rewraps_after_shrink() {
        let mut store = store_of(&["a", "b", "c"]);
        store.set_cursor_index(2);
        store.set_palettes(vec![Palette::new("x", ""), Palette::new("y", "")]);
        assert_eq!(store.cursor_index(), 0);
    }

    #[test]
    fn test_insert_defaults_to_cursor() {
        let mut store = store_of(&["a", "b", "c"]);
        store.set_cursor_index(1);
        store.insert_named("new", "⭐", None);
        assert_eq!(names(&store), vec!["a", "new", "b", "c"]);
    }

    #[test]
    fn test_insert_index_wraps() {
        let mut store = store_of(&["a", "b"]);
        store.insert_named("new", "⭐", Some(-1));
        assert_eq!(names(&store), vec!["a", "new", "b"]);
    }

    #[test]
    fn test_insert_existing_moves_and_replaces() {
        let mut store = store_of(&["a", "b", "c"]);
        let mut edited = store.palettes()[2].clone();
        edited.name = "c2".to_string();

        store.insert(edited.clone(), Some(0));

        assert_eq!(names(&store), vec!["c2", "a", "b"]);
        assert_eq!(store.palette(edited.id), Some(&edited));
    }

    #[test]
    fn test_append_existing_moves_to_end() {
        let mut store = store_of(&["a", "b", "c"]);
        let mut edited = store.palettes()[0].clone();
        edited.set_emojis("🔥");

        store.append(edited);
        assert_eq!(names(&store), vec!["b", "c", "a"]);
        assert_eq!(store.palettes()[2].emojis(), "🔥");

        store.append_named("d", "🐢");
        assert_eq!(names(&store), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_append_existing_single_palette_replaces() {
        let mut store = store_of(&["only"]);
        let mut edited = store.current().clone();
        edited.name = "renamed".to_string();
        store.append(edited);
        assert_eq!(names(&store), vec!["renamed"]);
    }

    #[test]
    fn test_remove() {
        let mut store = store_of(&["a", "b"]);
        let first = store.palettes()[0].id;

        let removed = store.remove(first).expect("should remove");
        assert_eq!(removed.name, "a");

        assert!(matches!(store.remove(first), Err(ArtError::PaletteNotFound(_))));

        let last = store.palettes()[0].id;
        assert!(matches!(store.remove(last), Err(ArtError::LastPalette)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_palette_mut_edits_in_place() {
        let mut store = store_of(&["a"]);
        let id = store.current().id;
        store
            .palette_mut(id)
            .expect("exists")
            .set_emojis("🌲🌲🌴");
        assert_eq!(store.current().emojis(), "🌲🌴");
    }
}

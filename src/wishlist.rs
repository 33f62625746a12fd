use std::collections::HashSet;

/// Session-local set of favourite card ids. Created empty, mutated only by
/// `toggle`, discarded on reload — there is no persistence layer behind it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wishlist {
    ids: HashSet<String>,
}

impl Wishlist {
    pub fn new() -> Wishlist {
        Wishlist::default()
    }

    /// Membership flip: adds the id if absent, removes it if present.
    pub fn toggle(&mut self, card_id: &str) {
        if !self.ids.remove(card_id) {
            self.ids.insert(card_id.to_string());
        }
    }

    pub fn contains(&self, card_id: &str) -> bool {
        self.ids.contains(card_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut wishlist = Wishlist::new();
        assert!(!wishlist.contains("1"));

        wishlist.toggle("1");
        assert!(wishlist.contains("1"));
        assert_eq!(wishlist.len(), 1);

        wishlist.toggle("1");
        assert!(!wishlist.contains("1"));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn double_toggle_restores_original_membership() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle("3");

        let before = wishlist.clone();
        wishlist.toggle("7");
        wishlist.toggle("7");
        assert_eq!(wishlist, before);
    }

    #[test]
    fn membership_is_exact_id_equality() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle("10");
        assert!(!wishlist.contains("1"));
        assert!(wishlist.contains("10"));
    }
}

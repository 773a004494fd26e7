use std::cell::Cell;

use leptos::prelude::*;

/// Which page is current, plus a generation number per navigation so a
/// slow, superseded load cannot overwrite a newer one.
pub struct NavigationState {
    current: RwSignal<String>,
    generation: Cell<u64>,
}

impl NavigationState {
    pub fn new(initial: &str) -> Self {
        Self {
            current: RwSignal::new(initial.to_string()),
            generation: Cell::new(0),
        }
    }

    /// Make `page_id` current and return the generation of this navigation.
    pub fn begin(&self, page_id: &str) -> u64 {
        self.current.set(page_id.to_string());
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        generation
    }

    /// True while no later navigation has started.
    pub fn is_latest(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    pub fn current_page(&self) -> String {
        self.current.get_untracked()
    }

    /// Reactive handle for views that highlight the current page.
    pub fn signal(&self) -> RwSignal<String> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_navigation_wins() {
        let nav = NavigationState::new("home");
        assert_eq!(nav.current_page(), "home");

        let first = nav.begin("about");
        let second = nav.begin("contact");

        assert!(!nav.is_latest(first));
        assert!(nav.is_latest(second));
        assert_eq!(nav.current_page(), "contact");
    }
}

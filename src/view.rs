//! View state for the widget: menu visibility flags and the rendered lists.
//!
//! Visibility is an explicit enum owned here rather than a marker class in
//! markup, so the toggle logic is testable without a rendering environment.
//! Presentation adapters that still speak in marker classes can reconstruct
//! them from [`ViewState::marker_classes`].

/// Marker class reported for the main menu when hidden.
pub const MENU_HIDDEN_CLASS: &str = "menu-hidden";
/// Marker class reported for the add-feed menu when hidden.
pub const ADD_MENU_HIDDEN_CLASS: &str = "add-menu-hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

impl Visibility {
    pub fn toggle(&mut self) {
        *self = match self {
            Visibility::Hidden => Visibility::Visible,
            Visibility::Visible => Visibility::Hidden,
        };
    }

    pub fn is_hidden(self) -> bool {
        matches!(self, Visibility::Hidden)
    }
}

/// One rendered entry belonging to the currently loaded feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub title: String,
    /// The entry's identifying link; what "content changed" is judged by.
    pub link: String,
}

/// One rendered item in the feed list sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedListItem {
    pub name: String,
}

/// The widget's observable surface: two independent menu flags plus the
/// rendered entry and feed lists. Both menus start hidden.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub menu: Visibility,
    pub add_menu: Visibility,
    entries: Vec<EntryView>,
    feed_list: Vec<FeedListItem>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            menu: Visibility::Hidden,
            add_menu: Visibility::Hidden,
            entries: Vec::new(),
            feed_list: Vec::new(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the main navigation menu. Leaves the add-feed menu untouched.
    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Toggles the add-feed menu. Leaves the main menu untouched.
    pub fn toggle_add_menu(&mut self) {
        self.add_menu.toggle();
    }

    /// Replaces the rendered entries with a freshly loaded feed's.
    pub fn render_entries(&mut self, entries: Vec<EntryView>) {
        self.entries = entries;
    }

    /// Appends one item to the rendered feed list.
    pub fn render_feed_item(&mut self, item: FeedListItem) {
        self.feed_list.push(item);
    }

    /// Rebuilds the feed list from scratch (startup render).
    pub fn render_feed_list(&mut self, items: Vec<FeedListItem>) {
        self.feed_list = items;
    }

    pub fn entries(&self) -> &[EntryView] {
        &self.entries
    }

    pub fn feed_list(&self) -> &[FeedListItem] {
        &self.feed_list
    }

    /// Hidden-state marker classes currently in effect, for presentation
    /// layers that express visibility as body classes.
    pub fn marker_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.menu.is_hidden() {
            classes.push(MENU_HIDDEN_CLASS);
        }
        if self.add_menu.is_hidden() {
            classes.push(ADD_MENU_HIDDEN_CLASS);
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menus_hidden_by_default() {
        let view = ViewState::new();
        assert!(view.menu.is_hidden());
        assert!(view.add_menu.is_hidden());
        assert_eq!(
            view.marker_classes(),
            vec![MENU_HIDDEN_CLASS, ADD_MENU_HIDDEN_CLASS]
        );
    }

    #[test]
    fn test_menu_toggle_round_trip() {
        let mut view = ViewState::new();

        view.toggle_menu();
        assert_eq!(view.menu, Visibility::Visible);
        assert!(!view.marker_classes().contains(&MENU_HIDDEN_CLASS));

        view.toggle_menu();
        assert_eq!(view.menu, Visibility::Hidden);
        assert!(view.marker_classes().contains(&MENU_HIDDEN_CLASS));
    }

    #[test]
    fn test_add_menu_toggle_round_trip() {
        let mut view = ViewState::new();

        view.toggle_add_menu();
        assert_eq!(view.add_menu, Visibility::Visible);

        view.toggle_add_menu();
        assert_eq!(view.add_menu, Visibility::Hidden);
    }

    #[test]
    fn test_menus_toggle_independently() {
        let mut view = ViewState::new();

        view.toggle_menu();
        assert_eq!(view.menu, Visibility::Visible);
        assert_eq!(view.add_menu, Visibility::Hidden);

        view.toggle_add_menu();
        assert_eq!(view.menu, Visibility::Visible);
        assert_eq!(view.add_menu, Visibility::Visible);

        view.toggle_menu();
        assert_eq!(view.menu, Visibility::Hidden);
        assert_eq!(view.add_menu, Visibility::Visible);
    }

    #[test]
    fn test_render_entries_replaces_previous() {
        let mut view = ViewState::new();
        view.render_entries(vec![EntryView {
            title: "Old".into(),
            link: "https://example.com/old".into(),
        }]);
        view.render_entries(vec![
            EntryView {
                title: "New".into(),
                link: "https://example.com/new".into(),
            },
            EntryView {
                title: "Newer".into(),
                link: "https://example.com/newer".into(),
            },
        ]);

        assert_eq!(view.entries().len(), 2);
        assert_eq!(view.entries()[0].link, "https://example.com/new");
    }

    #[test]
    fn test_render_feed_item_appends() {
        let mut view = ViewState::new();
        view.render_feed_list(vec![FeedListItem { name: "A".into() }]);
        view.render_feed_item(FeedListItem { name: "B".into() });

        assert_eq!(view.feed_list().len(), 2);
        assert_eq!(view.feed_list()[0].name, "A");
        assert_eq!(view.feed_list()[1].name, "B");
    }
}

//! Admin-panel visibility state.
//!
//! The legacy page had no state beyond current class membership: entering an
//! item row only ever *adds* the shown class to that row's panel, so several
//! item panels can be visible at once, and only a pointer leaving an admin
//! panel strips the class from all of them. Categories behave differently:
//! entering one hides every other category panel and toggles its own.
//! `PanelState` captures exactly that, as plain data the components read
//! through a signal.

/// Which admin panels currently carry their shown class.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelState {
    shown_items: Vec<i64>,
    open_category: Option<i64>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered an item row: reveal that row's panel. Panels already
    /// shown stay shown.
    pub fn enter_item_row(&mut self, item_id: i64) {
        if !self.shown_items.contains(&item_id) {
            self.shown_items.push(item_id);
        }
    }

    /// Pointer left an item admin panel: hide every item panel.
    pub fn leave_item_panel(&mut self) {
        self.shown_items.clear();
    }

    pub fn item_panel_shown(&self, item_id: i64) -> bool {
        self.shown_items.contains(&item_id)
    }

    /// Pointer entered a category entry: hide every other category panel,
    /// then toggle this one's.
    pub fn enter_category(&mut self, category_id: i64) {
        self.open_category = if self.open_category == Some(category_id) {
            None
        } else {
            Some(category_id)
        };
    }

    /// Pointer left a category entry: hide every category panel.
    pub fn leave_category(&mut self) {
        self.open_category = None;
    }

    pub fn category_panel_shown(&self, category_id: i64) -> bool {
        self.open_category == Some(category_id)
    }
}

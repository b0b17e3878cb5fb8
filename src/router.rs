//! Page visibility router.
//!
//! Holds one view handle per registered page. After every successful
//! `navigate_to`, exactly one registered page is visible.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::Page;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("page is not registered: {0}")]
    UnknownPage(Page),
}

/// Visibility handle for one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    visible: bool,
}

impl PageView {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Debug, Clone, Default)]
pub struct Router {
    views: BTreeMap<Page, PageView>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Router with every page registered and `start` visible
    pub fn with_all_pages(start: Page) -> Self {
        let mut router = Self::new();
        for page in Page::ALL {
            router.register(page);
        }
        // every page was just registered
        let _ = router.navigate_to(start);
        router
    }

    /// Register a page (hidden). Re-registering keeps the existing handle.
    pub fn register(&mut self, page: Page) {
        self.views.entry(page).or_default();
    }

    /// Hide every registered page, then show `page`. An unregistered page
    /// leaves visibility untouched.
    pub fn navigate_to(&mut self, page: Page) -> Result<(), RouterError> {
        if !self.views.contains_key(&page) {
            warn!(page = %page, "navigation to unregistered page");
            return Err(RouterError::UnknownPage(page));
        }
        for view in self.views.values_mut() {
            view.hide();
        }
        if let Some(view) = self.views.get_mut(&page) {
            view.show();
        }
        debug!(page = %page, "navigated");
        Ok(())
    }

    /// The visible page, if any navigation has happened
    pub fn current(&self) -> Option<Page> {
        self.views
            .iter()
            .find(|(_, view)| view.is_visible())
            .map(|(page, _)| *page)
    }

    #[cfg(test)]
    pub fn is_visible(&self, page: Page) -> bool {
        self.views.get(&page).is_some_and(PageView::is_visible)
    }

    #[cfg(test)]
    pub fn visible_count(&self) -> usize {
        self.views.values().filter(|v| v.is_visible()).count()
    }
}

use std::time::Duration;

use crate::constants::SCROLL_LOCK;

/// Top-level content views, in cyclic scroll order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    #[inline]
    pub fn index(self) -> usize {
        Section::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    #[inline]
    pub fn next(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    #[inline]
    pub fn prev(self) -> Section {
        let n = Section::ALL.len();
        Section::ALL[(self.index() + n - 1) % n]
    }

    /// Stable identifier used for DOM ids and `data-section` attributes.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Snapshot read by the host to decide what content to display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavView {
    pub active: Section,
    pub selected: Option<usize>,
    pub locked: bool,
}

/// Cyclic section switching with an optional project-detail sub-state.
///
/// Scroll paging engages a transition lock matched to the section-change
/// animation; the lock is a countdown consumed by [`Navigator::tick`], so
/// re-engaging simply overwrites the remaining time and releases never
/// stack. Direct selection (menu clicks) bypasses the lock entirely.
pub struct Navigator {
    active: Section,
    selected: Option<usize>,
    lock_remaining: Option<Duration>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            active: Section::Home,
            selected: None,
            lock_remaining: None,
        }
    }

    #[inline]
    pub fn active(&self) -> Section {
        self.active
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.lock_remaining.is_some()
    }

    #[inline]
    pub fn view(&self) -> NavView {
        NavView {
            active: self.active,
            selected: self.selected,
            locked: self.is_locked(),
        }
    }

    /// Direct navigation, e.g. from a menu button. A same-section call is a
    /// total no-op; otherwise the selection is cleared unconditionally. The
    /// transition lock is neither consulted nor changed.
    pub fn select_section(&mut self, target: Section) {
        if target == self.active {
            return;
        }
        log::debug!("[nav] section {} -> {}", self.active.id(), target.id());
        self.active = target;
        self.selected = None;
    }

    /// Show detail for one project; the active section is untouched.
    pub fn select_project(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Scroll paging. Ignored in detail view and while the transition lock
    /// is held; otherwise steps cyclically, clears the selection and engages
    /// the lock for the transition window.
    pub fn on_scroll(&mut self, direction: ScrollDirection) {
        if self.selected.is_some() {
            return;
        }
        if self.lock_remaining.is_some() {
            return;
        }
        let target = match direction {
            ScrollDirection::Forward => self.active.next(),
            ScrollDirection::Backward => self.active.prev(),
        };
        if target == self.active {
            return;
        }
        log::debug!("[nav] scroll {} -> {}", self.active.id(), target.id());
        self.active = target;
        self.selected = None;
        self.lock_remaining = Some(SCROLL_LOCK);
    }

    /// Count the transition lock down; called once per host frame. The lock
    /// releases exactly when the accumulated time reaches the window.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(rem) = self.lock_remaining {
            self.lock_remaining = match rem.checked_sub(dt) {
                Some(left) if !left.is_zero() => Some(left),
                _ => None,
            };
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

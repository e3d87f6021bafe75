// SPDX-License-Identifier: GPL-3.0-only

//! Resolution of the topmost display surface from the navigation state.
//!
//! A host describes its navigation as a tree of [`Screen`]s. Toasts are
//! anchored to whatever the user is looking at, so resolution always drills
//! into the innermost presented, visible, or selected screen:
//!
//! ```text
//! Tabs ──selected──▶ Stack ──top──▶ Content ──presented──▶ Content  ◀── toast goes here
//! ```

use crate::surface::SurfaceId;

/// How a screen arranges its children.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenKind {
    /// A leaf screen with no child screens.
    Content,
    /// A navigation stack; the last screen is the visible one.
    Stack(Vec<Screen>),
    /// A tabbed container with an optional selected index.
    Tabs {
        tabs: Vec<Screen>,
        selected: Option<usize>,
    },
}

/// A node of the navigation tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    /// The container toasts would be mounted on for this screen.
    pub surface: SurfaceId,
    /// Child arrangement.
    pub kind: ScreenKind,
    /// A screen presented modally over this one.
    pub presented: Option<Box<Screen>>,
}

impl Screen {
    /// Creates a leaf screen.
    pub fn content(surface: SurfaceId) -> Self {
        Self {
            surface,
            kind: ScreenKind::Content,
            presented: None,
        }
    }

    /// Creates a navigation stack.
    pub fn stack(surface: SurfaceId, screens: Vec<Screen>) -> Self {
        Self {
            surface,
            kind: ScreenKind::Stack(screens),
            presented: None,
        }
    }

    /// Creates a tabbed container.
    pub fn tabs(surface: SurfaceId, tabs: Vec<Screen>, selected: Option<usize>) -> Self {
        Self {
            surface,
            kind: ScreenKind::Tabs { tabs, selected },
            presented: None,
        }
    }

    /// Presents `screen` modally over this one.
    pub fn presenting(mut self, screen: Screen) -> Self {
        self.presented = Some(Box::new(screen));
        self
    }
}

/// Returns the surface of the topmost visible screen.
///
/// A presented screen always wins over its presenter. Stacks resolve to their
/// last screen and tabs to their selected tab. An empty stack has nothing
/// visible and yields `None`; a tab container without a valid selection is
/// treated as a leaf.
pub fn top_surface(screen: &Screen) -> Option<SurfaceId> {
    if let Some(presented) = &screen.presented {
        return top_surface(presented);
    }

    match &screen.kind {
        ScreenKind::Content => Some(screen.surface),
        ScreenKind::Stack(screens) => screens.last().and_then(top_surface),
        ScreenKind::Tabs { tabs, selected } => match (*selected).and_then(|index| tabs.get(index)) {
            Some(tab) => top_surface(tab),
            None => Some(screen.surface),
        },
    }
}

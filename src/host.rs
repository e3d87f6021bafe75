// SPDX-License-Identifier: GPL-3.0-only

//! In-memory view hierarchy.
//!
//! [`MemoryHost`] implements [`ViewHost`] without any windowing system. It
//! backs the demo binary and the tests, and doubles as a reference for what a
//! real host has to provide: surfaces holding trees of views, toasts tagged
//! as such so they can be found at any depth, and ids that stop resolving
//! once the thing they name is gone.

use std::collections::HashMap;

use crate::navigation::{self, Screen};
use crate::surface::{SurfaceId, WidgetId};
use crate::toast::content::ToastView;
use crate::toast::presenter::{Placement, ViewHost};

/// A node in a surface's view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    /// A mounted toast.
    Toast(WidgetId),
    /// Any other container, possibly holding toasts further down.
    Group(Vec<ViewNode>),
}

#[derive(Debug, Clone)]
struct MountedToast {
    surface: SurfaceId,
    view: ToastView,
    placement: Placement,
}

/// A view host that lives entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryHost {
    navigation: Option<Screen>,
    surfaces: HashMap<SurfaceId, Vec<ViewNode>>,
    toasts: HashMap<WidgetId, MountedToast>,
    next_surface: u64,
    next_widget: u64,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host whose topmost surface is resolved from `navigation`.
    pub fn with_navigation(navigation: Screen) -> Self {
        let mut host = Self::new();
        host.set_navigation(navigation);
        host
    }

    /// Replaces the navigation tree, registering every surface it names.
    pub fn set_navigation(&mut self, navigation: Screen) {
        self.register_screen(&navigation);
        self.navigation = Some(navigation);
    }

    fn register_screen(&mut self, screen: &Screen) {
        self.surfaces.entry(screen.surface).or_default();
        match &screen.kind {
            navigation::ScreenKind::Content => {}
            navigation::ScreenKind::Stack(screens) => {
                for child in screens {
                    self.register_screen(child);
                }
            }
            navigation::ScreenKind::Tabs { tabs, .. } => {
                for child in tabs {
                    self.register_screen(child);
                }
            }
        }
        if let Some(presented) = &screen.presented {
            self.register_screen(presented);
        }
    }

    /// Adds a standalone surface with an empty view tree.
    pub fn add_surface(&mut self) -> SurfaceId {
        loop {
            self.next_surface += 1;
            let surface = SurfaceId(self.next_surface);
            if !self.surfaces.contains_key(&surface) {
                self.surfaces.insert(surface, Vec::new());
                return surface;
            }
        }
    }

    /// Closes a surface, dropping every toast attached to it.
    ///
    /// Returns `false` if the surface did not exist.
    pub fn close_surface(&mut self, surface: SurfaceId) -> bool {
        if self.surfaces.remove(&surface).is_none() {
            return false;
        }
        self.toasts.retain(|_, toast| toast.surface != surface);
        true
    }

    /// Attaches a toast inside a nested group rather than at the top of the
    /// surface, the way a toast ends up when some other code moved it.
    pub fn mount_nested(&mut self, surface: SurfaceId, view: ToastView) -> Option<WidgetId> {
        let widget = self.allocate(surface, view)?;
        let nodes = self.surfaces.get_mut(&surface)?;
        nodes.push(ViewNode::Group(vec![ViewNode::Group(vec![ViewNode::Toast(widget)])]));
        Some(widget)
    }

    /// Titles of the toasts attached to `surface`, in tree order.
    pub fn titles_on(&self, surface: SurfaceId) -> Vec<String> {
        self.toasts_on(surface)
            .into_iter()
            .filter_map(|widget| self.view(widget))
            .map(|view| view.title().to_string())
            .collect()
    }

    /// Number of toasts attached anywhere on `surface`.
    pub fn toast_count(&self, surface: SurfaceId) -> usize {
        self.toasts_on(surface).len()
    }

    fn allocate(&mut self, surface: SurfaceId, view: ToastView) -> Option<WidgetId> {
        if !self.surfaces.contains_key(&surface) {
            return None;
        }
        self.next_widget += 1;
        let widget = WidgetId(self.next_widget);
        self.toasts.insert(
            widget,
            MountedToast {
                surface,
                view,
                placement: Placement::Hidden,
            },
        );
        Some(widget)
    }
}

fn collect_toasts(nodes: &[ViewNode], out: &mut Vec<WidgetId>) {
    for node in nodes {
        match node {
            ViewNode::Toast(widget) => out.push(*widget),
            ViewNode::Group(children) => collect_toasts(children, out),
        }
    }
}

fn detach(nodes: &mut Vec<ViewNode>, widget: WidgetId) -> bool {
    let before = nodes.len();
    nodes.retain(|node| *node != ViewNode::Toast(widget));
    if nodes.len() != before {
        return true;
    }
    nodes.iter_mut().any(|node| match node {
        ViewNode::Group(children) => detach(children, widget),
        ViewNode::Toast(_) => false,
    })
}

impl ViewHost for MemoryHost {
    fn top_surface(&self) -> Option<SurfaceId> {
        self.navigation
            .as_ref()
            .and_then(navigation::top_surface)
            .filter(|surface| self.surfaces.contains_key(surface))
    }

    fn mount(&mut self, surface: SurfaceId, view: ToastView) -> Option<WidgetId> {
        let widget = self.allocate(surface, view)?;
        self.surfaces.get_mut(&surface)?.push(ViewNode::Toast(widget));
        Some(widget)
    }

    fn unmount(&mut self, widget: WidgetId) -> bool {
        let Some(toast) = self.toasts.remove(&widget) else {
            return false;
        };
        if let Some(nodes) = self.surfaces.get_mut(&toast.surface) {
            detach(nodes, widget);
        }
        true
    }

    fn container_of(&self, widget: WidgetId) -> Option<SurfaceId> {
        self.toasts.get(&widget).map(|toast| toast.surface)
    }

    fn toasts_on(&self, surface: SurfaceId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        if let Some(nodes) = self.surfaces.get(&surface) {
            collect_toasts(nodes, &mut out);
        }
        out
    }

    fn placement(&self, widget: WidgetId) -> Option<Placement> {
        self.toasts.get(&widget).map(|toast| toast.placement)
    }

    fn set_placement(&mut self, widget: WidgetId, placement: Placement) {
        if let Some(toast) = self.toasts.get_mut(&widget) {
            toast.placement = placement;
        }
    }

    fn view(&self, widget: WidgetId) -> Option<&ToastView> {
        self.toasts.get(&widget).map(|toast| &toast.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DismissTrigger;
    use crate::toast::content::ToastContent;

    fn view(title: &str) -> ToastView {
        ToastView::new(ToastContent::new(title, None), DismissTrigger::Swipe)
    }

    #[test]
    fn test_mount_and_unmount() {
        let mut host = MemoryHost::new();
        let surface = host.add_surface();

        let widget = host.mount(surface, view("Saved")).expect("mounted");
        assert_eq!(host.container_of(widget), Some(surface));
        assert_eq!(host.titles_on(surface), vec!["Saved".to_string()]);

        assert!(host.unmount(widget));
        assert!(!host.unmount(widget));
        assert!(host.container_of(widget).is_none());
        assert_eq!(host.toast_count(surface), 0);
    }

    #[test]
    fn test_mount_on_unknown_surface_fails() {
        let mut host = MemoryHost::new();
        assert!(host.mount(SurfaceId(42), view("Saved")).is_none());
    }

    #[test]
    fn test_widget_ids_are_never_reused() {
        let mut host = MemoryHost::new();
        let surface = host.add_surface();
        let first = host.mount(surface, view("A")).expect("mounted");
        host.unmount(first);
        let second = host.mount(surface, view("B")).expect("mounted");
        assert_ne!(first, second);
    }

    #[test]
    fn test_nested_toasts_are_found_and_detached() {
        let mut host = MemoryHost::new();
        let surface = host.add_surface();
        let nested = host.mount_nested(surface, view("Nested")).expect("mounted");
        let top = host.mount(surface, view("Top")).expect("mounted");

        assert_eq!(host.toasts_on(surface), vec![nested, top]);
        assert!(host.unmount(nested));
        assert_eq!(host.toasts_on(surface), vec![top]);
    }

    #[test]
    fn test_closed_surface_invalidates_widgets() {
        let mut host = MemoryHost::new();
        let surface = host.add_surface();
        let widget = host.mount(surface, view("Saved")).expect("mounted");

        assert!(host.close_surface(surface));
        assert!(host.container_of(widget).is_none());
        assert!(host.placement(widget).is_none());
        assert!(host.toasts_on(surface).is_empty());
        assert!(!host.close_surface(surface));
    }

    #[test]
    fn test_top_surface_follows_navigation() {
        let host = MemoryHost::with_navigation(Screen::stack(
            SurfaceId(1),
            vec![Screen::content(SurfaceId(2)), Screen::content(SurfaceId(3))],
        ));
        assert_eq!(host.top_surface(), Some(SurfaceId(3)));

        let mut host = host;
        host.close_surface(SurfaceId(3));
        assert_eq!(host.top_surface(), None);

        let new_surface = host.add_surface();
        assert!(![SurfaceId(1), SurfaceId(2)].contains(&new_surface));
    }

    #[test]
    fn test_no_navigation_means_no_top_surface() {
        let mut host = MemoryHost::new();
        host.add_surface();
        assert_eq!(host.top_surface(), None);
    }
}

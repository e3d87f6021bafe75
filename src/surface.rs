// SPDX-License-Identifier: GPL-3.0-only

//! Opaque handles for display surfaces and mounted toast widgets.
//!
//! Neither handle keeps anything alive. They are resolved through the view
//! host on every use, so a surface that closed or a widget that was unmounted
//! simply stops resolving instead of dangling.

use std::fmt;

/// Identity of a container a toast can be shown on (a screen's root view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

/// Identity of a mounted toast widget, assigned by the view host.
///
/// Hosts never reuse an id, so a stale id can only ever miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_handle_kind() {
        assert_eq!(SurfaceId(4).to_string(), "surface#4");
        assert_eq!(WidgetId(7).to_string(), "toast#7");
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! What a toast shows and how callers ask for one.

use std::time::Duration;

use crate::config::DismissTrigger;
use crate::surface::SurfaceId;

/// A named icon from the desktop icon theme.
///
/// Icons are rendered symbolic so they pick up the toast's foreground tint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastIcon {
    name: String,
}

impl ToastIcon {
    /// Creates an icon from a freedesktop icon name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The icon name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Title and optional icon of a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastContent {
    pub title: String,
    pub icon: Option<ToastIcon>,
}

impl ToastContent {
    pub fn new(title: impl Into<String>, icon: Option<ToastIcon>) -> Self {
        Self {
            title: title.into(),
            icon,
        }
    }
}

/// A request to show a toast.
///
/// Built with [`ToastRequest::new`] and the `with_*` methods. Requests are
/// fire-and-forget: anything that prevents showing them is dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    /// Title and icon.
    pub content: ToastContent,
    /// Auto-hide delay; `None` uses the configured default.
    pub duration: Option<Duration>,
    /// Target surface; `None` resolves the topmost surface.
    pub surface: Option<SurfaceId>,
}

impl ToastRequest {
    /// Creates a request for a title-only toast on the topmost surface.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            content: ToastContent::new(title, None),
            duration: None,
            surface: None,
        }
    }

    /// Sets the icon shown next to the title.
    pub fn with_icon(mut self, icon: ToastIcon) -> Self {
        self.content.icon = Some(icon);
        self
    }

    /// Sets the auto-hide delay.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets the auto-hide delay in seconds.
    ///
    /// Negative and NaN values become zero, which the controller then clamps
    /// up to the minimum duration. Values too large for a [`Duration`],
    /// including positive infinity, saturate to [`Duration::MAX`].
    pub fn with_duration_secs(self, secs: f64) -> Self {
        let duration = if secs.is_nan() || secs <= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
        };
        self.with_duration(duration)
    }

    /// Targets a specific surface instead of the topmost one.
    pub fn on_surface(mut self, surface: SurfaceId) -> Self {
        self.surface = Some(surface);
        self
    }
}

/// The data a view host keeps for a mounted toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub content: ToastContent,
    pub dismiss_trigger: DismissTrigger,
}

impl ToastView {
    pub fn new(content: ToastContent, dismiss_trigger: DismissTrigger) -> Self {
        Self {
            content,
            dismiss_trigger,
        }
    }

    pub fn title(&self) -> &str {
        &self.content.title
    }

    /// Whether the icon element is shown. Without an icon it is omitted
    /// entirely rather than left as an empty slot.
    pub fn icon_visible(&self) -> bool {
        self.content.icon.is_some()
    }

    /// Whether the close button is rendered.
    pub fn shows_dismiss_button(&self) -> bool {
        self.dismiss_trigger.accepts_button()
    }

    /// Whether a swipe-down dismisses this toast.
    pub fn accepts_swipe(&self) -> bool {
        self.dismiss_trigger.accepts_swipe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = ToastRequest::new("Saved");
        assert_eq!(request.content.title, "Saved");
        assert!(request.content.icon.is_none());
        assert!(request.duration.is_none());
        assert!(request.surface.is_none());
    }

    #[test]
    fn test_request_builder() {
        let request = ToastRequest::new("Copied")
            .with_icon(ToastIcon::named("edit-copy-symbolic"))
            .with_duration(Duration::from_secs(2))
            .on_surface(SurfaceId(7));
        assert_eq!(
            request.content.icon.as_ref().map(ToastIcon::name),
            Some("edit-copy-symbolic")
        );
        assert_eq!(request.duration, Some(Duration::from_secs(2)));
        assert_eq!(request.surface, Some(SurfaceId(7)));
    }

    #[test]
    fn test_duration_secs_rejects_invalid_values() {
        assert_eq!(
            ToastRequest::new("a").with_duration_secs(2.5).duration,
            Some(Duration::from_millis(2500))
        );
        assert_eq!(
            ToastRequest::new("a").with_duration_secs(-1.0).duration,
            Some(Duration::ZERO)
        );
        assert_eq!(
            ToastRequest::new("a").with_duration_secs(f64::NAN).duration,
            Some(Duration::ZERO)
        );
        assert_eq!(
            ToastRequest::new("a").with_duration_secs(f64::NEG_INFINITY).duration,
            Some(Duration::ZERO)
        );
    }

    /// A very long toast stays up, it is not clamped down to the minimum.
    #[test]
    fn test_duration_secs_saturates_large_values() {
        assert_eq!(
            ToastRequest::new("a").with_duration_secs(1e20).duration,
            Some(Duration::MAX)
        );
        assert_eq!(
            ToastRequest::new("a").with_duration_secs(f64::INFINITY).duration,
            Some(Duration::MAX)
        );
    }

    #[test]
    fn test_icon_visibility_follows_content() {
        let plain = ToastView::new(ToastContent::new("Saved", None), DismissTrigger::Swipe);
        assert!(!plain.icon_visible());

        let with_icon = ToastView::new(
            ToastContent::new("Saved", Some(ToastIcon::named("emblem-ok-symbolic"))),
            DismissTrigger::Swipe,
        );
        assert!(with_icon.icon_visible());
    }

    #[test]
    fn test_dismiss_affordances_follow_trigger() {
        let content = ToastContent::new("Saved", None);
        let swipe = ToastView::new(content.clone(), DismissTrigger::Swipe);
        assert!(swipe.accepts_swipe());
        assert!(!swipe.shows_dismiss_button());

        let both = ToastView::new(content, DismissTrigger::Both);
        assert!(both.accepts_swipe());
        assert!(both.shows_dismiss_button());
    }
}

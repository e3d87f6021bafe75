// SPDX-License-Identifier: GPL-3.0-only

//! libcosmic rendering of mounted toasts.
//!
//! A toast is a rounded, inverted-color bubble holding an optional icon, a
//! single line of text and, when button dismissal is enabled, a close button.
//! [`render_surface_with_toast`] stacks it at the bottom of a surface's
//! content and slides it with the animator's visibility.
//!
//! ```text
//! +----------------------------------+
//! |                                  |
//! |          Surface content         |
//! |                                  |
//! |   +--------------------------+   |
//! |   | [icon]  Title        [x] |   |  <- slides up from the bottom edge
//! |   +--------------------------+   |
//! +----------------------------------+
//! ```
//!
//! Swipes are detected by the host's pointer handling through
//! [`SwipeTracker`](crate::toast::gesture::SwipeTracker), not by the widget
//! tree built here.

use cosmic::iced::{Alignment, Length, Padding};
use cosmic::widget::{self, button, container, icon};
use cosmic::{Element, Theme};

use crate::app_settings::{
    TOAST_BORDER_RADIUS, TOAST_BOTTOM_MARGIN, TOAST_ICON_SIZE, TOAST_PADDING_HORIZONTAL,
    TOAST_PADDING_VERTICAL, TOAST_SPACING,
};
use crate::surface::WidgetId;
use crate::toast::content::ToastView;
use crate::toast::message::ToastMessage;
use crate::toast::presenter::ViewHost;
use crate::toast::theme::{toast_background_color, toast_foreground_color};

/// Height of a toast bubble in logical pixels.
pub const TOAST_HEIGHT: f32 = TOAST_ICON_SIZE as f32 + 2.0 * TOAST_PADDING_VERTICAL;

/// Icon of the dismiss button.
const DISMISS_ICON: &str = "window-close-symbolic";

/// Renders one toast.
///
/// The icon slot is left out entirely when the toast has no icon, so the
/// title is centered on its own. Text and icon take their color from the
/// container style.
pub fn render_toast<'a>(
    widget: WidgetId,
    view: &ToastView,
    theme: &Theme,
) -> Element<'a, ToastMessage> {
    let bg_color = toast_background_color(theme);
    let fg_color = toast_foreground_color(theme);

    let mut content = widget::row::row()
        .spacing(TOAST_SPACING)
        .align_y(Alignment::Center);

    if let Some(toast_icon) = &view.content.icon {
        content = content.push(
            icon::from_name(toast_icon.name().to_string())
                .size(TOAST_ICON_SIZE)
                .symbolic(true),
        );
    }

    content = content.push(
        widget::text::body(view.title().to_string())
            .width(Length::Shrink)
            .height(Length::Shrink),
    );

    if view.shows_dismiss_button() {
        content = content.push(
            button::icon(icon::from_name(DISMISS_ICON).handle())
                .on_press(ToastMessage::DismissPressed(widget)),
        );
    }

    let bubble = container(content)
        .width(Length::Shrink)
        .height(Length::Fixed(TOAST_HEIGHT))
        .padding(
            Padding::new(TOAST_PADDING_VERTICAL)
                .left(TOAST_PADDING_HORIZONTAL)
                .right(TOAST_PADDING_HORIZONTAL),
        )
        .align_y(Alignment::Center)
        .class(cosmic::style::Container::custom(move |_theme| {
            container::Style {
                background: Some(cosmic::iced::Background::Color(bg_color)),
                border: cosmic::iced::Border {
                    color: cosmic::iced::Color::TRANSPARENT,
                    width: 0.0,
                    radius: TOAST_BORDER_RADIUS.into(),
                },
                icon_color: Some(fg_color),
                text_color: Some(fg_color),
                shadow: cosmic::iced::Shadow::default(),
            }
        }));

    container(bubble)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into()
}

/// Renders a toast mounted in `host`, or `None` once it has been unmounted.
pub fn render_mounted_toast<'a, H: ViewHost>(
    host: &H,
    widget: WidgetId,
    theme: &Theme,
) -> Option<Element<'a, ToastMessage>> {
    host.view(widget).map(|view| render_toast(widget, view, theme))
}

/// Height of the toast slot at `visibility` (0.0 hidden, 1.0 fully shown).
///
/// Out-of-range values are clamped.
pub fn toast_slot_height(visibility: f32) -> f32 {
    let visibility = if visibility.is_nan() {
        0.0
    } else {
        visibility.clamp(0.0, 1.0)
    };
    (TOAST_HEIGHT + TOAST_BOTTOM_MARGIN) * visibility
}

/// Renders surface content with an optional toast along the bottom edge.
///
/// The toast slot grows with `visibility`, so a toast that is sliding out
/// sinks below the edge instead of fading.
pub fn render_surface_with_toast<'a>(
    content: Element<'a, ToastMessage>,
    toast: Option<Element<'a, ToastMessage>>,
    visibility: f32,
) -> Element<'a, ToastMessage> {
    let slot_height = toast_slot_height(visibility);

    match toast {
        Some(toast_element) if slot_height > 0.0 => widget::column::column()
            .push(container(content).width(Length::Fill).height(Length::Fill))
            .push(
                container(toast_element)
                    .width(Length::Fill)
                    .height(Length::Fixed(slot_height))
                    .padding(Padding::ZERO.bottom(TOAST_BOTTOM_MARGIN))
                    .align_y(Alignment::Start),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        _ => container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DismissTrigger;
    use crate::toast::content::{ToastContent, ToastIcon};

    fn view(icon: Option<ToastIcon>, trigger: DismissTrigger) -> ToastView {
        ToastView::new(ToastContent::new("Copied", icon), trigger)
    }

    fn surface_content<'a>() -> Element<'a, ToastMessage> {
        container(widget::text::body("Content"))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    #[test]
    fn test_render_toast_with_and_without_icon() {
        let theme = Theme::dark();
        let with_icon = view(Some(ToastIcon::named("edit-copy-symbolic")), DismissTrigger::Swipe);
        let without_icon = view(None, DismissTrigger::Swipe);

        assert!(with_icon.icon_visible());
        assert!(!without_icon.icon_visible());
        let _element = render_toast(WidgetId(1), &with_icon, &theme);
        let _element = render_toast(WidgetId(2), &without_icon, &theme);
    }

    #[test]
    fn test_render_toast_with_dismiss_button() {
        for theme in [Theme::dark(), Theme::light()] {
            for trigger in [DismissTrigger::Swipe, DismissTrigger::Button, DismissTrigger::Both] {
                let _element = render_toast(WidgetId(1), &view(None, trigger), &theme);
            }
        }
    }

    #[test]
    fn test_render_surface_with_and_without_toast() {
        let theme = Theme::dark();
        let toast = render_toast(WidgetId(1), &view(None, DismissTrigger::Swipe), &theme);
        let _combined = render_surface_with_toast(surface_content(), Some(toast), 0.5);

        let _plain = render_surface_with_toast(surface_content(), None, 1.0);

        let hidden = render_toast(WidgetId(1), &view(None, DismissTrigger::Swipe), &theme);
        let _collapsed = render_surface_with_toast(surface_content(), Some(hidden), 0.0);
    }

    #[test]
    fn test_render_mounted_toast_follows_host() {
        use crate::host::MemoryHost;

        let theme = Theme::light();
        let mut host = MemoryHost::new();
        let surface = host.add_surface();
        let widget = host
            .mount(surface, view(None, DismissTrigger::Both))
            .expect("mounted");

        assert!(render_mounted_toast(&host, widget, &theme).is_some());
        host.unmount(widget);
        assert!(render_mounted_toast(&host, widget, &theme).is_none());
    }

    #[test]
    fn test_slot_height_follows_visibility() {
        assert_eq!(toast_slot_height(0.0), 0.0);
        assert_eq!(toast_slot_height(1.0), TOAST_HEIGHT + TOAST_BOTTOM_MARGIN);
        assert!(toast_slot_height(0.5) < toast_slot_height(1.0));
        assert_eq!(toast_slot_height(2.0), toast_slot_height(1.0));
        assert_eq!(toast_slot_height(-1.0), 0.0);
        assert_eq!(toast_slot_height(f32::NAN), 0.0);
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Toast colors from the COSMIC theme.
//!
//! Toasts use the inverse of the surface palette: a dark bubble on light
//! themes and a light bubble on dark themes, so they stand out from whatever
//! content sits behind them.

use cosmic::iced::Color;
use cosmic::Theme;

/// Opacity of the toast background.
const TOAST_BACKGROUND_ALPHA: f32 = 0.95;

/// Returns the background color for toasts.
///
/// Uses the theme's on-background color (the color text is normally drawn
/// in), slightly translucent.
pub fn toast_background_color(theme: &Theme) -> Color {
    let cosmic = theme.cosmic();
    Color::from(cosmic.on_bg_color()).scale_alpha(TOAST_BACKGROUND_ALPHA)
}

/// Returns the tint for toast text and icons.
pub fn toast_foreground_color(theme: &Theme) -> Color {
    let cosmic = theme.cosmic();
    Color::from(cosmic.bg_color())
}

/// Relative luminance, good enough to compare two colors.
fn luminance(color: Color) -> f32 {
    0.2126 * color.r + 0.7152 * color.g + 0.0722 * color.b
}

/// Returns `true` if `foreground` is readable on `background`.
pub fn has_contrast(foreground: Color, background: Color) -> bool {
    (luminance(foreground) - luminance(background)).abs() > 0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate_color(color: Color, name: &str) {
        for (component, value) in [("r", color.r), ("g", color.g), ("b", color.b), ("a", color.a)] {
            assert!(
                (0.0..=1.0).contains(&value),
                "{} {} component out of range: {}",
                name,
                component,
                value
            );
        }
    }

    #[test]
    fn test_toast_colors_are_valid() {
        for theme in [Theme::dark(), Theme::light()] {
            validate_color(toast_background_color(&theme), "toast_background");
            validate_color(toast_foreground_color(&theme), "toast_foreground");
        }
    }

    #[test]
    fn test_toast_background_is_translucent() {
        let bg = toast_background_color(&Theme::dark());
        assert!(bg.a < 1.0, "toast background should be slightly transparent");
        assert!(bg.a > 0.5, "toast background should stay mostly opaque");
    }

    #[test]
    fn test_foreground_contrasts_with_background() {
        for theme in [Theme::dark(), Theme::light()] {
            let fg = toast_foreground_color(&theme);
            let bg = toast_background_color(&theme);
            assert!(has_contrast(fg, bg), "toast text must be readable");
        }
    }

    /// Dark themes get a light bubble and the other way round.
    #[test]
    fn test_background_inverts_with_theme() {
        let on_dark = toast_background_color(&Theme::dark());
        let on_light = toast_background_color(&Theme::light());
        assert!(luminance(on_dark) > luminance(on_light));
    }
}

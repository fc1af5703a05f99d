// Theme state: dark/light mode and an adjustable accent hue.
// The Lab tab drives the hue; every draw call reads colors from here.

#![allow(dead_code)]

use ratatui::style::Color;

/// Display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
        }
    }
}

/// Current theme, owned by the app.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: Mode,
    /// Accent hue in degrees, 0..360.
    pub hue: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            mode: Mode::Dark,
            hue: 220,
        }
    }
}

impl Theme {
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Dark => Mode::Light,
            Mode::Light => Mode::Dark,
        };
    }

    /// Shift the hue, wrapping around the color wheel.
    pub fn shift_hue(&mut self, delta: i16) {
        self.hue = (self.hue as i32 + delta as i32).rem_euclid(360) as u16;
    }

    /// Accent color derived from the hue.
    pub fn accent(&self) -> Color {
        let (r, g, b) = hsl_to_rgb(self.hue, 0.7, 0.5);
        Color::Rgb(r, g, b)
    }

    pub fn fg(&self) -> Color {
        match self.mode {
            Mode::Dark => Color::White,
            Mode::Light => Color::Black,
        }
    }

    pub fn muted(&self) -> Color {
        match self.mode {
            Mode::Dark => Color::DarkGray,
            Mode::Light => Color::Gray,
        }
    }
}

/// Convert HSL to RGB. Hue in degrees, saturation and lightness in 0..=1.
fn hsl_to_rgb(hue: u16, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let h = f32::from(hue % 360);
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h as u16 {
        0..=59 => (c, x, 0.0),
        60..=119 => (x, c, 0.0),
        120..=179 => (0.0, c, x),
        180..=239 => (0.0, x, c),
        240..=299 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0, 0.7, 0.5), (217, 38, 38));
        assert_eq!(hsl_to_rgb(120, 0.7, 0.5), (38, 217, 38));
        assert_eq!(hsl_to_rgb(240, 0.7, 0.5), (38, 38, 217));
    }

    #[test]
    fn test_hue_wraps() {
        let mut theme = Theme { mode: Mode::Dark, hue: 350 };
        theme.shift_hue(20);
        assert_eq!(theme.hue, 10);

        theme.shift_hue(-30);
        assert_eq!(theme.hue, 340);
    }

    #[test]
    fn test_mode_toggle() {
        let mut theme = Theme::default();
        assert_eq!(theme.mode, Mode::Dark);
        theme.toggle_mode();
        assert_eq!(theme.mode, Mode::Light);
        theme.toggle_mode();
        assert_eq!(theme.mode, Mode::Dark);
    }
}

//! Colors for every closed category shown on screen.
//!
//! Each mapping is a `match` over its enum so a new variant fails to compile
//! until it gets a color.

use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::sample::{DocumentKind, EventKind, Presence};
use crate::task::{Person, Priority, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    /// Resolves `System` from the terminal's `COLORFGBG` hint, dark when unknown.
    pub fn is_dark(&self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !colorfgbg_is_light(std::env::var("COLORFGBG").ok().as_deref()),
        }
    }
}

fn colorfgbg_is_light(value: Option<&str>) -> bool {
    value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg == 7 || bg == 15)
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub drop_target: Color,
    pub dragging: Color,
    pub avatar_palette: [Color; 6],
}

impl ThemeColors {
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            dark_colors()
        } else {
            light_colors()
        }
    }
}

pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),
        border: Color::Rgb(68, 68, 68),
        highlight: Color::Cyan,
        selected_bg: Color::Rgb(48, 48, 48),
        drop_target: Color::Rgb(0, 255, 136),
        dragging: Color::Rgb(255, 213, 79),
        avatar_palette: [
            Color::Rgb(120, 175, 225),
            Color::Rgb(185, 148, 225),
            Color::Rgb(130, 205, 145),
            Color::Rgb(230, 200, 105),
            Color::Rgb(220, 148, 195),
            Color::Rgb(150, 155, 230),
        ],
    }
}

pub fn light_colors() -> ThemeColors {
    ThemeColors {
        text: Color::Black,
        muted: Color::Rgb(110, 110, 110),
        border: Color::Rgb(190, 190, 190),
        highlight: Color::Blue,
        selected_bg: Color::Rgb(225, 230, 240),
        drop_target: Color::Rgb(0, 140, 70),
        dragging: Color::Rgb(180, 120, 0),
        avatar_palette: [
            Color::Rgb(30, 64, 175),
            Color::Rgb(107, 33, 168),
            Color::Rgb(22, 101, 52),
            Color::Rgb(133, 77, 14),
            Color::Rgb(157, 23, 77),
            Color::Rgb(55, 48, 163),
        ],
    }
}

pub fn status_color(status: Status) -> Color {
    match status {
        Status::Todo => Color::Gray,
        Status::InProgress => Color::Blue,
        Status::Done => Color::Green,
        Status::Blocked => Color::Red,
    }
}

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Rgb(255, 165, 0),
        Priority::Low => Color::Green,
    }
}

pub fn event_color(kind: EventKind) -> Color {
    match kind {
        EventKind::Meeting => Color::Blue,
        EventKind::Deadline => Color::Red,
        EventKind::Task => Color::Green,
        EventKind::Sprint => Color::Magenta,
        EventKind::Other => Color::Gray,
    }
}

pub fn presence_color(presence: Presence) -> Color {
    match presence {
        Presence::Active => Color::Green,
        Presence::Busy => Color::Red,
        Presence::Away => Color::Yellow,
        Presence::Offline => Color::Gray,
    }
}

pub fn document_color(kind: DocumentKind) -> Color {
    match kind {
        DocumentKind::Doc => Color::Blue,
        DocumentKind::Design => Color::Magenta,
        DocumentKind::Pdf => Color::Red,
        DocumentKind::Spreadsheet => Color::Green,
        DocumentKind::Presentation => Color::Rgb(255, 165, 0),
    }
}

pub fn avatar_color(person: &Person, colors: &ThemeColors) -> Color {
    colors.avatar_palette[person.color_index(colors.avatar_palette.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("15;0"), false)]
    #[case(Some("0;15"), true)]
    #[case(Some("0;default;7"), true)]
    #[case(Some("garbage"), false)]
    #[case(None, false)]
    fn test_colorfgbg_detection(#[case] value: Option<&str>, #[case] light: bool) {
        assert_eq!(colorfgbg_is_light(value), light);
    }

    #[test]
    fn test_explicit_modes_ignore_environment() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }

    #[test]
    fn test_theme_mode_cycles() {
        let mut mode = ThemeMode::Light;
        for _ in 0..3 {
            mode = mode.next();
        }
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn test_avatar_color_is_stable() {
        let colors = dark_colors();
        let person = Person::new("1", "John Doe");
        assert_eq!(avatar_color(&person, &colors), avatar_color(&person, &colors));
    }
}

use ratatui::style::Color;

pub const THEME_NAMES: [&str; 6] = ["default", "gruvbox", "nord", "dracula", "solarized-dark", "monokai"];

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub title: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub today: Color,
    pub event: Color,
    pub dimmed_day: Color,
    pub weekday_header: Color,
    pub hour_label: Color,
    pub drag_target: Color,
    pub status_bar: Color,
    pub error: Color,
    pub help_section: Color,
}

impl Theme {
    /// Looks a theme up by name, case-insensitively. `solarized` is accepted
    /// as shorthand for `solarized-dark`.
    pub fn named(name: &str) -> Option<Self> {
        let theme = match name.trim().to_lowercase().as_str() {
            "default" => Self::terminal(),
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            "solarized-dark" | "solarized" => Self::solarized_dark(),
            "monokai" => Self::monokai(),
            _ => return None,
        };
        Some(theme)
    }

    /// Like [`Theme::named`], falling back to the terminal palette.
    pub fn named_or_default(name: &str) -> Self {
        Self::named(name).unwrap_or_else(|| {
            tracing::warn!(theme = name, "unknown theme, using default");
            Self::terminal()
        })
    }

    fn terminal() -> Self {
        Self {
            name: "default",
            title: Color::Cyan,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            today: Color::Green,
            event: Color::LightCyan,
            dimmed_day: Color::DarkGray,
            weekday_header: Color::Yellow,
            hour_label: Color::Gray,
            drag_target: Color::Magenta,
            status_bar: Color::White,
            error: Color::Red,
            help_section: Color::Yellow,
        }
    }

    fn gruvbox() -> Self {
        Self {
            name: "gruvbox",
            title: Color::Rgb(250, 189, 47),
            selected_bg: Color::Rgb(80, 73, 69),
            selected_fg: Color::Rgb(251, 241, 199),
            today: Color::Rgb(184, 187, 38),
            event: Color::Rgb(131, 165, 152),
            dimmed_day: Color::Rgb(124, 111, 100),
            weekday_header: Color::Rgb(254, 128, 25),
            hour_label: Color::Rgb(168, 153, 132),
            drag_target: Color::Rgb(211, 134, 155),
            status_bar: Color::Rgb(235, 219, 178),
            error: Color::Rgb(251, 73, 52),
            help_section: Color::Rgb(254, 128, 25),
        }
    }

    fn nord() -> Self {
        Self {
            name: "nord",
            title: Color::Rgb(143, 188, 187),
            selected_bg: Color::Rgb(67, 76, 94),
            selected_fg: Color::Rgb(236, 239, 244),
            today: Color::Rgb(163, 190, 140),
            event: Color::Rgb(136, 192, 208),
            dimmed_day: Color::Rgb(76, 86, 106),
            weekday_header: Color::Rgb(235, 203, 139),
            hour_label: Color::Rgb(129, 161, 193),
            drag_target: Color::Rgb(180, 142, 173),
            status_bar: Color::Rgb(216, 222, 233),
            error: Color::Rgb(191, 97, 106),
            help_section: Color::Rgb(235, 203, 139),
        }
    }

    fn dracula() -> Self {
        Self {
            name: "dracula",
            title: Color::Rgb(189, 147, 249),
            selected_bg: Color::Rgb(68, 71, 90),
            selected_fg: Color::Rgb(248, 248, 242),
            today: Color::Rgb(80, 250, 123),
            event: Color::Rgb(139, 233, 253),
            dimmed_day: Color::Rgb(98, 114, 164),
            weekday_header: Color::Rgb(241, 250, 140),
            hour_label: Color::Rgb(98, 114, 164),
            drag_target: Color::Rgb(255, 121, 198),
            status_bar: Color::Rgb(248, 248, 242),
            error: Color::Rgb(255, 85, 85),
            help_section: Color::Rgb(255, 184, 108),
        }
    }

    fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            title: Color::Rgb(38, 139, 210),
            selected_bg: Color::Rgb(7, 54, 66),
            selected_fg: Color::Rgb(238, 232, 213),
            today: Color::Rgb(133, 153, 0),
            event: Color::Rgb(42, 161, 152),
            dimmed_day: Color::Rgb(88, 110, 117),
            weekday_header: Color::Rgb(181, 137, 0),
            hour_label: Color::Rgb(101, 123, 131),
            drag_target: Color::Rgb(211, 54, 130),
            status_bar: Color::Rgb(147, 161, 161),
            error: Color::Rgb(220, 50, 47),
            help_section: Color::Rgb(203, 75, 22),
        }
    }

    fn monokai() -> Self {
        Self {
            name: "monokai",
            title: Color::Rgb(102, 217, 239),
            selected_bg: Color::Rgb(73, 72, 62),
            selected_fg: Color::Rgb(248, 248, 240),
            today: Color::Rgb(166, 226, 46),
            event: Color::Rgb(174, 129, 255),
            dimmed_day: Color::Rgb(117, 113, 94),
            weekday_header: Color::Rgb(230, 219, 116),
            hour_label: Color::Rgb(117, 113, 94),
            drag_target: Color::Rgb(253, 151, 31),
            status_bar: Color::Rgb(248, 248, 240),
            error: Color::Rgb(249, 38, 114),
            help_section: Color::Rgb(230, 219, 116),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::terminal()
    }
}

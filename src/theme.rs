//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Pane borders and titles shared by upload, documents and ask panes
pub mod pane {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const BORDER_BUSY: Color = palette::WARNING;
    pub const TITLE: Color = palette::TEXT;
    pub const PLACEHOLDER: Style = Style::new()
        .fg(Color::Rgb(90, 92, 119))
        .add_modifier(Modifier::ITALIC);
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Document list styles
pub mod documents {
    use super::*;

    pub const FILENAME: Style = Style::new()
        .fg(Color::Rgb(236, 236, 244))
        .add_modifier(Modifier::BOLD);
    pub const META: Color = palette::TEXT_MUTED;
    pub const SELECTED_BG: Color = palette::BG_HIGHLIGHT;
    pub const EMPTY: Color = palette::TEXT_MUTED;
    pub const ERROR: Color = palette::ERROR;

    pub const STATUS_PROCESSED: Color = palette::SUCCESS;
    pub const STATUS_PROCESSING: Color = palette::WARNING;
    pub const STATUS_FAILED: Color = palette::ERROR;
    pub const STATUS_UNKNOWN: Color = palette::TEXT_MUTED;
}

/// Ask pane styles
pub mod ask {
    use super::*;

    pub const LABEL: Color = palette::PURPLE;
    pub const ANSWER: Color = palette::TEXT;
    pub const SOURCE: Color = palette::TEXT_MUTED;
    pub const FOOTER: Color = palette::TEXT_DIM;
    pub const ERROR: Color = palette::ERROR;
}

/// Upload pane styles
pub mod upload {
    use super::*;

    pub const RESPONSE_LABEL: Color = palette::SUCCESS;
    pub const RESPONSE_TEXT: Color = palette::TEXT_MUTED;
}

/// Spinner animation colors (galaxy rainbow)
pub mod spinner {
    use super::*;

    pub const COLORS: &[Color] = &[
        Color::Rgb(255, 107, 157), // Pink
        Color::Rgb(255, 184, 108), // Orange
        Color::Rgb(255, 217, 61),  // Yellow
        Color::Rgb(107, 203, 119), // Green
        Color::Rgb(0, 217, 255),   // Cyan
        Color::Rgb(189, 147, 249), // Purple
        Color::Rgb(198, 120, 221), // Magenta
        Color::Rgb(224, 108, 117), // Red
    ];
}

/// Delete confirmation popup
pub mod popup {
    use super::*;

    pub const BORDER: Color = palette::ERROR;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TEXT: Color = palette::TEXT;
}

pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const SUCCESS: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(107, 203, 119),
        border: Color::Rgb(150, 230, 160),
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(224, 108, 117),
        border: Color::Rgb(255, 135, 145),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
}

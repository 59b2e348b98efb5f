//! Color themes matching the menu templates.

use ratatui::style::{Color, Modifier, Style};

use menubook_core::TemplateStyle;

/// Color theme for the viewer.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Template this theme renders.
    pub style: TemplateStyle,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // Page elements
    pub title: Style,
    pub heading: Style,
    pub heading_desc: Style,
    pub item_name: Style,
    pub item_desc: Style,
    pub price: Style,
    pub image_marker: Style,

    // Chrome
    pub border: Style,
    pub hint: Style,
    pub footer: Style,
    pub help_key: Style,
    pub help_desc: Style,
}

impl Theme {
    /// Deep blue page with light text.
    pub fn classic_blue() -> Self {
        let navy_900 = Color::Rgb(15, 23, 42);
        let blue_100 = Color::Rgb(219, 234, 254);
        let blue_300 = Color::Rgb(147, 197, 253);
        let blue_400 = Color::Rgb(96, 165, 250);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_600 = Color::Rgb(71, 85, 105);
        let amber_400 = Color::Rgb(251, 191, 36);

        Self::build(
            TemplateStyle::ClassicBlue,
            navy_900,
            blue_100,
            slate_400,
            blue_400,
            blue_300,
            amber_400,
            slate_600,
        )
    }

    /// Neutral grays, no accent color.
    pub fn slate_minimal() -> Self {
        let slate_50 = Color::Rgb(248, 250, 252);
        let slate_300 = Color::Rgb(203, 213, 225);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_900 = Color::Rgb(15, 23, 42);

        Self::build(
            TemplateStyle::SlateMinimal,
            slate_900,
            slate_50,
            slate_500,
            slate_50,
            slate_300,
            slate_300,
            slate_700,
        )
    }

    /// Cream paper with brown ink.
    pub fn warm_paper() -> Self {
        let cream = Color::Rgb(253, 246, 227);
        let brown_900 = Color::Rgb(67, 40, 24);
        let brown_700 = Color::Rgb(120, 72, 40);
        let stone_500 = Color::Rgb(120, 113, 108);
        let red_800 = Color::Rgb(153, 27, 27);
        let amber_700 = Color::Rgb(180, 83, 9);
        let stone_300 = Color::Rgb(214, 211, 209);

        Self::build(
            TemplateStyle::WarmPaper,
            cream,
            brown_900,
            stone_500,
            red_800,
            brown_700,
            amber_700,
            stone_300,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        style: TemplateStyle,
        background: Color,
        foreground: Color,
        muted: Color,
        accent: Color,
        secondary: Color,
        price: Color,
        border: Color,
    ) -> Self {
        Self {
            style,
            background,
            foreground,
            muted,

            title: Style::new().fg(accent).add_modifier(Modifier::BOLD),
            heading: Style::new().fg(accent).add_modifier(Modifier::BOLD),
            heading_desc: Style::new().fg(muted).add_modifier(Modifier::ITALIC),
            item_name: Style::new().fg(foreground).add_modifier(Modifier::BOLD),
            item_desc: Style::new().fg(muted),
            price: Style::new().fg(price).add_modifier(Modifier::BOLD),
            image_marker: Style::new().fg(secondary),

            border: Style::new().fg(border),
            hint: Style::new().fg(muted).add_modifier(Modifier::ITALIC),
            footer: Style::new().fg(muted),
            help_key: Style::new().fg(accent).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(secondary),
        }
    }

    /// Theme for a template. Custom uploads and unknown styles use the default.
    pub fn for_style(style: &TemplateStyle) -> Self {
        match style {
            TemplateStyle::SlateMinimal => Self::slate_minimal(),
            TemplateStyle::WarmPaper => Self::warm_paper(),
            TemplateStyle::ClassicBlue | TemplateStyle::CustomUpload | TemplateStyle::Unknown(_) => {
                Self::classic_blue()
            }
        }
    }

    /// Theme by style id, if it names a built-in template.
    pub fn from_name(name: &str) -> Option<Self> {
        TemplateStyle::is_built_in(name).then(|| Self::for_style(&TemplateStyle::from_id(name)))
    }

    /// Base style for the page background.
    pub fn base(&self) -> Style {
        Style::new().bg(self.background).fg(self.foreground)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic_blue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_for_style() {
        assert_eq!(Theme::for_style(&TemplateStyle::WarmPaper).style, TemplateStyle::WarmPaper);
        assert_eq!(
            Theme::for_style(&TemplateStyle::CustomUpload).style,
            TemplateStyle::ClassicBlue
        );
    }

    #[test]
    fn test_theme_from_name() {
        assert!(Theme::from_name("slate-minimal").is_some());
        assert!(Theme::from_name("custom-upload").is_none());
        assert!(Theme::from_name("").is_none());
    }
}

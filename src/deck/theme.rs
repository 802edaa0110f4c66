//! The visual theme a deck is composed against.
//!
//! A [`Theme`] bundles the color palette, the typefaces and every fixed
//! canvas position the composer places shapes at. It is built once, never
//! mutated, and passed by reference into each slide operation, so restyling
//! a deck means supplying a different value here and nothing else.

use crate::common::unit::inches_to_emu;
use crate::common::RGBColor;
use crate::pptx::TextFormat;

/// A positioned box on the slide canvas, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: inches_to_emu(x),
            y: inches_to_emu(y),
            width: inches_to_emu(width),
            height: inches_to_emu(height),
        }
    }
}

/// The deck's named colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Brand color used for accents, bands and headings
    pub primary: RGBColor,
    /// Deep background color of title and section slides
    pub dark: RGBColor,
    /// Light foreground, mostly white surfaces and inverted text
    pub secondary: RGBColor,
    /// Link-style blue accent
    pub accent: RGBColor,
    /// Background of content slides
    pub bg_light: RGBColor,
    /// Default body text color
    pub text_main: RGBColor,
    /// De-emphasized text color
    pub text_dim: RGBColor,
    /// Muted gray for incidental text such as the date stamp
    pub text_muted: RGBColor,
}

/// Typefaces used by the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fonts {
    /// Face applied to every text run
    pub arabic: String,
    /// Face installed as the document theme's font scheme, inherited by
    /// anything not styled at run level
    pub fallback: String,
}

/// Fixed canvas geometry, all in EMUs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub slide_width: i64,
    pub slide_height: i64,
    /// Brand band across the bottom of dark slides
    pub accent_band: Rect,
    /// Brand sidebar along the trailing edge of light slides
    pub accent_sidebar: Rect,
    /// Decorative ellipse bleeding off the title slide
    pub title_oval: Rect,
    pub title_box: Rect,
    pub subtitle_box: Rect,
    pub date_box: Rect,
    pub section_title_box: Rect,
    /// Dark header bar of content slides
    pub header_band: Rect,
    pub header_title_box: Rect,
    pub bullet_left: i64,
    pub bullet_width: i64,
    pub bullet_box_height: i64,
    /// Top of the first bullet row
    pub body_top: i64,
    /// Vertical step between consecutive bullet rows
    pub bullet_row_height: i64,
    pub column_top: i64,
    pub column_width: i64,
    pub column_height: i64,
    pub left_column_x: i64,
    pub right_column_x: i64,
    /// Horizontal inset of text boxes laid over a column box
    pub column_text_inset: i64,
    pub column_heading_offset: i64,
    pub column_heading_height: i64,
    /// Offset of the first column bullet row below the column top
    pub column_body_offset: i64,
    pub column_row_height: i64,
    pub column_row_box_height: i64,
    /// Arrow between the two architecture boxes
    pub arrow: Rect,
}

/// The style variants text runs are composed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Main title on the opening slide
    MainTitle,
    Subtitle,
    DateStamp,
    /// Large heading on a section divider
    SectionTitle,
    /// Slide title inside the header bar
    SlideTitle,
    /// Content slide bullet line
    Bullet,
    /// Heading above a column's bullet list
    ColumnHeading,
    /// Body line inside a column
    ColumnBody,
}

/// The complete theme, shared read-only by every composer operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub fonts: Fonts,
    pub layout: Layout,
}

impl Theme {
    /// Resolve a style variant into concrete run formatting.
    pub fn text_format(&self, style: TextStyle) -> TextFormat {
        let (size, bold, color) = match style {
            TextStyle::MainTitle => (60.0, true, self.palette.secondary),
            TextStyle::Subtitle => (28.0, false, self.palette.primary),
            TextStyle::DateStamp => (16.0, false, self.palette.text_muted),
            TextStyle::SectionTitle => (54.0, true, self.palette.primary),
            TextStyle::SlideTitle => (36.0, true, self.palette.primary),
            TextStyle::Bullet => (22.0, false, self.palette.text_main),
            TextStyle::ColumnHeading => (24.0, true, self.palette.dark),
            TextStyle::ColumnBody => (18.0, false, self.palette.text_main),
        };
        TextFormat {
            font: Some(self.fonts.arabic.clone()),
            size: Some(size),
            bold: if bold { Some(true) } else { None },
            color: Some(color),
        }
    }
}

impl Default for Theme {
    /// The Electronic Academy house style: widescreen 16:9 canvas, teal
    /// brand color on deep navy, Cairo for all visible text.
    fn default() -> Self {
        let slide_width = inches_to_emu(13.333);
        let slide_height = inches_to_emu(7.5);
        Self {
            palette: Palette {
                primary: RGBColor::new(0x01, 0xD4, 0x93),
                dark: RGBColor::new(0x0A, 0x1F, 0x3B),
                secondary: RGBColor::new(0xFF, 0xFF, 0xFF),
                accent: RGBColor::new(0x25, 0x63, 0xEB),
                bg_light: RGBColor::new(0xF8, 0xFA, 0xFC),
                text_main: RGBColor::new(0x1E, 0x29, 0x3B),
                text_dim: RGBColor::new(0x64, 0x74, 0x8B),
                text_muted: RGBColor::new(150, 150, 150),
            },
            fonts: Fonts {
                arabic: "Cairo".to_string(),
                fallback: "Segoe UI".to_string(),
            },
            layout: Layout {
                slide_width,
                slide_height,
                accent_band: Rect::new(0, inches_to_emu(7.3), slide_width, inches_to_emu(0.2)),
                accent_sidebar: Rect::new(
                    inches_to_emu(13.1),
                    0,
                    inches_to_emu(0.233),
                    slide_height,
                ),
                title_oval: Rect::from_inches(-2.0, 5.0, 6.0, 6.0),
                title_box: Rect::from_inches(1.0, 2.5, 11.3, 2.0),
                subtitle_box: Rect::from_inches(1.0, 4.2, 11.3, 1.0),
                date_box: Rect::from_inches(1.0, 6.5, 11.3, 0.5),
                section_title_box: Rect::from_inches(1.0, 3.0, 11.3, 1.5),
                header_band: Rect::new(0, 0, slide_width, inches_to_emu(1.0)),
                header_title_box: Rect::from_inches(1.0, 0.0, 11.5, 1.0),
                bullet_left: inches_to_emu(1.0),
                bullet_width: inches_to_emu(11.0),
                bullet_box_height: inches_to_emu(0.8),
                body_top: inches_to_emu(1.8),
                bullet_row_height: inches_to_emu(0.9),
                column_top: inches_to_emu(2.0),
                column_width: inches_to_emu(3.5),
                column_height: inches_to_emu(4.0),
                left_column_x: inches_to_emu(1.0),
                right_column_x: inches_to_emu(6.5),
                column_text_inset: inches_to_emu(0.2),
                column_heading_offset: inches_to_emu(0.25),
                column_heading_height: inches_to_emu(0.6),
                column_body_offset: inches_to_emu(1.0),
                column_row_height: inches_to_emu(0.6),
                column_row_box_height: inches_to_emu(0.5),
                arrow: Rect::from_inches(4.7, 3.5, 1.5, 1.0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_is_widescreen() {
        let theme = Theme::default();
        assert_eq!(theme.layout.slide_width, 12_191_695);
        assert_eq!(theme.layout.slide_height, 6_858_000);
    }

    #[test]
    fn test_columns_do_not_overlap() {
        let layout = Theme::default().layout;
        assert!(layout.left_column_x + layout.column_width < layout.right_column_x);
    }

    #[test]
    fn test_text_format_resolves_styles() {
        let theme = Theme::default();
        let title = theme.text_format(TextStyle::MainTitle);
        assert_eq!(title.size, Some(60.0));
        assert_eq!(title.bold, Some(true));
        assert_eq!(title.color, Some(theme.palette.secondary));
        assert_eq!(title.font.as_deref(), Some("Cairo"));

        let bullet = theme.text_format(TextStyle::Bullet);
        assert_eq!(bullet.size, Some(22.0));
        assert_eq!(bullet.bold, None);
        assert_eq!(bullet.color, Some(theme.palette.text_main));
    }

    #[test]
    fn test_bullet_rows_leave_a_gap() {
        let layout = Theme::default().layout;
        assert!(layout.bullet_box_height < layout.bullet_row_height);
        assert!(layout.column_row_box_height < layout.column_row_height);
    }
}

//! The slide composer: turns content into themed visual elements.
//!
//! Each `add_*` operation appends one fully-styled slide to the presentation.
//! Layout positions and styling come from the shared [`Theme`]; every visible
//! string passes through the directionality adapter exactly once, inside
//! [`compose_text_run`].

use log::debug;

use crate::deck::content::{Column, SlideContent};
use crate::deck::theme::{Rect, TextStyle, Theme};
use crate::pptx::{Align, Anchor, Paragraph, Presentation, Run, Shape, ShapeKind, Slide};
use crate::text;

/// Opacity of the decorative title-slide ellipse, thousandths of a percent.
const DECOR_ALPHA: u32 = 20_000;

/// Bullet glyph appended to each bullet line, in logical order, so the
/// directionality adapter places it on the correct visual side.
const BULLET_GLYPH: char = '\u{25CF}';

/// Build a styled run from logical text.
///
/// The single place deck text crosses into display order. Callers hand over
/// logical text and must not re-adapt the result: adaptation is not
/// idempotent.
pub fn compose_text_run(theme: &Theme, text: &str, style: TextStyle) -> Run {
    Run::new(text::display(text), theme.text_format(style))
}

/// Composes themed slides into a presentation.
///
/// Holds the theme and the presentation for the duration of deck assembly;
/// serialization stays with the presentation itself.
pub struct Composer<'a> {
    theme: &'a Theme,
    pres: &'a mut Presentation,
}

impl<'a> Composer<'a> {
    /// Create a composer and size the presentation canvas from the theme.
    pub fn new(theme: &'a Theme, pres: &'a mut Presentation) -> Self {
        pres.set_slide_size(theme.layout.slide_width, theme.layout.slide_height);
        pres.set_theme_font(theme.fonts.fallback.clone());
        Self { theme, pres }
    }

    /// Append one slide per content entry, in order.
    pub fn compose(&mut self, contents: &[SlideContent]) {
        for content in contents {
            match content {
                SlideContent::Title {
                    title,
                    subtitle,
                    date_stamp,
                } => self.add_title_slide(title, subtitle, date_stamp),
                SlideContent::SectionHeader { title } => self.add_section_header(title),
                SlideContent::Content { title, bullets } => self.add_content_slide(title, bullets),
                SlideContent::TwoColumn { title, left, right } => {
                    self.add_two_column_slide(title, left, right)
                }
                SlideContent::Architecture => self.add_architecture_slide(),
            }
        }
    }

    /// Dark opening slide: centered title and subtitle over a translucent
    /// decorative ellipse, date stamp in the lower corner.
    pub fn add_title_slide(&mut self, title: &str, subtitle: &str, date_stamp: &str) {
        debug!("composing title slide");
        let theme = self.theme;
        let layout = &theme.layout;
        let slide = self.pres.add_slide();
        add_dark_background(slide, theme);
        auto_shape(slide, ShapeKind::Ellipse, layout.title_oval)
            .fill_alpha(theme.palette.primary, DECOR_ALPHA)
            .no_line();
        text_box(slide, layout.title_box).add_paragraph(Paragraph::with_run(
            Some(Align::Center),
            compose_text_run(theme, title, TextStyle::MainTitle),
        ));
        text_box(slide, layout.subtitle_box).add_paragraph(Paragraph::with_run(
            Some(Align::Center),
            compose_text_run(theme, subtitle, TextStyle::Subtitle),
        ));
        text_box(slide, layout.date_box).add_paragraph(Paragraph::with_run(
            Some(Align::Left),
            compose_text_run(theme, date_stamp, TextStyle::DateStamp),
        ));
    }

    /// Dark divider slide with one large centered heading.
    pub fn add_section_header(&mut self, title: &str) {
        debug!("composing section header");
        let theme = self.theme;
        let slide = self.pres.add_slide();
        add_dark_background(slide, theme);
        text_box(slide, theme.layout.section_title_box).add_paragraph(Paragraph::with_run(
            Some(Align::Center),
            compose_text_run(theme, title, TextStyle::SectionTitle),
        ));
    }

    /// Light slide with a header bar and one fixed-height row per bullet.
    pub fn add_content_slide(&mut self, title: &str, bullets: &[String]) {
        debug!("composing content slide with {} bullets", bullets.len());
        let theme = self.theme;
        let layout = &theme.layout;
        let slide = self.pres.add_slide();
        add_light_background(slide, theme);
        add_header_bar(slide, theme, title);
        for (row, bullet) in bullets.iter().enumerate() {
            let y = layout.body_top + row as i64 * layout.bullet_row_height;
            let line = format!("{bullet} {BULLET_GLYPH}");
            slide
                .add_text_box(layout.bullet_left, y, layout.bullet_width, layout.bullet_box_height)
                .add_paragraph(Paragraph::with_run(
                    Some(Align::Right),
                    compose_text_run(theme, &line, TextStyle::Bullet),
                ));
        }
    }

    /// Header bar plus two independent bullet columns side by side.
    pub fn add_two_column_slide(&mut self, title: &str, left: &Column, right: &Column) {
        debug!("composing two-column slide");
        let theme = self.theme;
        let slide = self.pres.add_slide();
        add_light_background(slide, theme);
        add_header_bar(slide, theme, title);
        add_column(slide, theme, theme.layout.left_column_x, left);
        add_column(slide, theme, theme.layout.right_column_x, right);
    }

    /// The fixed technology diagram: client and server boxes joined by an
    /// arrow, each listing its stack.
    pub fn add_architecture_slide(&mut self) {
        debug!("composing architecture slide");
        let theme = self.theme;
        let layout = &theme.layout;
        let slide = self.pres.add_slide();
        add_light_background(slide, theme);
        add_header_bar(slide, theme, "بنية النظام والتقنيات المستخدمة");
        add_architecture_box(
            slide,
            theme,
            layout.left_column_x,
            "جهة العميل (Frontend)",
            &["Next.js 14 / React", "Tailwind CSS", "Zustand (State)"],
        );
        auto_shape(slide, ShapeKind::RightArrow, layout.arrow)
            .fill(theme.palette.primary)
            .no_line();
        add_architecture_box(
            slide,
            theme,
            layout.right_column_x,
            "الخادم والبيانات (Backend)",
            &["Laravel 11 REST API", "PostgreSQL Database", "JWT Authentication"],
        );
    }
}

fn text_box(slide: &mut Slide, rect: Rect) -> &mut Shape {
    slide.add_text_box(rect.x, rect.y, rect.width, rect.height)
}

fn auto_shape(slide: &mut Slide, kind: ShapeKind, rect: Rect) -> &mut Shape {
    slide.add_auto_shape(kind, rect.x, rect.y, rect.width, rect.height)
}

/// Dark navy canvas with the brand band along the bottom.
fn add_dark_background(slide: &mut Slide, theme: &Theme) {
    let layout = &theme.layout;
    slide
        .add_auto_shape(ShapeKind::Rectangle, 0, 0, layout.slide_width, layout.slide_height)
        .fill(theme.palette.dark)
        .no_line();
    auto_shape(slide, ShapeKind::Rectangle, layout.accent_band)
        .fill(theme.palette.primary)
        .no_line();
}

/// Light canvas with the brand sidebar along the trailing edge.
fn add_light_background(slide: &mut Slide, theme: &Theme) {
    let layout = &theme.layout;
    slide
        .add_auto_shape(ShapeKind::Rectangle, 0, 0, layout.slide_width, layout.slide_height)
        .fill(theme.palette.bg_light)
        .no_line();
    auto_shape(slide, ShapeKind::Rectangle, layout.accent_sidebar)
        .fill(theme.palette.primary)
        .no_line();
}

/// Dark header bar with the slide title anchored in its middle.
fn add_header_bar(slide: &mut Slide, theme: &Theme, title: &str) {
    let layout = &theme.layout;
    auto_shape(slide, ShapeKind::Rectangle, layout.header_band)
        .fill(theme.palette.dark)
        .no_line();
    text_box(slide, layout.header_title_box)
        .anchor(Anchor::Middle)
        .add_paragraph(Paragraph::with_run(
            Some(Align::Right),
            compose_text_run(theme, title, TextStyle::SlideTitle),
        ));
}

/// One bordered column: the box, its heading, then a stacked bullet list.
fn add_column(slide: &mut Slide, theme: &Theme, column_x: i64, column: &Column) {
    let layout = &theme.layout;
    auto_shape(
        slide,
        ShapeKind::RoundedRectangle,
        Rect::new(column_x, layout.column_top, layout.column_width, layout.column_height),
    )
    .fill(theme.palette.secondary)
    .outline(theme.palette.primary);

    let text_x = column_x + layout.column_text_inset;
    let text_width = layout.column_width - 2 * layout.column_text_inset;
    text_box(
        slide,
        Rect::new(
            text_x,
            layout.column_top + layout.column_heading_offset,
            text_width,
            layout.column_heading_height,
        ),
    )
    .add_paragraph(Paragraph::with_run(
        Some(Align::Center),
        compose_text_run(theme, &column.heading, TextStyle::ColumnHeading),
    ));

    for (row, bullet) in column.bullets.iter().enumerate() {
        let y = layout.column_top + layout.column_body_offset + row as i64 * layout.column_row_height;
        let line = format!("{bullet} {BULLET_GLYPH}");
        text_box(slide, Rect::new(text_x, y, text_width, layout.column_row_box_height))
            .add_paragraph(Paragraph::with_run(
                Some(Align::Right),
                compose_text_run(theme, &line, TextStyle::ColumnBody),
            ));
    }
}

/// One architecture box with its label paragraphs inside the shape itself.
fn add_architecture_box(slide: &mut Slide, theme: &Theme, x: i64, heading: &str, labels: &[&str]) {
    let layout = &theme.layout;
    let shape = auto_shape(
        slide,
        ShapeKind::RoundedRectangle,
        Rect::new(x, layout.column_top, layout.column_width, layout.column_height),
    );
    shape
        .fill(theme.palette.secondary)
        .outline(theme.palette.primary)
        .anchor(Anchor::Middle)
        .add_paragraph(Paragraph::with_run(
            Some(Align::Center),
            compose_text_run(theme, heading, TextStyle::ColumnHeading),
        ));
    for label in labels {
        shape.add_paragraph(Paragraph::with_run(
            None,
            compose_text_run(theme, label, TextStyle::ColumnBody),
        ));
    }
}

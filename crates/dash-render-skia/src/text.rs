// File: crates/dash-render-skia/src/text.rs
// Summary: Text shaper/renderer on Skia textlayout: measured, aligned and optionally bold labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use dash_core::series::TextAlign;

pub struct TextShaper {
    fonts: FontCollection,
    families: Vec<String>,
}

impl TextShaper {
    /// `family` is a CSS-style font list; each entry becomes a fallback family.
    pub fn new(family: &str) -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        let mut families: Vec<String> = family
            .split(',')
            .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
            .filter(|f| !f.is_empty())
            .collect();
        families.extend(["Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"].map(String::from));
        Self { fonts: fc, families }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&self.families);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, false).longest_line()
    }

    /// Draw `text` with its vertical center at `y`, anchored at `x` per `align`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        align: TextAlign,
        bold: bool,
    ) {
        let mut p = self.layout(text, size, color, bold);
        let width = p.longest_line();
        let left = match align {
            TextAlign::Start => x,
            TextAlign::Middle => x - width / 2.0,
            TextAlign::End => x - width,
        };
        // Paragraphs paint from their top-left corner.
        p.paint(canvas, (left, y - p.height() / 2.0));
    }
}

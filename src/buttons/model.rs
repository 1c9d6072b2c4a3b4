//! Shared button state and the render contract every variant uses.

use ratatui::text::{Line, Span};

use crate::palette::{PaletteStore, DEFAULT_ATTR, IDLE_ATTR, SELECTED_ATTR};

const GLYPH: usize = 0;
const CAPTION: usize = 1;
const BADGE: usize = 2;

/// One styled run of text. `attr: None` inherits the line attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub attr: Option<String>,
}

impl Segment {
    fn new(text: impl Into<String>, attr: Option<String>) -> Self {
        Self {
            text: text.into(),
            attr,
        }
    }
}

/// Snapshot of how a button should be drawn.
///
/// Always three segments: leading glyph, caption, badge. The snapshot does not
/// follow later count updates; re-render after calling `update_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSpec {
    pub segments: [Segment; 3],
    /// Cursor anchor: glyph width plus caption length, so it never lands in the badge.
    pub cursor: usize,
    /// Attribute for the unfocused line. `None` means [`DEFAULT_ATTR`].
    pub attr: Option<String>,
    /// Attribute the host swaps in while the button is focused.
    pub focus_attr: &'static str,
}

impl RenderSpec {
    pub fn glyph(&self) -> &Segment {
        &self.segments[GLYPH]
    }

    pub fn caption(&self) -> &Segment {
        &self.segments[CAPTION]
    }

    pub fn badge(&self) -> &Segment {
        &self.segments[BADGE]
    }

    /// Plain text of the whole line.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Resolve attribute names through `palette` into a styled line.
    ///
    /// Segments with their own attribute (badge, stream glyph) keep it when
    /// selected; only the line attribute is replaced by the focus attribute.
    pub fn to_line(&self, palette: &PaletteStore, selected: bool) -> Line<'static> {
        let line_attr = if selected {
            self.focus_attr
        } else {
            self.attr.as_deref().unwrap_or(DEFAULT_ATTR)
        };

        let spans: Vec<Span<'static>> = self
            .segments
            .iter()
            .map(|segment| match &segment.attr {
                Some(attr) => Span::styled(segment.text.clone(), palette.style(attr)),
                None => Span::raw(segment.text.clone()),
            })
            .collect();

        Line::from(spans).style(palette.style(line_attr))
    }
}

/// Caption, count and color shared by every button kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonModel {
    caption: String,
    count: i64,
    glyph: &'static str,
    glyph_attr: Option<String>,
    line_attr: Option<String>,
}

impl ButtonModel {
    pub fn new(caption: impl Into<String>, glyph: &'static str, count: i64) -> Self {
        Self {
            caption: caption.into(),
            count,
            glyph,
            glyph_attr: None,
            line_attr: None,
        }
    }

    /// Style only the leading glyph (stream color marker).
    pub fn with_glyph_attr(mut self, attr: impl Into<String>) -> Self {
        self.glyph_attr = Some(attr.into());
        self
    }

    /// Default attribute for the whole line (explicit user color).
    pub fn with_line_attr(mut self, attr: Option<String>) -> Self {
        self.line_attr = attr;
        self
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn glyph_width(&self) -> usize {
        self.glyph.chars().count()
    }

    /// Set the badge count. Zero and negative values hide the badge.
    pub fn update_count(&mut self, count: i64) {
        self.count = count;
    }

    pub fn badge_text(&self) -> String {
        if self.count <= 0 {
            String::new()
        } else {
            format!(" {}", self.count)
        }
    }

    pub fn render(&self) -> RenderSpec {
        RenderSpec {
            segments: [
                Segment::new(self.glyph, self.glyph_attr.clone()),
                Segment::new(self.caption.clone(), None),
                Segment::new(self.badge_text(), Some(IDLE_ATTR.to_string())),
            ],
            cursor: self.caption.chars().count() + self.glyph_width(),
            attr: self.line_attr.clone(),
            focus_attr: SELECTED_ATTR,
        }
    }
}

//! Fixed page layout: wraps letter blocks into lines and pages

use crate::letter::Letter;

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Page size, margins and type metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
    pub font_size_pt: f32,
    pub leading_pt: f32,
}

impl Default for PageGeometry {
    /// US Letter, one-inch margins, 12pt text on 16pt leading
    fn default() -> Self {
        Self {
            width_mm: 215.9,
            height_mm: 279.4,
            margin_mm: 25.4,
            font_size_pt: 12.0,
            leading_pt: 16.0,
        }
    }
}

impl PageGeometry {
    fn text_width_pt(&self) -> f32 {
        (self.width_mm - 2.0 * self.margin_mm) / MM_PER_PT
    }

    fn top_pt(&self) -> f32 {
        (self.height_mm - self.margin_mm) / MM_PER_PT
    }

    fn bottom_pt(&self) -> f32 {
        self.margin_mm / MM_PER_PT
    }
}

/// A line of text positioned on a page (PDF origin is bottom-left)
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
    pub bold: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

/// Estimated advance of a glyph in ems. Wide scripts (Hangul, CJK,
/// emoji) take a full em, everything else half.
fn advance_em(c: char) -> f32 {
    let wide = matches!(c as u32,
        0x1100..=0x115F
        | 0x2E80..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x1F300..=0x1FAFF
    );
    if wide {
        1.0
    } else {
        0.5
    }
}

fn width_pt(text: &str, font_size_pt: f32) -> f32 {
    text.chars().map(advance_em).sum::<f32>() * font_size_pt
}

/// Greedy word wrap; words wider than a line are broken by character.
/// Embedded newlines are hard breaks, and a blank line between them
/// becomes a single space. Always returns at least one line.
pub fn wrap(text: &str, max_width_pt: f32, font_size_pt: f32) -> Vec<String> {
    if !text.contains('\n') {
        return wrap_line(text, max_width_pt, font_size_pt);
    }
    text.split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .flat_map(|line| {
            let line = if line.trim().is_empty() { " " } else { line };
            wrap_line(line, max_width_pt, font_size_pt)
        })
        .collect()
}

fn wrap_line(text: &str, max_width_pt: f32, font_size_pt: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if width_pt(&candidate, font_size_pt) <= max_width_pt {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for c in word.chars() {
            let mut next = current.clone();
            next.push(c);
            if width_pt(&next, font_size_pt) > max_width_pt && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current.push(c);
            } else {
                current = next;
            }
        }
    }

    // keep whitespace-only lines (blank-line markers) intact
    if !current.is_empty() || lines.is_empty() {
        lines.push(if current.is_empty() {
            text.to_string()
        } else {
            current
        });
    }
    lines
}

/// Lay the letter out on pages, starting a new page whenever the next
/// line would cross the bottom margin.
pub fn paginate(letter: &Letter, geometry: &PageGeometry) -> Vec<Page> {
    let max_width = geometry.text_width_pt();
    let top = geometry.top_pt();
    let bottom = geometry.bottom_pt();

    let mut pages = vec![Page::default()];
    let mut cursor = top;

    for block in &letter.blocks {
        for line in wrap(&block.text, max_width, geometry.font_size_pt) {
            if cursor - geometry.leading_pt < bottom {
                pages.push(Page::default());
                cursor = top;
            }
            cursor -= geometry.leading_pt;
            if let Some(page) = pages.last_mut() {
                page.lines.push(PlacedLine {
                    text: line,
                    x_mm: geometry.margin_mm,
                    y_mm: cursor * MM_PER_PT,
                    bold: block.is_emphasized(),
                });
            }
        }
        cursor -= block.space_after;
    }

    pages
}

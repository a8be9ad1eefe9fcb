//! Approximate Helvetica text measurement and greedy word wrapping.
//!
//! Widths are class-based em approximations rather than exact glyph metrics.
//! Captions are short prose, so a few percent of error per line only shifts
//! a break point by a word; it never changes page count or image placement.

use crate::options::{CAPTION_FONT_SIZE_PT, MM_PER_PT};

/// Advance width of one character in em units (relative to font size).
fn char_width_em(c: char) -> f32 {
    match c {
        'i' | 'j' | 'l' | '!' | '\'' | '|' | '.' | ',' | ':' | ';' => 0.28,
        'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '-' | '/' | ' ' => 0.33,
        'm' | 'M' | 'W' | '@' => 0.89,
        'w' | '%' => 0.72,
        'A'..='Z' => 0.67,
        '0'..='9' => 0.56,
        _ => 0.50,
    }
}

/// Rendered width of `text` in points at the given font size.
pub fn text_width_pt(text: &str, font_size_pt: f32) -> f32 {
    text.chars().map(char_width_em).sum::<f32>() * font_size_pt
}

/// Rendered width of a caption line in millimeters at the caption font size.
pub fn caption_width_mm(text: &str) -> f32 {
    text_width_pt(text, CAPTION_FONT_SIZE_PT) * MM_PER_PT
}

/// Greedy word wrap against `max_width_mm`.
///
/// Never truncates and never shrinks the font; a single word wider than the
/// box gets its own line and is allowed to stick out. Blank input yields no
/// lines.
pub fn wrap_caption(text: &str, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();
    if max_width_mm <= 0.0 {
        return text.lines().map(str::to_string).collect();
    }
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if caption_width_mm(&candidate) > max_width_mm && !current.is_empty() {
                lines.push(current);
                current = word.to_string();
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

use crate::config::{Config, LabelConfig};
use crate::text_metrics;

use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub width: f32,
    pub height: f32,
}

pub fn measure_label(text: &str, label: &LabelConfig, config: &LayoutConfig) -> TextBlock {
    let font_size = label.font_size;
    let family = label.font_family.as_str();
    let fast = config.fast_text_metrics;
    let max_width = config.max_label_width_chars.max(1) as f32 * font_size * AVERAGE_CHAR_FACTOR;

    let mut lines: Vec<String> = split_lines(text)
        .iter()
        .flat_map(|line| wrap_line(line, max_width, font_size, family, fast))
        .collect();
    if lines.is_empty() {
        lines.push(String::new());
    }

    let width = lines
        .iter()
        .map(|line| text_width(line, font_size, family, fast))
        .fold(0.0, f32::max);
    let height = lines.len() as f32 * font_size * config.label_line_height;
    TextBlock {
        lines,
        width,
        height,
    }
}

/// Gives every unsized leaf a size from its label, never below the configured default.
/// Leaves that already carry a size and all container blocks are left alone.
pub fn measure_leaf_blocks(root: &mut Block, config: &Config) {
    let layout = &config.layout;
    root.walk_mut(&mut |block| {
        if !block.is_leaf() || block.size.is_some() {
            return;
        }
        let mut width = layout.default_leaf_width;
        let mut height = layout.default_leaf_height;
        if let Some(text) = block.label.as_deref() {
            let measured = measure_label(text, &config.label, layout);
            width = width.max(measured.width + 2.0 * layout.label_padding_x);
            height = height.max(measured.height + 2.0 * layout.label_padding_y);
        }
        debug!(target: "block_layout", "measured leaf {}: {width} x {height}", block.id);
        block.size = Some(BlockSize::new(width, height));
    });
}

const AVERAGE_CHAR_FACTOR: f32 = 0.56;

fn glyph_factor(ch: char) -> f32 {
    match ch {
        ' ' | '.' | ',' | ':' | ';' | '|' | '!' | '\'' | '(' | ')' | '[' | ']' | '{' | '}' => 0.32,
        'i' | 'j' | 'l' | 'I' | 't' | 'f' | 'r' | '1' => 0.33,
        'm' | 'w' | 'M' | 'W' | '@' | '#' | '%' | '&' => 0.9,
        'A'..='Z' => 0.66,
        'a'..='z' | '0'..='9' => 0.57,
        _ if ch.is_ascii() => AVERAGE_CHAR_FACTOR,
        // CJK and other wide scripts
        _ => 1.0,
    }
}

fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().map(glyph_factor).sum::<f32>() * font_size
}

fn text_width(text: &str, font_size: f32, font_family: &str, fast: bool) -> f32 {
    if fast {
        return estimate_text_width(text, font_size);
    }
    text_metrics::measure_text_width(text, font_size, font_family)
        .unwrap_or_else(|| estimate_text_width(text, font_size))
}

fn split_lines(text: &str) -> Vec<String> {
    text.replace("<br/>", "\n")
        .replace("<br>", "\n")
        .replace("\\n", "\n")
        .split('\n')
        .map(|line| line.trim().to_string())
        .collect()
}

fn wrap_line(line: &str, max_width: f32, font_size: f32, font_family: &str, fast: bool) -> Vec<String> {
    if text_width(line, font_size, font_family, fast) <= max_width {
        return vec![line.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if text_width(&candidate, font_size, font_family, fast) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

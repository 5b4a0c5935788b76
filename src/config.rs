use serde::{Deserialize, Serialize};
use std::path::Path;

/// Mermaid's block diagram padding.
pub const DEFAULT_PADDING: f32 = 8.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Gap between neighbouring cells and between a block's border and its cells.
    pub padding: f32,
    pub default_leaf_width: f32,
    pub default_leaf_height: f32,
    pub label_padding_x: f32,
    pub label_padding_y: f32,
    pub label_line_height: f32,
    pub max_label_width_chars: usize,
    pub fast_text_metrics: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            default_leaf_width: 50.0,
            default_leaf_height: 30.0,
            label_padding_x: 15.0,
            label_padding_y: 8.0,
            label_line_height: 1.5,
            max_label_width_chars: 22,
            fast_text_metrics: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    pub font_family: String,
    pub font_size: f32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_family: "\"trebuchet ms\", verdana, arial, sans-serif".to_string(),
            font_size: 16.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub layout: LayoutConfig,
    pub label: LabelConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockConfigFile {
    padding: Option<f32>,
    default_width: Option<f32>,
    default_height: Option<f32>,
    label_padding_x: Option<f32>,
    label_padding_y: Option<f32>,
    label_line_height: Option<f32>,
    max_label_width_chars: Option<usize>,
    fast_text: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    font_family: Option<String>,
    font_size: Option<f32>,
    block: Option<BlockConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(v) = parsed.font_family {
        config.label.font_family = v;
    }
    if let Some(v) = parsed.font_size {
        config.label.font_size = v;
    }

    if let Some(block) = parsed.block {
        if let Some(v) = block.padding {
            if v < 0.0 {
                anyhow::bail!("block.padding must not be negative, got {v}");
            }
            config.layout.padding = v;
        }
        if let Some(v) = block.default_width {
            config.layout.default_leaf_width = v;
        }
        if let Some(v) = block.default_height {
            config.layout.default_leaf_height = v;
        }
        if let Some(v) = block.label_padding_x {
            config.layout.label_padding_x = v;
        }
        if let Some(v) = block.label_padding_y {
            config.layout.label_padding_y = v;
        }
        if let Some(v) = block.label_line_height {
            config.layout.label_line_height = v;
        }
        if let Some(v) = block.max_label_width_chars {
            config.layout.max_label_width_chars = v;
        }
        if let Some(v) = block.fast_text {
            config.layout.fast_text_metrics = v;
        }
    }

    Ok(config)
}

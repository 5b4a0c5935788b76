use mermaid_block_layout::{BlockDb, Config, LayoutDump, ROOT_ID, layout, measure_leaf_blocks};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockLayoutOptions {
    padding: Option<f32>,
    measure: Option<bool>,
    font_family: Option<String>,
    font_size: Option<f32>,
}

fn build_config(options: &BlockLayoutOptions) -> Config {
    let mut config = Config::default();
    // no system fonts inside the browser sandbox
    config.layout.fast_text_metrics = true;
    if let Some(padding) = options.padding {
        config.layout.padding = padding.max(0.0);
    }
    if let Some(font_family) = &options.font_family {
        config.label.font_family = font_family.clone();
    }
    if let Some(font_size) = options.font_size {
        config.label.font_size = font_size;
    }
    config
}

fn layout_json(tree_json: &str, options: BlockLayoutOptions) -> Result<String, String> {
    let config = build_config(&options);
    let mut db = BlockDb::from_json(tree_json).map_err(|error| format!("{error:#}"))?;
    if options.measure.unwrap_or(false)
        && let Some(root) = db.get_block_mut(ROOT_ID)
    {
        measure_leaf_blocks(root, &config);
    }
    let bounds = layout(&mut db, &config.layout).map_err(|error| error.to_string())?;
    let dump = LayoutDump::from_tree(db.root(), bounds);
    serde_json::to_string(&dump).map_err(|error| error.to_string())
}

#[wasm_bindgen]
pub fn layout_block_tree(tree_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<BlockLayoutOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        BlockLayoutOptions::default()
    };
    layout_json(tree_json, options).map_err(|error| JsValue::from_str(&error))
}

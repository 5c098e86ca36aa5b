//! Loading the menu reference data from JSON

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{MenuError, MenuResult};
use crate::types::MenuData;

use super::MenuGraph;

pub fn from_json_str(json: &str) -> MenuResult<MenuGraph> {
    let data: MenuData = serde_json::from_str(json)?;
    Ok(MenuGraph::from_data(data))
}

pub fn from_file(path: &Path) -> MenuResult<MenuGraph> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| MenuError::Io {
        path: display.clone(),
        source,
    })?;

    let graph = from_json_str(&content)?.with_source(display);
    info!(
        path = graph.source().unwrap_or_default(),
        dishes = graph.dish_count(),
        ingredients = graph.data.ingredients.len(),
        sides = graph.data.sides.len(),
        "menu loaded"
    );
    Ok(graph)
}

//! Entity markup resolution
//!
//! Maps an entity reference plus the markup already rendered for its covered
//! text to BBCode. A caller-supplied transform gets first refusal, including
//! for entity types outside the built-in catalog; a missing or unrecognized
//! entity falls back to the bare covered text.

use crate::model::{scalar_if_truthy, Entity, EntityType};
use crate::RenderContext;

fn data_str(entity: &Entity, key: &str) -> String {
    match entity.data.get(key) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn data_truthy(entity: &Entity, key: &str) -> Option<String> {
    entity.data.get(key).and_then(scalar_if_truthy)
}

pub(crate) fn entity_markup(ctx: &RenderContext, key: u64, text: &str) -> String {
    let Some(entity) = ctx.entity_map.get(&key.to_string()) else {
        return text.to_string();
    };

    if let Some(transform) = ctx.entity_transform {
        // An empty or absent result falls through to the defaults.
        if let Some(markup) = transform(entity, text) {
            if !markup.is_empty() {
                return markup;
            }
        }
    }

    match entity.entity_type {
        EntityType::Link => {
            let url = data_str(entity, "url");
            if url == text {
                format!("[url]{url}[/url]")
            } else {
                format!("[url={url}]{text}[/url]")
            }
        }
        EntityType::Image => {
            let src = data_str(entity, "src");
            let width = data_truthy(entity, "width");
            let height = data_truthy(entity, "height");
            let size = if width.is_some() || height.is_some() {
                format!(
                    "={},{}",
                    width.as_deref().unwrap_or("auto"),
                    height.as_deref().unwrap_or("auto")
                )
            } else {
                String::new()
            };
            let image = format!("[img{size}]{src}[/img]");
            match data_truthy(entity, "alignment") {
                Some(alignment) => format!("[float={alignment}]{image}[/float]"),
                None => image,
            }
        }
        EntityType::Other(_) => text.to_string(),
    }
}

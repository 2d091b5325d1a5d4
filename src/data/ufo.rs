//! UFO file I/O operations

use anyhow::{Context, Result};
use norad::Font;
use std::path::Path;

use crate::core::state::outline::{FontMaster, GlyphLayer};

/// Load a UFO font file from disk
pub fn load_ufo_from_path(path: impl AsRef<Path>) -> Result<Font> {
    let path = path.as_ref();
    let font = Font::load(path).with_context(|| format!("Failed to load UFO {}", path.display()))?;
    Ok(font)
}

/// Pull one glyph out of a UFO layer (the default layer if `layer_name`
/// is `None`) as an editing layer
pub fn load_glyph_layer(font: &Font, glyph_name: &str, layer_name: Option<&str>) -> Result<GlyphLayer> {
    let layer = match layer_name {
        Some(name) => font
            .layers
            .get(name)
            .with_context(|| format!("No layer named '{name}'"))?,
        None => font.default_layer(),
    };
    let glyph = layer
        .get_glyph(glyph_name)
        .with_context(|| format!("No glyph named '{glyph_name}' in layer '{}'", layer.name()))?;
    let glyph_layer = GlyphLayer::from_norad_glyph(glyph);
    tracing::debug!(
        "Loaded glyph '{}': {} paths, {} anchors, {} components, {} guides",
        glyph_name,
        glyph_layer.paths.len(),
        glyph_layer.anchors.len(),
        glyph_layer.components.len(),
        glyph_layer.guides.len()
    );
    Ok(glyph_layer)
}

/// Load the master data and one glyph layer in one go
pub fn load_editing_session(
    path: impl AsRef<Path>,
    glyph_name: &str,
    layer_name: Option<&str>,
) -> Result<(FontMaster, GlyphLayer)> {
    let font = load_ufo_from_path(path)?;
    let master = FontMaster::from_norad_font(&font);
    let layer = load_glyph_layer(&font, glyph_name, layer_name)?;
    Ok((master, layer))
}

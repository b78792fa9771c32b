//! Texture and font string creation from XML layer definitions.

use crate::xml::{FontStringXml, LayerElement, LayersXml, TextureXml};

use super::helpers::{escape_lua_string, generate_anchors_code, generate_size_code, lua_string_or_nil, ParentRef};
use super::xml_frame::FrameCodegen;

/// Emit every texture and font string of a `<Layers>` block.
pub fn append_layers_code(codegen: &mut FrameCodegen, layers: &LayersXml, parent: &ParentRef<'_>) {
    for layer in &layers.layers {
        let level = layer.level.as_deref().unwrap_or("ARTWORK");
        for element in &layer.elements {
            match element {
                LayerElement::Texture(t) => append_texture(codegen, t, level, parent),
                LayerElement::FontString(f) => append_font_string(codegen, f, level, parent),
                LayerElement::Unknown => {}
            }
        }
    }
}

fn append_texture(codegen: &mut FrameCodegen, texture: &TextureXml, level: &str, parent: &ParentRef<'_>) {
    let var = codegen.var("t");
    let name = texture.name.as_deref().map(|n| parent.substitute(n));
    let mut code = format!(
        "local {var} = {}:CreateTexture({}, \"{}\")\n",
        parent.var,
        lua_string_or_nil(name.as_deref()),
        escape_lua_string(level)
    );

    if let Some(file) = &texture.file {
        code.push_str(&format!("{var}:SetTexture(\"{}\")\n", escape_lua_string(file)));
    }
    if let Some(color) = &texture.color {
        code.push_str(&format!(
            "{var}:SetColorTexture({}, {}, {}, {})\n",
            color.r.unwrap_or(1.0),
            color.g.unwrap_or(1.0),
            color.b.unwrap_or(1.0),
            color.a.unwrap_or(1.0)
        ));
    }
    append_region_geometry(&mut code, &var, texture.size.as_ref(), texture.anchors.as_ref(), texture.set_all_points, parent);
    if texture.hidden == Some(true) {
        code.push_str(&format!("{var}:Hide()\n"));
    }
    codegen.push(&code);
}

fn append_font_string(codegen: &mut FrameCodegen, font_string: &FontStringXml, level: &str, parent: &ParentRef<'_>) {
    let var = codegen.var("s");
    let name = font_string.name.as_deref().map(|n| parent.substitute(n));
    let mut code = format!(
        "local {var} = {}:CreateFontString({}, \"{}\")\n",
        parent.var,
        lua_string_or_nil(name.as_deref()),
        escape_lua_string(level)
    );

    if let Some(text) = &font_string.text {
        code.push_str(&format!("{var}:SetText(\"{}\")\n", escape_lua_string(text)));
    }
    append_region_geometry(
        &mut code,
        &var,
        font_string.size.as_ref(),
        font_string.anchors.as_ref(),
        font_string.set_all_points,
        parent,
    );
    if font_string.hidden == Some(true) {
        code.push_str(&format!("{var}:Hide()\n"));
    }
    codegen.push(&code);
}

fn append_region_geometry(
    code: &mut String,
    var: &str,
    size: Option<&crate::xml::SizeXml>,
    anchors: Option<&crate::xml::AnchorsXml>,
    set_all_points: Option<bool>,
    parent: &ParentRef<'_>,
) {
    if let Some(size) = size {
        code.push_str(&generate_size_code(var, size));
    }
    if set_all_points == Some(true) {
        code.push_str(&format!("{var}:SetAllPoints()\n"));
    }
    if let Some(anchors) = anchors {
        code.push_str(&generate_anchors_code(var, anchors, parent));
    }
}

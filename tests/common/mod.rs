//! Shared test helpers.

#![allow(dead_code)]

use wow_fstack::inspector::strip_color_codes;
use wow_fstack::lua_api::WowLuaEnv;

/// Screen point over ButtonB in [`button_scene`].
pub const ON_BUTTON: (f32, f32) = (150.0, 120.0);
/// Screen point over nothing but UIParent.
pub const EMPTY_SPACE: (f32, f32) = (900.0, 700.0);

pub fn env() -> WowLuaEnv {
    WowLuaEnv::new().expect("Failed to create Lua environment")
}

/// `UIParent -> PanelA (100,100 300x200) -> ButtonB (110,110 80x22)` in
/// screen space.
pub fn button_scene(env: &WowLuaEnv) {
    env.exec(
        r#"
        local panel = CreateFrame("Frame", "PanelA", UIParent)
        panel:SetSize(300, 200)
        panel:SetPoint("TOPLEFT", UIParent, "TOPLEFT", 100, -100)

        local button = CreateFrame("Button", "ButtonB", panel)
        button:SetSize(80, 22)
        button:SetPoint("TOPLEFT", 10, -10)
        "#,
    )
    .expect("scene setup failed");
}

/// Names of the frames in the current chain, topmost first.
pub fn chain_names(env: &WowLuaEnv) -> Vec<String> {
    env.inspector_report()
        .chain
        .into_iter()
        .map(|e| e.name.unwrap_or_else(|| "anonymous".to_string()))
        .collect()
}

/// The details panel text without color escapes, if the panel is up.
pub fn panel_lines(env: &WowLuaEnv) -> Option<Vec<String>> {
    env.inspector_report()
        .panel
        .map(|p| p.lines.iter().map(|l| strip_color_codes(l)).collect())
}

/// Move the cursor (screen space) and run one tick.
pub fn hover(env: &WowLuaEnv, at: (f32, f32)) {
    env.set_cursor(at.0, at.1);
    env.tick(0.016).expect("tick failed");
}

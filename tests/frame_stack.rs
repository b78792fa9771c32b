//! End-to-end tests for the frame stack inspector driven through Lua.

mod common;

use common::{button_scene, chain_names, env, hover, panel_lines, EMPTY_SPACE, ON_BUTTON};
use wow_fstack::config::InspectorConfig;
use wow_fstack::inspector::TickOutcome;
use wow_fstack::lua_api::{WowLuaEnv, FRAMESTACK_SLASH};

fn active_env() -> WowLuaEnv {
    let env = env();
    button_scene(&env);
    assert!(env.dispatch_slash_command(FRAMESTACK_SLASH).unwrap());
    env
}

// ============================================================================
// Activation
// ============================================================================

#[test]
fn test_slash_command_toggles() {
    let env = env();
    assert!(!env.eval::<bool>("return FrameStackTooltip_IsActive()").unwrap());

    assert!(env.dispatch_slash_command("/fstack").unwrap());
    assert!(env.eval::<bool>("return FrameStackTooltip_IsActive()").unwrap());

    assert!(env.dispatch_slash_command("/FSTACK").unwrap());
    assert!(!env.eval::<bool>("return FrameStackTooltip_IsActive()").unwrap());
}

#[test]
fn test_unknown_slash_command_is_not_handled() {
    let env = env();
    assert!(!env.dispatch_slash_command("/nope").unwrap());
    assert!(!env.dispatch_slash_command("fstack").unwrap());
}

#[test]
fn test_addon_slash_commands_dispatch_too() {
    let env = env();
    env.exec(
        r#"
        SLASH_HELLO1 = "/hello"
        SlashCmdList.HELLO = function(msg) print("hello " .. msg) end
        "#,
    )
    .unwrap();
    assert!(env.dispatch_slash_command("/hello world").unwrap());
    assert_eq!(env.take_console_output(), vec!["hello world"]);
}

#[test]
fn test_toggle_function_returns_new_state() {
    let env = env();
    assert!(env.eval::<bool>("return FrameStackTooltip_Toggle()").unwrap());
    assert!(!env.eval::<bool>("return FrameStackTooltip_Toggle()").unwrap());
}

#[test]
fn test_inactive_tick_touches_nothing() {
    let env = env();
    button_scene(&env);
    env.set_cursor(ON_BUTTON.0, ON_BUTTON.1);
    assert_eq!(env.tick(0.016).unwrap(), TickOutcome::Inactive);
    assert!(chain_names(&env).is_empty());
    assert!(panel_lines(&env).is_none());
}

// ============================================================================
// Sampling
// ============================================================================

#[test]
fn test_hovering_button_reports_button_then_panel() {
    let env = active_env();
    env.set_cursor(ON_BUTTON.0, ON_BUTTON.1);
    assert_eq!(env.tick(0.016).unwrap(), TickOutcome::Changed);

    assert_eq!(chain_names(&env), vec!["ButtonB", "PanelA"]);

    let report = env.inspector_report();
    assert!(report.regions[0].shown);
    assert!(report.regions[1].shown);
    assert!(report.regions[2..].iter().all(|r| !r.shown));

    let lines = panel_lines(&env).expect("panel shown");
    assert_eq!(lines[0], "ButtonB");
    assert!(lines.contains(&"Type: Button".to_string()));
    assert!(lines.contains(&"Size: 80 x 22".to_string()));
    assert!(lines.contains(&"Parents: PanelA > UIParent".to_string()));
}

#[test]
fn test_same_position_is_unchanged() {
    let env = active_env();
    hover(&env, ON_BUTTON);
    env.set_cursor(ON_BUTTON.0 + 5.0, ON_BUTTON.1);
    assert_eq!(env.tick(0.016).unwrap(), TickOutcome::Unchanged);
    assert_eq!(env.inspector_report().regions.iter().filter(|r| r.shown).count(), 2);
}

#[test]
fn test_empty_space_clears_everything() {
    let env = active_env();
    hover(&env, ON_BUTTON);
    hover(&env, EMPTY_SPACE);

    assert!(chain_names(&env).is_empty());
    assert!(panel_lines(&env).is_none());
    assert!(env.inspector_report().regions.iter().all(|r| !r.shown));
    assert!(env.eval::<bool>("return FrameStackTooltip_IsActive()").unwrap());
}

#[test]
fn test_details_panel_does_not_shadow_frames() {
    let env = active_env();
    hover(&env, ON_BUTTON);
    // Just inside the details panel, which sits below-right of the old cursor
    hover(&env, (ON_BUTTON.0 + 40.0, ON_BUTTON.1 + 40.0));
    assert_eq!(chain_names(&env), vec!["PanelA"]);
}

#[test]
fn test_panel_follows_cursor_inside_one_frame() {
    let env = env();
    env.exec(
        r#"
        local big = CreateFrame("Frame", "Big", UIParent)
        big:SetSize(600, 500)
        big:SetPoint("TOPLEFT", 50, -50)
        "#,
    )
    .unwrap();
    assert!(env.dispatch_slash_command(FRAMESTACK_SLASH).unwrap());
    hover(&env, (100.0, 100.0));
    let old = env.inspector_report().panel.expect("panel shown").rect;

    let inside = (old.x + 10.0, old.y + 10.0);
    env.set_cursor(inside.0, inside.1);
    assert_eq!(env.tick(0.016).unwrap(), TickOutcome::Unchanged);

    assert_eq!(chain_names(&env), vec!["Big"]);
    let panel = env.inspector_report().panel.expect("panel shown");
    assert!(!panel.rect.contains(inside.0, inside.1));
}

#[test]
fn test_panel_shows_current_attributes() {
    let env = active_env();
    hover(&env, ON_BUTTON);
    env.exec("ButtonB:SetSize(90, 22)").unwrap();

    assert_eq!(env.tick(0.016).unwrap(), TickOutcome::Unchanged);
    let lines = panel_lines(&env).expect("panel shown");
    assert!(lines.contains(&"Size: 90 x 22".to_string()));
}

#[test]
fn test_cursor_from_lua_uses_client_coordinates() {
    let env = active_env();
    env.exec("SetCursorPosition(150, GetScreenHeight() - 120)").unwrap();
    env.tick(0.016).unwrap();
    assert_eq!(chain_names(&env), vec!["ButtonB", "PanelA"]);

    let (x, y): (f32, f32) = env.eval("return GetCursorPosition()").unwrap();
    assert_eq!((x, y), (150.0, 648.0));
}

#[test]
fn test_on_update_runs_before_sampling() {
    let env = active_env();
    env.set_cursor(EMPTY_SPACE.0, EMPTY_SPACE.1);
    env.exec(
        r#"
        local mover = CreateFrame("Frame", "Mover", UIParent)
        mover:SetScript("OnUpdate", function(self, elapsed)
            SetCursorPosition(150, 648)
            self:SetScript("OnUpdate", nil)
        end)
        "#,
    )
    .unwrap();
    env.tick(0.016).unwrap();
    assert_eq!(chain_names(&env), vec!["ButtonB", "PanelA"]);
}

#[test]
fn test_failing_on_update_does_not_stop_tick() {
    let env = active_env();
    env.exec(
        r#"
        local f = CreateFrame("Frame", "Broken", UIParent)
        f:SetScript("OnUpdate", function() error("boom") end)
        "#,
    )
    .unwrap();
    env.set_cursor(ON_BUTTON.0, ON_BUTTON.1);
    assert_eq!(env.tick(0.016).unwrap(), TickOutcome::Changed);
}

// ============================================================================
// Hit-test flags
// ============================================================================

#[test]
fn test_hidden_frames_need_show_hidden() {
    let env = active_env();
    env.exec("ButtonB:Hide()").unwrap();
    hover(&env, ON_BUTTON);
    assert_eq!(chain_names(&env), vec!["PanelA"]);

    // Off, then back on with showHidden
    env.exec("FrameStackTooltip_Toggle(); FrameStackTooltip_Toggle(true, false)").unwrap();
    hover(&env, ON_BUTTON);
    assert_eq!(chain_names(&env), vec!["ButtonB", "PanelA"]);
    assert!(panel_lines(&env).unwrap().contains(&"Shown: no, Visible: no".to_string()));
}

#[test]
fn test_regions_need_show_regions() {
    let env = active_env();
    env.exec(
        r#"
        local icon = ButtonB:CreateTexture("ButtonBIcon", "ARTWORK")
        icon:SetAllPoints()
        icon:SetTexture("Interface\\Icons\\INV_Misc_QuestionMark")
        "#,
    )
    .unwrap();
    hover(&env, ON_BUTTON);
    assert_eq!(chain_names(&env), vec!["ButtonB", "PanelA"]);
    let lines = panel_lines(&env).unwrap();
    assert!(lines.iter().any(|l| l.contains("INV_Misc_QuestionMark")));

    env.exec("FrameStackTooltip_Toggle(); FrameStackTooltip_Toggle(false, true)").unwrap();
    hover(&env, ON_BUTTON);
    assert_eq!(chain_names(&env), vec!["ButtonBIcon", "ButtonB", "PanelA"]);
}

#[test]
fn test_strata_decides_the_topmost_frame() {
    let env = active_env();
    env.exec(
        r#"
        local cover = CreateFrame("Frame", "Cover", UIParent)
        cover:SetFrameStrata("DIALOG")
        cover:SetSize(50, 50)
        cover:SetPoint("TOPLEFT", 140, -110)
        "#,
    )
    .unwrap();
    hover(&env, ON_BUTTON);
    assert_eq!(chain_names(&env), vec!["Cover"]);
}

// ============================================================================
// Depth limits and the hit-test facility
// ============================================================================

#[test]
fn test_max_depth_from_config() {
    let mut config = InspectorConfig::default();
    config.max_depth = 3;
    let env = WowLuaEnv::with_config(&config).unwrap();
    env.exec(
        r#"
        local parent = UIParent
        for i = 1, 8 do
            local f = CreateFrame("Frame", "Nested" .. i, parent)
            f:SetAllPoints()
            parent = f
        end
        "#,
    )
    .unwrap();
    env.toggle_inspector();
    hover(&env, (10.0, 10.0));

    assert_eq!(chain_names(&env), vec!["Nested8", "Nested7", "Nested6"]);
    assert_eq!(env.inspector_report().regions.len(), 3);
}

#[test]
fn test_unavailable_hit_test_leaves_overlays_hidden() {
    let env = active_env();
    hover(&env, ON_BUTTON);
    env.state().borrow_mut().hit_test_available = false;
    hover(&env, ON_BUTTON);

    assert!(chain_names(&env).is_empty());
    assert!(panel_lines(&env).is_none());
}

#[test]
fn test_overlays_are_invisible_to_lua_mouse_foci() {
    let env = active_env();
    hover(&env, ON_BUTTON);
    let names: Vec<String> = env
        .eval(
            r#"
            local names = {}
            for _, f in ipairs(GetMouseFoci()) do names[#names + 1] = f:GetName() end
            return names
            "#,
        )
        .unwrap();
    // PanelA is not mouse-enabled; the highlight regions are overlays
    assert_eq!(names, vec!["ButtonB"]);
}

#[test]
fn test_report_serializes_to_json() {
    let env = active_env();
    hover(&env, ON_BUTTON);
    let json = serde_json::to_value(env.inspector_report()).unwrap();
    assert_eq!(json["active"], true);
    assert_eq!(json["chain"][0]["name"], "ButtonB");
    assert_eq!(json["chain"][1]["depth"], 1);
    assert_eq!(json["panel"]["details"]["object_type"], "Button");
}

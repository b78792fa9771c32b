//! Tests for methods_anchor.rs: SetPoint, ClearAllPoints, GetPoint, GetNumPoints,
//! SetAllPoints and the rect getters.

mod common;

use common::env;

// ============================================================================
// SetPoint / GetPoint / GetNumPoints
// ============================================================================

#[test]
fn test_set_point_basic() {
    let env = env();
    env.exec(r#"
        local f = CreateFrame("Frame", "AnchorFrame1", UIParent)
        f:SetPoint("CENTER", UIParent, "CENTER", 10, 20)
    "#).unwrap();

    let num: i32 = env.eval("return AnchorFrame1:GetNumPoints()").unwrap();
    assert_eq!(num, 1);
}

#[test]
fn test_get_point_returns_values() {
    let env = env();
    let (x, y): (f64, f64) = env.eval(r#"
        local f = CreateFrame("Frame", "AnchorFrame2", UIParent)
        f:SetPoint("TOPLEFT", UIParent, "BOTTOMRIGHT", 5, -10)
        local point, relTo, relPoint, x, y = f:GetPoint(1)
        assert(point == "TOPLEFT", "point should be TOPLEFT, got " .. tostring(point))
        assert(relTo == UIParent, "relativeTo should be UIParent")
        assert(relPoint == "BOTTOMRIGHT", "relPoint should be BOTTOMRIGHT, got " .. tostring(relPoint))
        return x, y
    "#).unwrap();
    assert!((x - 5.0).abs() < 0.01);
    assert!((y - (-10.0)).abs() < 0.01);
}

#[test]
fn test_set_point_default_relative_point() {
    let env = env();
    env.exec(r#"
        local f = CreateFrame("Frame", "AnchorFrame3", UIParent)
        f:SetPoint("CENTER")
        local point, relTo, relPoint = f:GetPoint(1)
        assert(point == "CENTER", "point should be CENTER, got " .. tostring(point))
        assert(relPoint == "CENTER", "relativePoint should default to CENTER, got " .. tostring(relPoint))
        assert(relTo == UIParent, "relativeTo should default to the parent")
    "#).unwrap();
}

#[test]
fn test_set_point_relative_by_name() {
    let env = env();
    let left: f64 = env.eval(r#"
        local a = CreateFrame("Frame", "AnchorTarget", UIParent)
        a:SetSize(100, 100)
        a:SetPoint("TOPLEFT", 50, -50)
        local b = CreateFrame("Frame", "AnchorFollower", UIParent)
        b:SetSize(20, 20)
        b:SetPoint("LEFT", "AnchorTarget", "RIGHT", 5, 0)
        return b:GetLeft()
    "#).unwrap();
    assert!((left - 155.0).abs() < 0.01);
}

#[test]
fn test_set_point_multiple() {
    let env = env();
    let num: i32 = env.eval(r#"
        local f = CreateFrame("Frame", "AnchorFrame4", UIParent)
        f:SetPoint("TOPLEFT", UIParent, "TOPLEFT", 0, 0)
        f:SetPoint("BOTTOMRIGHT", UIParent, "BOTTOMRIGHT", 0, 0)
        return f:GetNumPoints()
    "#).unwrap();
    assert_eq!(num, 2);
}

#[test]
fn test_set_point_replaces_same_point() {
    let env = env();
    let x: f64 = env.eval(r#"
        local f = CreateFrame("Frame", "AnchorFrame5", UIParent)
        f:SetPoint("CENTER", UIParent, "CENTER", 10, 0)
        f:SetPoint("CENTER", UIParent, "CENTER", 99, 0)
        local _, _, _, xOfs = f:GetPoint(1)
        return xOfs
    "#).unwrap();
    assert!((x - 99.0).abs() < 0.01, "Second SetPoint should replace the first");
}

#[test]
fn test_set_point_unknown_point_errors() {
    let env = env();
    let result = env.exec(r#"
        local f = CreateFrame("Frame", "AnchorBad", UIParent)
        f:SetPoint("MIDDLE")
    "#);
    assert!(result.is_err());
}

// ============================================================================
// ClearAllPoints / SetAllPoints
// ============================================================================

#[test]
fn test_clear_all_points() {
    let env = env();
    let num: i32 = env.eval(r#"
        local f = CreateFrame("Frame", "AnchorClear", UIParent)
        f:SetPoint("TOPLEFT", UIParent, "TOPLEFT", 0, 0)
        f:SetPoint("BOTTOMRIGHT", UIParent, "BOTTOMRIGHT", 0, 0)
        f:ClearAllPoints()
        return f:GetNumPoints()
    "#).unwrap();
    assert_eq!(num, 0);
}

#[test]
fn test_set_all_points() {
    let env = env();
    let (num, w, h): (i32, f64, f64) = env.eval(r#"
        local f = CreateFrame("Frame", "AnchorAll", UIParent)
        f:SetAllPoints(UIParent)
        return f:GetNumPoints(), f:GetWidth(), f:GetHeight()
    "#).unwrap();
    assert_eq!(num, 2, "SetAllPoints should add TOPLEFT and BOTTOMRIGHT");
    assert_eq!((w, h), (1024.0, 768.0));
}

// ============================================================================
// Cycle detection
// ============================================================================

#[test]
fn test_set_point_self_reference_no_crash() {
    let env = env();
    let num: i32 = env.eval(r#"
        local f = CreateFrame("Frame", "AnchorSelf", UIParent)
        f:SetPoint("CENTER", f, "CENTER", 0, 0)
        return f:GetNumPoints()
    "#).unwrap();
    assert_eq!(num, 0, "self anchor should be ignored");
}

#[test]
fn test_set_point_mutual_reference_ignored() {
    let env = env();
    let num: i32 = env.eval(r#"
        local a = CreateFrame("Frame", "CycleA", UIParent)
        local b = CreateFrame("Frame", "CycleB", UIParent)
        a:SetPoint("TOP", b, "BOTTOM")
        b:SetPoint("TOP", a, "BOTTOM")
        return b:GetNumPoints()
    "#).unwrap();
    assert_eq!(num, 0);
}

// ============================================================================
// Rect getters
// ============================================================================

#[test]
fn test_rect_getters_use_client_coordinates() {
    let env = env();
    let (left, bottom, width, height): (f64, f64, f64, f64) = env.eval(r#"
        local f = CreateFrame("Frame", "RectFrame", UIParent)
        f:SetSize(200, 100)
        f:SetPoint("TOPLEFT", 100, -100)
        return f:GetRect()
    "#).unwrap();
    assert_eq!((left, bottom, width, height), (100.0, 568.0, 200.0, 100.0));

    let (top, right): (f64, f64) = env.eval("return RectFrame:GetTop(), RectFrame:GetRight()").unwrap();
    assert_eq!((top, right), (668.0, 300.0));

    let (cx, cy): (f64, f64) = env.eval("return RectFrame:GetCenter()").unwrap();
    assert_eq!((cx, cy), (200.0, 618.0));
}

#[test]
fn test_unanchored_frames_have_no_rect() {
    let env = env();
    let all_nil: bool = env.eval(r#"
        local f = CreateFrame("Frame", "Floating", UIParent)
        f:SetSize(10, 10)
        return f:GetLeft() == nil and f:GetBottom() == nil and f:GetRect() == nil
    "#).unwrap();
    assert!(all_nil);
    // Size is still known
    assert_eq!(env.eval::<f64>("return Floating:GetWidth()").unwrap(), 10.0);
}

#[test]
fn test_rects_are_in_the_frames_own_scale() {
    let env = env();
    let (w, left, eff): (f64, f64, f64) = env.eval(r#"
        local f = CreateFrame("Frame", "Scaled", UIParent)
        f:SetScale(2)
        f:SetSize(50, 50)
        f:SetPoint("TOPLEFT", 10, -10)
        return f:GetWidth(), f:GetLeft(), f:GetEffectiveScale()
    "#).unwrap();
    assert_eq!((w, left, eff), (50.0, 10.0, 2.0));
}

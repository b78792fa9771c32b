//! Global widget registry for tracking all widgets.

use super::Frame;
use std::collections::{HashMap, HashSet, VecDeque};

/// Registry of all widgets in the UI.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    /// Widgets by ID.
    widgets: HashMap<u64, Frame>,
    /// Widget IDs by name.
    names: HashMap<String, u64>,
    /// The designated root frame (UIParent).
    root: Option<u64>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new widget.
    pub fn register(&mut self, widget: Frame) -> u64 {
        let id = widget.id;
        if let Some(existing) = self.widgets.get(&id) {
            if !existing.children.is_empty() {
                tracing::warn!(
                    id,
                    name = ?existing.name,
                    children = existing.children.len(),
                    "re-registering widget that has children"
                );
            }
        }
        if let Some(ref name) = widget.name {
            self.names.insert(name.clone(), id);
        }
        self.widgets.insert(id, widget);
        id
    }

    /// Get a widget by ID.
    pub fn get(&self, id: u64) -> Option<&Frame> {
        self.widgets.get(&id)
    }

    /// Get a mutable widget by ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Frame> {
        self.widgets.get_mut(&id)
    }

    /// Get a widget by name.
    pub fn get_by_name(&self, name: &str) -> Option<&Frame> {
        self.names.get(name).and_then(|id| self.widgets.get(id))
    }

    /// Get a widget ID by name.
    pub fn get_id_by_name(&self, name: &str) -> Option<u64> {
        self.names.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Mark `id` as the root frame. The root fills the screen and is never
    /// reported by hit testing.
    pub fn set_root(&mut self, id: u64) {
        self.root = Some(id);
    }

    pub fn root_id(&self) -> Option<u64> {
        self.root
    }

    /// Add a child to a parent widget.
    pub fn add_child(&mut self, parent_id: u64, child_id: u64) {
        if let Some(parent) = self.widgets.get_mut(&parent_id) {
            if !parent.children.contains(&child_id) {
                parent.children.push(child_id);
            }
        }
    }

    /// Move a widget to a new parent, updating children lists and inheriting
    /// strata/level from the new parent.
    pub fn reparent(&mut self, child_id: u64, new_parent_id: Option<u64>) {
        let old_parent_id = self.widgets.get(&child_id).and_then(|f| f.parent_id);
        if let Some(old_pid) = old_parent_id {
            if let Some(old_parent) = self.widgets.get_mut(&old_pid) {
                old_parent.children.retain(|&id| id != child_id);
            }
        }

        let parent_props = new_parent_id
            .and_then(|pid| self.widgets.get(&pid))
            .map(|p| (p.frame_strata, p.frame_level));

        if let Some(frame) = self.widgets.get_mut(&child_id) {
            frame.parent_id = new_parent_id;
            if let Some((parent_strata, parent_level)) = parent_props {
                if !frame.has_fixed_frame_strata {
                    frame.frame_strata = parent_strata;
                }
                if !frame.has_fixed_frame_level {
                    frame.frame_level = parent_level + 1;
                }
            }
        }

        self.propagate_strata_level(child_id);

        if let Some(new_pid) = new_parent_id {
            self.add_child(new_pid, child_id);
        }
    }

    /// Push strata and level down to descendants that did not fix their own.
    pub fn propagate_strata_level(&mut self, id: u64) {
        let mut queue = vec![id];
        let mut seen = HashSet::new();
        while let Some(pid) = queue.pop() {
            if !seen.insert(pid) {
                continue;
            }
            let Some(parent) = self.widgets.get(&pid) else { continue };
            let (strata, level) = (parent.frame_strata, parent.frame_level);
            let children = parent.children.clone();
            for cid in children {
                if let Some(child) = self.widgets.get_mut(&cid) {
                    if !child.has_fixed_frame_strata {
                        child.frame_strata = strata;
                    }
                    if !child.has_fixed_frame_level {
                        child.frame_level = level + 1;
                    }
                }
                queue.push(cid);
            }
        }
    }

    /// Get all widget IDs in creation order.
    pub fn all_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.widgets.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// All IDs in the subtree rooted at `root_id`, including the root.
    pub fn subtree_ids(&self, root_id: u64) -> HashSet<u64> {
        let mut ids = HashSet::new();
        let mut queue = vec![root_id];
        while let Some(id) = queue.pop() {
            if !ids.insert(id) {
                continue;
            }
            if let Some(f) = self.widgets.get(&id) {
                queue.extend(f.children.iter().copied());
            }
        }
        ids
    }

    /// Walk the parent chain starting at `id` (exclusive). Stops on a missing
    /// frame or when a frame repeats.
    pub fn ancestors(&self, id: u64) -> Vec<u64> {
        let mut chain = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut current = self.widgets.get(&id).and_then(|f| f.parent_id);
        while let Some(pid) = current {
            if !seen.insert(pid) {
                break;
            }
            chain.push(pid);
            current = self.widgets.get(&pid).and_then(|f| f.parent_id);
        }
        chain
    }

    /// Shown, with every ancestor shown (WoW `IsVisible`).
    pub fn is_visible(&self, id: u64) -> bool {
        let Some(frame) = self.widgets.get(&id) else { return false };
        frame.visible
            && self
                .ancestors(id)
                .iter()
                .all(|pid| self.widgets.get(pid).is_some_and(|p| p.visible))
    }

    /// Product of this frame's scale and all ancestor scales.
    pub fn effective_scale(&self, id: u64) -> f32 {
        let own = self.widgets.get(&id).map(|f| f.scale).unwrap_or(1.0);
        self.ancestors(id)
            .iter()
            .filter_map(|pid| self.widgets.get(pid))
            .fold(own, |acc, f| acc * f.scale)
    }

    /// Check if setting a point from `frame_id` to `relative_to_id` would create a cycle.
    /// A cycle exists if relative_to (or any of its anchor dependencies) already
    /// depends on frame_id.
    pub fn would_create_anchor_cycle(&self, frame_id: u64, relative_to_id: u64) -> bool {
        if frame_id == relative_to_id {
            return true;
        }

        let mut queue = VecDeque::new();
        let mut seen = HashSet::new();

        queue.push_back(relative_to_id);
        seen.insert(relative_to_id);

        while let Some(check_id) = queue.pop_front() {
            if let Some(frame) = self.widgets.get(&check_id) {
                for anchor in &frame.anchors {
                    if let Some(target_id) = anchor.relative_to_id {
                        if target_id == frame_id {
                            return true;
                        }
                        if seen.insert(target_id) {
                            queue.push_back(target_id);
                        }
                    }
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{Anchor, AnchorPoint, FrameStrata, WidgetType};

    fn add(reg: &mut WidgetRegistry, name: &str, parent: Option<u64>) -> u64 {
        let id = reg.register(Frame::new(WidgetType::Frame, Some(name.to_string()), parent));
        if let Some(pid) = parent {
            reg.add_child(pid, id);
        }
        id
    }

    #[test]
    fn reparent_moves_child_and_inherits_strata() {
        let mut reg = WidgetRegistry::new();
        let a = add(&mut reg, "A", None);
        let b = add(&mut reg, "B", None);
        let c = add(&mut reg, "C", Some(a));
        let d = add(&mut reg, "D", Some(c));
        {
            let bf = reg.get_mut(b).unwrap();
            bf.frame_strata = FrameStrata::Dialog;
            bf.frame_level = 7;
        }
        reg.reparent(c, Some(b));

        assert!(reg.get(a).unwrap().children.is_empty());
        assert_eq!(reg.get(b).unwrap().children, vec![c]);
        assert_eq!(reg.get(c).unwrap().frame_strata, FrameStrata::Dialog);
        assert_eq!(reg.get(c).unwrap().frame_level, 8);
        assert_eq!(reg.get(d).unwrap().frame_level, 9);
    }

    #[test]
    fn ancestors_stop_on_self_reference() {
        let mut reg = WidgetRegistry::new();
        let a = add(&mut reg, "Loop", None);
        reg.get_mut(a).unwrap().parent_id = Some(a);
        assert!(reg.ancestors(a).is_empty());
        assert!(reg.is_visible(a));
    }

    #[test]
    fn visibility_and_scale_follow_ancestors() {
        let mut reg = WidgetRegistry::new();
        let a = add(&mut reg, "Outer", None);
        let b = add(&mut reg, "Inner", Some(a));
        reg.get_mut(a).unwrap().scale = 2.0;
        reg.get_mut(b).unwrap().scale = 0.5;
        assert_eq!(reg.effective_scale(b), 1.0);

        reg.get_mut(a).unwrap().visible = false;
        assert!(!reg.is_visible(b));
        assert!(reg.get(b).unwrap().visible);
    }

    #[test]
    fn anchor_cycle_detected() {
        let mut reg = WidgetRegistry::new();
        let a = add(&mut reg, "CycA", None);
        let b = add(&mut reg, "CycB", None);
        reg.get_mut(b).unwrap().set_point(Anchor {
            relative_to_id: Some(a),
            ..Anchor::to_parent(AnchorPoint::Left)
        });
        assert!(reg.would_create_anchor_cycle(a, b));
        assert!(!reg.would_create_anchor_cycle(b, a));
        assert!(reg.would_create_anchor_cycle(a, a));
    }
}

//! In-memory [`FrameHost`] for unit tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::host::{FrameDetails, FrameHost, FrameId, HitTest, OverlayKind};
use crate::hit::HitTestOptions;
use crate::layout::LayoutRect;
use crate::widget::Color;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub name: Option<String>,
    pub parent: Option<FrameId>,
    pub rect: LayoutRect,
    pub overlay: bool,
    pub shown: bool,
    pub text: String,
    pub color: Option<Color>,
}

/// Later frames are drawn on top of earlier ones.
#[derive(Debug)]
pub(crate) struct TestHost {
    pub nodes: BTreeMap<FrameId, Node>,
    pub root: FrameId,
    pub available: bool,
    /// Calls in order: `hit`, `show:<id>`, `hide:<id>`.
    pub log: RefCell<Vec<String>>,
    next_id: FrameId,
}

impl TestHost {
    pub fn new() -> Self {
        let mut host = Self { nodes: BTreeMap::new(), root: 1, available: true, log: RefCell::new(Vec::new()), next_id: 1 };
        let root = host.add(Some("UIParent"), None, LayoutRect::new(0.0, 0.0, 1024.0, 768.0));
        host.root = root;
        host
    }

    pub fn add(&mut self, name: Option<&str>, parent: Option<FrameId>, rect: LayoutRect) -> FrameId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, Node {
            name: name.map(str::to_string),
            parent,
            rect,
            overlay: false,
            shown: true,
            text: String::new(),
            color: None,
        });
        id
    }

    pub fn node(&self, id: FrameId) -> &Node {
        &self.nodes[&id]
    }

    pub fn node_mut(&mut self, id: FrameId) -> &mut Node {
        self.nodes.get_mut(&id).expect("node exists")
    }
}

impl FrameHost for TestHost {
    fn hit_test(&self, x: f32, y: f32, _options: HitTestOptions) -> HitTest {
        self.log.borrow_mut().push("hit".to_string());
        if !self.available {
            return HitTest::Unavailable;
        }
        self.nodes
            .iter()
            .rev()
            .find(|&(&id, n)| id != self.root && n.shown && n.rect.contains(x, y))
            .map(|(&id, _)| HitTest::Hit(id))
            .unwrap_or(HitTest::Miss)
    }

    fn parent(&self, id: FrameId) -> Option<FrameId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    fn is_root(&self, id: FrameId) -> bool {
        id == self.root
    }

    fn is_overlay(&self, id: FrameId) -> bool {
        self.nodes.get(&id).is_some_and(|n| n.overlay)
    }

    fn frame_rect(&self, id: FrameId) -> Option<LayoutRect> {
        self.nodes.get(&id).map(|n| n.rect)
    }

    fn frame_details(&self, id: FrameId) -> FrameDetails {
        let Some(n) = self.nodes.get(&id) else { return FrameDetails::default() };
        FrameDetails {
            name: n.name.clone(),
            width: Some(n.rect.width),
            height: Some(n.rect.height),
            ..FrameDetails::default()
        }
    }

    fn screen_size(&self) -> (f32, f32) {
        (1024.0, 768.0)
    }

    fn create_overlay(&mut self, _kind: OverlayKind, name: &str, parent: Option<FrameId>) -> FrameId {
        let root = self.root;
        let id = self.add(Some(name), Some(parent.unwrap_or(root)), LayoutRect::default());
        let node = self.node_mut(id);
        node.overlay = true;
        node.shown = false;
        id
    }

    fn place_overlay(&mut self, id: FrameId, rect: LayoutRect) {
        self.node_mut(id).rect = rect;
    }

    fn set_overlay_shown(&mut self, id: FrameId, shown: bool) {
        self.log.borrow_mut().push(format!("{}:{id}", if shown { "show" } else { "hide" }));
        self.node_mut(id).shown = shown;
    }

    fn set_overlay_color(&mut self, id: FrameId, color: Color) {
        self.node_mut(id).color = Some(color);
    }

    fn set_overlay_text(&mut self, id: FrameId, text: &str) {
        self.node_mut(id).text = text.to_string();
    }

    fn is_overlay_shown(&self, id: FrameId) -> bool {
        self.nodes.get(&id).is_some_and(|n| n.shown)
    }
}

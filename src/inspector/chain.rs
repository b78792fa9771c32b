//! Frame chains and change detection between ticks.

use super::host::FrameId;

/// One frame at one depth (0 = topmost).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackEntry {
    pub depth: usize,
    pub frame: FrameId,
}

/// Ordered frames under the cursor, topmost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameChain {
    entries: Vec<StackEntry>,
}

impl FrameChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_frames(frames: impl IntoIterator<Item = FrameId>) -> Self {
        let mut chain = Self::new();
        for frame in frames {
            chain.push(frame);
        }
        chain
    }

    /// Append a frame one level deeper than the current last entry.
    pub fn push(&mut self, frame: FrameId) {
        let depth = self.entries.len();
        self.entries.push(StackEntry { depth, frame });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, depth: usize) -> Option<&StackEntry> {
        self.entries.get(depth)
    }

    /// The hovered frame.
    pub fn top(&self) -> Option<FrameId> {
        self.entries.first().map(|e| e.frame)
    }

    pub fn contains(&self, frame: FrameId) -> bool {
        self.entries.iter().any(|e| e.frame == frame)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StackEntry> {
        self.entries.iter()
    }

    pub fn frames(&self) -> Vec<FrameId> {
        self.entries.iter().map(|e| e.frame).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// True unless both chains hold the same frames in the same order.
pub fn has_changed(previous: &FrameChain, current: &FrameChain) -> bool {
    previous.len() != current.len()
        || previous
            .iter()
            .zip(current.iter())
            .any(|(a, b)| a.frame != b.frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_chains_are_unchanged() {
        let a = FrameChain::from_frames([3, 2, 1]);
        assert!(!has_changed(&a, &a.clone()));
        assert!(!has_changed(&FrameChain::new(), &FrameChain::new()));
    }

    #[test]
    fn length_difference_is_a_change() {
        let a = FrameChain::from_frames([3, 2]);
        let b = FrameChain::from_frames([3, 2, 1]);
        assert!(has_changed(&a, &b));
        assert!(has_changed(&b, &a));
        assert!(has_changed(&a, &FrameChain::new()));
    }

    #[test]
    fn change_at_any_depth_is_detected() {
        let base = FrameChain::from_frames([5, 4, 3, 2, 1]);
        for depth in 0..5 {
            let mut frames = base.frames();
            frames[depth] = 99;
            assert!(has_changed(&base, &FrameChain::from_frames(frames)), "depth {depth}");
        }
    }

    #[test]
    fn push_assigns_depths() {
        let chain = FrameChain::from_frames([10, 20]);
        assert_eq!(chain.get(1), Some(&StackEntry { depth: 1, frame: 20 }));
        assert_eq!(chain.top(), Some(10));
    }
}

//! Sampling the frame stack under the cursor.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::chain::FrameChain;
use super::highlight::HighlightPool;
use super::host::{FrameHost, FrameId, HitTest};
use crate::hit::HitTestOptions;

/// What spends the depth budget while walking up the parent chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthPolicy {
    /// Every traversal step, including skipped overlay frames.
    #[default]
    Traversal,
    /// Only frames that made it into the chain.
    Accepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    pub max_depth: usize,
    pub policy: DepthPolicy,
    pub hit: HitTestOptions,
}

/// Sample the chain of frames under `cursor`.
///
/// All highlight regions are hidden before the hit test so they cannot be
/// picked up; the caller reconciles their visibility afterwards.
pub fn sample<H: FrameHost + ?Sized>(
    host: &mut H,
    pool: &mut HighlightPool,
    cursor: (f32, f32),
    options: &SampleOptions,
) -> FrameChain {
    pool.hide_all(host);

    match host.hit_test(cursor.0, cursor.1, options.hit) {
        HitTest::Hit(top) => walk_chain(host, top, options.max_depth, options.policy),
        HitTest::Miss => FrameChain::new(),
        HitTest::Unavailable => {
            tracing::warn!("frame stack hit test unavailable");
            FrameChain::new()
        }
    }
}

/// Walk from `top` up the parent chain, skipping overlay frames.
///
/// Stops, in order, when there is no parent, the parent is the root, the
/// parent is the frame itself, or the depth budget is spent. Revisiting any
/// earlier frame also stops the walk.
pub fn walk_chain<H: FrameHost + ?Sized>(host: &H, top: FrameId, max_depth: usize, policy: DepthPolicy) -> FrameChain {
    let mut chain = FrameChain::new();
    if max_depth == 0 || host.is_root(top) {
        return chain;
    }

    let mut visited = HashSet::new();
    let mut steps = 0;
    let mut current = top;
    loop {
        visited.insert(current);
        steps += 1;
        if !host.is_overlay(current) {
            chain.push(current);
        }
        let spent = match policy {
            DepthPolicy::Traversal => steps,
            DepthPolicy::Accepted => chain.len(),
        };

        let Some(parent) = host.parent(current) else { break };
        if host.is_root(parent) || parent == current || spent >= max_depth {
            break;
        }
        if visited.contains(&parent) {
            tracing::warn!(frame = current, parent, "parent chain cycles, stopping walk");
            break;
        }
        current = parent;
    }
    chain
}

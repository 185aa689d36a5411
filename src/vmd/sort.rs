//! Keyframe ordering.
//!
//! Tracks are not required to be sorted on disk; MMD writes keyframes in
//! edit order. Sorting is ascending by frame number, independently per
//! track.

use super::models::{FrameKind, VmdMotion};

/// Sort one track ascending by frame number.
///
/// Frame numbers compare as unsigned 32-bit values. Keyframes sharing a
/// frame number may end up in either order.
pub fn sort_category(motion: &mut VmdMotion, kind: FrameKind) {
    match kind {
        FrameKind::Bone => motion.bone_frames.sort_unstable_by_key(|f| f.frame),
        FrameKind::Morph => motion.morph_frames.sort_unstable_by_key(|f| f.frame),
        FrameKind::Camera => motion.camera_frames.sort_unstable_by_key(|f| f.frame),
        FrameKind::Light => motion.light_frames.sort_unstable_by_key(|f| f.frame),
        FrameKind::Shadow => motion.shadow_frames.sort_unstable_by_key(|f| f.frame),
        FrameKind::ShowIk => motion.show_ik_frames.sort_unstable_by_key(|f| f.frame),
    }
}

/// Sort all six tracks, in on-disk track order.
pub fn sort_all(motion: &mut VmdMotion) {
    for kind in FrameKind::ALL {
        sort_category(motion, kind);
    }
}

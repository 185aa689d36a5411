//! Row iterators for tabular export of bone and morph tracks.
//!
//! These flatten each keyframe into a plain row (decoded name plus the
//! track's numeric fields) so a driver can render delimited text without
//! touching the raw record layout.
//!
//! Created by [`VmdMotion::iter_bone_rows`](crate::VmdMotion::iter_bone_rows)
//! and [`VmdMotion::iter_morph_rows`](crate::VmdMotion::iter_morph_rows).

use std::slice;

use super::models::{BoneFrame, MorphFrame};

/// One bone keyframe flattened for tabular output.
#[derive(Debug, Clone, PartialEq)]
pub struct BoneRow {
    pub name: String,
    pub frame: u32,
    pub position: [f32; 3],
    pub rotation: [f32; 4],
}

/// Iterator over bone keyframes as [`BoneRow`]s.
pub struct BoneRows<'a> {
    frames: slice::Iter<'a, BoneFrame>,
}

impl<'a> BoneRows<'a> {
    pub(super) fn new(frames: &'a [BoneFrame]) -> Self {
        Self {
            frames: frames.iter(),
        }
    }
}

impl Iterator for BoneRows<'_> {
    type Item = BoneRow;

    fn next(&mut self) -> Option<BoneRow> {
        self.frames.next().map(|f| BoneRow {
            name: f.name_text(),
            frame: f.frame,
            position: f.position,
            rotation: f.rotation,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.frames.size_hint()
    }
}

impl ExactSizeIterator for BoneRows<'_> {}

/// One morph keyframe flattened for tabular output.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphRow {
    pub name: String,
    pub frame: u32,
    pub weight: f32,
}

/// Iterator over morph keyframes as [`MorphRow`]s.
pub struct MorphRows<'a> {
    frames: slice::Iter<'a, MorphFrame>,
}

impl<'a> MorphRows<'a> {
    pub(super) fn new(frames: &'a [MorphFrame]) -> Self {
        Self {
            frames: frames.iter(),
        }
    }
}

impl Iterator for MorphRows<'_> {
    type Item = MorphRow;

    fn next(&mut self) -> Option<MorphRow> {
        self.frames.next().map(|f| MorphRow {
            name: f.name_text(),
            frame: f.frame,
            weight: f.weight,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.frames.size_hint()
    }
}

impl ExactSizeIterator for MorphRows<'_> {}

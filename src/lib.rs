//! # vmd-motion
//!
//! A reader/writer for VMD motion files used by MikuMikuDance (MMD).
//! Decodes a whole file into a [`VmdMotion`] document, supports per-track
//! keyframe sorting, and encodes the document back to an equivalent file.
pub mod vmd;

// Re-export the main types for convenience
pub use vmd::{
    error::{Result, VmdError},
    models::{
        BoneFrame,
        CameraFrame,
        FrameKind,
        IkState,
        LightFrame,
        MorphFrame,
        ShadowFrame,
        ShowIkFrame,
        VmdHeader,
        VmdMotion,
    },
};

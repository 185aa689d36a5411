//! Data structures representing VMD format components.

use std::fmt;

use super::layout::{
    BONE_INTERP_LEN, BONE_NAME_LEN, CAMERA_INTERP_LEN, IK_NAME_LEN, MODEL_NAME_LEN,
    MORPH_NAME_LEN,
};
use super::text;

/// One of the six keyframe tracks of a VMD file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Bone,
    Morph,
    Camera,
    Light,
    Shadow,
    ShowIk,
}

impl FrameKind {
    /// All tracks in the order they appear on disk.
    pub const ALL: [FrameKind; 6] = [
        FrameKind::Bone,
        FrameKind::Morph,
        FrameKind::Camera,
        FrameKind::Light,
        FrameKind::Shadow,
        FrameKind::ShowIk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FrameKind::Bone => "bone",
            FrameKind::Morph => "morph",
            FrameKind::Camera => "camera",
            FrameKind::Light => "light",
            FrameKind::Shadow => "shadow",
            FrameKind::ShowIk => "show/IK",
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parsed VMD file header.
///
/// The 30-byte magic is validated on decode and written back as a constant,
/// so only the 20-byte model name field is carried here. Camera/light
/// motions store the fixed display name "カメラ・照明" instead of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmdHeader {
    /// Raw Shift_JIS model name field, NUL-terminated and padded.
    pub model_name: [u8; MODEL_NAME_LEN],
}

impl VmdHeader {
    /// Header for a model motion with the given display name.
    pub fn for_model(name: &str) -> Self {
        Self {
            model_name: text::encode_fixed(name),
        }
    }

    /// Header for a camera/light motion.
    pub fn for_camera() -> Self {
        Self::for_model("カメラ・照明")
    }

    /// Model name decoded from Shift_JIS, up to its first NUL.
    pub fn model_name_text(&self) -> String {
        text::decode_fixed(&self.model_name)
    }
}

impl Default for VmdHeader {
    fn default() -> Self {
        Self {
            model_name: [0u8; MODEL_NAME_LEN],
        }
    }
}

/// One bone keyframe (111 bytes on disk).
#[derive(Debug, Clone, PartialEq)]
pub struct BoneFrame {
    /// Raw Shift_JIS bone name field.
    pub name: [u8; BONE_NAME_LEN],
    pub frame: u32,
    pub position: [f32; 3],
    /// Rotation quaternion as (x, y, z, w).
    pub rotation: [f32; 4],
    /// Bezier interpolation parameters, kept as raw bytes.
    pub interpolation: [u8; BONE_INTERP_LEN],
}

impl BoneFrame {
    pub fn name_text(&self) -> String {
        text::decode_fixed(&self.name)
    }
}

/// One morph (facial expression) keyframe (23 bytes on disk).
#[derive(Debug, Clone, PartialEq)]
pub struct MorphFrame {
    /// Raw Shift_JIS morph name field.
    pub name: [u8; MORPH_NAME_LEN],
    pub frame: u32,
    /// Morph weight in 0..=1.
    pub weight: f32,
}

impl MorphFrame {
    pub fn name_text(&self) -> String {
        text::decode_fixed(&self.name)
    }
}

/// One camera keyframe (61 bytes on disk).
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFrame {
    pub frame: u32,
    /// Distance from the target point; negative when the target is in
    /// front of the camera.
    pub distance: f32,
    pub target: [f32; 3],
    /// Camera rotation in radians per axis.
    pub rotation: [f32; 3],
    /// Bezier interpolation parameters, kept as raw bytes.
    pub interpolation: [u8; CAMERA_INTERP_LEN],
    /// View angle in degrees.
    pub view_angle: u32,
    /// Perspective flag byte: 0 is on, 1 is off.
    pub perspective: u8,
}

/// One light keyframe (28 bytes on disk).
#[derive(Debug, Clone, PartialEq)]
pub struct LightFrame {
    pub frame: u32,
    pub color: [f32; 3],
    pub position: [f32; 3],
}

/// One self-shadow keyframe (9 bytes on disk).
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowFrame {
    pub frame: u32,
    /// Shadow mode byte: 0 off, 1 mode1, 2 mode2.
    pub mode: u8,
    pub distance: f32,
}

/// IK on/off state for one IK bone within a show/IK keyframe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IkState {
    /// Raw Shift_JIS IK bone name field.
    pub name: [u8; IK_NAME_LEN],
    /// On/off flag byte: 0 off, 1 on.
    pub enabled: u8,
}

impl IkState {
    pub fn name_text(&self) -> String {
        text::decode_fixed(&self.name)
    }
}

/// One model-visibility / IK keyframe (9 + 21 × entry count bytes on disk).
///
/// The on-disk record is variable-length: a count prefix followed by that
/// many fixed-size IK entries, like the outer tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowIkFrame {
    pub frame: u32,
    /// Model visibility flag byte: 0 hidden, 1 shown.
    pub visible: u8,
    pub ik_states: Vec<IkState>,
}

/// A fully decoded VMD motion: one header plus the six keyframe tracks.
///
/// Every track is always present; a track with no keyframes is an empty
/// vector, and the count written on encode is always the vector length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VmdMotion {
    pub header: VmdHeader,
    pub bone_frames: Vec<BoneFrame>,
    pub morph_frames: Vec<MorphFrame>,
    pub camera_frames: Vec<CameraFrame>,
    pub light_frames: Vec<LightFrame>,
    pub shadow_frames: Vec<ShadowFrame>,
    pub show_ik_frames: Vec<ShowIkFrame>,
}

impl VmdMotion {
    /// An empty motion with the given header.
    pub fn new(header: VmdHeader) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    /// Number of keyframes in one track.
    pub fn frame_count(&self, kind: FrameKind) -> usize {
        match kind {
            FrameKind::Bone => self.bone_frames.len(),
            FrameKind::Morph => self.morph_frames.len(),
            FrameKind::Camera => self.camera_frames.len(),
            FrameKind::Light => self.light_frames.len(),
            FrameKind::Shadow => self.shadow_frames.len(),
            FrameKind::ShowIk => self.show_ik_frames.len(),
        }
    }

    /// Number of keyframes across all six tracks.
    pub fn total_frames(&self) -> usize {
        FrameKind::ALL.iter().map(|&k| self.frame_count(k)).sum()
    }

    /// Highest frame number used by any keyframe, or `None` for an empty
    /// motion.
    pub fn max_frame(&self) -> Option<u32> {
        let bone = self.bone_frames.iter().map(|f| f.frame);
        let morph = self.morph_frames.iter().map(|f| f.frame);
        let camera = self.camera_frames.iter().map(|f| f.frame);
        let light = self.light_frames.iter().map(|f| f.frame);
        let shadow = self.shadow_frames.iter().map(|f| f.frame);
        let show_ik = self.show_ik_frames.iter().map(|f| f.frame);
        bone.chain(morph)
            .chain(camera)
            .chain(light)
            .chain(shadow)
            .chain(show_ik)
            .max()
    }
}

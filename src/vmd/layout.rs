//! Byte layout of the VMD wire format.
//!
//! Every multi-byte field is little-endian; records are packed with no
//! padding between fields or between records. The file is a 50-byte header
//! followed by six count-prefixed keyframe tracks in a fixed order:
//! bone, morph, camera, light, shadow, show/IK.

/// Leading magic bytes of a VMD file, NUL-padded to 30 bytes.
pub const MAGIC: &[u8; MAGIC_LEN] = b"Vocaloid Motion Data 0002\0\0\0\0\0";

pub const MAGIC_LEN: usize = 30;
pub const MODEL_NAME_LEN: usize = 20;
pub const HEADER_LEN: usize = MAGIC_LEN + MODEL_NAME_LEN;

/// Width of every track's record-count prefix.
pub const COUNT_LEN: usize = 4;

pub const BONE_NAME_LEN: usize = 15;
pub const MORPH_NAME_LEN: usize = 15;
pub const IK_NAME_LEN: usize = 20;

pub const BONE_INTERP_LEN: usize = 64;
pub const CAMERA_INTERP_LEN: usize = 24;

/// name + frame + position xyz + quaternion xyzw + interpolation
pub const BONE_FRAME_LEN: usize = BONE_NAME_LEN + 4 + 12 + 16 + BONE_INTERP_LEN;
/// name + frame + weight
pub const MORPH_FRAME_LEN: usize = MORPH_NAME_LEN + 4 + 4;
/// frame + distance + target xyz + rotation xyz + interpolation + view angle + perspective
pub const CAMERA_FRAME_LEN: usize = 4 + 4 + 12 + 12 + CAMERA_INTERP_LEN + 4 + 1;
/// frame + color rgb + position xyz
pub const LIGHT_FRAME_LEN: usize = 4 + 12 + 12;
/// frame + mode + distance
pub const SHADOW_FRAME_LEN: usize = 4 + 1 + 4;

/// Fixed prefix of a show/IK record: frame + visibility + IK entry count.
/// The record continues with `ik_count` entries of [`IK_STATE_LEN`] bytes.
pub const SHOW_IK_FRAME_BASE_LEN: usize = 4 + 1 + 4;
/// IK bone name + on/off flag.
pub const IK_STATE_LEN: usize = IK_NAME_LEN + 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_widths_match_wire_format() {
        assert_eq!(HEADER_LEN, 50);
        assert_eq!(BONE_FRAME_LEN, 111);
        assert_eq!(MORPH_FRAME_LEN, 23);
        assert_eq!(CAMERA_FRAME_LEN, 61);
        assert_eq!(LIGHT_FRAME_LEN, 28);
        assert_eq!(SHADOW_FRAME_LEN, 9);
        assert_eq!(SHOW_IK_FRAME_BASE_LEN, 9);
        assert_eq!(IK_STATE_LEN, 21);
    }

    #[test]
    fn magic_is_null_padded_text() {
        assert!(MAGIC.starts_with(b"Vocaloid Motion Data 0002"));
        assert!(MAGIC[25..].iter().all(|&b| b == 0));
    }
}

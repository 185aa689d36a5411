//! Serialization of a [`VmdMotion`] back to the VMD wire format.
//!
//! Field-by-field little-endian writes; the output never depends on host
//! struct layout. The byte layout mirrors the decoder exactly, so a decoded
//! motion re-encodes to an equivalent file.

use byteorder::{ByteOrder, LittleEndian};

use super::layout::{
    BONE_FRAME_LEN, CAMERA_FRAME_LEN, COUNT_LEN, HEADER_LEN, IK_STATE_LEN, LIGHT_FRAME_LEN,
    MAGIC, MORPH_FRAME_LEN, SHADOW_FRAME_LEN, SHOW_IK_FRAME_BASE_LEN,
};
use super::models::{
    BoneFrame, CameraFrame, IkState, LightFrame, MorphFrame, ShadowFrame, ShowIkFrame,
    VmdMotion,
};

/// Serialize a motion to the packed on-disk format.
///
/// Emits the header, then each track in on-disk order as a u32 count
/// followed by its packed records. An empty track still emits its count.
pub fn encode(motion: &VmdMotion) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(motion));
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&motion.header.model_name);

    put_track(&mut out, &motion.bone_frames, put_bone_frame);
    put_track(&mut out, &motion.morph_frames, put_morph_frame);
    put_track(&mut out, &motion.camera_frames, put_camera_frame);
    put_track(&mut out, &motion.light_frames, put_light_frame);
    put_track(&mut out, &motion.shadow_frames, put_shadow_frame);
    put_track(&mut out, &motion.show_ik_frames, put_show_ik_frame);
    out
}

/// Exact size in bytes of the encoded motion.
pub fn encoded_len(motion: &VmdMotion) -> usize {
    let show_ik: usize = motion
        .show_ik_frames
        .iter()
        .map(|f| SHOW_IK_FRAME_BASE_LEN + f.ik_states.len() * IK_STATE_LEN)
        .sum();
    HEADER_LEN
        + 6 * COUNT_LEN
        + motion.bone_frames.len() * BONE_FRAME_LEN
        + motion.morph_frames.len() * MORPH_FRAME_LEN
        + motion.camera_frames.len() * CAMERA_FRAME_LEN
        + motion.light_frames.len() * LIGHT_FRAME_LEN
        + motion.shadow_frames.len() * SHADOW_FRAME_LEN
        + show_ik
}

fn put_track<T>(out: &mut Vec<u8>, frames: &[T], mut put_record: impl FnMut(&mut Vec<u8>, &T)) {
    put_u32(out, frames.len() as u32);
    for frame in frames {
        put_record(out, frame);
    }
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    let mut buf = [0u8; 4];
    LittleEndian::write_u32(&mut buf, value);
    out.extend_from_slice(&buf);
}

fn put_f32(out: &mut Vec<u8>, value: f32) {
    let mut buf = [0u8; 4];
    LittleEndian::write_f32(&mut buf, value);
    out.extend_from_slice(&buf);
}

fn put_vec3(out: &mut Vec<u8>, value: &[f32; 3]) {
    for &v in value {
        put_f32(out, v);
    }
}

fn put_bone_frame(out: &mut Vec<u8>, frame: &BoneFrame) {
    out.extend_from_slice(&frame.name);
    put_u32(out, frame.frame);
    put_vec3(out, &frame.position);
    for &v in &frame.rotation {
        put_f32(out, v);
    }
    out.extend_from_slice(&frame.interpolation);
}

fn put_morph_frame(out: &mut Vec<u8>, frame: &MorphFrame) {
    out.extend_from_slice(&frame.name);
    put_u32(out, frame.frame);
    put_f32(out, frame.weight);
}

fn put_camera_frame(out: &mut Vec<u8>, frame: &CameraFrame) {
    put_u32(out, frame.frame);
    put_f32(out, frame.distance);
    put_vec3(out, &frame.target);
    put_vec3(out, &frame.rotation);
    out.extend_from_slice(&frame.interpolation);
    put_u32(out, frame.view_angle);
    out.push(frame.perspective);
}

fn put_light_frame(out: &mut Vec<u8>, frame: &LightFrame) {
    put_u32(out, frame.frame);
    put_vec3(out, &frame.color);
    put_vec3(out, &frame.position);
}

fn put_shadow_frame(out: &mut Vec<u8>, frame: &ShadowFrame) {
    put_u32(out, frame.frame);
    out.push(frame.mode);
    put_f32(out, frame.distance);
}

fn put_show_ik_frame(out: &mut Vec<u8>, frame: &ShowIkFrame) {
    put_u32(out, frame.frame);
    out.push(frame.visible);
    put_track(out, &frame.ik_states, put_ik_state);
}

fn put_ik_state(out: &mut Vec<u8>, state: &IkState) {
    out.extend_from_slice(&state.name);
    out.push(state.enabled);
}

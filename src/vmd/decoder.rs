//! Decoding of a raw VMD byte buffer into a [`VmdMotion`].
//!
//! The whole file is expected in memory; every read goes through a
//! bounds-checked cursor, so a record count that overruns the buffer is a
//! [`VmdError::Truncated`] decode error rather than an out-of-bounds read.

use byteorder::{ByteOrder, LittleEndian};
use log::debug;

use super::error::{Result, VmdError};
use super::layout::{
    BONE_FRAME_LEN, CAMERA_FRAME_LEN, IK_STATE_LEN, LIGHT_FRAME_LEN, MAGIC, MAGIC_LEN,
    MORPH_FRAME_LEN, SHADOW_FRAME_LEN, SHOW_IK_FRAME_BASE_LEN,
};
use super::models::{
    BoneFrame, CameraFrame, IkState, LightFrame, MorphFrame, ShadowFrame, ShowIkFrame,
    VmdHeader, VmdMotion,
};

/// Cursor over the raw file bytes.
///
/// Every read fails with the current section label when fewer bytes remain
/// than requested.
struct SliceCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, len: usize, section: &'static str) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(VmdError::Truncated {
                section,
                needed: len,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self, section: &'static str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, section)?);
        Ok(out)
    }

    fn read_u8(&mut self, section: &'static str) -> Result<u8> {
        Ok(self.take(1, section)?[0])
    }

    fn read_u32(&mut self, section: &'static str) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4, section)?))
    }

    fn read_f32(&mut self, section: &'static str) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.take(4, section)?))
    }
}

/// Decode the full contents of a VMD file.
///
/// Tracks are read in on-disk order: bone, morph, camera, light, shadow,
/// show/IK. Trailing bytes after the last track are ignored.
pub fn decode(bytes: &[u8]) -> Result<VmdMotion> {
    let mut cur = SliceCursor::new(bytes);

    let header = read_header(&mut cur)?;
    let bone_frames = read_track(&mut cur, "bone track", BONE_FRAME_LEN, read_bone_frame)?;
    let morph_frames = read_track(&mut cur, "morph track", MORPH_FRAME_LEN, read_morph_frame)?;
    let camera_frames =
        read_track(&mut cur, "camera track", CAMERA_FRAME_LEN, read_camera_frame)?;
    let light_frames = read_track(&mut cur, "light track", LIGHT_FRAME_LEN, read_light_frame)?;
    let shadow_frames =
        read_track(&mut cur, "shadow track", SHADOW_FRAME_LEN, read_shadow_frame)?;
    let show_ik_frames = read_track(
        &mut cur,
        "show/IK track",
        SHOW_IK_FRAME_BASE_LEN,
        read_show_ik_frame,
    )?;

    if cur.remaining() > 0 {
        debug!(
            "ignoring {} trailing bytes after the show/IK track",
            cur.remaining()
        );
    }

    Ok(VmdMotion {
        header,
        bone_frames,
        morph_frames,
        camera_frames,
        light_frames,
        shadow_frames,
        show_ik_frames,
    })
}

fn read_header(cur: &mut SliceCursor<'_>) -> Result<VmdHeader> {
    let magic = cur.take(MAGIC_LEN, "header")?;
    if magic != MAGIC.as_slice() {
        return Err(VmdError::InvalidMagic {
            leading: magic.to_vec(),
        });
    }
    Ok(VmdHeader {
        model_name: cur.take_array("header")?,
    })
}

/// Read one count-prefixed run of records.
///
/// The declared count is validated against the remaining buffer length
/// (using the record's minimum width) before any storage is reserved, so a
/// hostile count fails here instead of allocating.
fn read_track<T>(
    cur: &mut SliceCursor<'_>,
    section: &'static str,
    min_record_len: usize,
    mut read_record: impl FnMut(&mut SliceCursor<'_>, &'static str) -> Result<T>,
) -> Result<Vec<T>> {
    let count = cur.read_u32(section)? as usize;
    let needed = count.saturating_mul(min_record_len);
    if needed > cur.remaining() {
        return Err(VmdError::Truncated {
            section,
            needed,
            remaining: cur.remaining(),
        });
    }
    let mut frames = Vec::with_capacity(count);
    for _ in 0..count {
        frames.push(read_record(cur, section)?);
    }
    Ok(frames)
}

fn read_vec3(cur: &mut SliceCursor<'_>, section: &'static str) -> Result<[f32; 3]> {
    Ok([
        cur.read_f32(section)?,
        cur.read_f32(section)?,
        cur.read_f32(section)?,
    ])
}

fn read_bone_frame(cur: &mut SliceCursor<'_>, section: &'static str) -> Result<BoneFrame> {
    Ok(BoneFrame {
        name: cur.take_array(section)?,
        frame: cur.read_u32(section)?,
        position: read_vec3(cur, section)?,
        rotation: [
            cur.read_f32(section)?,
            cur.read_f32(section)?,
            cur.read_f32(section)?,
            cur.read_f32(section)?,
        ],
        interpolation: cur.take_array(section)?,
    })
}

fn read_morph_frame(cur: &mut SliceCursor<'_>, section: &'static str) -> Result<MorphFrame> {
    Ok(MorphFrame {
        name: cur.take_array(section)?,
        frame: cur.read_u32(section)?,
        weight: cur.read_f32(section)?,
    })
}

fn read_camera_frame(cur: &mut SliceCursor<'_>, section: &'static str) -> Result<CameraFrame> {
    Ok(CameraFrame {
        frame: cur.read_u32(section)?,
        distance: cur.read_f32(section)?,
        target: read_vec3(cur, section)?,
        rotation: read_vec3(cur, section)?,
        interpolation: cur.take_array(section)?,
        view_angle: cur.read_u32(section)?,
        perspective: cur.read_u8(section)?,
    })
}

fn read_light_frame(cur: &mut SliceCursor<'_>, section: &'static str) -> Result<LightFrame> {
    Ok(LightFrame {
        frame: cur.read_u32(section)?,
        color: read_vec3(cur, section)?,
        position: read_vec3(cur, section)?,
    })
}

fn read_shadow_frame(cur: &mut SliceCursor<'_>, section: &'static str) -> Result<ShadowFrame> {
    Ok(ShadowFrame {
        frame: cur.read_u32(section)?,
        mode: cur.read_u8(section)?,
        distance: cur.read_f32(section)?,
    })
}

// A show/IK record is itself count-prefixed: the IK entry list nests the
// same shape as the outer tracks.
fn read_show_ik_frame(cur: &mut SliceCursor<'_>, section: &'static str) -> Result<ShowIkFrame> {
    Ok(ShowIkFrame {
        frame: cur.read_u32(section)?,
        visible: cur.read_u8(section)?,
        ik_states: read_track(cur, "IK entries", IK_STATE_LEN, read_ik_state)?,
    })
}

fn read_ik_state(cur: &mut SliceCursor<'_>, section: &'static str) -> Result<IkState> {
    Ok(IkState {
        name: cur.take_array(section)?,
        enabled: cur.read_u8(section)?,
    })
}

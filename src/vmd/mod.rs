//! Core VMD codec module.

pub mod error;
pub mod iter;
pub mod layout;
pub mod models;
pub mod text;
mod decoder;
mod encoder;
mod sort;

use std::fs;
use std::path::Path;

use log::info;

use iter::{BoneRows, MorphRows};
pub use error::{Result, VmdError};
pub use models::{
    BoneFrame, CameraFrame, FrameKind, IkState, LightFrame, MorphFrame, ShadowFrame,
    ShowIkFrame, VmdHeader, VmdMotion,
};

impl VmdMotion {
    /// Decode a motion from the full contents of a VMD file.
    ///
    /// # Errors
    /// Returns an error if the magic bytes do not identify a VMD file, or
    /// if the buffer ends before the data its record counts declare.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decoder::decode(bytes)
    }

    /// Read and decode a VMD file from the given path.
    ///
    /// The whole file is read in one shot and decoded from memory; the
    /// format has no framing that would benefit from streaming.
    ///
    /// # Errors
    /// Returns an error if:
    /// - File cannot be opened or read
    /// - The magic bytes do not identify a VMD file
    /// - The file is truncated relative to its record counts
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening VMD file: {}", path.display());
        let bytes = fs::read(path)?;
        let motion = decoder::decode(&bytes)?;
        info!(
            "VMD file opened: model \"{}\", {} keyframes",
            motion.header.model_name_text(),
            motion.total_frames()
        );
        Ok(motion)
    }

    /// Serialize the motion to VMD bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        encoder::encode(self)
    }

    /// Exact size in bytes of the encoded motion.
    pub fn encoded_len(&self) -> usize {
        encoder::encoded_len(self)
    }

    /// Encode and write the motion to the given path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!("Writing VMD file: {}", path.display());
        fs::write(path, encoder::encode(self))?;
        Ok(())
    }

    /// Sort one keyframe track ascending by frame number.
    pub fn sort_category(&mut self, kind: FrameKind) {
        sort::sort_category(self, kind);
    }

    /// Sort all six keyframe tracks ascending by frame number.
    pub fn sort_all_frames(&mut self) {
        sort::sort_all(self);
    }

    /// Iterate bone keyframes as flattened rows for tabular output.
    pub fn iter_bone_rows(&self) -> BoneRows<'_> {
        BoneRows::new(&self.bone_frames)
    }

    /// Iterate morph keyframes as flattened rows for tabular output.
    pub fn iter_morph_rows(&self) -> MorphRows<'_> {
        MorphRows::new(&self.morph_frames)
    }
}

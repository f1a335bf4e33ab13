use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::{FRAME_FILE_PATTERN, FrameIndex};
use crate::foundation::error::Svg2GifResult;

/// Scratch directory holding one run's captured frames.
///
/// The directory is emptied when the workspace is prepared and removed again when the value is
/// dropped, on the success path as well as after a failure. Call [`Workspace::keep_on_drop`]
/// to leave it on disk.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    armed: bool,
}

impl Workspace {
    /// Create `root` empty, deleting any directory left behind by an earlier run first.
    ///
    /// Stale frames must never survive: the encoder picks frames up by pattern and would
    /// happily append them to the new sequence.
    pub fn prepare(root: impl AsRef<Path>) -> Svg2GifResult<Self> {
        let root = root.as_ref().to_path_buf();
        if root.exists() {
            tracing::debug!(root = %root.display(), "removing stale workspace");
            std::fs::remove_dir_all(&root)
                .with_context(|| format!("failed to remove stale workspace '{}'", root.display()))?;
        }
        std::fs::create_dir_all(&root)
            .with_context(|| format!("failed to create workspace '{}'", root.display()))?;
        Ok(Self { root, armed: true })
    }

    /// Directory backing this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Location of frame `idx` inside the workspace.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.root.join(idx.file_name())
    }

    /// Pattern the encoder uses to read the frames back in order.
    pub fn input_pattern(&self) -> PathBuf {
        self.root.join(FRAME_FILE_PATTERN)
    }

    /// Write the encoded still for frame `idx`, returning its path.
    pub fn write_frame(&self, idx: FrameIndex, png: &[u8]) -> Svg2GifResult<PathBuf> {
        let path = self.frame_path(idx);
        std::fs::write(&path, png)
            .with_context(|| format!("failed to write frame '{}'", path.display()))?;
        Ok(path)
    }

    /// Frame files currently on disk, in sequence order.
    #[cfg(test)]
    pub(crate) fn frames(&self) -> Svg2GifResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.root)
            .with_context(|| format!("failed to list workspace '{}'", self.root.display()))?;
        let mut frames = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("failed to list workspace '{}'", self.root.display()))?
                .path();
            let is_frame = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("frame_") && n.ends_with(".png"));
            if is_frame {
                frames.push(path);
            }
        }
        frames.sort();
        Ok(frames)
    }

    /// Choose whether dropping the workspace leaves the directory on disk.
    pub fn keep_on_drop(&mut self, keep: bool) {
        self.armed = !keep;
    }

    /// Delete the directory now, reporting failures instead of swallowing them.
    pub fn remove(mut self) -> Svg2GifResult<()> {
        self.armed = false;
        std::fs::remove_dir_all(&self.root)
            .with_context(|| format!("failed to remove workspace '{}'", self.root.display()))?;
        Ok(())
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = std::fs::remove_dir_all(&self.root) {
            tracing::warn!(root = %self.root.display(), "failed to remove workspace: {e}");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/workspace/frames.rs"]
mod tests;

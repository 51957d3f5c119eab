//! Standalone binary-artifact module.
//!
//! # Responsibilities
//! - Read the compiled module from disk
//! - Reject files that are not a version-1 binary module
//! - Defer the section walk to the init entry point
//!
//! # Design Decisions
//! - Preamble problems are load failures; body problems are init failures
//! - The artifact bytes move into the init entry point, nothing else keeps them

use std::path::PathBuf;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use thiserror::Error;

use crate::capability::{Artifact, ArtifactModule, Chart, ChartFrame, InitEntry};
use crate::error::{BootstrapError, BootstrapResult};

/// Module magic number (`\0asm`).
pub const MAGIC: [u8; 4] = *b"\0asm";

/// Supported binary format version.
pub const VERSION: u32 = 1;

/// Magic plus version.
pub const PREAMBLE_LEN: usize = 8;

/// Highest known section id (data count).
const MAX_SECTION_ID: u8 = 12;

/// Problems found in an artifact's bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArtifactError {
    #[error("artifact is {0} bytes, shorter than the module preamble")]
    TooShort(usize),

    #[error("bad magic number {0:02x?}")]
    BadMagic([u8; 4]),

    #[error("unsupported module version {0}")]
    UnsupportedVersion(u32),

    #[error("unknown section id {id} at offset {offset}")]
    UnknownSection { id: u8, offset: usize },

    #[error("LEB128 value at offset {0} overflows u32")]
    LebOverflow(usize),

    #[error("truncated module at offset {0}")]
    Truncated(usize),
}

/// Location of one section inside the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    pub id: u8,
    /// Offset of the section payload.
    pub offset: usize,
    pub size: usize,
}

/// Standalone computational module backed by a file on disk.
#[derive(Debug, Clone)]
pub struct ArtifactFile {
    path: PathBuf,
    frame: ChartFrame,
}

impl ArtifactFile {
    pub fn new(path: impl Into<PathBuf>, frame: ChartFrame) -> Self {
        Self {
            path: path.into(),
            frame,
        }
    }
}

impl ArtifactModule for ArtifactFile {
    fn load(self) -> BoxFuture<'static, BootstrapResult<Artifact>> {
        Box::pin(async move {
            let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
                BootstrapError::CapabilityLoad(format!("{}: {}", self.path.display(), e))
            })?;
            check_preamble(&bytes).map_err(|e| {
                BootstrapError::CapabilityLoad(format!("{}: {}", self.path.display(), e))
            })?;

            tracing::debug!(
                path = %self.path.display(),
                size = bytes.len(),
                "Artifact loaded"
            );

            let path = self.path;
            let init: InitEntry = Box::new(move || {
                async move {
                    let sections = read_sections(&bytes).map_err(|e| {
                        BootstrapError::ArtifactInit(format!("{}: {}", path.display(), e))
                    })?;
                    tracing::info!(
                        path = %path.display(),
                        sections = sections.len(),
                        "Artifact instantiated"
                    );
                    Ok::<(), BootstrapError>(())
                }
                .boxed()
            });

            Ok(Artifact::new(Chart::from_frame(&self.frame), init))
        })
    }
}

/// Check the magic number and version.
pub fn check_preamble(bytes: &[u8]) -> Result<(), ArtifactError> {
    if bytes.len() < PREAMBLE_LEN {
        return Err(ArtifactError::TooShort(bytes.len()));
    }

    let magic = [bytes[0], bytes[1], bytes[2], bytes[3]];
    if magic != MAGIC {
        return Err(ArtifactError::BadMagic(magic));
    }

    let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    if version != VERSION {
        return Err(ArtifactError::UnsupportedVersion(version));
    }

    Ok(())
}

/// Walk the section headers following the preamble.
pub fn read_sections(bytes: &[u8]) -> Result<Vec<SectionHeader>, ArtifactError> {
    check_preamble(bytes)?;

    let mut sections = Vec::new();
    let mut pos = PREAMBLE_LEN;

    while pos < bytes.len() {
        let id = bytes[pos];
        if id > MAX_SECTION_ID {
            return Err(ArtifactError::UnknownSection { id, offset: pos });
        }
        pos += 1;

        let size = read_leb128_u32(bytes, &mut pos)? as usize;
        let end = pos
            .checked_add(size)
            .filter(|end| *end <= bytes.len())
            .ok_or(ArtifactError::Truncated(pos))?;

        sections.push(SectionHeader {
            id,
            offset: pos,
            size,
        });
        pos = end;
    }

    Ok(sections)
}

fn read_leb128_u32(bytes: &[u8], pos: &mut usize) -> Result<u32, ArtifactError> {
    let start = *pos;
    let mut result = 0u32;

    for i in 0..5 {
        let byte = *bytes.get(*pos).ok_or(ArtifactError::Truncated(*pos))?;
        *pos += 1;

        // Fifth byte may only carry the top four bits.
        if i == 4 && byte & 0xf0 != 0 {
            return Err(ArtifactError::LebOverflow(start));
        }

        result |= u32::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok(result);
        }
    }

    Err(ArtifactError::LebOverflow(start))
}

use std::{io::Read, path::Path};

use log::{debug, info};

use crate::{artifact::Artifact, config::FontJob, error::FileAccessError};

pub const SIZE_NAME: &str = "APPFONT_SIZE";
pub const DATA_NAME: &str = "APPFONT_DATA";

/// Reads the whole font file. The contents are not interpreted.
pub fn read_font(path: &Path) -> Result<Vec<u8>, FileAccessError> {
    let file = std::fs::File::open(path).map_err(|e| FileAccessError::read(path, e))?;
    let mut reader = std::io::BufReader::new(file);
    let mut font_data = Vec::new();
    reader.read_to_end(&mut font_data).map_err(|e| FileAccessError::read(path, e))?;
    debug!("Read {} font bytes from {}", font_data.len(), path.display());
    Ok(font_data)
}

pub fn font_artifact(font_data: Vec<u8>, generator: &str) -> Artifact {
    let size = font_data.len() as u64;
    Artifact::new(generator, DATA_NAME, font_data).with_constant(SIZE_NAME, size)
}

pub fn embed_font(job: &FontJob) -> Result<Artifact, FileAccessError> {
    let artifact = font_artifact(read_font(&job.source)?, &job.generator);
    artifact.write_to(&job.output)?;
    info!(
        "Embedded {} ({} bytes) into {}",
        job.source.display(),
        artifact.data.len(),
        job.output.display()
    );
    Ok(artifact)
}

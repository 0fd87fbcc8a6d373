use std::{fmt::Write as _, fs, path::Path};

use log::debug;

use crate::error::FileAccessError;

/// Renders bytes as `0xHH` literals joined by commas, no trailing comma.
pub fn render_hex_array(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 5);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "0x{b:02x}");
    }
    out
}

/// A generated C++ source file: integer constants followed by one byte array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub generator: String,
    pub constants: Vec<(String, u64)>,
    pub data_name: String,
    pub data: Vec<u8>,
}

impl Artifact {
    pub fn new(generator: &str, data_name: &str, data: Vec<u8>) -> Self {
        Self {
            generator: generator.to_string(),
            constants: Vec::new(),
            data_name: data_name.to_string(),
            data,
        }
    }

    pub fn with_constant(mut self, name: &str, value: u64) -> Self {
        self.constants.push((name.to_string(), value));
        self
    }

    pub fn constant(&self, name: &str) -> Option<u64> {
        self.constants.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "// Auto-generated file from {}", self.generator);
        for (name, value) in &self.constants {
            let _ = writeln!(out, "extern const int {name} = {value};");
        }
        let _ = writeln!(out, "extern const unsigned char {}[] = {{", self.data_name);
        out.push_str(&render_hex_array(&self.data));
        out.push_str("\n};\n");
        out
    }

    /// Overwrites `path` with the rendered source.
    pub fn write_to(&self, path: &Path) -> Result<(), FileAccessError> {
        let text = self.render();
        fs::write(path, &text).map_err(|e| FileAccessError::write(path, e))?;
        debug!("Wrote {} bytes to {}", text.len(), path.display());
        Ok(())
    }
}

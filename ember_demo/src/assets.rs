//! Demo asset access.
//!
//! Assets load from the crate's `assets/` directory by default; with
//! the `embedded-assets` feature the directory is compiled into the
//! binary and lookups never touch the filesystem.

use ember_renderer::{Error, Result};

#[cfg(feature = "embedded-assets")]
#[derive(rust_embed::RustEmbed)]
#[folder = "assets/"]
struct Assets;

#[cfg(feature = "embedded-assets")]
pub fn load_bytes(path: &str) -> Result<Vec<u8>> {
    match Assets::get(path) {
        Some(file) => Ok(file.data.into_owned()),
        None => Err(Error::Io(format!("no embedded asset '{}'", path))),
    }
}

#[cfg(not(feature = "embedded-assets"))]
pub fn load_bytes(path: &str) -> Result<Vec<u8>> {
    let full = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join(path);
    std::fs::read(&full)
        .map_err(|err| Error::Io(format!("unable to open file '{}': {}", full.display(), err)))
}

pub fn load_str(path: &str) -> Result<String> {
    let bytes = load_bytes(path)?;
    String::from_utf8(bytes).map_err(|_| Error::Io(format!("asset '{}' is not UTF-8", path)))
}

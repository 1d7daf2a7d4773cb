use crate::statics;
use anyhow::Context;
use std::path::Path;

/// Map a picked image file to the logical path stored in a record:
/// `/images/<filename>`.
///
/// This is a pure string transform. Both `/` and `\` count as separators so a
/// Windows path resolves the same on every host. Nothing is copied and the file's
/// existence is not checked. Returns `None` when the path has no filename.
pub fn resolve(selected: &str) -> Option<String> {
    let file_name = selected.rsplit(['/', '\\']).next()?;
    if file_name.is_empty() {
        return None;
    }
    Some(format!("{}{file_name}", statics::IMAGE_LOGICAL_ROOT))
}

/// Fully decode the file at `path` and return its pixel size.
///
/// The format is sniffed from the content, not the extension, so a renamed text file
/// fails here while a PNG saved as `.jpg` passes.
pub fn check_decodes(path: &Path) -> anyhow::Result<(u32, u32)> {
    let decoded = ::image::ImageReader::open(path)
        .with_context(|| format!("opening {path:?}"))?
        .with_guessed_format()
        .with_context(|| format!("reading {path:?}"))?
        .decode()
        .with_context(|| format!("decoding {path:?}"))?;
    Ok((decoded.width(), decoded.height()))
}

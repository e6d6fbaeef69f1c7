use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, info, warn};

/// Chart textures keyed by the file name the slides refer to.
pub type Textures = HashMap<&'static str, Texture2D>;

/// Quarter turns needed to display an image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Half,
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    // 1 = Top-left (Normal)
    // 3 = Bottom-right (180 deg)
    // 6 = Top-right (90 deg clockwise)
    // 8 = Bottom-left (90 deg counter-clockwise)
    // Flipped orientations are shown as stored.
    pub fn from_orientation(orientation: u16) -> Self {
        match orientation {
            3 => Rotation::Half,
            6 => Rotation::Clockwise,
            8 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }
}

fn exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no EXIF orientation");
            1
        }
    }
}

/// Load an image, turn it upright according to its EXIF orientation and
/// upload it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> anyhow::Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let rotation = match extension.as_str() {
        "jpg" | "jpeg" | "png" => Rotation::from_orientation(exif_orientation(image_path, &file_bytes)),
        _ => Rotation::None,
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("failed to decode {}: {e}", image_path.display()))?;

    match rotation {
        Rotation::Half => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Rotation::Clockwise => image.rotate_cw(),
        Rotation::CounterClockwise => image.rotate_ccw(),
        Rotation::None => {}
    }
    if rotation != Rotation::None {
        debug!(path = %image_path.display(), ?rotation, "applied EXIF rotation");
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {e}", image_path.display()))?;

    Ok(texture)
}

/// Load every referenced chart from `dir`. Missing or broken files are
/// skipped; the renderer draws a placeholder for them.
pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    dir: &Path,
    files: impl IntoIterator<Item = &'static str>,
) -> Textures {
    let mut textures = Textures::new();
    for file in files {
        if textures.contains_key(file) {
            continue;
        }
        let path = dir.join(file);
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => {
                info!(path = %path.display(), "loaded chart");
                textures.insert(file, texture);
            }
            Err(e) => warn!(error = %e, "chart unavailable, drawing placeholder"),
        }
    }
    textures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_maps_to_rotation() {
        assert_eq!(Rotation::from_orientation(1), Rotation::None);
        assert_eq!(Rotation::from_orientation(3), Rotation::Half);
        assert_eq!(Rotation::from_orientation(6), Rotation::Clockwise);
        assert_eq!(Rotation::from_orientation(8), Rotation::CounterClockwise);
        assert_eq!(Rotation::from_orientation(2), Rotation::None);
    }

    #[test]
    fn missing_exif_defaults_to_upright() {
        assert_eq!(exif_orientation(Path::new("chart.png"), b"not an image"), 1);
    }
}

//! Test fixtures: small in-memory tiles and export files built from them

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use serde_json::{json, Value};

/// A 5x4 tile whose pixels depend on `seed`, so different seeds never match
pub fn sample_tile(seed: u8) -> DynamicImage {
    let img = RgbImage::from_fn(5, 4, |x, y| {
        Rgb([
            seed.wrapping_mul(31).wrapping_add(x as u8 * 40),
            (y as u8) * 60,
            seed,
        ])
    });
    DynamicImage::ImageRgb8(img)
}

pub fn encode_png_base64(img: &DynamicImage) -> String {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    STANDARD.encode(buf.into_inner())
}

/// Record carrying both a raw and a colour-corrected tile
pub fn record(status: i64, uuid: &str, raw_seed: u8, cc_seed: u8) -> Value {
    json!({
        "status": status,
        "uuid": uuid,
        "img64": encode_png_base64(&sample_tile(raw_seed)),
        "img64cc": encode_png_base64(&sample_tile(cc_seed)),
    })
}

/// Write `{"root": {"children": [...]}}` to `<dir>/<stem>.json`
pub fn write_export(dir: &Path, stem: &str, children: Vec<Value>) -> PathBuf {
    let path = dir.join(format!("{}.json", stem));
    let doc = json!({ "root": { "children": children } });
    fs::write(&path, doc.to_string()).unwrap();
    path
}

pub fn read_tile(path: &Path) -> RgbImage {
    image::open(path).unwrap().to_rgb8()
}

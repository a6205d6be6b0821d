// crates/lfsr-cli/src/io/plot.rs
//
// 256-bin bar chart of visited register states, rasterised directly.

use anyhow::Context;
use image::{Rgb, RgbImage};

/// 8 inches at 96 dpi.
pub const PLOT_SIDE_PX: u32 = 8 * 96;

const MARGIN: u32 = 48;
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([0, 0, 0]);
const BAR: Rgb<u8> = Rgb([70, 110, 180]);

pub fn render_histogram(counts: &[u64; 256]) -> RgbImage {
    let side = PLOT_SIDE_PX;
    let mut img = RgbImage::from_pixel(side, side, BACKGROUND);

    let left = MARGIN;
    let right = side - MARGIN;
    let top = MARGIN;
    let bottom = side - MARGIN;
    let plot_w = (right - left) as f64;
    let plot_h = (bottom - top) as f64;

    let max = counts.iter().copied().max().unwrap_or(0);
    if max > 0 {
        for (bin, &c) in counts.iter().enumerate() {
            if c == 0 {
                continue;
            }
            let x0 = left + (bin as f64 * plot_w / 256.0).floor() as u32;
            let x1 = (left + ((bin + 1) as f64 * plot_w / 256.0).floor() as u32).max(x0 + 1);
            let h = ((c as f64 / max as f64) * plot_h).round() as u32;
            let y0 = bottom - h.min(bottom - top);
            for x in x0..x1.min(right) {
                for y in y0..bottom {
                    img.put_pixel(x, y, BAR);
                }
            }
        }
    }

    for x in left..=right {
        img.put_pixel(x, bottom, AXIS);
    }
    for y in top..=bottom {
        img.put_pixel(left, y, AXIS);
    }

    img
}

pub fn save_histogram(path: &str, counts: &[u64; 256]) -> anyhow::Result<()> {
    render_histogram(counts)
        .save(path)
        .with_context(|| format!("write histogram plot: {path}"))
}

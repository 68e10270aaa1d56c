//! Plain text (P3) pixel stream.

use super::render::Image;
use super::vec::Color;
use std::io::{self, Write};

pub const MAX_CHANNEL_VALUE: u32 = 255;

/// Gamma 2 encode, clamp, and quantize a linear color to 8 bits per channel.
pub fn to_rgb8(color: Color) -> [u8; 3] {
    let encode = |c: f64| (256.0 * c.sqrt().clamp(0.0, 0.999)) as u8;
    [encode(color.x()), encode(color.y()), encode(color.z())]
}

/// Header followed by one `r g b` line per pixel, top row first.
pub fn write_ppm<W: Write>(out: &mut W, image: &Image) -> io::Result<()> {
    // Output Format
    // ASCII
    writeln!(out, "P3")?;
    // Dimensions
    writeln!(out, "{} {}", image.width(), image.height())?;
    // Max color
    writeln!(out, "{}", MAX_CHANNEL_VALUE)?;

    for &color in image.pixels() {
        let [r, g, b] = to_rgb8(color);
        writeln!(out, "{} {} {}", r, g, b)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::hit::World;
    use crate::render::{render, RenderSettings};
    use crate::vec::{Point3, Vec3};

    #[test]
    fn gamma_encoding_clamps_and_quantizes() {
        assert_eq!(to_rgb8(Color::zero()), [0, 0, 0]);
        assert_eq!(to_rgb8(Color::new(0.25, 1.0, 4.0)), [128, 255, 255]);
        assert_eq!(to_rgb8(Color::new(-1.0, 0.0, 0.0)), [0, 0, 0]);
    }

    #[test]
    fn writes_header_and_one_line_per_pixel() {
        let camera = Camera::new(
            Point3::zero(),
            Point3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
            90.0,
            1.5,
            0.0,
            1.0,
        )
        .unwrap();
        let settings = RenderSettings {
            image_width: 3,
            image_height: 2,
            samples_per_pixel: 1,
            ..RenderSettings::default()
        };
        let image = render(&camera, &World::new(), &settings).unwrap();

        let mut out = Vec::new();
        write_ppm(&mut out, &image).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(&lines[..3], &["P3", "3 2", "255"]);
        assert_eq!(lines.len(), 3 + 6);
        for (line, &color) in lines[3..].iter().zip(image.pixels()) {
            let channels: Vec<u32> = line
                .split_whitespace()
                .map(|c| c.parse().unwrap())
                .collect();
            let [r, g, b] = to_rgb8(color);
            assert_eq!(channels, vec![r as u32, g as u32, b as u32]);
            assert!(channels.iter().all(|&c| c <= MAX_CHANNEL_VALUE));
        }
    }
}

//! Draw the reference triangle and save it as a bitmap.
//!
//! Run: cargo run --example triangle -- [output.bmp]

use softraster::prelude::*;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "triangle.bmp".to_string());

    let red = Rgba::new(255, 0, 0, 255);
    let tri = Triangle::from_coords(10, 10, 50, 80, 90, 20);

    let mut fb = Framebuffer::new(100, 100, BitDepth::Bgr24)?;
    draw_triangle(&mut fb, &tri, red)?;
    fill_triangle_with_spokes(&mut fb, &tri, red)?;
    fb.save_bmp(&path)?;

    println!("Wrote {}x{} bitmap to {path}", fb.width(), fb.height());
    Ok(())
}

//! Presents a supersampled raster with half-block characters.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use snowfall_raster::Raster;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: char = '▀';

/// Widget mapping `scale × scale` raster blocks onto half cells.
#[derive(Debug)]
pub struct SnowScreen<'a> {
    raster: &'a Raster,
    scale: u32,
    background: [u8; 3],
}

impl<'a> SnowScreen<'a> {
    pub fn new(raster: &'a Raster, scale: u32, background: [u8; 3]) -> Self {
        Self {
            raster,
            scale: scale.max(1),
            background,
        }
    }

    /// Average one block, composited over the background.
    fn block_color(&self, x0: u32, y0: u32) -> Color {
        let mut premul = [0.0f32; 3];
        let mut alpha = 0.0f32;
        for y in y0..y0 + self.scale {
            for x in x0..x0 + self.scale {
                let px = self.raster.pixel(x, y);
                let a = px.a as f32 / 255.0;
                premul[0] += px.r as f32 * a;
                premul[1] += px.g as f32 * a;
                premul[2] += px.b as f32 * a;
                alpha += a;
            }
        }

        let n = (self.scale * self.scale) as f32;
        let alpha = alpha / n;
        let mix = |i: usize| -> u8 {
            let v = premul[i] / n + self.background[i] as f32 * (1.0 - alpha);
            v.round().clamp(0.0, 255.0) as u8
        };
        Color::Rgb(mix(0), mix(1), mix(2))
    }
}

impl Widget for SnowScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let x0 = u32::from(col) * self.scale;
                let top = u32::from(row) * 2 * self.scale;
                let fg = self.block_color(x0, top);
                let bg = self.block_color(x0, top + self.scale);

                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(HALF_BLOCK).set_fg(fg).set_bg(bg);
                }
            }
        }
    }
}

use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::{PointsIter, Rectangle};
use embedded_graphics::{Drawable, Pixel};
use embedded_graphics::draw_target::DrawTarget;

use crate::render::Render;

impl<'a> OriginDimensions for Render<'a> {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

impl<'a> Drawable for Render<'a> {
    type Color = BinaryColor;
    type Output = ();

    /// Draws the bars at the origin, `BinaryColor::On` for bars. Quiet zones
    /// and the label are left to the caller.
    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let row: Vec<BinaryColor> = self.bits()
            .map(|bit| if bit { BinaryColor::On } else { BinaryColor::Off })
            .collect();
        let area = Rectangle::new(Point::zero(), self.size());
        let pixels = area.points()
            .zip(row.iter().copied().cycle())
            .map(|(p, c)| Pixel(p, c));
        target.draw_iter(pixels)
    }
}

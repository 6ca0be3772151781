use image::{
    imageops::{self, FilterType},
    Rgba, RgbaImage,
};
use imageproc::drawing::draw_filled_circle_mut;

/// Logo edge as a fraction of the symbol's shorter side. Keeps the covered area within
/// what error correction level H can recover.
pub const LOGO_SCALE: f32 = 0.15;
/// Extra radius of the white disc behind the logo, in pixels.
pub const LOGO_PADDING: u32 = 5;

// Logo overlay
//------------------------------------------------------------------------------

/// Draws `logo` centred on `symbol` over a white disc.
pub fn overlay_logo(symbol: &mut RgbaImage, logo: &RgbaImage) {
    let (w, h) = symbol.dimensions();
    let logo_size = (w.min(h) as f32 * LOGO_SCALE).round() as u32;
    if logo_size == 0 || logo.width() == 0 || logo.height() == 0 {
        return;
    }

    let center = ((w / 2) as i32, (h / 2) as i32);
    let radius = (logo_size / 2 + LOGO_PADDING) as i32;
    draw_filled_circle_mut(symbol, center, radius, Rgba([255, 255, 255, 255]));

    let resized = imageops::resize(logo, logo_size, logo_size, FilterType::Triangle);
    let x = (w - logo_size) / 2;
    let y = (h - logo_size) / 2;
    imageops::overlay(symbol, &resized, x as i64, y as i64);
}

#[cfg(test)]
mod logo_tests {
    use image::{Rgba, RgbaImage};

    use super::overlay_logo;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn test_logo_is_centred_on_white_disc() {
        let mut symbol = RgbaImage::from_pixel(200, 200, BLACK);
        let logo = RgbaImage::from_pixel(10, 10, RED);
        overlay_logo(&mut symbol, &logo);

        // 30px logo at (85, 85), disc radius 20 around (100, 100)
        assert_eq!(*symbol.get_pixel(100, 100), RED);
        assert_eq!(*symbol.get_pixel(86, 86), RED);
        assert_eq!(*symbol.get_pixel(100, 82), WHITE);
        assert_eq!(*symbol.get_pixel(0, 0), BLACK);
        assert_eq!(*symbol.get_pixel(100, 130), BLACK);
    }

    #[test]
    fn test_tiny_symbol_is_untouched() {
        let mut symbol = RgbaImage::from_pixel(3, 3, BLACK);
        overlay_logo(&mut symbol, &RgbaImage::from_pixel(4, 4, RED));
        assert!(symbol.pixels().all(|p| *p == BLACK));
    }
}

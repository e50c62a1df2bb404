use image::Rgb;
use image::RgbImage;

/// One decoded video frame.
///
/// A frame with no pixels is what a camera reports before its first real
/// image has decoded; everything downstream treats it as no frame at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame(RgbImage);

impl Frame {
    pub fn new(image: RgbImage) -> Self {
        Self(image)
    }
    /// Wraps packed RGB bytes. `None` if the buffer is the wrong size.
    pub fn from_raw(width: u32, height: u32, bytes: Vec<u8>) -> Option<Self> {
        RgbImage::from_raw(width, height, bytes).map(Self)
    }
    /// A frame filled with a single color.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self(RgbImage::from_pixel(width, height, Rgb(rgb)))
    }
    pub fn width(&self) -> u32 {
        self.0.width()
    }
    pub fn height(&self) -> u32 {
        self.0.height()
    }
    pub fn image(&self) -> &RgbImage {
        &self.0
    }
    pub fn is_decodable(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }
    /// Per-channel mean intensity in [0, 1].
    pub fn mean(&self) -> [f32; 3] {
        let n = (self.width() as f64 * self.height() as f64).max(1.0);
        let sums = self.0.pixels().fold([0u64; 3], |mut acc, px| {
            acc[0] += px[0] as u64;
            acc[1] += px[1] as u64;
            acc[2] += px[2] as u64;
            acc
        });
        sums.map(|s| (s as f64 / n / 255.0) as f32)
    }
}

impl From<RgbImage> for Frame {
    fn from(image: RgbImage) -> Self {
        Self::new(image)
    }
}

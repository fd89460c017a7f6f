use super::raw::ChannelMatrix;

/// A single-row, three-channel image of shape `(1, N, 3)`.
///
/// Pixel `i` holds the interleaved `[r, g, b]` of wavelength sample `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralImage {
    pixels: Vec<[f64; 3]>,
}

impl SpectralImage {
    /// Transpose a channel-major 3×N matrix into interleaved pixels.
    pub fn from_channels(rgb: &ChannelMatrix) -> Self {
        let pixels = (0..rgb.len()).map(|i| rgb.column(i)).collect();
        SpectralImage { pixels }
    }

    pub fn shape(&self) -> [usize; 3] {
        [1, self.pixels.len(), 3]
    }

    pub fn width(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels(&self) -> &[[f64; 3]] {
        &self.pixels
    }

    /// Element at `[row, column, channel]`; `row` must be zero.
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<f64> {
        if row != 0 {
            return None;
        }
        self.pixels.get(col).and_then(|p| p.get(channel)).copied()
    }

    /// Nested `[1][N][3]` representation.
    pub fn to_nested(&self) -> Vec<Vec<[f64; 3]>> {
        vec![self.pixels.clone()]
    }
}

/// A 3×N channel-major matrix: one row per channel, one column per sample.
///
/// Holds raw model output (RGB) as well as the intermediate tristimulus values
/// of the scientific model. Values may be negative or exceed one.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMatrix {
    channels: [Vec<f64>; 3],
}

impl ChannelMatrix {
    pub fn zeros(n: usize) -> Self {
        ChannelMatrix {
            channels: [vec![0.0; n], vec![0.0; n], vec![0.0; n]],
        }
    }

    /// All three rows must have the same length.
    pub fn from_channels(channels: [Vec<f64>; 3]) -> Self {
        debug_assert!(channels[0].len() == channels[1].len());
        debug_assert!(channels[0].len() == channels[2].len());
        ChannelMatrix { channels }
    }

    /// Number of samples (columns).
    pub fn len(&self) -> usize {
        self.channels[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column(&self, i: usize) -> [f64; 3] {
        [self.channels[0][i], self.channels[1][i], self.channels[2][i]]
    }

    pub fn set_column(&mut self, i: usize, value: [f64; 3]) {
        for (channel, v) in self.channels.iter_mut().zip(value) {
            channel[i] = v;
        }
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.channels.iter().flat_map(|c| c.iter().copied())
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut f64> + '_ {
        self.channels.iter_mut().flat_map(|c| c.iter_mut())
    }

    /// Global maximum over every channel and sample; `-inf` when empty.
    pub fn max(&self) -> f64 {
        self.values().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Global minimum over every channel and sample; `+inf` when empty.
    pub fn min(&self) -> f64 {
        self.values().fold(f64::INFINITY, f64::min)
    }

    /// Multiply column `i` by `intensities[i] / divisor`.
    pub fn scale_columns(&mut self, intensities: &[f64], divisor: f64) {
        for channel in &mut self.channels {
            for (v, &intensity) in channel.iter_mut().zip(intensities) {
                *v *= intensity / divisor;
            }
        }
    }

    /// Add `offset` to every entry.
    pub fn shift(&mut self, offset: f64) {
        for v in self.values_mut() {
            *v += offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_span_all_channels() {
        let m = ChannelMatrix::from_channels([vec![0.5, -1.0], vec![2.0, 0.0], vec![0.1, 0.2]]);
        assert_eq!(m.max(), 2.0);
        assert_eq!(m.min(), -1.0);
        assert_eq!(m.column(1), [-1.0, 0.0, 0.2]);
    }

    #[test]
    fn columns_scale_by_their_own_intensity() {
        let mut m = ChannelMatrix::from_channels([vec![1.0, 1.0], vec![2.0, 2.0], vec![4.0, 4.0]]);
        m.scale_columns(&[1.0, 0.5], 2.0);
        assert_eq!(m.column(0), [0.5, 1.0, 2.0]);
        assert_eq!(m.column(1), [0.25, 0.5, 1.0]);
    }

    #[test]
    fn empty_matrix_has_no_extrema() {
        let m = ChannelMatrix::zeros(0);
        assert!(m.is_empty());
        assert_eq!(m.max(), f64::NEG_INFINITY);
        assert_eq!(m.min(), f64::INFINITY);
    }
}

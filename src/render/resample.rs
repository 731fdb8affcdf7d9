//! Area-preserving downsampling.
//!
//! Each display column owns a fractional interval of the source sequence
//! and receives the weighted average of the samples overlapping it. The
//! kernel is a normalized box of width N/W, so every sample contributes
//! exactly its overlap with each column and the total signal mass
//! survives the resample even when N/W is not an integer. When W == N
//! the kernel width is 1 and the transform is the identity.

use super::scale::ResolvedWidth;
use super::Sample;

/// Reduce `samples` to one aggregated value per display column.
pub(crate) fn downsample<T: Sample>(samples: &[T], width: ResolvedWidth) -> Vec<f64> {
    let count = samples.len();
    let kernel_width = 1.0 / width.scale;

    (0..width.columns)
        .map(|column| {
            let lower = column as f64 / width.scale;
            let upper = (column + 1) as f64 / width.scale;
            let head = lower as usize;
            let tail = upper as usize;

            // Fractional share of the first overlapped sample, every
            // fully covered sample, then the fractional tail (when it
            // exists). scale <= 1 guarantees head < tail <= count here.
            let mut sum = (1.0 - lower.fract()) * samples[head].as_f64();
            for sample in &samples[head + 1..tail.min(count)] {
                sum += sample.as_f64();
            }
            if tail < count {
                sum += upper.fract() * samples[tail].as_f64();
            }
            sum / kernel_width
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::scale::resolve_width;
    use crate::term::FixedWidth;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn width_for(columns: usize, samples: usize) -> ResolvedWidth {
        resolve_width(columns, samples, false, &FixedWidth(10_000)).unwrap()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{a} != {e} in {actual:?}");
        }
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(21)]
    fn equal_width_is_the_identity(#[case] count: usize) {
        let samples: Vec<f64> = (0..count).map(|i| (i as f64 * 0.7).sin()).collect();
        let columns = downsample(&samples, width_for(count, count));
        assert_eq!(columns, samples);
    }

    #[test]
    fn halving_averages_adjacent_pairs() {
        let samples = [0.0, 2.0, 4.0, 6.0];
        let columns = downsample(&samples, width_for(2, 4));
        assert_close(&columns, &[1.0, 5.0]);
    }

    #[test]
    fn fractional_intervals_weight_the_shared_sample() {
        // Column 0 owns samples [0, 1.5), column 1 owns [1.5, 3): the
        // middle sample is split evenly between them.
        let samples = [3.0, 6.0, 9.0];
        let columns = downsample(&samples, width_for(2, 3));
        assert_close(&columns, &[4.0, 8.0]);
    }

    #[rstest]
    #[case(7, 3)]
    #[case(10, 4)]
    #[case(21, 21)]
    #[case(100, 33)]
    #[case(101, 80)]
    fn total_mass_is_conserved(#[case] count: usize, #[case] columns: usize) {
        let samples: Vec<f64> = (0..count).map(|i| (i as f64 * 0.31).sin() + 2.0).collect();
        let width = width_for(columns, count);
        let binned = downsample(&samples, width);

        let input_mass: f64 = samples.iter().sum();
        let output_mass: f64 = binned.iter().map(|v| v / width.scale).sum();
        assert!(
            (input_mass - output_mass).abs() < 1e-9,
            "{input_mass} != {output_mass}"
        );
    }
}

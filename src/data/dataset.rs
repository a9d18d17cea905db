use burn::data::dataset::Dataset;

use crate::domain::sample::Sample;

/// Retained samples of one parallel load, exposed through Burn's
/// Dataset trait so a DataLoader can index them.
pub struct ParallelDataset {
    samples: Vec<Sample>,
}

impl ParallelDataset {
    pub fn new(samples: Vec<Sample>) -> Self { Self { samples } }

    pub fn sample_count(&self) -> usize { self.samples.len() }

    /// Total (source, target) tokens across all samples
    pub fn token_totals(&self) -> (usize, usize) {
        self.samples.iter().fold((0, 0), |(s, t), sample| {
            (s + sample.source.len(), t + sample.target.len())
        })
    }

    pub fn into_samples(self) -> Vec<Sample> { self.samples }
}

impl Dataset<Sample> for ParallelDataset {
    fn get(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_indexing() {
        let ds = ParallelDataset::new(vec![
            Sample::new(vec![1, 2], vec![3]),
            Sample::new(vec![4], vec![5, 6, 7]),
        ]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.get(1), Some(Sample::new(vec![4], vec![5, 6, 7])));
        assert_eq!(ds.get(2), None);
        assert_eq!(ds.token_totals(), (3, 4));
    }
}

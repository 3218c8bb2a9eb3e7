
use crate::distance_measure::DistanceMeasure;
use crate::interface::{Metric, Parameters};
use crate::utils::LibData;
use anyhow::Result;
use log::debug;
use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;
use std::marker::PhantomData;

/// Distance matrices over collections of series, one rayon task per pair.
pub struct PairwiseDistance<A: LibData, D: DistanceMeasure<A>> {
    pub measure: D,
    pub n_threads: Option<usize>,
    data_type: PhantomData<A>,
}

impl<A: LibData, D: DistanceMeasure<A>> PairwiseDistance<A, D> {
    pub fn new(measure: D) -> Self {
        Self {
            measure,
            n_threads: None,
            data_type: PhantomData::default(),
        }
    }

    pub fn new_with_threads(measure: D, n_threads: usize) -> Self {
        Self {
            n_threads: Some(n_threads),
            ..Self::new(measure)
        }
    }

    /// Symmetric `k × k` matrix of distances between all series.
    ///
    /// Only pairs `i <= j` are computed. The diagonal is computed as well,
    /// since not every measure is zero on identical series.
    pub fn pairwise(&self, series: &[ArrayView2<A>]) -> Result<Array2<A>> {
        let k = series.len();
        debug!(
            "Computing {} pairwise {} distances on {:?} threads.",
            k * (k + 1) / 2,
            self.measure.name(),
            self.n_threads
        );

        let pairs: Vec<(usize, usize)> = (0..k).flat_map(|i| (i..k).map(move |j| (i, j))).collect();
        let distances = self.run(&pairs, series, series)?;

        let mut matrix = Array2::zeros((k, k));
        for ((i, j), distance) in pairs.into_iter().zip(distances) {
            matrix[[i, j]] = distance;
            matrix[[j, i]] = distance;
        }
        Ok(matrix)
    }

    /// `k × l` matrix of distances from every series in `series_a` to every series in `series_b`.
    pub fn cross(&self, series_a: &[ArrayView2<A>], series_b: &[ArrayView2<A>]) -> Result<Array2<A>> {
        let (k, l) = (series_a.len(), series_b.len());
        debug!(
            "Computing {}x{} {} distances on {:?} threads.",
            k,
            l,
            self.measure.name(),
            self.n_threads
        );

        let pairs: Vec<(usize, usize)> = (0..k).flat_map(|i| (0..l).map(move |j| (i, j))).collect();
        let distances = self.run(&pairs, series_a, series_b)?;

        Ok(Array2::from_shape_vec((k, l), distances)?)
    }

    fn run(
        &self,
        pairs: &[(usize, usize)],
        series_a: &[ArrayView2<A>],
        series_b: &[ArrayView2<A>],
    ) -> Result<Vec<A>> {
        let compute = || -> Result<Vec<A>> {
            let distances = pairs
                .par_iter()
                .map(|(i, j)| self.measure.distance(series_a[*i], series_b[*j]))
                .collect::<std::result::Result<Vec<A>, _>>()?;
            Ok(distances)
        };

        match self.n_threads {
            Some(n_threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(n_threads)
                .build()?
                .install(compute),
            None => compute(),
        }
    }
}

impl<A: LibData> PairwiseDistance<A, Metric<A>> {
    pub fn from_parameters(parameters: &Parameters<A>) -> Result<Self> {
        Ok(Self {
            n_threads: parameters.n_threads,
            ..Self::new(parameters.metric()?)
        })
    }
}

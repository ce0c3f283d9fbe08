//! PageRank as the visit frequencies of a long random-surfer walk.

use super::{transition, PageRank, PageRankResult, DAMPING, SAMPLES};
use crate::{
    common::{check_not_empty, start_weights, Ranks},
    error::{check_damping, Error},
    graph::{Graph, PageId},
};
use rand::{
    distr::{weighted::WeightedIndex, Distribution as _},
    Rng,
};
use std::{cell::RefCell, collections::HashMap};

/// Randomness consumed by the walk. Any [`rand::Rng`] is a source.
pub trait RandomSource {
    /// An index drawn uniformly from `0..n`.
    fn uniform_page(&mut self, n: usize) -> usize;

    /// An index drawn with probability proportional to `weights[i]`.
    fn weighted_page(&mut self, weights: &[f64]) -> crate::Result<usize>;
}

impl<R: Rng> RandomSource for R {
    fn uniform_page(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }

    fn weighted_page(&mut self, weights: &[f64]) -> crate::Result<usize> {
        let dist = WeightedIndex::new(weights)
            .map_err(|e| Error::InvalidArgument(format!("weights {weights:?}: {e}")))?;
        Ok(dist.sample(self))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            samples: SAMPLES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Ranks,
    /// Recorded positions per page. They add up to `samples`.
    pub visits: HashMap<String, usize, ahash::RandomState>,
    pub samples: usize,
}

pub struct SampledPageRank<'a, R> {
    graph: &'a Graph,
    damping: f64,
    samples: usize,
    rng: RefCell<R>,
}

impl<'a, R: RandomSource> SampledPageRank<'a, R> {
    pub fn new(g: &'a Graph, config: &Config, rng: R) -> crate::Result<Self> {
        check_damping(config.damping)?;
        let samples = config.samples;
        if samples < 1 {
            return Err(Error::InvalidArgument(format!("samples={samples}")));
        }
        check_not_empty(g)?;
        Ok(Self {
            graph: g,
            damping: config.damping,
            samples,
            rng: RefCell::new(rng),
        })
    }

    pub fn into_rng(self) -> R {
        self.rng.into_inner()
    }

    /// Walks from a page chosen uniformly at random.
    pub fn run(&self) -> crate::Result<self::Result> {
        let first = self.rng.borrow_mut().uniform_page(self.graph.len());
        self.walk(PageId::new(first))
    }

    fn walk(&self, first: PageId) -> crate::Result<self::Result> {
        let mut rng = self.rng.borrow_mut();
        let mut visits = vec![0usize; self.graph.len()];
        let mut u = first;
        visits[u.index()] += 1;
        for _ in 1..self.samples {
            let weights = transition::weights(self.graph, u, self.damping);
            u = PageId::new(rng.weighted_page(&weights)?);
            visits[u.index()] += 1;
        }

        let n = self.samples as f64;
        let page_rank = self
            .graph
            .pages()
            .map(|v| (self.graph.label(v).to_owned(), visits[v.index()] as f64 / n))
            .collect();
        let visits = self
            .graph
            .pages()
            .map(|v| (self.graph.label(v).to_owned(), visits[v.index()]))
            .collect();
        tracing::debug!(
            pages = self.graph.len(),
            samples = self.samples,
            first = self.graph.label(first),
            "sampled page rank"
        );
        Ok(self::Result {
            page_rank,
            visits,
            samples: self.samples,
        })
    }
}

impl<R: RandomSource> PageRank for SampledPageRank<'_, R> {
    type Result = self::Result;

    /// The walk's first page is drawn from `start`.
    fn calc(&self, start: &Ranks) -> crate::Result<Self::Result> {
        let weights = start_weights(self.graph, start)?;
        let first = self.rng.borrow_mut().weighted_page(&weights)?;
        self.walk(PageId::new(first))
    }
}

/// Estimates PageRank from `samples` positions of a random walk that starts
/// on a uniformly chosen page.
///
/// Each rank is `visits / samples`. The visit counts add up to `samples`
/// exactly, but the float ranks may sum to 1.0 only up to rounding, so
/// compare their total with a tolerance rather than `==`.
pub fn sample_pagerank<R: RandomSource>(
    graph: &Graph,
    damping: f64,
    samples: usize,
    rng: R,
) -> crate::Result<Ranks> {
    let cfg = Config { damping, samples };
    let spr = SampledPageRank::new(graph, &cfg, rng)?;
    spr.run().map(|res| res.page_rank)
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &Ranks {
        &self.page_rank
    }

    fn debug<'a>(&'a self, graph: &'a Graph) -> impl std::fmt::Debug + 'a {
        ResultDebug {
            graph,
            result: self,
        }
    }
}

pub struct ResultDebug<'a> {
    graph: &'a Graph,
    result: &'a self::Result,
}

impl std::fmt::Debug for ResultDebug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.labels() {
            let p = self.result.page_rank.get(v).copied().unwrap_or_default();
            let n = self.result.visits.get(v).copied().unwrap_or_default();
            writeln!(f, "{v}: {p:?}, {n}/{}", self.result.samples)?;
        }
        Ok(())
    }
}

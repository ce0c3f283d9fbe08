use super::{PageRank, PageRankResult, DAMPING, EPSILON, MAX_ITERATIONS};
use crate::{
    common::{check_not_empty, start_weights, to_ranks, uniform, Ranks},
    error::{check_damping, Error},
    graph::{Graph, PageId},
};

/// Solves `PR(p) = (1 - d) / N + d * Σ PR(i) / L(i)` by Jacobi iteration,
/// where the sum runs over the pages `i` linking to `p` and a dead end counts
/// as linking to every page.
pub struct IteratedPageRank<'a> {
    graph: &'a Graph,
    damping: f64,
    epsilon: f64,
    max_iterations: usize,
    transitions: Vec<(PageId, PageId, f64)>,
    dead_ends: Vec<PageId>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Converged once no page moves by this much in one iteration.
    pub epsilon: f64,
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            epsilon: EPSILON,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Ranks,
    /// Per-page change made by the last iteration, before normalization.
    pub delta: Ranks,
    pub iterations: usize,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(g: &'a Graph, config: &Config) -> crate::Result<Self> {
        let damping = config.damping;
        check_damping(damping)?;
        let epsilon = config.epsilon;
        if epsilon.is_nan() || epsilon <= 0.0 {
            return Err(Error::InvalidArgument(format!("epsilon={epsilon}")));
        }
        if config.max_iterations == 0 {
            return Err(Error::InvalidArgument("max_iterations=0".to_owned()));
        }
        check_not_empty(g)?;
        let transitions = {
            let mut transitions = Vec::with_capacity(g.edge_count());
            for u in g.pages() {
                let links = g.links(u);
                let unit = 1.0 / (links.len() as f64);
                for v in links.iter() {
                    transitions.push((u, *v, unit));
                }
            }
            transitions
        };
        Ok(Self {
            graph: g,
            damping,
            epsilon,
            max_iterations: config.max_iterations,
            transitions,
            dead_ends: g.dead_ends().collect(),
        })
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Result;

    fn calc(&self, start: &Ranks) -> crate::Result<Self::Result> {
        let damping = self.damping;
        let n = self.graph.len() as f64;
        let mut p = start_weights(self.graph, start)?;
        let mut r = vec![0.0; p.len()];
        let mut delta = vec![0.0; p.len()];
        let mut max_delta = f64::INFINITY;
        for iteration in 1..=self.max_iterations {
            let teleport = (1.0 - damping) / n;
            // A dead end spreads its rank evenly over all pages.
            let dangling: f64 = self.dead_ends.iter().map(|u| p[u.index()]).sum();
            r.fill(teleport + damping * dangling / n);
            for (u, v, w) in self.transitions.iter() {
                r[v.index()] += damping * p[u.index()] * w;
            }

            max_delta = 0.0;
            for (d, (a, b)) in delta.iter_mut().zip(p.iter().zip(r.iter())) {
                *d = b - a;
                max_delta = f64::max(max_delta, d.abs());
            }
            tracing::trace!(iteration, max_delta, "page rank iteration");

            if delta.iter().all(|d| d.abs() < self.epsilon) {
                let total: f64 = r.iter().sum();
                if total > 0.0 {
                    r.iter_mut().for_each(|x| *x /= total);
                }
                tracing::debug!(
                    pages = self.graph.len(),
                    iterations = iteration,
                    max_delta,
                    "page rank converged"
                );
                return Ok(Self::Result {
                    page_rank: to_ranks(self.graph, &r),
                    delta: to_ranks(self.graph, &delta),
                    iterations: iteration,
                });
            }

            std::mem::swap(&mut p, &mut r);
        }
        Err(Error::NonConvergence {
            iterations: self.max_iterations,
            delta: max_delta,
        })
    }
}

/// Iterates from the uniform distribution until no page changes by
/// [`EPSILON`] or more, giving up after [`MAX_ITERATIONS`].
pub fn iterate_pagerank(graph: &Graph, damping: f64) -> crate::Result<Ranks> {
    let cfg = Config {
        damping,
        ..Config::default()
    };
    let ipr = IteratedPageRank::new(graph, &cfg)?;
    ipr.calc(&uniform(graph)).map(|res| res.page_rank)
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
            let d = self.result.delta.get(v).copied().unwrap_or_default();
            writeln!(f, "{v}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}

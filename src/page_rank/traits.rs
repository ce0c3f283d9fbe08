use crate::{common::Ranks, graph::Graph};

pub trait PageRank {
    type Result: PageRankResult;

    /// Runs the estimator from `start`, a distribution over page labels.
    fn calc(&self, start: &Ranks) -> crate::Result<Self::Result>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &Ranks;
    fn debug<'a>(&'a self, graph: &'a Graph) -> impl std::fmt::Debug + 'a;
}

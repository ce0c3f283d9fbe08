//! Where the random surfer goes next.
//!
//! With probability `damping` the surfer follows one of the current page's
//! links, chosen uniformly; otherwise it jumps to any page of the graph. A
//! dead end is treated as linking to every page, so leaving it is uniform.

use crate::{
    error::{check_damping, Error},
    graph::{Graph, PageId},
};

/// A probability distribution over every page of a graph.
#[derive(Debug, Clone)]
pub struct Distribution<'a> {
    graph: &'a Graph,
    weights: Vec<f64>,
}

impl<'a> Distribution<'a> {
    pub fn get(&self, page: &str) -> Option<f64> {
        self.graph.page_id(page).map(|v| self.weights[v.index()])
    }

    /// Probabilities in page-id order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        let graph = self.graph;
        graph.pages().map(move |v| (graph.label(v), self.weights[v.index()]))
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }
}

pub fn transition<'a>(
    graph: &'a Graph,
    page: &str,
    damping: f64,
) -> crate::Result<Distribution<'a>> {
    let Some(u) = graph.page_id(page) else {
        return Err(Error::InvalidArgument(format!("unknown page {page:?}")));
    };
    transition_by_id(graph, u, damping)
}

pub fn transition_by_id(
    graph: &Graph,
    page: PageId,
    damping: f64,
) -> crate::Result<Distribution<'_>> {
    check_damping(damping)?;
    let n = graph.len();
    if page.index() >= n {
        return Err(Error::InvalidArgument(format!("{page:?} out of {n} pages")));
    }
    Ok(Distribution {
        graph,
        weights: weights(graph, page, damping),
    })
}

/// Unchecked form of [`transition_by_id`] for callers that validated already.
pub(crate) fn weights(graph: &Graph, page: PageId, damping: f64) -> Vec<f64> {
    let n = graph.len() as f64;
    if graph.is_dead_end(page) {
        return vec![1.0 / n; graph.len()];
    }
    let mut res = vec![(1.0 - damping) / n; graph.len()];
    let unit = damping / graph.out_degree(page) as f64;
    for v in graph.links(page).iter() {
        res[v.index()] += unit;
    }
    res
}

use crate::{
    error::{Error, Result},
    graph::Graph,
};
use std::{cmp::Ordering, collections::HashMap, hash::Hash};

/// PageRank values keyed by page label.
pub type Ranks = HashMap<String, f64, ahash::RandomState>;

pub fn norm_1<K: Ord + Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

/// Largest per-page absolute difference. Pages missing on one side count as 0.
pub fn max_abs_diff(a: &Ranks, b: &Ranks) -> f64 {
    a.keys()
        .chain(b.keys())
        .map(|k| {
            let x = a.get(k).copied().unwrap_or(0.0);
            let y = b.get(k).copied().unwrap_or(0.0);
            (x - y).abs()
        })
        .fold(0.0, f64::max)
}

/// Pages sorted by descending rank, ties broken by label.
pub fn ranked(ranks: &Ranks) -> Vec<(&str, f64)> {
    let mut res: Vec<_> = ranks.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    res.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    res
}

/// The uniform distribution `1/N` over every page of `graph`.
pub fn uniform(graph: &Graph) -> Ranks {
    let n = graph.len() as f64;
    graph.labels().map(|p| (p.to_owned(), 1.0 / n)).collect()
}

/// Lays `start` out in page-id order, checking it is a distribution over `graph`.
pub(crate) fn start_weights(graph: &Graph, start: &Ranks) -> Result<Vec<f64>> {
    let mut p = vec![0.0; graph.len()];
    for (page, w) in start.iter() {
        let Some(v) = graph.page_id(page) else {
            return Err(Error::InvalidArgument(format!(
                "start distribution names unknown page {page:?}"
            )));
        };
        if w.is_nan() || *w < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "start weight of {page:?} is {w}"
            )));
        }
        p[v.index()] = *w;
    }
    let p_sum: f64 = p.iter().sum();
    if (p_sum - 1.0).abs() >= 1e-7 {
        return Err(Error::InvalidArgument(format!("p_sum={p_sum}")));
    }
    Ok(p)
}

/// Pairs per-page values in page-id order with their labels.
pub(crate) fn to_ranks(graph: &Graph, values: &[f64]) -> Ranks {
    graph
        .pages()
        .map(|v| (graph.label(v).to_owned(), values[v.index()]))
        .collect()
}

pub(crate) fn check_not_empty(graph: &Graph) -> Result<()> {
    if graph.is_empty() {
        Err(Error::InvalidArgument("graph has no pages".to_owned()))
    } else {
        Ok(())
    }
}

//! The corpus as a directed graph of pages and their outgoing links.

use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};

/// Dense index of a page inside a [`Graph`].
///
/// Ids follow the sorted order of page labels, so `PageId(0)` is the
/// lexicographically smallest label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(usize);

impl PageId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// What to do with a link whose target is not a page of the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkPolicy {
    /// Fail with [`Error::InvalidCorpus`] naming the unknown target.
    #[default]
    Reject,
    /// Silently drop the link.
    Drop,
}

/// An immutable directed graph over labelled pages.
///
/// No page links to itself, and every link set is duplicate-free. A page
/// without outgoing links is kept with an empty link set.
#[derive(Debug, Clone)]
pub struct Graph {
    labels: Vec<String>,
    index: HashMap<String, PageId, ahash::RandomState>,
    links: Vec<Vec<PageId>>,
}

impl Graph {
    /// Builds a graph from `(page, links)` pairs, rejecting links to unknown pages.
    pub fn new<I, K, L, S>(corpus: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_policy(corpus, LinkPolicy::Reject)
    }

    pub fn with_policy<I, K, L, S>(corpus: I, policy: LinkPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw: Vec<(String, Vec<String>)> = corpus
            .into_iter()
            .map(|(page, links)| {
                let links = links.into_iter().map(|l| l.as_ref().to_owned()).collect();
                (page.into(), links)
            })
            .collect();
        raw.sort_by(|a, b| a.0.cmp(&b.0));

        let mut index = HashMap::with_hasher(ahash::RandomState::new());
        for (i, (page, _)) in raw.iter().enumerate() {
            if index.insert(page.clone(), PageId(i)).is_some() {
                return Err(Error::InvalidCorpus(format!("duplicate page {page:?}")));
            }
        }

        let mut links = Vec::with_capacity(raw.len());
        let mut dropped = 0usize;
        for (page, targets) in raw.iter() {
            let mut out = Vec::with_capacity(targets.len());
            for target in targets.iter() {
                if target == page {
                    continue;
                }
                match (index.get(target.as_str()), policy) {
                    (Some(v), _) => out.push(*v),
                    (None, LinkPolicy::Drop) => {
                        tracing::debug!(
                            page = %page,
                            target = %target,
                            "dropping link to unknown page"
                        );
                        dropped += 1;
                    }
                    (None, LinkPolicy::Reject) => {
                        return Err(Error::InvalidCorpus(format!(
                            "page {page:?} links to unknown page {target:?}"
                        )));
                    }
                }
            }
            out.sort();
            out.dedup();
            links.push(out);
        }

        let labels: Vec<String> = raw.into_iter().map(|(page, _)| page).collect();
        let graph = Self {
            labels,
            index,
            links,
        };
        tracing::debug!(
            pages = graph.len(),
            links = graph.edge_count(),
            dropped,
            "built page graph"
        );
        Ok(graph)
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
        (0..self.labels.len()).map(PageId)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    pub fn page_id(&self, label: &str) -> Option<PageId> {
        self.index.get(label).copied()
    }

    /// Label of `page`. Panics if `page` was not issued by this graph.
    pub fn label(&self, page: PageId) -> &str {
        &self.labels[page.0]
    }

    /// Outgoing links of `page`, sorted by id. Panics if `page` was not issued
    /// by this graph.
    pub fn links(&self, page: PageId) -> &[PageId] {
        &self.links[page.0]
    }

    /// Panics if `page` was not issued by this graph.
    pub fn out_degree(&self, page: PageId) -> usize {
        self.links[page.0].len()
    }

    /// Panics if `page` was not issued by this graph.
    pub fn is_dead_end(&self, page: PageId) -> bool {
        self.links[page.0].is_empty()
    }

    pub fn dead_ends(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages().filter(|p| self.is_dead_end(*p))
    }

    pub fn edge_count(&self) -> usize {
        self.links.iter().map(Vec::len).sum()
    }

    /// Label set of the pages `page` links to.
    pub fn link_labels(&self, page: PageId) -> HashSet<&str, ahash::RandomState> {
        self.links(page).iter().map(|v| self.label(*v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::RandomCorpus;
    use quickcheck_macros::quickcheck;

    #[test]
    fn self_links_and_duplicates() {
        let g = Graph::new([("a", vec!["a", "b", "b"]), ("b", vec!["a", "b"])]).unwrap();
        let a = g.page_id("a").unwrap();
        let b = g.page_id("b").unwrap();
        assert_eq!(g.links(a), &[b]);
        assert_eq!(g.links(b), &[a]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    #[should_panic]
    fn foreign_page_id_panics() {
        let small = Graph::new([("a", Vec::<&str>::new())]).unwrap();
        let big = Graph::new([("a", vec!["b"]), ("b", vec![]), ("c", vec![])]).unwrap();
        let c = big.page_id("c").unwrap();
        let _ = small.links(c);
    }

    #[test]
    fn dead_end_is_kept() {
        let g = Graph::new([("a", vec!["a"]), ("b", vec!["a"])]).unwrap();
        assert_eq!(g.len(), 2);
        let a = g.page_id("a").unwrap();
        assert!(g.is_dead_end(a));
        assert_eq!(g.dead_ends().collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn pages_are_sorted() {
        let g = Graph::new([("c", vec![]), ("a", vec!["c"]), ("b", vec!["a"])]).unwrap();
        let labels: Vec<_> = g.labels().collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
        assert_eq!(g.label(PageId(2)), "c");
    }

    #[test]
    fn unknown_target_rejected() {
        let err = Graph::new([("a", vec!["b", "x"]), ("b", vec![])]).unwrap_err();
        match err {
            Error::InvalidCorpus(msg) => assert!(msg.contains("\"x\""), "{msg}"),
            e => panic!("{e:?}"),
        }
    }

    #[test]
    fn unknown_target_dropped() {
        let g = Graph::with_policy(
            [("a", vec!["b", "x"]), ("b", vec!["y"])],
            LinkPolicy::Drop,
        )
        .unwrap();
        let a = g.page_id("a").unwrap();
        let b = g.page_id("b").unwrap();
        assert_eq!(g.links(a), &[b]);
        assert!(g.is_dead_end(b));
    }

    #[test]
    fn duplicate_page_rejected() {
        let err = Graph::new([("a", vec!["b"]), ("b", vec![]), ("a", vec![])]).unwrap_err();
        assert!(matches!(err, Error::InvalidCorpus(_)), "{err:?}");
    }

    #[test]
    fn empty_corpus() {
        let g = Graph::new(Vec::<(String, Vec<String>)>::new()).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[quickcheck]
    fn links_are_clean(c: RandomCorpus) {
        let g = c.graph();
        assert_eq!(g.len(), c.pages.len());
        for u in g.pages() {
            let links = g.links(u);
            assert!(!links.contains(&u));
            assert!(links.windows(2).all(|w| w[0] < w[1]), "{links:?}");
            assert_eq!(g.link_labels(u).len(), links.len());
        }
    }
}

use crate::graph::Graph;
use quickcheck::Arbitrary;

/// `{A: {B}, B: {A, C}, C: {A}}`
pub fn three_pages() -> Graph {
    Graph::new([("A", vec!["B"]), ("B", vec!["A", "C"]), ("C", vec!["A"])]).unwrap()
}

/// A 4-cycle `A -> B -> C -> D -> A` with the cross link `D -> C`.
pub fn cycle_with_cross_link() -> Graph {
    Graph::new([
        ("A", vec!["B"]),
        ("B", vec!["C"]),
        ("C", vec!["D"]),
        ("D", vec!["A", "C"]),
    ])
    .unwrap()
}

/// `{A: {B}, B: {}, C: {A}}`
pub fn with_dead_end() -> Graph {
    Graph::new([("A", vec!["B"]), ("B", vec![]), ("C", vec!["A"])]).unwrap()
}

pub fn single_page() -> Graph {
    Graph::new([("only", Vec::<&str>::new())]).unwrap()
}

/// A non-empty corpus of at most 10 pages. Links are random and may include
/// self links and repeated targets.
#[derive(Debug, Clone)]
pub struct RandomCorpus {
    pub pages: Vec<(String, Vec<String>)>,
}

impl RandomCorpus {
    pub fn graph(&self) -> Graph {
        Graph::new(self.pages.iter().map(|(p, ls)| (p.clone(), ls.iter()))).unwrap()
    }
}

impl Arbitrary for RandomCorpus {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const N: usize = 10;

        let n: usize = usize::arbitrary(g) % N + 1;
        let labels: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();
        let pages = labels
            .iter()
            .map(|page| {
                let m = usize::arbitrary(g) % (n + 1);
                let links = (0..m)
                    .map(|_| labels[usize::arbitrary(g) % n].clone())
                    .collect();
                (page.clone(), links)
            })
            .collect();
        Self { pages }
    }
}

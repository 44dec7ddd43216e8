//! Random demo graphs.
//!
//! Vertices are inserted before any edges so isolated vertices occur and
//! empty neighbour menus stay reachable. A seeded `SmallRng` makes demo
//! sessions reproducible.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::graph::store::GraphStore;

const LABEL_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Parameters for a generated demo graph.
#[derive(Debug, Clone, Copy)]
pub struct DemoConfig {
    pub vertices: usize,
    /// Edge draws, not a guaranteed count: duplicate picks collapse in the
    /// store.
    pub edges: usize,
    pub min_label: usize,
    pub max_label: usize,
    pub seed: Option<u64>,
}

/// Build a random directed graph from `config`.
pub fn generate(config: DemoConfig) -> GraphStore {
    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut store = GraphStore::new();
    for _ in 0..config.vertices {
        store.add_vertex(random_label(&mut rng, config.min_label, config.max_label));
    }
    if store.is_empty() {
        return store;
    }

    let labels: Vec<String> = store.labels().map(str::to_string).collect();
    for _ in 0..config.edges {
        let from = &labels[rng.random_range(0..labels.len())];
        let to = &labels[rng.random_range(0..labels.len())];
        store.add_edge(from.clone(), to.clone());
    }
    store
}

fn random_label(rng: &mut SmallRng, min_len: usize, max_len: usize) -> String {
    let len = rng.random_range(min_len..=max_len);
    (0..len)
        .map(|_| LABEL_CHARSET[rng.random_range(0..LABEL_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> DemoConfig {
        DemoConfig {
            vertices: 5,
            edges: 15,
            min_label: 10,
            max_label: 14,
            seed: Some(seed),
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_graph() {
        assert_eq!(
            generate(config(7)),
            generate(config(7)),
            "a fixed seed must give a reproducible graph"
        );
    }

    #[test]
    fn labels_respect_the_length_bounds() {
        let store = generate(config(21));
        for label in store.labels() {
            let len = label.chars().count();
            assert!(
                (10..=14).contains(&len),
                "label {label:?} has out-of-range length {len}"
            );
            assert!(
                label.chars().all(|c| c.is_ascii_alphanumeric()),
                "label {label:?} should be alphanumeric"
            );
        }
    }

    #[test]
    fn vertex_count_matches_the_request() {
        let store = generate(config(3));
        assert_eq!(store.labels().count(), 5);
    }

    #[test]
    fn edges_connect_known_vertices() {
        let store = generate(config(9));
        let labels: Vec<&str> = store.labels().collect();
        for label in &labels {
            for neighbour in store.neighbours_of(label) {
                assert!(
                    labels.contains(&neighbour.as_str()),
                    "edge target {neighbour:?} must be a generated vertex"
                );
            }
        }
    }

    #[test]
    fn zero_vertices_gives_an_empty_store() {
        let store = generate(DemoConfig {
            vertices: 0,
            edges: 10,
            min_label: 4,
            max_label: 8,
            seed: Some(1),
        });
        assert!(store.is_empty());
    }
}

/// A vertex: a label plus its outgoing edges in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Vertex {
    label: String,
    out: Vec<String>,
}

/// The directed graph: an ordered collection of string-labeled vertices.
///
/// Order is insertion order and is exactly what the browser displays, so it
/// is preserved across mutations. Lookup is linear; vertex counts here are
/// small.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GraphStore {
    vertices: Vec<Vertex>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, label: &str) -> Option<usize> {
        self.vertices.iter().position(|v| v.label == label)
    }

    fn ensure(&mut self, label: String) -> usize {
        match self.find(&label) {
            Some(idx) => idx,
            None => {
                self.vertices.push(Vertex {
                    label,
                    out: Vec::new(),
                });
                self.vertices.len() - 1
            }
        }
    }

    /// Check whether a label is present in the graph.
    pub fn contains(&self, label: &str) -> bool {
        self.find(label).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertex labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(|v| v.label.as_str())
    }

    /// The first vertex in insertion order; browsing sessions start here.
    pub fn begin(&self) -> Option<&str> {
        self.vertices.first().map(|v| v.label.as_str())
    }

    /// Add a vertex. Already-present labels are left untouched.
    pub fn add_vertex(&mut self, label: impl Into<String>) {
        self.ensure(label.into());
    }

    /// Add the directed edge `from -> to`, inserting missing endpoints.
    ///
    /// One edge per ordered pair: duplicates collapse. Self-loops are
    /// allowed.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let to = to.into();
        let idx = self.ensure(from.into());
        self.ensure(to.clone());
        let out = &mut self.vertices[idx].out;
        if !out.contains(&to) {
            out.push(to);
        }
    }

    /// Outgoing neighbours of `label` in insertion order. Absent vertices
    /// have none.
    pub fn neighbours_of(&self, label: &str) -> &[String] {
        match self.find(label) {
            Some(idx) => &self.vertices[idx].out,
            None => &[],
        }
    }

    /// Remove a vertex and every edge touching it, inbound included.
    /// Removing an absent vertex is a no-op.
    pub fn remove_vertex(&mut self, label: &str) {
        self.vertices.retain(|v| v.label != label);
        for vertex in &mut self.vertices {
            vertex.out.retain(|target| target != label);
        }
    }

    /// Remove the directed edge `from -> to` if present. The reverse edge
    /// and both endpoints stay.
    pub fn remove_edge(&mut self, from: &str, to: &str) {
        if let Some(idx) = self.find(from) {
            self.vertices[idx].out.retain(|target| target != to);
        }
    }
}

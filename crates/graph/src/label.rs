use crate::graph::{Graph, VertexId};
use std::rc::Rc;

/// Caller-supplied mapping from vertex id to display text.
pub type LabelProvider = Rc<dyn Fn(VertexId) -> String>;

impl Graph {
    pub fn set_label_provider(&mut self, provider: impl Fn(VertexId) -> String + 'static) {
        self.labels = Some(Rc::new(provider));
    }

    pub fn clear_label_provider(&mut self) {
        self.labels = None;
    }

    /// Text for `id`: the provider's answer, or the id itself.
    pub fn label(&self, id: VertexId) -> String {
        match &self.labels {
            Some(provider) => provider(id),
            None => id.to_string(),
        }
    }

    pub fn labels(&self, ids: &[VertexId]) -> Vec<String> {
        ids.iter().map(|id| self.label(*id)).collect()
    }

    /// One line per vertex: `label -> (neighbor,weight) ...`.
    pub fn describe(&self) -> String {
        (0..self.vertex_count())
            .map(|index| {
                let mut line = format!("{} ->", self.label(self.id(index)));
                for entry in self.adjacent(index) {
                    let neighbor = self.label(self.id(entry.first));
                    line.push_str(&format!(" ({neighbor},{})", entry.second));
                }
                line.push('\n');
                line
            })
            .collect()
    }
}

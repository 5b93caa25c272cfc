//! Composable `Layout` wrappers (`spec.md` §9's "composite layout" re-architecture note; ported
//! from `original_source/layout/layout.go`'s `CompositeLayout`/`ScalerLayout`).

use crate::config::Config;
use crate::error::Error;
use crate::geom::{LayoutGraph, Point};
use crate::pipeline::Layout;
use graph::{Graph, NodeId};

/// Applies a sequence of [`Layout`]s in declaration order, each one free to treat the previous
/// stage's output as its starting point (`spec.md` §9: "model as a pipeline of boxed layout
/// operations owned by the pipeline struct, applied in declaration order").
#[derive(Default)]
pub struct CompositeLayout {
    stages: Vec<Box<dyn Layout>>,
}

impl CompositeLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, stage: Box<dyn Layout>) -> Self {
        self.stages.push(stage);
        self
    }
}

impl Layout for CompositeLayout {
    fn layout(&self, g: &Graph, config: &Config, lg: &mut LayoutGraph) -> Result<(), Error> {
        for stage in &self.stages {
            stage.layout(g, config, lg)?;
        }
        Ok(())
    }
}

/// Uniformly scales an already-produced layout by a constant factor (`spec.md` §6's `scale`
/// config knob, exposed here as a standalone stage so a [`CompositeLayout`] can apply it after
/// any other layout rather than only at the tail of [`crate::pipeline::Pipeline`]).
#[derive(Debug, Clone, Copy)]
pub struct ScalerLayout {
    pub scale: f64,
}

impl Layout for ScalerLayout {
    fn layout(&self, _g: &Graph, _config: &Config, lg: &mut LayoutGraph) -> Result<(), Error> {
        let ids: Vec<NodeId> = lg.nodes().map(|(id, _)| id).collect();
        for id in ids {
            if let Some(b) = lg.node_mut(id) {
                b.x = (b.x as f64 * self.scale).round() as i64;
                b.y = (b.y as f64 * self.scale).round() as i64;
            }
        }
        let edges: Vec<(NodeId, NodeId)> = lg.edges().map(|(k, _)| k).collect();
        for (from, to) in edges {
            if let Some(path) = lg.edge_mut(from, to) {
                for p in path.iter_mut() {
                    *p = Point::new(
                        (p.x as f64 * self.scale).round() as i64,
                        (p.y as f64 * self.scale).round() as i64,
                    );
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;
    use graph::Attrs;

    #[test]
    fn scaler_doubles_every_coordinate() {
        let mut g = Graph::new();
        g.add_edge("a", "b", Attrs::new());
        let mut lg = LayoutGraph::seed(&g, |_| (40, 20));
        Pipeline::new().layout(&g, &Config::default(), &mut lg).unwrap();

        let before = lg.node(g.node_id("b").unwrap()).unwrap();
        ScalerLayout { scale: 2.0 }
            .layout(&g, &Config::default(), &mut lg)
            .unwrap();
        let after = lg.node(g.node_id("b").unwrap()).unwrap();
        assert_eq!(after.x, before.x * 2);
        assert_eq!(after.y, before.y * 2);
    }

    #[test]
    fn composite_runs_stages_in_order() {
        let mut g = Graph::new();
        g.add_edge("a", "b", Attrs::new());
        let mut lg = LayoutGraph::seed(&g, |_| (40, 20));

        let composite = CompositeLayout::new()
            .push(Box::new(Pipeline::new()))
            .push(Box::new(ScalerLayout { scale: 2.0 }));
        composite.layout(&g, &Config::default(), &mut lg).unwrap();

        let b = lg.node(g.node_id("b").unwrap()).unwrap();
        assert!(b.y > 0);
    }
}

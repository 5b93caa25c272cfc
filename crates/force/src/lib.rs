//! Non-Sugiyama layouts (`spec.md` §4.8): [`force::ForceLayout`] (gravity + spring simulation),
//! [`eades::EadesLayout`] (the classical Eades spring embedder), and [`mds::MdsLayout`]
//! (classical multidimensional scaling over graph-geodesic distances). All three implement the
//! same [`layout::Layout`] trait as the sibling crate's Sugiyama [`layout::Pipeline`], so a
//! caller can pick any of the four `spec.md` §6 `layout` values behind one interface, and a
//! [`layout::CompositeLayout`] can chain any of them in sequence.

pub mod eades;
pub mod error;
pub mod force;
mod geom;
mod init;
pub mod mds;

pub use eades::EadesLayout;
pub use error::Error;
pub use force::{Force, ForceLayout, GravityForce, SpringForce};
pub use mds::MdsLayout;

use layout::{Config, LayoutKind};

/// Picks the `layout::Layout` implementation named by `config.layout` (`spec.md` §6's top-level
/// `layout` selector), so a caller can go from one config value straight to a runnable layout
/// without matching on [`LayoutKind`] itself.
pub fn from_config(config: &Config) -> Box<dyn layout::Layout> {
    match config.layout {
        LayoutKind::Sugiyama => Box::new(layout::Pipeline::new()),
        LayoutKind::Force => Box::new(ForceLayout::default()),
        LayoutKind::Eades => Box::new(EadesLayout::default()),
        LayoutKind::Isomap => Box::new(MdsLayout { scale: config.scale }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph::{Attrs, Graph};
    use layout::{Layout, LayoutGraph};

    #[test]
    fn from_config_dispatches_every_layout_kind() {
        let mut g = Graph::new();
        g.add_edge("a", "b", Attrs::new());
        for kind in [
            LayoutKind::Sugiyama,
            LayoutKind::Force,
            LayoutKind::Eades,
            LayoutKind::Isomap,
        ] {
            let config = Config::new().with_layout(kind);
            let mut lg = LayoutGraph::seed(&g, |_| (20, 20));
            from_config(&config).layout(&g, &config, &mut lg).unwrap();
            assert_eq!(lg.edge_count(), 1);
        }
    }
}

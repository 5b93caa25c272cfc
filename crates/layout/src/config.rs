//! Pipeline configuration (`spec.md` §6), mirroring `dugong::GraphLabel`'s
//! nodesep/ranksep/rankdir default-struct pattern.

use crate::error::Error;

/// Top-level algorithm selector (`spec.md` §6 `layout`). `Sugiyama` is driven by this crate;
/// `Force`/`Eades`/`Isomap` are implemented in the sibling `force` crate, which shares this enum
/// so a caller can round-trip a single config value end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutKind {
    #[default]
    Sugiyama,
    Force,
    Eades,
    Isomap,
}

/// `spec.md` §6 `orientation`: whether layers stack vertically or horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    TopToBottom,
    LeftToRight,
}

/// Which per-layer optimizer `OrderingOptimizer` uses inside each sweep (`spec.md` §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingStrategy {
    Random,
    WeightedMedian,
}

impl Default for OrderingStrategy {
    fn default() -> Self {
        OrderingStrategy::WeightedMedian
    }
}

/// Pipeline configuration (`spec.md` §6). Every field has the documented default; setters are
/// builder-style and chainable, following `dugong::GraphLabel`'s construction pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub layout: LayoutKind,
    pub orientation: Orientation,
    pub ordering_strategy: OrderingStrategy,
    pub ordering_epochs: u32,
    pub ordering_inner_epochs: u32,
    pub horizontal_delta: i64,
    pub margin_x: i64,
    pub margin_y: i64,
    pub dummy_w: i64,
    pub dummy_h: i64,
    pub scale: f64,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutKind::default(),
            orientation: Orientation::default(),
            ordering_strategy: OrderingStrategy::default(),
            ordering_epochs: 10,
            ordering_inner_epochs: 5,
            horizontal_delta: 25,
            margin_x: 25,
            margin_y: 25,
            dummy_w: 25,
            dummy_h: 25,
            scale: 1.0,
            seed: 0,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: LayoutKind) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_ordering_strategy(mut self, strategy: OrderingStrategy) -> Self {
        self.ordering_strategy = strategy;
        self
    }

    pub fn with_ordering_epochs(mut self, epochs: u32) -> Self {
        self.ordering_epochs = epochs;
        self
    }

    pub fn with_ordering_inner_epochs(mut self, epochs: u32) -> Self {
        self.ordering_inner_epochs = epochs;
        self
    }

    pub fn with_horizontal_delta(mut self, delta: i64) -> Self {
        self.horizontal_delta = delta;
        self
    }

    pub fn with_margins(mut self, margin_x: i64, margin_y: i64) -> Self {
        self.margin_x = margin_x;
        self.margin_y = margin_y;
        self
    }

    pub fn with_dummy_size(mut self, w: i64, h: i64) -> Self {
        self.dummy_w = w;
        self.dummy_h = h;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Rejects out-of-range values (`spec.md` §7 `ConfigError`, e.g. `horizontal_delta <= 0`).
    pub fn validate(&self) -> Result<(), Error> {
        if self.horizontal_delta <= 0 {
            return Err(Error::Config {
                reason: format!(
                    "horizontal_delta must be positive, got {}",
                    self.horizontal_delta
                ),
            });
        }
        if self.margin_x < 0 || self.margin_y < 0 {
            return Err(Error::Config {
                reason: "margin_x and margin_y must be non-negative".to_string(),
            });
        }
        if self.dummy_w < 0 || self.dummy_h < 0 {
            return Err(Error::Config {
                reason: "dummy_w and dummy_h must be non-negative".to_string(),
            });
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::Config {
                reason: format!("scale must be a positive finite number, got {}", self.scale),
            });
        }
        if self.ordering_epochs == 0 {
            return Err(Error::Config {
                reason: "ordering_epochs must be at least 1".to_string(),
            });
        }
        if self.ordering_inner_epochs == 0 {
            return Err(Error::Config {
                reason: "ordering_inner_epochs must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

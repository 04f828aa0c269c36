use serde::{Deserialize, Serialize};

/// Cost of predicting `predicted` where `observed` was measured.
/// Must be non-negative; lower is better.
pub type CostFn = Box<dyn Fn(f64, f64) -> f64>;

/// Built-in cost functions selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CostFunction {
    #[default]
    SquaredError,
    AbsoluteError,
}

impl CostFunction {
    pub fn apply(self, observed: f64, predicted: f64) -> f64 {
        match self {
            CostFunction::SquaredError => (observed - predicted).powi(2),
            CostFunction::AbsoluteError => (observed - predicted).abs(),
        }
    }

    pub fn into_fn(self) -> CostFn {
        Box::new(move |observed, predicted| self.apply(observed, predicted))
    }
}

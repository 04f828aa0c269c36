use super::traits::ConfigSection;
use crate::error::PolyevoError;
use serde::{Deserialize, Serialize};

/// Sample data to fit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub inputs: Vec<f64>,
    pub outputs: Vec<f64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        let inputs: Vec<f64> = (0..5).map(f64::from).collect();
        let outputs = inputs.iter().map(|x| x * x).collect();
        Self { inputs, outputs }
    }
}

impl ConfigSection for SampleConfig {
    fn section_name() -> &'static str {
        "samples"
    }

    fn validate(&self) -> Result<(), PolyevoError> {
        if self.inputs.len() != self.outputs.len() {
            return Err(PolyevoError::LengthMismatch {
                inputs: self.inputs.len(),
                outputs: self.outputs.len(),
            });
        }
        if self.inputs.is_empty() {
            return Err(PolyevoError::Configuration(
                "At least one sample is required".to_string(),
            ));
        }
        Ok(())
    }
}

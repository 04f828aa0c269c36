use crate::error::{PolyevoError, Result};
use serde::{Deserialize, Serialize};

/// Paired `(input, output)` observations.
///
/// Both sequences always have the same length; every mutator validates
/// before touching state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
}

impl SampleSet {
    pub fn new(inputs: Vec<f64>, outputs: Vec<f64>) -> Result<Self> {
        check_lengths(inputs.len(), outputs.len())?;
        Ok(Self { inputs, outputs })
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.inputs.iter().copied().zip(self.outputs.iter().copied())
    }

    pub fn set_inputs(&mut self, inputs: Vec<f64>) -> Result<()> {
        check_lengths(inputs.len(), self.outputs.len())?;
        self.inputs = inputs;
        Ok(())
    }

    pub fn set_outputs(&mut self, outputs: Vec<f64>) -> Result<()> {
        check_lengths(self.inputs.len(), outputs.len())?;
        self.outputs = outputs;
        Ok(())
    }

    pub fn push(&mut self, input: f64, output: f64) {
        self.inputs.push(input);
        self.outputs.push(output);
    }

    pub fn max_input(&self) -> Option<f64> {
        max_of(&self.inputs)
    }

    pub fn max_output(&self) -> Option<f64> {
        max_of(&self.outputs)
    }

    /// Largest absolute value across inputs and outputs
    pub fn max_magnitude(&self) -> Option<f64> {
        self.iter().map(|(x, y)| x.abs().max(y.abs())).reduce(f64::max)
    }
}

fn check_lengths(inputs: usize, outputs: usize) -> Result<()> {
    if inputs != outputs {
        return Err(PolyevoError::LengthMismatch { inputs, outputs });
    }
    Ok(())
}

fn max_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_construction() {
        let err = SampleSet::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert!(matches!(err, PolyevoError::LengthMismatch { inputs: 2, outputs: 1 }));
    }

    #[test]
    fn test_setters_keep_state_on_failure() {
        let mut samples = SampleSet::new(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();

        assert!(samples.set_inputs(vec![5.0]).is_err());
        assert!(samples.set_outputs(vec![5.0, 6.0, 7.0]).is_err());
        assert_eq!(samples.inputs(), &[0.0, 1.0]);
        assert_eq!(samples.outputs(), &[0.0, 1.0]);

        samples.set_outputs(vec![3.0, 4.0]).unwrap();
        assert_eq!(samples.outputs(), &[3.0, 4.0]);
    }

    #[test]
    fn test_push_and_max() {
        let mut samples = SampleSet::new(vec![0.0], vec![-2.0]).unwrap();
        samples.push(3.0, -1.0);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples.max_input(), Some(3.0));
        assert_eq!(samples.max_output(), Some(-1.0));
        assert_eq!(samples.max_magnitude(), Some(3.0));
    }
}

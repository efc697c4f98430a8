use crate::cleanup::remove_transient_files;
use crate::error::ModelError;
use crate::layer::Layer;
use std::path::Path;

/// Aggregate trainable-parameter totals for a full layer chain
///
/// # Fields
///
/// - `weights` - Total number of weight values across all layers
/// - `biases` - Total number of bias values across all layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParameterCounts {
    pub weights: u64,
    pub biases: u64,
}

/// A model described as a backward-linked chain of layer descriptors.
///
/// The model owns its layer vector for the duration of its initialized
/// lifetime. It is a passive data structure: the only derived artifacts are
/// the parameter counts computed by [`Model::parameter_counts`] and the
/// weight blob written by [`crate::serialization::write_initial_weights`].
///
/// # Example
/// ```rust
/// use weightsmith::prelude::*;
///
/// // Two dense layers: 3 units, then 5 units fed by the first
/// let layers = vec![Layer::dense(3), Layer::dense(5).with_previous(0)];
/// let model = Model::new(layers).unwrap();
///
/// let counts = model.parameter_counts().unwrap();
/// assert_eq!(counts.weights, 18);
/// assert_eq!(counts.biases, 8);
/// ```
pub struct Model {
    layers: Vec<Layer>,
    initialized: bool,
}

impl Model {
    /// Validates the layer chain and creates an initialized model
    ///
    /// # Parameters
    ///
    /// * `layers` - The layer chain; each layer's predecessor index refers into this vector
    ///
    /// # Returns
    ///
    /// - `Ok(Model)` - An initialized model owning the validated chain
    /// - `Err(ModelError::InputValidationError)` - If the chain is empty, a layer declares
    ///   a negative density, or a predecessor index is out of bounds or self-referential
    pub fn new(layers: Vec<Layer>) -> Result<Self, ModelError> {
        if layers.is_empty() {
            return Err(ModelError::InputValidationError(
                "Model requires at least one layer".to_string(),
            ));
        }

        for (index, layer) in layers.iter().enumerate() {
            if layer.get_density() < 0 {
                return Err(ModelError::InputValidationError(format!(
                    "Layer {} declares negative density {}",
                    index,
                    layer.get_density()
                )));
            }
            if let Some(previous) = layer.get_previous() {
                if previous >= layers.len() {
                    return Err(ModelError::InputValidationError(format!(
                        "Layer {} references predecessor {} but the model has {} layers",
                        index,
                        previous,
                        layers.len()
                    )));
                }
                if previous == index {
                    return Err(ModelError::InputValidationError(format!(
                        "Layer {} references itself as predecessor",
                        index
                    )));
                }
            }
        }

        Ok(Self {
            layers,
            initialized: true,
        })
    }

    /// Returns whether the model is initialized (not yet shut down)
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the number of layers in the chain
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Returns the layer chain as a slice
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Resolves the effective input dimension for the layer at `index`.
    ///
    /// The fan-in is the density of the predecessor layer, or exactly 1 when
    /// the layer has no predecessor (a first layer consumes a single scalar
    /// input). Total function over every layer a validated model can hold.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`Model::layer_count`].
    pub fn fan_in(&self, index: usize) -> u64 {
        match self.layers[index].get_previous() {
            Some(previous) => self.layers[previous].get_density() as u64,
            None => 1,
        }
    }

    /// Checks the preconditions shared by every serializer entry point
    fn ensure_ready(&self) -> Result<(), ModelError> {
        if !self.initialized {
            return Err(ModelError::NotInitialized);
        }
        // A shut-down model is caught above; an empty chain is never treated as zero layers
        if self.layers.is_empty() {
            return Err(ModelError::InputValidationError(
                "Model has no layers".to_string(),
            ));
        }
        Ok(())
    }

    /// Computes the exact trainable-parameter totals for the full chain.
    ///
    /// Layers are traversed in index order and sized with
    /// [`Layer::param_counts`]. Counts are computed before any buffer is
    /// allocated, so the serializer can allocate exact-size buffers without
    /// growth or reallocation.
    ///
    /// # Returns
    ///
    /// - `Ok(ParameterCounts)` - Exact weight and bias totals
    /// - `Err(ModelError::NotInitialized)` - If the model has been shut down
    /// - `Err(ModelError::ProcessingError)` - If any accumulation step would overflow u64;
    ///   no partial counts are returned
    pub fn parameter_counts(&self) -> Result<ParameterCounts, ModelError> {
        self.ensure_ready()?;

        let mut totals = ParameterCounts::default();
        for index in 0..self.layers.len() {
            let params = self.layers[index].param_counts(self.fan_in(index))?;
            totals.weights = totals
                .weights
                .checked_add(params.weights)
                .ok_or_else(accumulation_overflow)?;
            totals.biases = totals
                .biases
                .checked_add(params.biases)
                .ok_or_else(accumulation_overflow)?;
        }
        Ok(totals)
    }

    /// Shuts the model down and releases its resources.
    ///
    /// Clears the layer chain, resets the initialized flag, and removes
    /// transient library files from `working_dir` (best effort; removal
    /// errors are ignored and persisted weight blobs are preserved).
    ///
    /// # Parameters
    ///
    /// * `working_dir` - Directory scanned for transient files
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The model is now uninitialized
    /// - `Err(ModelError::NotInitialized)` - If the model was already shut down
    pub fn shutdown(&mut self, working_dir: &Path) -> Result<(), ModelError> {
        if !self.initialized {
            return Err(ModelError::NotInitialized);
        }

        self.layers.clear();
        self.initialized = false;

        remove_transient_files(working_dir);

        Ok(())
    }
}

fn accumulation_overflow() -> ModelError {
    ModelError::ProcessingError("Total parameter count overflows u64".to_string())
}

use crate::error::ModelError;

/// Multiplier applied to the weight count of convolutional layers, modeling a 3x3 kernel
pub const CONV_KERNEL_FACTOR: u64 = 9;

/// Kind of layer supported by the library
///
/// # Variants
///
/// - `Dense` - Fully connected layer, one weight per input/output pair
/// - `Convolutional` - Convolutional layer, weight count multiplied by the fixed 3x3 kernel factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerKind {
    #[default]
    Dense,
    Convolutional,
}

impl LayerKind {
    /// Returns the multiplier applied to the fan-in x density product for this kind
    pub fn kernel_factor(&self) -> u64 {
        match self {
            LayerKind::Dense => 1,
            LayerKind::Convolutional => CONV_KERNEL_FACTOR,
        }
    }
}

/// Exact parameter counts produced by the sizing rule for a single layer
///
/// # Fields
///
/// - `weights` - Number of trainable weight values
/// - `biases` - Number of trainable bias values, one per output unit or filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerParams {
    pub weights: u64,
    pub biases: u64,
}

/// A single layer descriptor in a model's chain.
///
/// Layers form a backward-linked chain: each layer may name its predecessor
/// by index into the model's layer vector. A layer with no predecessor is
/// treated as consuming a single scalar input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layer {
    /// Number of output units or filters declared for this layer
    density: i32,
    /// Index of the preceding layer in the owning model, or None for the first layer
    previous: Option<usize>,
    /// Kind of layer
    kind: LayerKind,
}

impl Layer {
    /// Creates a dense layer with the given density and no predecessor
    pub fn dense(density: i32) -> Self {
        Self {
            density,
            previous: None,
            kind: LayerKind::Dense,
        }
    }

    /// Creates a convolutional layer with the given density and no predecessor
    pub fn convolutional(density: i32) -> Self {
        Self {
            density,
            previous: None,
            kind: LayerKind::Convolutional,
        }
    }

    /// Sets the predecessor of this layer by index into the owning model's layer vector
    ///
    /// Supports method chaining pattern
    pub fn with_previous(mut self, index: usize) -> Self {
        self.previous = Some(index);
        self
    }

    /// Returns the declared density (number of output units or filters) of the layer
    pub fn get_density(&self) -> i32 {
        self.density
    }

    /// Returns the predecessor index of the layer, or None for a first layer
    pub fn get_previous(&self) -> Option<usize> {
        self.previous
    }

    /// Returns the kind of the layer
    pub fn get_kind(&self) -> LayerKind {
        self.kind
    }

    /// Applies the sizing rule for this layer given its resolved fan-in.
    ///
    /// The rule is `weights = fan_in * density * kernel_factor` and
    /// `biases = density`, with one bias per output unit or filter regardless
    /// of layer kind. Both the counting pass and the fill pass of the weight
    /// serializer call this single function, so the header counts and the
    /// generated payload can never disagree.
    ///
    /// # Parameters
    ///
    /// * `fan_in` - Effective input dimension for this layer (see [`crate::model::Model::fan_in`])
    ///
    /// # Returns
    ///
    /// - `Ok(LayerParams)` - Exact weight and bias counts for this layer
    /// - `Err(ModelError::ProcessingError)` - If the weight product overflows u64
    pub fn param_counts(&self, fan_in: u64) -> Result<LayerParams, ModelError> {
        // Density is validated non-negative at model construction, so the cast is lossless
        let out_dim = self.density as u64;
        let weights = fan_in
            .checked_mul(out_dim)
            .and_then(|w| w.checked_mul(self.kind.kernel_factor()))
            .ok_or_else(|| {
                ModelError::ProcessingError("Layer weight count overflows u64".to_string())
            })?;
        Ok(LayerParams {
            weights,
            biases: out_dim,
        })
    }
}

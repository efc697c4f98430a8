/// Module `error` contains the status type shared by every fallible operation.
///
/// The API is binary per call: an operation either fully succeeds or returns
/// one of the `ModelError` variants. There is no retry logic anywhere in the
/// library; a caller seeing `ProcessingError` decides independently whether
/// to re-invoke the whole operation.
pub mod error;

/// Module `layer` contains the layer descriptors and the per-layer sizing rule.
///
/// A [`layer::Layer`] declares an output width (its density), a kind (dense or
/// convolutional), and optionally the index of its predecessor in the owning
/// model. The sizing rule [`layer::Layer::param_counts`] derives exact weight
/// and bias counts from the resolved fan-in, applying the fixed 3x3 kernel
/// factor to convolutional layers.
pub mod layer;

/// Module `model` contains the model aggregate and its lifecycle.
///
/// A [`model::Model`] owns a validated chain of layers, resolves each layer's
/// fan-in, and computes overflow-checked trainable-parameter totals for the
/// whole chain. Shutting a model down clears its state and triggers the
/// transient-file janitor.
///
/// # Example
/// ```rust
/// use weightsmith::prelude::*;
///
/// let layers = vec![
///     Layer::dense(3),
///     Layer::dense(5).with_previous(0),
/// ];
/// let model = Model::new(layers).unwrap();
/// assert_eq!(
///     model.parameter_counts().unwrap(),
///     ParameterCounts { weights: 18, biases: 8 }
/// );
/// ```
pub mod model;

/// Module `serialization` contains the weight blob format and the binary writer.
///
/// [`serialization::write_initial_weights`] sizes a model's chain, fills
/// exact-size buffers with uniform random values in `[-0.5, 0.5)`, and writes
/// a self-describing blob: a fixed 32-byte header (magic, library version,
/// weight and bias counts) followed by all weights and then all biases as
/// little-endian f32 values in layer order. The random source is an injected
/// capability, so tests can pass a seeded generator and assert exact bytes.
///
/// There is no read path for the payload and no compatibility logic beyond
/// stamping the current library version into the header. On a write failure
/// the partially written file is left on disk; callers must treat any failure
/// as "file contents undefined".
pub mod serialization;

/// Module `cleanup` contains the best-effort transient-file janitor.
///
/// Invoked with an explicit directory argument on model shutdown; removes
/// files carrying the library's transient prefix unless they end in the
/// weight blob suffix. Errors are ignored.
pub mod cleanup;

/// A convenience module that re-exports the most commonly used types and
/// functions from this crate.
///
/// # Example
/// ```rust
/// use weightsmith::prelude::*;
///
/// let model = Model::new(vec![Layer::convolutional(2)]).unwrap();
/// assert_eq!(model.parameter_counts().unwrap().weights, 18);
/// ```
pub mod prelude;

use crate::error::ModelError;
use crate::layer::Layer;
use crate::model::{Model, ParameterCounts};

/// A chain whose cumulative weight count cannot be represented in u64:
/// the second layer's product (i32::MAX)^2 * 9 overflows on its own.
fn overflowing_layers() -> Vec<Layer> {
    vec![
        Layer::dense(i32::MAX),
        Layer::convolutional(i32::MAX).with_previous(0),
    ]
}

#[test]
fn single_dense_layer_counts() {
    // Scenario: one dense layer with density 4 and no predecessor
    let model = Model::new(vec![Layer::dense(4)]).unwrap();
    assert_eq!(
        model.parameter_counts().unwrap(),
        ParameterCounts {
            weights: 4,
            biases: 4
        }
    );
}

#[test]
fn chained_dense_layers_counts() {
    // Densities 3 then 5: layer 0 contributes 1*3, layer 1 contributes 3*5
    let model = Model::new(vec![Layer::dense(3), Layer::dense(5).with_previous(0)]).unwrap();
    assert_eq!(
        model.parameter_counts().unwrap(),
        ParameterCounts {
            weights: 18,
            biases: 8
        }
    );
}

#[test]
fn convolutional_layer_counts() {
    // One conv layer with density 2: 1*2*9 weights, one bias per filter
    let model = Model::new(vec![Layer::convolutional(2)]).unwrap();
    assert_eq!(
        model.parameter_counts().unwrap(),
        ParameterCounts {
            weights: 18,
            biases: 2
        }
    );
}

#[test]
fn fan_in_resolution() {
    let model = Model::new(vec![Layer::dense(3), Layer::dense(5).with_previous(0)]).unwrap();
    assert_eq!(model.fan_in(0), 1, "First layer consumes a scalar input");
    assert_eq!(model.fan_in(1), 3, "Chained layer takes predecessor density");
}

#[test]
fn empty_chain_is_rejected() {
    let result = Model::new(Vec::new());
    assert!(
        matches!(result, Err(ModelError::InputValidationError(_))),
        "Empty layer chain should be rejected"
    );
}

#[test]
fn negative_density_is_rejected() {
    let result = Model::new(vec![Layer::dense(-1)]);
    assert!(
        matches!(result, Err(ModelError::InputValidationError(_))),
        "Negative density should be rejected at construction"
    );
}

#[test]
fn invalid_predecessor_is_rejected() {
    // Out-of-bounds index
    let result = Model::new(vec![Layer::dense(2).with_previous(5)]);
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));

    // Self-referential index
    let result = Model::new(vec![Layer::dense(2).with_previous(0)]);
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));
}

#[test]
fn count_overflow_fails_whole_operation() {
    let model = Model::new(overflowing_layers()).unwrap();
    let result = model.parameter_counts();
    assert!(
        matches!(result, Err(ModelError::ProcessingError(_))),
        "Overflowing chain should fail with ProcessingError, got {:?}",
        result
    );
}

#[test]
fn shutdown_resets_model_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = Model::new(vec![Layer::dense(4)]).unwrap();
    assert!(model.is_initialized());

    model.shutdown(dir.path()).unwrap();
    assert!(!model.is_initialized());
    assert_eq!(model.layer_count(), 0);

    // Operations on a shut-down model report NotInitialized
    assert_eq!(model.parameter_counts(), Err(ModelError::NotInitialized));
    assert_eq!(model.shutdown(dir.path()), Err(ModelError::NotInitialized));
}

use crate::error::ModelError;
use crate::model::{Model, ParameterCounts};
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Magic constant identifying the weight blob format, stored little-endian
/// so the first four bytes on disk read "WSMB"
pub const WEIGHT_BLOB_MAGIC: u32 = u32::from_le_bytes(*b"WSMB");

/// Suffix of persisted weight blobs; the cleanup janitor never removes files ending in it
pub const WEIGHT_BLOB_SUFFIX: &str = ".bin";

/// Size of the fixed blob header in bytes
pub const HEADER_LEN: usize = 32;

/// Fixed header written at the start of every weight blob.
///
/// All fields are little-endian. The counts recorded here always equal the
/// number of f32 values physically written after the header: both are derived
/// from the same per-layer sizing rule ([`crate::layer::Layer::param_counts`]).
///
/// # Fields
///
/// - `magic` - Format identifier, always [`WEIGHT_BLOB_MAGIC`]
/// - `version_major` / `version_minor` / `version_patch` - Library version at write time
/// - `weight_count` - Number of weight f32 values following the header
/// - `bias_count` - Number of bias f32 values following the weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobHeader {
    pub magic: u32,
    pub version_major: u32,
    pub version_minor: u32,
    pub version_patch: u32,
    pub weight_count: u64,
    pub bias_count: u64,
}

impl BlobHeader {
    /// Builds a header for the given parameter counts, stamped with the
    /// current crate version
    pub fn new(counts: ParameterCounts) -> Self {
        Self {
            magic: WEIGHT_BLOB_MAGIC,
            version_major: parse_version(env!("CARGO_PKG_VERSION_MAJOR")),
            version_minor: parse_version(env!("CARGO_PKG_VERSION_MINOR")),
            version_patch: parse_version(env!("CARGO_PKG_VERSION_PATCH")),
            weight_count: counts.weights,
            bias_count: counts.biases,
        }
    }

    /// Serializes the header to its 32-byte little-endian wire form
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0..4].copy_from_slice(&self.magic.to_le_bytes());
        buf[4..8].copy_from_slice(&self.version_major.to_le_bytes());
        buf[8..12].copy_from_slice(&self.version_minor.to_le_bytes());
        buf[12..16].copy_from_slice(&self.version_patch.to_le_bytes());
        buf[16..24].copy_from_slice(&self.weight_count.to_le_bytes());
        buf[24..32].copy_from_slice(&self.bias_count.to_le_bytes());
        buf
    }
}

fn parse_version(raw: &str) -> u32 {
    raw.parse().unwrap_or(0)
}

/// Generates random initial weights for `model` and writes them to `path`
/// using the thread-local random number generator.
///
/// See [`write_initial_weights_with`] for the full contract.
pub fn write_initial_weights(model: &Model, path: &Path) -> Result<(), ModelError> {
    write_initial_weights_with(model, path, &mut rand::rng())
}

/// Generates random initial weights for `model` and writes them to `path`,
/// drawing every value from `rng`.
///
/// The operation sizes the chain first ([`Model::parameter_counts`]),
/// allocates exact-size buffers, fills them layer by layer with uniform
/// values in `[-0.5, 0.5)`, and only then opens `path` for binary writing,
/// truncating any existing content. Weights for all layers are concatenated
/// in layer order, followed by all biases in layer order.
///
/// A seeded generator (for example `StdRng::seed_from_u64`) makes the output
/// reproducible; with the default generator two calls against the same model
/// produce identical headers but different payloads.
///
/// Any failure is terminal for the call: buffers are released and
/// `ProcessingError` is returned. On a short write the partially written
/// file is left as-is, so callers must treat a failure result as "file
/// contents are undefined, not necessarily absent".
///
/// # Parameters
///
/// - `model` - The initialized model whose chain is serialized
/// - `path` - Target file location, truncated if it exists
/// - `rng` - Source of the uniformly distributed initial values
///
/// # Returns
///
/// - `Ok(())` - Header and both payloads were fully written and flushed
/// - `Err(ModelError::InputValidationError)` - If `path` is empty (checked before any allocation)
/// - `Err(ModelError::NotInitialized)` - If the model has been shut down; no file is touched
/// - `Err(ModelError::ProcessingError)` - On count overflow, allocation failure,
///   file-open failure, or short write
///
/// # Example
/// ```rust,no_run
/// use std::path::Path;
/// use weightsmith::prelude::*;
///
/// let model = Model::new(vec![Layer::convolutional(2)]).unwrap();
/// write_initial_weights(&model, Path::new("weightsmith_model.bin")).unwrap();
/// ```
pub fn write_initial_weights_with<R: Rng>(
    model: &Model,
    path: &Path,
    rng: &mut R,
) -> Result<(), ModelError> {
    if path.as_os_str().is_empty() {
        return Err(ModelError::InputValidationError(
            "Output path cannot be empty".to_string(),
        ));
    }

    // Counting pass: exact totals before any allocation
    let counts = model.parameter_counts()?;

    let mut weights = allocate_buffer(counts.weights)?;
    let mut biases = allocate_buffer(counts.biases)?;

    let distribution = Uniform::new(-0.5f32, 0.5f32).map_err(|e| {
        ModelError::ProcessingError(format!("Failed to build weight distribution: {}", e))
    })?;

    // Fill pass: same traversal order and same sizing rule as the counting pass
    for index in 0..model.layer_count() {
        let params = model.layers()[index].param_counts(model.fan_in(index))?;
        for _ in 0..params.weights {
            weights.push(distribution.sample(rng));
        }
        for _ in 0..params.biases {
            biases.push(distribution.sample(rng));
        }
    }

    let file = File::create(path).map_err(|e| {
        ModelError::ProcessingError(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(&BlobHeader::new(counts).to_bytes())
        .map_err(write_error)?;
    for value in &weights {
        writer.write_all(&value.to_le_bytes()).map_err(write_error)?;
    }
    for value in &biases {
        writer.write_all(&value.to_le_bytes()).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    Ok(())
}

/// Allocates an empty f32 buffer with exact capacity for `count` values.
/// A zero count yields a valid empty buffer, not an error.
fn allocate_buffer(count: u64) -> Result<Vec<f32>, ModelError> {
    let len = usize::try_from(count).map_err(|_| {
        ModelError::ProcessingError(format!("Buffer of {} values exceeds addressable size", count))
    })?;
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(|e| {
        ModelError::ProcessingError(format!("Failed to allocate buffer of {} values: {}", len, e))
    })?;
    Ok(buffer)
}

fn write_error(e: std::io::Error) -> ModelError {
    ModelError::ProcessingError(format!("Failed to write weight blob: {}", e))
}

pub use crate::cleanup::{TRANSIENT_FILE_PREFIX, remove_transient_files};
pub use crate::error::ModelError;
pub use crate::layer::{CONV_KERNEL_FACTOR, Layer, LayerKind, LayerParams};
pub use crate::model::{Model, ParameterCounts};
pub use crate::serialization::{
    BlobHeader, HEADER_LEN, WEIGHT_BLOB_MAGIC, WEIGHT_BLOB_SUFFIX, write_initial_weights,
    write_initial_weights_with,
};

use kdtree::ErrorKind;

pub type Result<T> = ::std::result::Result<T, StopError>;

/// Everything that can go wrong while building or querying a boundary stop predicate.
///
/// Construction errors are fatal, no partially built predicate is ever returned.
/// Call-time errors reject the single query and leave the predicate usable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StopError {
    #[error("surface mesh has no vertices or no triangles")]
    EmptyMesh,
    #[error("surface has {triangles} triangles but {normals} normals")]
    NormalCountMismatch { triangles: usize, normals: usize },
    #[error("triangle {triangle} references vertex {index}, but only {vertex_count} vertices exist")]
    VertexIndexOutOfRange {
        triangle: usize,
        index: usize,
        vertex_count: usize,
    },
    #[error("triangle {triangle} has a zero-length or non-finite normal")]
    DegenerateNormal { triangle: usize },
    #[error("vertex {vertex} has an infinite or NaN coordinate")]
    NonFiniteVertex { vertex: usize },
    #[error("hazard rate must be finite and positive, got {0}")]
    InvalidHazardRate(f32),
    #[error("samples per vertex must be positive and keep the sample count in range, got {0}")]
    InvalidSampleDensity(usize),
    #[error("bin count must be positive, got {0}")]
    InvalidBinCount(usize),
    #[error("surface sampling produced no points")]
    EmptySampleSet,
    #[error("exposure fraction must lie in [0, 1], got {0}")]
    InvalidExposureFraction(f32),
    #[error("expected a point with {expected} coordinates, got {actual}")]
    WrongDimension { expected: usize, actual: usize },
    #[error("query point has an infinite or NaN coordinate")]
    NonFiniteCoordinate,
    #[error("spatial index rejected a point of unexpected dimension")]
    IndexDimension,
}

impl From<ErrorKind> for StopError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::WrongDimension => StopError::IndexDimension,
            ErrorKind::NonFiniteCoordinate => StopError::NonFiniteCoordinate,
            ErrorKind::ZeroCapacity => StopError::EmptySampleSet,
        }
    }
}

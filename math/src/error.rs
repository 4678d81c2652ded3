#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Linalg(#[from] ndarray_linalg::error::LinalgError),

    #[error("empty matrix")]
    EmptyMatrix,
    #[error("decomposition returned no right singular vectors")]
    NoSingularVectors,
    #[error("wrong vec len {0}")]
    WrongVecLen(usize),
}

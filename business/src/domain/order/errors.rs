/// Infrastructure failures only. Missing products and short stock are
/// outcomes of [`super::placement::OrderPlacement`], not errors.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

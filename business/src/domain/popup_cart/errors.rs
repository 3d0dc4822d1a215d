use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum PopupCartError {
    /// The configured carousel token matches no selection procedure.
    #[error("popup_cart.unknown_strategy")]
    UnknownStrategy(String),
    #[error("popup_cart.invalid_page_size")]
    InvalidPageSize(String),
    #[error("popup_cart.invalid_url")]
    InvalidUrl(#[from] url::ParseError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

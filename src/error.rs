use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("required field `{field}` is empty")]
    EmptyField { field: &'static str },

    #[error("failed to render email template")]
    Template(#[from] tera::Error),
}

impl RenderError {
    /// The render-context field this error is about, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RenderError::MissingField { field } | RenderError::EmptyField { field } => Some(*field),
            RenderError::Template(_) => None,
        }
    }
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("unable to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error parsing flight plan XML: {0}")]
    Xml(#[from] xmltree::ParseError),
    #[error("invalid flight plan document: {0}")]
    InvalidDocument(String),
    #[error("fix {ident}: field '{field}' is not a number ({value:?})")]
    MalformedField {
        ident: String,
        field: &'static str,
        value: String,
    },
    #[error("unable to read STAR constraint table: {0}")]
    ConstraintTable(String),
    #[error("unable to write route: {0}")]
    Output(String),
}

impl ProfileError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProfileError::Io {
            path: path.into(),
            source,
        }
    }
}

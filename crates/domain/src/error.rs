use crate::ExerciseID;

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("{status} {text}")]
    Status { status: u16, text: String },
    #[error("deserialization failed: {0}")]
    Deserialization(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("no exercises available")]
    NoExercises,
    #[error("no muscle involvement rows readable, refusing to return exercises without them")]
    EmptyInvolvement,
    #[error("manifest has no entry for {0}")]
    MissingManifestEntry(String),
    #[error("no training data for exercise {0}")]
    MissingTrainingData(String),
    #[error("unknown exercise {0}")]
    UnknownExercise(ExerciseID),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_from_storage_error() {
        assert!(matches!(
            ReadError::from(StorageError::NoConnection),
            ReadError::Storage(StorageError::NoConnection)
        ));
        assert!(matches!(
            ReadError::from(StorageError::Other("foo".into())),
            ReadError::Storage(StorageError::Other(error)) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_read_error_from_catalog_error() {
        assert!(matches!(
            ReadError::from(CatalogError::NoExercises),
            ReadError::Catalog(CatalogError::NoExercises)
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ReadError::from(CatalogError::NoExercises).to_string(),
            "no exercises available"
        );
        assert_eq!(
            StorageError::Status {
                status: 404,
                text: "Not Found".to_string()
            }
            .to_string(),
            "404 Not Found"
        );
        assert_eq!(
            CatalogError::MissingTrainingData("squat".to_string()).to_string(),
            "no training data for exercise squat"
        );
        assert_eq!(
            CatalogError::UnknownExercise(ExerciseID::from("row")).to_string(),
            "unknown exercise row"
        );
    }
}

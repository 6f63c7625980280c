use crate::error::MongelError;
use crate::model::{AttributeKind, Dataset};
use std::path::Path;

/// Load a dataset from a JSON file.
pub fn load_dataset(path: &Path) -> Result<Dataset, MongelError> {
    let content = std::fs::read_to_string(path).map_err(|e| MongelError::DatasetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_dataset(&content, path)
}

/// Parse a dataset from a JSON string.
pub fn parse_dataset(json: &str, source: &Path) -> Result<Dataset, MongelError> {
    let dataset: Dataset = serde_json::from_str(json).map_err(|e| MongelError::DatasetLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Parse a dataset from a JSON string (no file path context).
pub fn parse_dataset_str(json: &str) -> Result<Dataset, MongelError> {
    let dataset: Dataset = serde_json::from_str(json).map_err(MongelError::Json)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Validate that a dataset is well-formed and normalized.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), MongelError> {
    if dataset.attributes.is_empty() {
        return Err(MongelError::DatasetInvalid(
            "attributes must not be empty".into(),
        ));
    }

    for attr in &dataset.attributes {
        if attr.name.is_empty() {
            return Err(MongelError::DatasetInvalid(
                "attribute name must not be empty".into(),
            ));
        }
        match &attr.kind {
            AttributeKind::Numeric { min, max } => {
                if !min.is_finite() || !max.is_finite() || min > max {
                    return Err(MongelError::DatasetInvalid(format!(
                        "attribute '{}' has invalid range [{}, {}]",
                        attr.name, min, max
                    )));
                }
            }
            AttributeKind::Nominal { values } => {
                if values.is_empty() {
                    return Err(MongelError::DatasetInvalid(format!(
                        "nominal attribute '{}' has no values",
                        attr.name
                    )));
                }
            }
        }
    }

    for (idx, instance) in dataset.instances.iter().enumerate() {
        if instance.values.len() != dataset.attributes.len() {
            return Err(MongelError::DatasetInvalid(format!(
                "instance {} has {} values, expected {}",
                idx,
                instance.values.len(),
                dataset.attributes.len()
            )));
        }

        if !dataset.classes.is_empty() && instance.output >= dataset.classes.len() {
            return Err(MongelError::DatasetInvalid(format!(
                "instance {} has output {} but only {} classes are defined",
                idx,
                instance.output,
                dataset.classes.len()
            )));
        }

        for (value, attr) in instance.values.iter().zip(&dataset.attributes) {
            if !value.is_finite() || !(0.0..=1.0).contains(value) {
                return Err(MongelError::DatasetInvalid(format!(
                    "instance {} has value {} for '{}' outside the normalized range [0, 1]",
                    idx, value, attr.name
                )));
            }
        }
    }

    Ok(())
}

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::config::{DatasetConfig, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_datasets(&settings.datasets) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &crate::config::ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_datasets(datasets: &[DatasetConfig]) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut seen_names = HashMap::new();

        for (idx, dataset) in datasets.iter().enumerate() {
            // Check for duplicate names
            if let Some(prev_idx) = seen_names.insert(&dataset.name, idx) {
                errors.push(ValidationError::Duplicate(format!(
                    "Dataset name '{}' appears at indices {} and {}",
                    dataset.name, prev_idx, idx
                )));
            }

            if dataset.name.is_empty() {
                errors.push(ValidationError::MissingField(format!(
                    "datasets[{}].name",
                    idx
                )));
            }

            // A search input over nothing is a configuration mistake, not
            // an empty widget.
            if dataset.searchable && dataset.options.is_empty() {
                errors.push(ValidationError::InvalidValue {
                    field: format!("datasets[{}]", idx),
                    reason: "A searchable dataset needs at least one option".to_string(),
                });
            }

            Self::validate_options(dataset, idx, &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_options(dataset: &DatasetConfig, idx: usize, errors: &mut Vec<ValidationError>) {
        let has_objects = dataset.options.iter().any(Value::is_object);
        let has_strings = dataset.options.iter().any(Value::is_string);

        if has_objects && has_strings {
            errors.push(ValidationError::InvalidValue {
                field: format!("datasets[{}].options", idx),
                reason: "Options must be all strings or all objects".to_string(),
            });
        }

        // Object options fail fast without the key names instead of
        // breaking filtering and matching at runtime.
        if has_objects && dataset.track_by.is_none() {
            errors.push(ValidationError::MissingField(format!(
                "datasets[{}].track_by",
                idx
            )));
        }
        if has_objects && dataset.label.is_none() {
            errors.push(ValidationError::MissingField(format!(
                "datasets[{}].label",
                idx
            )));
        }

        for (opt_idx, option) in dataset.options.iter().enumerate() {
            match option {
                Value::String(_) => {}
                Value::Object(fields) => {
                    if let Some(track_by) = &dataset.track_by {
                        match fields.get(track_by) {
                            Some(Value::String(_)) | Some(Value::Number(_)) => {}
                            Some(_) => errors.push(ValidationError::InvalidValue {
                                field: format!("datasets[{}].options[{}].{}", idx, opt_idx, track_by),
                                reason: "Tracking value must be a string or a number".to_string(),
                            }),
                            None => errors.push(ValidationError::MissingField(format!(
                                "datasets[{}].options[{}].{}",
                                idx, opt_idx, track_by
                            ))),
                        }
                    }
                    if let Some(label) = &dataset.label {
                        match fields.get(label) {
                            Some(Value::String(_)) => {}
                            Some(_) => errors.push(ValidationError::InvalidValue {
                                field: format!("datasets[{}].options[{}].{}", idx, opt_idx, label),
                                reason: "Label must be a string".to_string(),
                            }),
                            None => errors.push(ValidationError::MissingField(format!(
                                "datasets[{}].options[{}].{}",
                                idx, opt_idx, label
                            ))),
                        }
                    }
                }
                _ => errors.push(ValidationError::InvalidValue {
                    field: format!("datasets[{}].options[{}]", idx, opt_idx),
                    reason: "Option must be a string or an object".to_string(),
                }),
            }
        }
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassifierStatus {
    #[serde(rename = "Non Existent")]
    NonExistent,
    Training,
    Failed,
    Available,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassifierList {
    #[serde(default)]
    pub classifiers: Vec<Classifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Classifier {
    pub classifier_id: String,
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub status: Option<ClassifierStatus>,
    #[serde(default)]
    pub status_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingMetadata {
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Training input: metadata plus a CSV of `text,class` rows on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateClassifierRequest {
    pub metadata: TrainingMetadata,
    pub training_data: PathBuf,
}

impl CreateClassifierRequest {
    pub fn new(language: impl Into<String>, training_data: impl Into<PathBuf>) -> Self {
        Self {
            metadata: TrainingMetadata {
                language: language.into(),
                name: None,
            },
            training_data: training_data.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.metadata.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Classification {
    #[serde(default)]
    pub classifier_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub top_class: Option<String>,
    #[serde(default)]
    pub classes: Vec<ClassifiedClass>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassifiedClass {
    pub class_name: String,
    pub confidence: f64,
}

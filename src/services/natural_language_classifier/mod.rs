//! Natural Language Classifier v1.

mod service;
mod types;


pub use service::{NaturalLanguageClassifierService, NaturalLanguageClassifierServiceImpl};
pub use types::{
    Classification, ClassifiedClass, Classifier, ClassifierList, ClassifierStatus,
    CreateClassifierRequest, TrainingMetadata,
};

use crate::types::{OptionValue, Range};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Categorical,
    Datetime,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Min,
    Max,
}

/// One attribute of the options being compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub key: String,
    #[serde(rename = "type", default = "Column::default_type")]
    pub column_type: ColumnType,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub goal: Option<Goal>,
    #[serde(default)]
    pub is_objective: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub range: Option<Range>,
    /// Ordered categories, most preferred first.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub preference: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub significant_gain: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub significant_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub insignificant_loss: Option<f64>,
}

impl Column {
    fn default_type() -> ColumnType {
        ColumnType::Text
    }

    fn with_type(key: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            key: key.into(),
            column_type,
            goal: None,
            is_objective: false,
            full_name: None,
            description: None,
            format: None,
            range: None,
            preference: None,
            significant_gain: None,
            significant_loss: None,
            insignificant_loss: None,
        }
    }

    /// A numeric objective optimised towards `goal`.
    pub fn numeric(key: impl Into<String>, goal: Goal) -> Self {
        let mut column = Self::with_type(key, ColumnType::Numeric);
        column.goal = Some(goal);
        column.is_objective = true;
        column
    }

    pub fn categorical(key: impl Into<String>, preference: Vec<String>) -> Self {
        let mut column = Self::with_type(key, ColumnType::Categorical);
        column.range = Some(Range::Categorical(preference.clone()));
        column.preference = Some(preference);
        column.goal = Some(Goal::Max);
        column.is_objective = true;
        column
    }

    pub fn datetime(key: impl Into<String>, goal: Goal) -> Self {
        let mut column = Self::with_type(key, ColumnType::Datetime);
        column.goal = Some(goal);
        column.is_objective = true;
        column
    }

    /// A descriptive column that takes no part in the resolution.
    pub fn text(key: impl Into<String>) -> Self {
        Self::with_type(key, ColumnType::Text)
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }
}

/// A candidate, with one value per column key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemOption {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub values: BTreeMap<String, OptionValue>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description_html: Option<String>,
}

impl ProblemOption {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            values: BTreeMap::new(),
            description_html: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, column: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub subject: String,
    pub columns: Vec<Column>,
    pub options: Vec<ProblemOption>,
}

/// Query switches for a dilemma request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DilemmaOptions {
    pub generate_visualization: Option<bool>,
    pub find_preferable_options: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolutionStatus {
    Front,
    Excluded,
    Incomplete,
    DoesNotMeetPreference,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusCause {
    pub message: String,
    pub error_code: String,
    #[serde(default)]
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Solution {
    pub solution_ref: String,
    pub status: SolutionStatus,
    #[serde(default)]
    pub status_cause: Option<StatusCause>,
    /// Options that dominate this one.
    #[serde(default)]
    pub shadow_me: Vec<String>,
    /// Options this one dominates.
    #[serde(default)]
    pub shadows: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PreferableSolutions {
    #[serde(default)]
    pub solution_refs: Vec<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resolution {
    pub solutions: Vec<Solution>,
    /// Visualization map, present when requested.
    #[serde(default)]
    pub map: Option<Value>,
    #[serde(default)]
    pub preferable_solutions: Option<PreferableSolutions>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dilemma {
    pub problem: Problem,
    pub resolution: Resolution,
}

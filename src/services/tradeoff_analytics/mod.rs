//! Tradeoff Analytics v1: Pareto resolution over a decision problem.

mod service;
mod types;


pub use service::{TradeoffAnalyticsService, TradeoffAnalyticsServiceImpl};
pub use types::{
    Column, ColumnType, Dilemma, DilemmaOptions, Goal, PreferableSolutions, Problem,
    ProblemOption, Resolution, Solution, SolutionStatus, StatusCause,
};

//! Execution engine for growvec commands

pub mod executor;

pub use executor::{
    execute_command, growth_report, ExecutionContext, ExecutionResult, GrowthReport, GrowthStep,
    ResultData, SubstitutionInfo,
};

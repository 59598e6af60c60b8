//! Builds the `UpdateExpression`, `ExpressionAttributeNames` and
//! `ExpressionAttributeValues` parameters of a DynamoDB `UpdateItem` call from
//! a sequence of set / add / remove / delete operations.
//!
//! A builder is a plain owned value: one per update statement, mutated through
//! `&mut self`, read with
//! [`update_expression_params`](UpdateExpressionBuilder::update_expression_params).
#![allow(clippy::doc_markdown, clippy::module_name_repetitions)]

pub mod builder;
pub mod config;
pub mod error;
pub mod mode;
pub mod token;

pub use builder::{Section, UpdateExpressionBuilder};
pub use config::BuilderConfig;
pub use error::{Result, UpdateExpressionError};
pub use mode::SetMode;

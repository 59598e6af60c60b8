//! Wire types for the DynamoDB update-expression builder.
//!
//! [`AttributeValue`] carries DynamoDB's tagged value encoding, the `input`
//! module holds one record per builder operation, and
//! [`UpdateExpressionParams`] is the finalized `UpdateItem` parameter set.
// "DynamoDB" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

pub mod attribute_value;
pub mod input;
pub mod output;

pub use attribute_value::AttributeValue;
pub use input::{
    AddInput, DeleteInput, ListAppendPosition, RemoveInput, SetIncrementInput, SetInput,
    attribute_names,
};
pub use output::UpdateExpressionParams;

//! End-to-end builder tests that stop at the SDK request boundary.

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::AttributeValue as SdkAttributeValue;
    use ddbexpr_core::{BuilderConfig, UpdateExpressionBuilder, UpdateExpressionError};
    use ddbexpr_model::{
        AddInput, AttributeValue, DeleteInput, RemoveInput, SetIncrementInput, SetInput,
        UpdateExpressionParams,
    };

    use crate::{init_tracing, update_item_input};

    /// Drive a builder from option-bag JSON, one `(operation, input)` pair per call.
    fn run_ops(
        builder: &mut UpdateExpressionBuilder,
        ops: &[(&str, serde_json::Value)],
    ) -> Result<(), UpdateExpressionError> {
        for (op, input) in ops {
            let input = input.clone();
            match *op {
                "Set" => builder.set(serde_json::from_value::<SetInput>(input).unwrap())?,
                "SetIncrement" => builder
                    .set_increment(serde_json::from_value::<SetIncrementInput>(input).unwrap())?,
                "Remove" => builder.remove(serde_json::from_value::<RemoveInput>(input).unwrap())?,
                "Add" => builder.add(serde_json::from_value::<AddInput>(input).unwrap())?,
                "Delete" => builder.delete(serde_json::from_value::<DeleteInput>(input).unwrap())?,
                other => panic!("unknown operation {other}"),
            }
        }
        Ok(())
    }

    #[test]
    fn test_should_build_profile_quantity_update_from_json() {
        init_tracing();
        let mut builder = UpdateExpressionBuilder::default();
        run_ops(
            &mut builder,
            &[(
                "Set",
                serde_json::json!({
                    "Name": "#p.qty",
                    "AttributeNames": {"p": "profile"},
                    "Value": {"N": "5"}
                }),
            )],
        )
        .unwrap();

        let json = serde_json::to_value(builder.update_expression_params()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "UpdateExpression": "SET #p.qty = :A",
                "ExpressionAttributeNames": {"p": "profile"},
                "ExpressionAttributeValues": {":A": {"N": "5"}}
            })
        );
    }

    #[test]
    fn test_should_serialize_full_statement() {
        init_tracing();
        let mut builder = UpdateExpressionBuilder::default();
        run_ops(
            &mut builder,
            &[
                ("SetIncrement", serde_json::json!({"Name": "views"})),
                (
                    "Set",
                    serde_json::json!({"Name": "tags", "Value": {"S": "new"}, "ListAppend": "end"}),
                ),
                (
                    "Set",
                    serde_json::json!({"Name": "tags", "Value": {"S": "first"}, "ListAppend": "start"}),
                ),
                ("Remove", serde_json::json!({"Name": "draft"})),
                (
                    "Add",
                    serde_json::json!({"Name": "labels", "Value": {"SS": ["x"]}}),
                ),
                (
                    "Delete",
                    serde_json::json!({"Name": "labels", "Value": {"SS": ["y"]}}),
                ),
            ],
        )
        .unwrap();

        let json = serde_json::to_value(builder.update_expression_params()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "UpdateExpression": "SET views = if_not_exists(views, :A) + :B, \
                    tags = list_append(if_not_exists(tags, :zz_empty_list), :C), \
                    tags = list_append(:D, if_not_exists(tags, :zz_empty_list)) \
                    REMOVE draft ADD labels :E DELETE labels :F",
                "ExpressionAttributeValues": {
                    ":A": {"N": "0"},
                    ":B": {"N": "1"},
                    ":C": {"L": [{"S": "new"}]},
                    ":D": {"L": [{"S": "first"}]},
                    ":E": {"SS": ["x"]},
                    ":F": {"SS": ["y"]},
                    ":zz_empty_list": {"L": []}
                }
            })
        );
    }

    #[test]
    fn test_should_reject_option_bag_with_value_and_expression() {
        let mut builder = UpdateExpressionBuilder::default();
        let err = run_ops(
            &mut builder,
            &[(
                "Set",
                serde_json::json!({"SetExpression": "a = :A", "Value": {"N": "1"}}),
            )],
        )
        .unwrap_err();
        assert_eq!(err, UpdateExpressionError::ConflictingInput { field: "Value" });
        assert!(builder.update_expression_params().is_empty());
    }

    #[test]
    fn test_should_stop_at_first_failing_operation_under_validation() {
        let mut builder =
            UpdateExpressionBuilder::new(BuilderConfig::builder().validate_names(true).build());
        let err = run_ops(
            &mut builder,
            &[
                ("Remove", serde_json::json!({"Name": "#a", "AttributeNames": {"a": "alpha"}})),
                ("Remove", serde_json::json!({"Name": "#b", "AttributeNames": {"c": "gamma"}})),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, UpdateExpressionError::Validation { ref alias, .. } if alias == "c"));

        let params = builder.update_expression_params();
        assert_eq!(params.update_expression.as_deref(), Some("REMOVE #a"));
        assert_eq!(params.expression_attribute_names.unwrap().len(), 1);
        assert!(params.expression_attribute_values.is_none());
    }

    #[test]
    fn test_should_fit_sdk_update_item_input() {
        let mut builder = UpdateExpressionBuilder::default();
        builder.add_attribute_names([("#s", "status")]);
        let status = builder.add_attribute_value(AttributeValue::s("active"));
        builder.set_expression(format!("#s = {status}"));
        builder
            .add(
                AddInput::builder()
                    .name("logins")
                    .value(AttributeValue::n(1))
                    .build(),
            )
            .unwrap();

        let input =
            update_item_input("users", "user1", &builder.update_expression_params()).unwrap();
        assert_eq!(input.table_name(), Some("users"));
        assert_eq!(input.update_expression(), Some("SET #s = :A ADD logins :B"));
        assert_eq!(
            input
                .expression_attribute_names()
                .and_then(|names| names.get("#s"))
                .map(String::as_str),
            Some("status")
        );
        let values = input.expression_attribute_values().unwrap();
        assert_eq!(values.get(":A"), Some(&SdkAttributeValue::S("active".to_owned())));
        assert_eq!(values.get(":B"), Some(&SdkAttributeValue::N("1".to_owned())));
    }

    #[test]
    fn test_should_leave_sdk_fields_unset_for_empty_params() {
        let input = update_item_input("users", "user1", &UpdateExpressionParams::default()).unwrap();
        assert!(input.update_expression().is_none());
        assert!(input.expression_attribute_names().is_none());
        assert!(input.expression_attribute_values().is_none());
    }

    #[test]
    fn test_should_convert_nested_values_for_sdk() {
        let value = AttributeValue::L(vec![
            AttributeValue::Bool(true),
            AttributeValue::M(std::collections::HashMap::from([(
                "k".to_owned(),
                AttributeValue::Null(true),
            )])),
        ]);
        let SdkAttributeValue::L(items) = crate::to_sdk_value(&value) else {
            panic!("expected a list");
        };
        assert_eq!(items[0], SdkAttributeValue::Bool(true));
        assert!(matches!(&items[1], SdkAttributeValue::M(m) if m.get("k") == Some(&SdkAttributeValue::Null(true))));
    }
}

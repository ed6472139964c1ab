//! Field descriptor resolution: kind mapping and description rendering.

use serde_json::json;

use templatefox_core::fields::{
    self, FieldDescriptor, FieldKind, FieldType, OneOrMany, SubFieldDescriptor,
};

fn descriptor(key: &str, field_type: FieldType) -> FieldDescriptor {
    FieldDescriptor {
        key: key.to_string(),
        label: String::new(),
        field_type,
        required: false,
        help_text: None,
        spec: None,
    }
}

fn sub_field(name: &str, field_type: &str) -> SubFieldDescriptor {
    SubFieldDescriptor {
        name: name.to_string(),
        label: String::new(),
        field_type: field_type.to_string(),
    }
}

#[test]
fn numeric_declared_types_resolve_to_number_kind() {
    assert_eq!(
        fields::resolve(descriptor("count", FieldType::Integer)).kind,
        FieldKind::Number
    );
    assert_eq!(
        fields::resolve(descriptor("total", FieldType::Number)).kind,
        FieldKind::Number
    );
}

#[test]
fn boolean_resolves_to_boolean_kind() {
    assert_eq!(
        fields::resolve(descriptor("paid", FieldType::Boolean)).kind,
        FieldKind::Boolean
    );
}

#[test]
fn everything_else_resolves_to_string_kind() {
    for field_type in [
        FieldType::String,
        FieldType::Text,
        FieldType::Array,
        FieldType::Object,
        FieldType::Other,
    ] {
        assert_eq!(
            fields::resolve(descriptor("field", field_type)).kind,
            FieldKind::String,
            "declared type {field_type} should resolve to string"
        );
    }
}

#[test]
fn array_description_enumerates_spec_property_names() {
    let mut desc = descriptor("items", FieldType::Array);
    desc.spec = Some(OneOrMany::Many(vec![
        sub_field("qty", "number"),
        sub_field("price", "number"),
    ]));

    let resolved = fields::resolve(desc);
    assert_eq!(
        resolved.description,
        "Array with properties: qty, price. Enter as JSON array."
    );
}

#[test]
fn single_spec_descriptor_is_normalized_to_a_sequence() {
    let mut desc = descriptor("items", FieldType::Array);
    desc.spec = Some(OneOrMany::One(sub_field("qty", "number")));

    let resolved = fields::resolve(desc);
    assert_eq!(
        resolved.description,
        "Array with properties: qty. Enter as JSON array."
    );
}

#[test]
fn array_without_spec_states_its_declared_type() {
    let resolved = fields::resolve(descriptor("items", FieldType::Array));
    assert_eq!(resolved.description, "Type: array");
}

#[test]
fn help_text_overrides_the_generated_description() {
    let mut desc = descriptor("items", FieldType::Array);
    desc.spec = Some(OneOrMany::Many(vec![sub_field("qty", "number")]));
    desc.help_text = Some("One line per invoice item.".to_string());

    let resolved = fields::resolve(desc);
    assert_eq!(resolved.description, "One line per invoice item.");
}

#[test]
fn empty_help_text_is_treated_as_absent() {
    let mut desc = descriptor("name", FieldType::Text);
    desc.help_text = Some(String::new());

    let resolved = fields::resolve(desc);
    assert_eq!(resolved.description, "Type: text");
}

#[test]
fn label_falls_back_to_the_key_when_missing() {
    let resolved = fields::resolve(descriptor("customer_name", FieldType::String));
    assert_eq!(resolved.label, "customer_name");

    let mut desc = descriptor("customer_name", FieldType::String);
    desc.label = "Customer Name".to_string();
    assert_eq!(fields::resolve(desc).label, "Customer Name");
}

#[test]
fn required_flag_is_carried_through() {
    let mut desc = descriptor("name", FieldType::String);
    desc.required = true;
    assert!(fields::resolve(desc).required);
}

#[test]
fn descriptors_deserialize_from_an_api_response() {
    let body = json!([
        {
            "key": "customer",
            "label": "Customer",
            "type": "string",
            "required": true
        },
        {
            "key": "items",
            "label": "Items",
            "type": "array",
            "spec": {"name": "qty", "label": "Qty", "type": "number"}
        },
        {
            "key": "issued_on",
            "label": "Issued On",
            "type": "date"
        }
    ]);

    let descriptors: Vec<FieldDescriptor> =
        serde_json::from_value(body).expect("descriptors should deserialize");
    assert_eq!(descriptors.len(), 3);
    assert_eq!(descriptors[0].field_type, FieldType::String);
    assert!(descriptors[0].required);

    // Single-object spec arrives as the One variant.
    let resolved = fields::resolve(descriptors[1].clone());
    assert_eq!(
        resolved.description,
        "Array with properties: qty. Enter as JSON array."
    );

    // Unrecognized declared types degrade to string handling.
    assert_eq!(descriptors[2].field_type, FieldType::Other);
    assert_eq!(fields::resolve(descriptors[2].clone()).kind, FieldKind::String);
}

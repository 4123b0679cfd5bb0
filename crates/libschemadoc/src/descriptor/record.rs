//! Wire-shape record types.
//!
//! One record file holds one query or one named type. Records are parsed
//! from sanitized JSON values and converted into the immutable descriptor
//! types; all type references are folded into canonical signatures during
//! that conversion.

use crate::descriptor::ArgumentDescriptor;
use crate::descriptor::EnumType;
use crate::descriptor::EnumValueDescriptor;
use crate::descriptor::FieldDescriptor;
use crate::descriptor::InputFieldDescriptor;
use crate::descriptor::InputObjectType;
use crate::descriptor::InterfaceType;
use crate::descriptor::ObjectType;
use crate::descriptor::QueryDescriptor;
use crate::descriptor::ScalarType;
use crate::descriptor::TypeDescriptor;
use crate::descriptor::UnionType;
use crate::descriptor::type_ref::WireTypeRef;
use crate::signature;
use serde::Deserialize;

/// A type reference as stored in a record file.
///
/// The extraction step historically stored the already-folded signature
/// string; introspection results carry the wrapped reference object. Both
/// are accepted.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub(crate) enum TypeField {
    Reference(WireTypeRef),
    Signature(String),
}
impl TypeField {
    fn into_signature(self) -> String {
        match self {
            TypeField::Reference(wire) =>
                signature::resolve_signature(wire.into_type_ref().as_ref()),
            TypeField::Signature(sig) => sig,
        }
    }
}

fn signature_of(type_field: Option<TypeField>) -> String {
    type_field
        .map(TypeField::into_signature)
        .unwrap_or_else(|| signature::UNKNOWN_SIGNATURE.to_string())
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArgumentRecord {
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_field: Option<TypeField>,
}
impl From<ArgumentRecord> for ArgumentDescriptor {
    fn from(record: ArgumentRecord) -> Self {
        ArgumentDescriptor {
            default_value: record.default_value,
            description: record.description,
            name: record.name,
            type_signature: signature_of(record.type_field),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FieldRecord {
    #[serde(default)]
    pub args: Vec<ArgumentRecord>,
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_field: Option<TypeField>,
}
impl From<FieldRecord> for FieldDescriptor {
    fn from(record: FieldRecord) -> Self {
        FieldDescriptor {
            args: record.args.into_iter().map(Into::into).collect(),
            description: record.description,
            name: record.name,
            type_signature: signature_of(record.type_field),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EnumValueRecord {
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PossibleTypeRecord {
    pub name: String,
}

/// One query record file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QueryRecord {
    #[serde(default)]
    pub args: Vec<ArgumentRecord>,
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
    #[serde(default, rename = "returnType")]
    pub return_type: Option<TypeField>,
}
impl From<QueryRecord> for QueryDescriptor {
    fn from(record: QueryRecord) -> Self {
        QueryDescriptor {
            args: record.args.into_iter().map(Into::into).collect(),
            description: record.description,
            name: record.name,
            return_type_signature: signature_of(record.return_type),
        }
    }
}

/// One named-type record file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TypeRecord {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "values")]
    pub enum_values: Vec<EnumValueRecord>,
    #[serde(default)]
    pub fields: Vec<FieldRecord>,
    #[serde(default)]
    pub input_fields: Vec<ArgumentRecord>,
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub possible_types: Vec<PossibleTypeRecord>,
}
impl From<TypeRecord> for TypeDescriptor {
    fn from(record: TypeRecord) -> Self {
        match record.kind.as_str() {
            "ENUM" => TypeDescriptor::Enum(EnumType {
                description: record.description,
                name: record.name,
                values: record.enum_values.into_iter()
                    .map(|value| EnumValueDescriptor {
                        description: value.description,
                        name: value.name,
                    })
                    .collect(),
            }),

            "INPUT_OBJECT" => TypeDescriptor::InputObject(InputObjectType {
                description: record.description,
                input_fields: record.input_fields.into_iter()
                    .map(|field| InputFieldDescriptor {
                        default_value: field.default_value,
                        description: field.description,
                        name: field.name,
                        type_signature: signature_of(field.type_field),
                    })
                    .collect(),
                name: record.name,
            }),

            "INTERFACE" => TypeDescriptor::Interface(InterfaceType {
                description: record.description,
                fields: record.fields.into_iter().map(Into::into).collect(),
                name: record.name,
            }),

            "SCALAR" => TypeDescriptor::Scalar(ScalarType {
                description: record.description,
                name: record.name,
            }),

            "UNION" => TypeDescriptor::Union(UnionType {
                description: record.description,
                name: record.name,
                possible_types: record.possible_types.into_iter()
                    .map(|possible_type| possible_type.name)
                    .collect(),
            }),

            // "OBJECT", plus any unknown kind, groups under the "type"
            // category.
            _ => TypeDescriptor::Object(ObjectType {
                description: record.description,
                fields: record.fields.into_iter().map(Into::into).collect(),
                name: record.name,
            }),
        }
    }
}

mod argument;
mod enum_type;
mod field;
mod input_object_type;
mod interface_type;
mod object_type;
mod query;
pub(crate) mod record;
mod scalar_type;
mod type_descriptor;
mod type_ref;
mod union_type;

pub use argument::ArgumentDescriptor;
pub use enum_type::EnumType;
pub use enum_type::EnumValueDescriptor;
pub use field::FieldDescriptor;
pub use input_object_type::InputFieldDescriptor;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use object_type::ObjectType;
pub use query::QueryDescriptor;
pub use scalar_type::ScalarType;
pub use type_descriptor::TypeDescriptor;
pub use type_ref::TypeRef;
pub use union_type::UnionType;

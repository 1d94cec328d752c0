mod input_kind;
mod input_kind_table;
mod type_ref;

pub use input_kind::InputKind;
pub use input_kind::ParseInputKindError;
pub use input_kind_table::InputKindTable;
pub use type_ref::resolve_type;
pub use type_ref::TypeRef;

#[cfg(test)]
mod tests;

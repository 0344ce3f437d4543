//! Custom extractors and request field normalizers.

pub mod normalize;
mod validated_json;
mod validated_query;

pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;

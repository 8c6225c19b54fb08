pub mod grant;
pub mod privilege;
pub mod schema;

pub use grant::GrantRequest;
pub use privilege::{ALL_KEYWORD, Privileges, TargetKind};
pub use schema::{DropSchemaRequest, SchemaRequest};

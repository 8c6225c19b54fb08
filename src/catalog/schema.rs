#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRequest {
    pub name: String,
    pub owner: Option<String>, // AUTHORIZATION role, omitted when empty
}

impl SchemaRequest {
    pub fn new(name: &str, owner: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            owner: owner.filter(|o| !o.is_empty()).map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropSchemaRequest {
    pub name: String,
    pub cascade: bool,
}

impl DropSchemaRequest {
    pub fn new(name: &str, cascade: bool) -> Self {
        Self {
            name: name.to_string(),
            cascade,
        }
    }
}

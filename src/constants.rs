// Configuration file name
pub const CONFIG_FILENAME: &str = "pgddl.yaml";

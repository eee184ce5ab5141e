//! Parameter types for the vault tools.
//!
//! Every tool takes plain string arguments and answers with one string,
//! so only the parameter side needs a schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for `read_note_content`.
///
/// # Examples
///
/// ```
/// use vault_ops_server::types::ReadNoteParams;
///
/// let params: ReadNoteParams =
///     serde_json::from_str(r#"{"file_path": "Vault/Notes/a.md"}"#).unwrap();
/// assert_eq!(params.file_path, "Vault/Notes/a.md");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadNoteParams {
    /// Path of the note to read
    pub file_path: String,
}

/// Parameters for `update_note_content`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateNoteParams {
    /// Path of an existing note to overwrite
    pub file_path: String,

    /// Complete replacement content, frontmatter and body included
    pub full_content: String,
}

/// Parameters for `list_directory_structure`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListStructureParams {
    /// Root directory of the vault (or any folder inside it)
    pub root_path: String,
}

/// Parameters for `move_file`.
///
/// # Examples
///
/// ```
/// use vault_ops_server::types::MoveFileParams;
///
/// let params = MoveFileParams {
///     source_path: "/vault/a.md".to_string(),
///     destination_path: "/vault/Archive/2024/a.md".to_string(),
/// };
/// assert!(params.destination_path.ends_with("a.md"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MoveFileParams {
    /// Current path of the file
    pub source_path: String,

    /// New path of the file, file name included
    pub destination_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_params_deserialize() {
        let params: UpdateNoteParams = serde_json::from_value(serde_json::json!({
            "file_path": "a.md",
            "full_content": "---\ntags: []\n---\nbody"
        }))
        .unwrap();

        assert_eq!(params.file_path, "a.md");
        assert!(params.full_content.starts_with("---"));
    }

    #[test]
    fn test_move_params_missing_field_rejected() {
        let result: Result<MoveFileParams, _> =
            serde_json::from_value(serde_json::json!({ "source_path": "a.md" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_list_params_schema_has_root_path() {
        let schema = schemars::schema_for!(ListStructureParams);
        let value = serde_json::to_value(&schema).unwrap();
        assert!(value["properties"]["root_path"].is_object());
    }
}

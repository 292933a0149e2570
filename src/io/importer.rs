// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! JSON scene importer

use crate::error::Result;
use crate::scene::{Node, NodeRepr};
use anyhow::Context;
use std::fs;

/// Parse a JSON scene description into a node tree.
///
/// Malformed JSON fails with `ScadError::Json`; well-formed JSON carrying a
/// value a constructor rejects fails with `ScadError::InvalidArgument`.
pub fn parse_scene(source: &str) -> Result<Node> {
    let repr: NodeRepr = serde_json::from_str(source)?;
    Node::try_from(repr)
}

/// Import a JSON scene file
pub fn import_scene_file(path: &str) -> anyhow::Result<Node> {
    let source = fs::read_to_string(path)
        .context(format!("Failed to read scene file: {}", path))?;

    parse_scene(&source).context(format!("Failed to load scene file: {}", path))
}

/// Serialize a node tree back to pretty JSON
pub fn scene_to_json(node: &Node) -> Result<String> {
    Ok(serde_json::to_string_pretty(node)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScadError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_scene_file() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, r#"{{"Cube": {{"size": [10, 10, 10]}}}}"#)?;

        let node = import_scene_file(file.path().to_str().unwrap())?;
        assert_eq!(node.kind(), "cube");

        Ok(())
    }

    #[test]
    fn test_rejected_value_is_an_invalid_argument() {
        let err = parse_scene(r#"{"Sphere": {"radius": -1}}"#).unwrap_err();
        assert_eq!(err.context(), Some("Sphere"));
        assert!(err.to_string().contains("`radius`"), "{}", err);
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let err = parse_scene(r#"{"Sphere": {"radius": "#).unwrap_err();
        assert!(matches!(err, ScadError::Json(_)));

        let err = parse_scene(r#"{"Pyramid": {"size": 1}}"#).unwrap_err();
        assert!(matches!(err, ScadError::Json(_)));
    }

    #[test]
    fn test_file_errors_keep_the_typed_cause() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, r#"{{"Cube": {{"size": [1, 2]}}}}"#)?;

        let err = import_scene_file(file.path().to_str().unwrap()).unwrap_err();
        let cause = err
            .chain()
            .find_map(|e| e.downcast_ref::<ScadError>())
            .expect("scene error in chain");
        assert_eq!(cause.context(), Some("Cube"));
        Ok(())
    }
}

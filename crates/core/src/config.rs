use crate::error::Result;
use std::path::Path;
use wayfinder_api::NavigationOptions;

/// Read navigation options from a JSON file. Missing keys take their defaults.
pub fn load_options(path: &Path) -> Result<NavigationOptions> {
    let text = std::fs::read_to_string(path)?;
    Ok(NavigationOptions::from_json_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WayfinderError;

    #[test]
    fn test_load_options_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navigation.json");
        std::fs::write(
            &path,
            r#"{ "include_namespaces": ["SampleApp.Apps"], "history_limit": 10 }"#,
        )
        .unwrap();

        let options = load_options(&path).unwrap();
        assert_eq!(options.include_namespaces, vec!["SampleApp.Apps"]);
        assert_eq!(options.history_limit, Some(10));
        assert!(!options.searchable_menu);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_options(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, WayfinderError::Io(_)));
    }
}

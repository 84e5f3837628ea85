//! Configuration loaded from `.newsfeed.toml`.
//!
//! Every field has a default, so an absent or partial file is fine. CLI
//! flags are applied on top of the loaded values by the binary.

mod core;
mod loader;

pub use self::core::{
    ColorSetting, DisplayConfig, FeedConfig, PagingStrategy, SourceConfig, ViewConfig,
};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

#[cfg(test)]
mod tests {
    use super::loader::{
        handle_read_error, load_config_from_ancestors, try_load_config_from_path,
        MAX_TRAVERSAL_DEPTH,
    };
    use super::*;
    use crate::view::PagingMode;
    use indoc::indoc;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_parse_and_validate_config_valid_toml() {
        let toml = indoc! {r#"
            [view]
            page_size = 20
            pagination_group_size = 7

            [source]
            paging = "server"

            [display]
            color = "never"
        "#};
        let config = parse_and_validate_config(toml).unwrap();
        assert_eq!(config.view.page_size, 20);
        assert_eq!(config.view.pagination_group_size, 7);
        assert_eq!(config.view.top_stocks, 5);
        assert_eq!(config.source.paging, PagingStrategy::Server);
        assert_eq!(config.display.color, ColorSetting::Never);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, FeedConfig::default());
        assert_eq!(config.view.page_size, 10);
        assert_eq!(config.view.pagination_group_size, 5);
    }

    #[test]
    fn test_parse_and_validate_config_invalid_toml() {
        let result = parse_and_validate_config("[view\npage_size = ");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = parse_and_validate_config("[view]\npage_size = 0").unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn test_view_params_from_config() {
        let config = parse_and_validate_config("[source]\npaging = \"server\"").unwrap();
        let params = config.view_params().unwrap();
        assert_eq!(params.page_size().get(), 10);
        assert_eq!(params.paging, PagingMode::Server { total: 0 });
    }

    #[test]
    fn test_directory_ancestors_generates_correct_sequence() {
        let ancestors: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 10).collect();
        assert_eq!(
            ancestors,
            vec![
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
                PathBuf::from("/a"),
                PathBuf::from("/"),
            ]
        );
    }

    #[test]
    fn test_directory_ancestors_respects_max_depth() {
        let ancestors: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(ancestors.len(), 2);
    }

    #[test]
    fn test_try_load_config_from_path_with_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[view]\npage_size = 3\n").unwrap();

        let config = try_load_config_from_path(&path).unwrap();
        assert_eq!(config.view.page_size, 3);
    }

    #[test]
    fn test_try_load_config_from_path_with_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "view = [").unwrap();
        assert!(try_load_config_from_path(&path).is_none());
    }

    #[test]
    fn test_try_load_config_from_path_with_nonexistent_file() {
        let dir = TempDir::new().unwrap();
        assert!(try_load_config_from_path(&dir.path().join("missing.toml")).is_none());
    }

    #[test]
    fn test_config_found_in_ancestor() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[view]\ntop_stocks = 8\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = load_config_from_ancestors(nested);
        assert_eq!(config.view.top_stocks, 8);
    }

    #[test]
    fn test_search_stops_after_ten_directories() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[view]\ntop_stocks = 8\n").unwrap();

        // Nine levels down: the config directory is the tenth searched
        let mut nested = dir.path().to_path_buf();
        for level in 1..MAX_TRAVERSAL_DEPTH {
            nested.push(format!("l{}", level));
        }
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(load_config_from_ancestors(nested.clone()).view.top_stocks, 8);

        nested.push("too-deep");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(load_config_from_ancestors(nested), FeedConfig::default());
    }

    #[test]
    fn test_load_config_from_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_config_from(&dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_handle_read_error_with_not_found() {
        let error = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        handle_read_error(&PathBuf::from("/tmp/.newsfeed.toml"), &error);
    }
}

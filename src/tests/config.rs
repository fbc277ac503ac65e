#[cfg(test)]
mod tests {
    use crate::config::Config;
    use std::fs;
    use tempfile::NamedTempFile;
    use validator::Validate;

    fn write_config(contents: &str) -> NamedTempFile {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(&temp_file, contents).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config() {
        let temp_file = write_config(
            r#"
            url: "https://gm.example.com"
            version: "2.7"
            username: "admin"
            password: "secret"
            insecure: true
        "#,
        );

        let config = Config::load(temp_file.path()).unwrap();
        assert_eq!(config.url, "https://gm.example.com");
        assert_eq!(config.version, "2.7");
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "secret");
        assert!(config.insecure);
        assert!(!config.debug);
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::load("/nonexistent/infoblox.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to open config file"));
    }

    #[test]
    fn test_invalid_config() {
        let temp_file = write_config(
            r#"
            url: "https://gm.example.com"
            # missing required fields
        "#,
        );

        let err = Config::load(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_validation() {
        let temp_file = write_config(
            r#"
            url: "not a url"
            version: ""
            username: "admin"
            password: "secret"
        "#,
        );
        let err = Config::load(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));

        let config: Config = serde_yaml::from_str(
            r#"
            url: "https://gm.example.com"
            version: "v2.7"
            username: ""
            password: "secret"
        "#,
        )
        .unwrap();
        let errors = config.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }
}

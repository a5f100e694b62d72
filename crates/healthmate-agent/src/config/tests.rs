#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_defaults_match_original_backend() {
        let config = Config::default();
        assert_eq!(config.data.knowledge_base, PathBuf::from("data/knowledge_base.json"));
        assert_eq!(config.output.confidence_decimals, 3);
        assert!((config.scoring.fallback_likelihood - 0.01).abs() < 1e-12);
        assert!(config.output.disclaimer.contains("not a substitute"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.data.red_flags, PathBuf::from("data/red_flags.json"));
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml_str(
            r#"
[data]
knowledge_base = "/srv/healthmate/kb.yaml"

[scoring]
fallback_likelihood = 0.05
"#,
        )
        .unwrap();
        assert_eq!(config.data.knowledge_base, PathBuf::from("/srv/healthmate/kb.yaml"));
        assert_eq!(config.data.red_flags, default_red_flags_path());
        assert!((config.scoring.fallback_likelihood - 0.05).abs() < 1e-12);
        assert_eq!(config.output.confidence_decimals, default_confidence_decimals());
    }

    #[test]
    fn test_zero_fallback_rejected() {
        let err = Config::from_toml_str("[scoring]\nfallback_likelihood = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("fallback_likelihood"));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let err = Config::load(Some(Path::new("/no/such/healthmate.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}

use serde::{Deserialize, Serialize};

/// Endpoints and dataset names used to resolve the exercise catalog.
///
/// Missing fields fall back to their defaults, so a partial JSON document is a valid
/// configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
    pub rpc_function: String,
    pub exercises_table: String,
    pub involvement_table: String,
    pub data_base_url: String,
    pub manifest_path: String,
    pub meta_dataset: String,
    pub training_dataset: String,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn rpc_url(&self) -> String {
        format!(
            "{}/rest/v1/rpc/{}",
            self.base_url.trim_end_matches('/'),
            self.rpc_function
        )
    }

    #[must_use]
    pub fn table_url(&self, table: &str, columns: &str) -> String {
        format!(
            "{}/rest/v1/{table}?select={columns}",
            self.base_url.trim_end_matches('/')
        )
    }

    #[must_use]
    pub fn manifest_url(&self) -> String {
        self.data_url(&self.manifest_path)
    }

    /// Resolves a path from the manifest. Absolute paths and URLs are used unchanged.
    #[must_use]
    pub fn data_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with('/') {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.data_base_url.trim_end_matches('/'),
                path.trim_start_matches("./")
            )
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: None,
            rpc_function: "get_exercises_with_involvement".to_string(),
            exercises_table: "exercises".to_string(),
            involvement_table: "exercise_muscle_involvement".to_string(),
            data_base_url: "/data".to_string(),
            manifest_path: "manifest.json".to_string(),
            meta_dataset: "exercises_meta".to_string(),
            training_dataset: "exercises_training_data".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_config_from_json() {
        assert_eq!(
            Config::from_json(
                r#"{"base_url": "https://db.example.com/", "api_key": "anon", "rpc_function": "catalog"}"#
            )
            .unwrap(),
            Config {
                base_url: "https://db.example.com/".to_string(),
                api_key: Some("anon".to_string()),
                rpc_function: "catalog".to_string(),
                ..Config::default()
            }
        );
    }

    #[test]
    fn test_config_from_empty_json() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_config_from_invalid_json() {
        assert!(Config::from_json(r#"{"base_url": 1}"#).is_err());
    }

    #[test]
    fn test_config_urls() {
        let config = Config {
            base_url: "https://db.example.com/".to_string(),
            ..Config::default()
        };

        assert_eq!(
            config.rpc_url(),
            "https://db.example.com/rest/v1/rpc/get_exercises_with_involvement"
        );
        assert_eq!(
            config.table_url("exercises", "id,name"),
            "https://db.example.com/rest/v1/exercises?select=id,name"
        );
        assert_eq!(config.manifest_url(), "/data/manifest.json");
    }

    #[rstest]
    #[case("exercises/meta.v2.json", "/data/exercises/meta.v2.json")]
    #[case("./exercises/meta.v2.json", "/data/exercises/meta.v2.json")]
    #[case("/static/meta.json", "/static/meta.json")]
    #[case("https://cdn.example.com/meta.json", "https://cdn.example.com/meta.json")]
    fn test_config_data_url(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(Config::default().data_url(path), expected);
    }
}

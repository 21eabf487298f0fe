use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// MySQL `host:port`.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub name: String,

    /// Full connection URL (`mysql://…` or `sqlite:…`). Takes precedence
    /// over the individual MySQL fields when set.
    #[serde(default)]
    pub url: Option<String>,

    /// Run `CREATE TABLE IF NOT EXISTS dns_records` before streaming.
    #[serde(default = "default_true")]
    pub create_table: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            user: default_user(),
            password: String::new(),
            name: String::new(),
            url: None,
            create_table: true,
        }
    }
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }

        let user = utf8_percent_encode(&self.user, NON_ALPHANUMERIC);
        if self.password.is_empty() {
            format!("mysql://{}@{}/{}", user, self.host, self.name)
        } else {
            let password = utf8_percent_encode(&self.password, NON_ALPHANUMERIC);
            format!("mysql://{}:{}@{}/{}", user, password, self.host, self.name)
        }
    }

    /// Connection URL with the password masked, for logging.
    pub fn redacted_url(&self) -> String {
        if let Some(url) = &self.url {
            return match (url.find("://"), url.rfind('@')) {
                (Some(scheme_end), Some(at)) if at > scheme_end => {
                    format!("{}://***{}", &url[..scheme_end], &url[at..])
                }
                _ => url.clone(),
            };
        }
        format!("mysql://{}:***@{}/{}", self.user, self.host, self.name)
    }
}

fn default_host() -> String {
    "127.0.0.1:3306".to_string()
}

fn default_user() -> String {
    "root".to_string()
}

fn default_true() -> bool {
    true
}

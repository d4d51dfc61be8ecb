//! Per-process skill state: connection details and the notification toggle

use std::fmt;
use std::time::Duration;

use crate::settings::{Settings, SettingsStore};

/// Resolved Kodi endpoint and credentials
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub endpoint: String,
    pub user: String,
    pub password: String,
    pub image_base: String,
    pub timeout: Duration,
}

impl ConnectionConfig {
    /// Build a connection from settings; `None` unless host, port, user and
    /// password are all present.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        let fields = [
            &settings.kodi_ip,
            &settings.kodi_port,
            &settings.kodi_user,
            &settings.kodi_pass,
        ];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return None;
        }

        let authority = format!("{}:{}", settings.kodi_ip.trim(), settings.kodi_port.trim());
        Some(Self {
            endpoint: format!("http://{authority}/jsonrpc"),
            user: settings.kodi_user.clone(),
            password: settings.kodi_pass.clone(),
            image_base: format!("http://{authority}/image/"),
            timeout: Duration::from_secs(settings.request_timeout_secs),
        })
    }

    /// Web URL for a Kodi artwork reference such as `image://...`
    pub fn image_url(&self, artwork: &str) -> String {
        format!("{}{}", self.image_base, urlencoding::encode(artwork))
    }
}

// Credentials stay out of logs
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("endpoint", &self.endpoint)
            .field("user", &self.user)
            .field("image_base", &self.image_base)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Whether lifecycle events are mirrored to Kodi as notifications
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NotifierState {
    enabled: bool,
}

impl NotifierState {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// State owned by the skill and mutated only while handling one message
#[derive(Debug)]
pub struct SkillSession {
    settings: SettingsStore,
    connection: Option<ConnectionConfig>,
    configured: bool,
    pub notifier: NotifierState,
}

impl SkillSession {
    pub fn new(settings: SettingsStore) -> Self {
        let mut session = Self {
            settings,
            connection: None,
            configured: false,
            notifier: NotifierState::default(),
        };
        session.refresh();
        session
    }

    /// Re-derive the connection from the current settings.
    ///
    /// Incomplete settings keep the previous connection, but the session is
    /// reported as unconfigured until all four fields are present again.
    pub fn refresh(&mut self) {
        tracing::info!("Settings changed, updating Kodi connection");
        let settings = self.settings.reload();

        match ConnectionConfig::from_settings(settings) {
            Some(connection) => {
                tracing::info!(endpoint = %connection.endpoint, "Kodi connection configured");
                self.connection = Some(connection);
                self.configured = true;
            }
            None => {
                tracing::info!("Kodi settings incomplete, keeping previous connection");
                self.configured = false;
            }
        }
    }

    /// Connection to use for outbound calls, if the settings are complete
    pub fn connection(&self) -> Option<&ConnectionConfig> {
        if self.configured {
            self.connection.as_ref()
        } else {
            None
        }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn settings(&self) -> &Settings {
        self.settings.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Settings {
        Settings {
            kodi_ip: "10.0.0.5".to_string(),
            kodi_port: "8080".to_string(),
            kodi_user: "kodi".to_string(),
            kodi_pass: "secret".to_string(),
            ..Settings::default()
        }
    }

    #[test]
    fn connection_requires_all_four_fields() {
        let connection = ConnectionConfig::from_settings(&complete()).unwrap();
        assert_eq!(connection.endpoint, "http://10.0.0.5:8080/jsonrpc");
        assert_eq!(connection.image_base, "http://10.0.0.5:8080/image/");
        assert_eq!(connection.timeout, Duration::from_secs(5));

        let missing_pass = Settings {
            kodi_pass: String::new(),
            ..complete()
        };
        assert!(ConnectionConfig::from_settings(&missing_pass).is_none());
    }

    #[test]
    fn debug_output_hides_password() {
        let connection = ConnectionConfig::from_settings(&complete()).unwrap();
        assert!(!format!("{connection:?}").contains("secret"));
    }

    #[test]
    fn image_url_percent_encodes_artwork() {
        let connection = ConnectionConfig::from_settings(&complete()).unwrap();
        assert_eq!(
            connection.image_url("image://a b/"),
            "http://10.0.0.5:8080/image/image%3A%2F%2Fa%20b%2F"
        );
    }

    #[test]
    fn empty_settings_leave_session_unconfigured() {
        let empty = Settings {
            kodi_ip: String::new(),
            kodi_port: String::new(),
            ..Settings::default()
        };
        let session = SkillSession::new(SettingsStore::in_memory(empty));
        assert!(!session.is_configured());
        assert!(session.connection().is_none());
    }

    #[test]
    fn incomplete_update_keeps_previous_connection_but_disables_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let write = |settings: &Settings| {
            std::fs::write(&path, toml::to_string(settings).unwrap()).unwrap();
        };

        write(&complete());
        let mut session = SkillSession::new(SettingsStore::from_file(path.clone()).unwrap());
        assert!(session.is_configured());

        write(&Settings {
            kodi_user: String::new(),
            ..complete()
        });
        session.refresh();
        assert!(!session.is_configured());
        assert!(session.connection().is_none());

        write(&Settings {
            request_timeout_secs: 2,
            ..complete()
        });
        session.refresh();
        let connection = session.connection().unwrap();
        assert_eq!(connection.user, "kodi");
        assert_eq!(connection.timeout, Duration::from_secs(2));
    }

    #[test]
    fn notifier_starts_disabled() {
        assert!(!NotifierState::default().is_enabled());
    }
}

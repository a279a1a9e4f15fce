use crate::error::{fatal_err, SimError};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_WEB_ROOT: &str = "./web";

fn default_host() -> String { DEFAULT_HOST.to_string() }
const fn default_port() -> u16 { DEFAULT_PORT }
fn default_fallback_ports() -> Vec<u16> { vec![5080, 5055] }
fn default_web_root() -> String { DEFAULT_WEB_ROOT.to_string() }
const fn default_as_true() -> bool { true }

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigApi {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_fallback_ports")]
    pub fallback_ports: Vec<u16>,
    #[serde(default = "default_web_root")]
    pub web_root: String,
    #[serde(default = "default_as_true")]
    pub web_ui_enabled: bool,
}

impl Default for ConfigApi {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            fallback_ports: default_fallback_ports(),
            web_root: default_web_root(),
            web_ui_enabled: true,
        }
    }
}

impl ConfigApi {
    pub fn prepare(&mut self) -> Result<(), SimError> {
        self.host = self.host.trim().to_string();
        if self.host.is_empty() {
            return Err(fatal_err!("api.host must not be empty"));
        }
        if self.web_root.trim().is_empty() {
            self.web_root = default_web_root();
        }
        Ok(())
    }

    /// Ports tried in order when binding, the last entry `0` asks the OS for a free one.
    pub fn bind_candidates(&self) -> Vec<u16> {
        let mut ports = vec![self.port];
        for port in &self.fallback_ports {
            if !ports.contains(port) {
                ports.push(*port);
            }
        }
        if !ports.contains(&0) {
            ports.push(0);
        }
        ports
    }
}

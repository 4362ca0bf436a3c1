use std::net::SocketAddr;

use serde::Deserialize;
use handlerlab_core::error::{LabError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabConfig {
    pub version: u32,

    #[serde(default = "default_course_store")]
    pub course_store: ListenSection,

    #[serde(default = "default_hit_counter")]
    pub hit_counter: ListenSection,
}

impl LabConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(LabError::InvalidConfig(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        let courses = self.course_store.listen_addr("course_store")?;
        let counter = self.hit_counter.listen_addr("hit_counter")?;
        if courses == counter {
            return Err(LabError::InvalidConfig(
                "course_store.listen and hit_counter.listen must differ".into(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenSection {
    pub listen: String,
}

impl ListenSection {
    /// Parse `listen`; `section` names the YAML key in the error.
    pub fn listen_addr(&self, section: &str) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            LabError::InvalidConfig(format!(
                "{section}.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_course_store() -> ListenSection {
    ListenSection {
        listen: "0.0.0.0:8080".into(),
    }
}

fn default_hit_counter() -> ListenSection {
    ListenSection {
        listen: "0.0.0.0:8081".into(),
    }
}

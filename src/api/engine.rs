use std::sync::Arc;

use odia_session::SessionConfig;

use super::{OdiaError, OdiaSession};

#[derive(uniffi::Object)]
pub struct OdiaEngine {
    config: SessionConfig,
}

#[uniffi::export]
impl OdiaEngine {
    /// Engine using the configured settings.
    #[uniffi::constructor]
    fn new() -> Arc<Self> {
        Arc::new(Self {
            config: SessionConfig::default(),
        })
    }

    /// Engine with explicit session options, validated like the settings file.
    #[uniffi::constructor]
    fn with_options(
        suggestion_limit: u32,
        quick_select: u32,
        append_space: bool,
    ) -> Result<Arc<Self>, OdiaError> {
        if suggestion_limit == 0 {
            return Err(OdiaError::InvalidData {
                msg: "suggestion_limit must be positive".to_string(),
            });
        }
        let max = odia_core::settings::MAX_QUICK_SELECT;
        if !(1..=max).contains(&(quick_select as usize)) {
            return Err(OdiaError::InvalidData {
                msg: format!("quick_select must be between 1 and {max}"),
            });
        }
        Ok(Arc::new(Self {
            config: SessionConfig {
                suggestion_limit: suggestion_limit as usize,
                quick_select: quick_select as usize,
                append_space,
            },
        }))
    }

    fn create_session(&self) -> Arc<OdiaSession> {
        OdiaSession::new(self.config)
    }
}

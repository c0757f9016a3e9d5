//! Shared state for command handlers

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;

use giftbox::presentation::{create_renderer, GiftRenderer, OutputFormat};
use giftbox::{
    Config, Gift, GiftEditorService, GiftError, GiftItem, GiftItemPolicy, ServiceResponse,
    SugarRangePolicy,
};

pub struct CommandContext {
    pub config: Config,
    renderer: Box<dyn GiftRenderer>,
}

impl CommandContext {
    pub fn new(config: Config, json: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let unicode = config.output.unicode && io::stdout().is_terminal();
        let renderer = create_renderer(format, &config.display, unicode);
        Self { config, renderer }
    }

    pub fn editor(&self) -> GiftEditorService<SugarRangePolicy, GiftItemPolicy> {
        self.config.editor()
    }

    pub fn renderer(&self) -> &dyn GiftRenderer {
        self.renderer.as_ref()
    }

    /// Print the rendered success payload, or the failure and exit 1
    pub fn respond<T>(
        &self,
        response: ServiceResponse<T>,
        render: impl FnOnce(&dyn GiftRenderer, &str, T) -> String,
    ) -> Result<()> {
        match response {
            ServiceResponse::Success { message, data } => {
                self.print(&render(self.renderer(), &message, data))
            }
            ServiceResponse::Failure { message } => self.fail(&message),
        }
    }

    pub fn fail(&self, message: &str) -> ! {
        let _ = self.print(&self.renderer.failure(message));
        std::process::exit(1);
    }

    fn print(&self, text: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Read a gift document; item ids must be unique
pub fn load_gift(path: &Path) -> Result<Gift> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read gift {}", path.display()))?;
    let gift: Gift = serde_json::from_str(&content)
        .map_err(GiftError::from)
        .with_context(|| format!("invalid gift document {}", path.display()))?;

    if let Some(id) = gift.duplicate_item_id() {
        bail!("duplicate gift item id {} in {}", id, path.display());
    }
    Ok(gift)
}

/// Read a single gift item document
pub fn load_item(path: &Path) -> Result<GiftItem> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read gift item {}", path.display()))?;
    let item = serde_json::from_str(&content)
        .map_err(GiftError::from)
        .with_context(|| format!("invalid gift item document {}", path.display()))?;
    Ok(item)
}

use serde::{Deserialize, Serialize};

/// Upper bound on the search depth. The first searched move already
/// occupies one cell, so 8 further plies always reach the end of a 3x3
/// game; a limit of 8 therefore means "search to the end".
pub const MAX_SEARCH_DEPTH: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotSettings {
    pub pruning_enabled: bool,
    pub depth_limit: usize,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            pruning_enabled: true,
            depth_limit: MAX_SEARCH_DEPTH,
        }
    }
}

impl BotSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.depth_limit > MAX_SEARCH_DEPTH {
            return Err(format!(
                "depth_limit must be between 0 and {}, got {}",
                MAX_SEARCH_DEPTH, self.depth_limit
            ));
        }
        Ok(())
    }
}

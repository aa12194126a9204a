/// Verbosity used when nothing else is configured. Only errors (level 1) fall
/// under it; warnings start at 6 and trace output at 9.
pub const DEFAULT_VERBOSITY: u8 = 5;

/// Settings for one run of the tool. Built once at startup and handed to the
/// dispatcher, the archive operations and the logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub verbosity: u8,
    /// Delete a pre-existing destination instead of reporting a conflict.
    pub replace: bool,
    /// Store already-compressed files instead of deflating them again.
    pub skip_compression: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            verbosity: DEFAULT_VERBOSITY,
            replace: true,
            skip_compression: true,
        }
    }
}

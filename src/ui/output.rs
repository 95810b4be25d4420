//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show per-tool detail with full multi-line versions.
    Verbose,
    /// Show status and per-tool detail.
    #[default]
    Normal,
    /// Show only status lines.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows per-tool detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}

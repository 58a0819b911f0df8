use std::io::IsTerminal;

use crate::error::{KeywordKind, ParseKeywordError};
use crate::util::{Environment, ProcessEnv};

/// The user's preference for colored output.
///
/// [`ColorMode::Auto`] defers to the runtime environment, whereas the other
/// two modes override it. Modes parse from and display as their lower-case
/// names, so they can be taken straight from a command line option or an
/// environment variable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Style output only if it goes to a terminal and `NO_COLOR` is not set.
    #[default]
    Auto,
    /// Always style output.
    Always,
    /// Never style output.
    Never,
}

impl ColorMode {
    /// Get this mode's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }

    /// Determine whether to style output in the given environment.
    pub fn resolve(self, env: &EnvironmentSnapshot) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => env.is_tty && !env.no_color_defined,
        }
    }

    /// Read the color mode from the environment variable.
    ///
    /// This method returns `None` if the variable is not defined or empty,
    /// and an error if its value does not name a color mode.
    pub fn from_env_var(key: &str) -> Result<Option<Self>, ParseKeywordError> {
        color_mode_from_environment(&ProcessEnv, key)
    }
}

impl core::str::FromStr for ColorMode {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for mode in [Self::Auto, Self::Always, Self::Never] {
            if s.eq_ignore_ascii_case(mode.name()) {
                return Ok(mode);
            }
        }
        Err(ParseKeywordError::new(KeywordKind::ColorMode, s))
    }
}

impl core::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn color_mode_from_environment<E: Environment>(
    env: &E,
    key: &str,
) -> Result<Option<ColorMode>, ParseKeywordError> {
    match env.value(key) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => value.parse().map(Some),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(value)) => Err(ParseKeywordError::new(
            KeywordKind::ColorMode,
            value.to_string_lossy(),
        )),
    }
}

// ------------------------------------------------------------------------------------------------

/// The facts about the runtime environment that determine color support.
///
/// The default snapshot has both facts false. In other words, a terminal
/// whose status is unknown counts as no terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EnvironmentSnapshot {
    /// Whether standard output is a terminal.
    pub is_tty: bool,
    /// Whether the `NO_COLOR` environment variable is defined, with any value.
    pub no_color_defined: bool,
}

impl EnvironmentSnapshot {
    /// Create a new snapshot with the given facts.
    pub const fn new(is_tty: bool, no_color_defined: bool) -> Self {
        Self {
            is_tty,
            no_color_defined,
        }
    }

    /// Capture the current process's environment.
    ///
    /// This method checks whether standard output is a terminal and whether
    /// `NO_COLOR` is defined.
    pub fn capture() -> Self {
        snapshot_from_environment(&ProcessEnv, std::io::stdout().is_terminal())
    }
}

// Per https://no-color.org, the mere presence of NO_COLOR disables color,
// even with an empty value.
pub(crate) fn snapshot_from_environment<E: Environment>(env: &E, is_tty: bool) -> EnvironmentSnapshot {
    EnvironmentSnapshot::new(is_tty, env.has("NO_COLOR"))
}

/// Determine whether to style output.
///
/// A missing snapshot means that nothing is known about the environment,
/// which is treated like the [default](EnvironmentSnapshot::default)
/// snapshot. Hence [`ColorMode::Auto`] without a snapshot disables styles.
pub fn resolve_capability(mode: ColorMode, env: Option<&EnvironmentSnapshot>) -> bool {
    let snapshot = env.copied().unwrap_or_default();
    let enabled = mode.resolve(&snapshot);
    tracing::debug!(
        %mode,
        is_tty = snapshot.is_tty,
        no_color_defined = snapshot.no_color_defined,
        enabled,
        "resolved styling capability"
    );
    enabled
}

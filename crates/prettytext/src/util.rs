use std::env::VarError;
use std::ffi::OsString;

/// Read-only access to environment variables.
///
/// Capability detection only ever asks two questions of the environment:
/// Is a variable defined at all, and what is its value? Putting both behind
/// this trait lets tests substitute a fake environment for the process's own.
pub(crate) trait Environment {
    /// Look up the variable's raw value, which need not be valid UTF-8.
    fn lookup(&self, name: &str) -> Option<OsString>;

    /// Get the variable's value, which must be valid UTF-8.
    fn value(&self, name: &str) -> Result<String, VarError> {
        match self.lookup(name) {
            None => Err(VarError::NotPresent),
            Some(raw) => raw.into_string().map_err(VarError::NotUnicode),
        }
    }

    /// Check for the variable. An empty value counts as defined.
    fn has(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

/// The current process's environment variables.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}


#[cfg(test)]
pub(crate) use test::FakeEnv;

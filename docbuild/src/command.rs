//! Mapping of the positional CLI argument to an action.

/// Positional argument accepted for the cleanup flow.
pub const CLEAN: &str = "clean";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No argument: compile and publish.
    Build,
    Clean,
    /// Anything else. Reported and ignored.
    Unknown(String),
}

impl Invocation {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Self::Build,
            Some(CLEAN) => Self::Clean,
            Some(other) => Self::Unknown(other.to_string()),
        }
    }
}

pub const UNKNOWN_COMMAND_NOTICE: &str = "Unknown command.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_arguments() {
        assert_eq!(Invocation::from_arg(None), Invocation::Build);
        assert_eq!(Invocation::from_arg(Some("clean")), Invocation::Clean);
        assert_eq!(
            Invocation::from_arg(Some("Clean")),
            Invocation::Unknown("Clean".to_string())
        );
        assert_eq!(
            Invocation::from_arg(Some("foo")),
            Invocation::Unknown("foo".to_string())
        );
    }
}

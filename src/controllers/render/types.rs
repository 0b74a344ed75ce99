use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    #[default]
    Idle,
    Rendering,
}

impl fmt::Display for RenderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Rendering => write!(f, "rendering"),
        }
    }
}

/// How a render request ended. Being superseded is a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Completed { generation: u64, duration: Duration },
    Cancelled { generation: u64 },
}

impl RenderOutcome {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Completed { generation, .. } | Self::Cancelled { generation } => *generation,
        }
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

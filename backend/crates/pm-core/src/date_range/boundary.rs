use serde::{Deserialize, Serialize};

/// Which end of a sprint a date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    Start,
    End,
}

impl Boundary {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::End => "End",
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::Start => "date_start",
            Self::End => "date_end",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

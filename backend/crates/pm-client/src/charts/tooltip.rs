/// Plain tooltip content; renderers decide on markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub title: String,
    pub sections: Vec<TooltipSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipSection {
    pub heading: Option<String>,
    pub rows: Vec<TooltipRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipRow {
    pub label: String,
    pub value: String,
}

impl TooltipRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl TooltipSection {
    pub fn new(heading: Option<&str>, rows: Vec<TooltipRow>) -> Self {
        Self {
            heading: heading.map(str::to_string),
            rows,
        }
    }
}

//! Panel body text, keyed by label.

use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("no panel content for label `{0}`")]
    UnknownLabel(String),
}

const ENTRIES: [(&str, &str); 5] = [
    (
        "About",
        "Systems and graphics programmer with a habit of building small\n\
         worlds out of math. This page is one of them: a resume you can\n\
         fly around instead of scroll through.\n\n\
         Away from the keyboard: astronomy, analog synths, long walks.",
    ),
    (
        "Experience",
        "Senior Engineer, Orbital Tools (2022 - present)\n\
         Real-time rendering pipelines and tooling for telemetry review.\n\n\
         Engineer, Fieldline Systems (2019 - 2022)\n\
         Embedded data capture and the dashboards that made sense of it.\n\n\
         Junior Developer, Parallax Labs (2017 - 2019)\n\
         Web front ends, then the 3D ones nobody else wanted to touch.",
    ),
    (
        "Projects",
        "Driftfield: a particle sandbox where audio reactivity shapes the flow.\n\n\
         Skylane: a route planner that renders great circles on a live globe.\n\n\
         This site: WebGPU, hand-rolled scene model, no framework.",
    ),
    (
        "Skills",
        "Rust, WGSL, TypeScript. GPU pipelines end to end: geometry,\n\
         lighting, post-processing. Comfortable across the stack when the\n\
         renderer needs a server to talk to.\n\n\
         Slower but happy in: audio DSP, procedural texturing.",
    ),
    (
        "Contact",
        "Email: hello@example.dev\n\
         Code: github.com/example\n\n\
         Open to rendering, tooling, and simulation work.\n\
         Time zone: UTC+0, flexible.",
    ),
];

/// Static label-to-body lookup for the overlay.
#[derive(Clone, Debug)]
pub struct ContentTable {
    entries: FnvHashMap<&'static str, &'static str>,
}

impl ContentTable {
    pub fn new() -> Self {
        Self {
            entries: ENTRIES.iter().copied().collect(),
        }
    }

    pub fn lookup(&self, label: &str) -> Result<&'static str, ContentError> {
        self.entries
            .get(label)
            .copied()
            .ok_or_else(|| ContentError::UnknownLabel(label.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ContentTable {
    fn default() -> Self {
        Self::new()
    }
}

//! Deterministic demo sessions.
//!
//! Generates a plausible paused Python program (sources, breakpoints, a call
//! stack and variable scopes) from a fixed seed, so the GUI can be explored
//! without a debugger attached.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Breakpoint, Frame, Scope, Source, Variable};
use crate::session::DebugSession;
use crate::traits::SessionReader;

const DEMO_SEED: u64 = 42;

const FILES: &[&str] = &["main.py", "worker.py", "utils/io.py"];
const FUNCTIONS: &[&str] = &["main", "run_batch", "process_item", "load_record", "parse_header"];
const NAMES: &[&str] = &[
    "count", "ratio", "label", "enabled", "items", "offset", "path", "total", "config", "retries",
];

/// Generates demo sessions from a seeded random number generator.
#[derive(Debug, Clone)]
pub struct DemoSessionReader {
    seed: u64,
}

impl Default for DemoSessionReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoSessionReader {
    pub fn new() -> Self {
        Self { seed: DEMO_SEED }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Builds the session. The same seed always yields the same session.
    pub fn generate(&self) -> DebugSession {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let sources: Vec<Source> = FILES
            .iter()
            .map(|path| Source {
                path: path.to_string(),
                content: generate_source(&mut rng, path),
            })
            .collect();

        let mut breakpoints = Vec::new();
        for source in &sources {
            let line_count = source.lines().count().max(1) as u32;
            for _ in 0..rng.gen_range(1..=3) {
                breakpoints.push(Breakpoint {
                    source: source.path.clone(),
                    line: rng.gen_range(1..=line_count),
                    verified: rng.gen_bool(0.9),
                });
            }
        }

        let depth = rng.gen_range(3..=FUNCTIONS.len());
        let frames: Vec<Frame> = (0..depth)
            .map(|i| {
                let source = &sources[i % sources.len()];
                let line_count = source.lines().count().max(1) as u32;
                Frame {
                    id: (depth - i) as u64,
                    name: FUNCTIONS[depth - 1 - i].to_string(),
                    source: Some(source.path.clone()),
                    line: rng.gen_range(1..=line_count),
                }
            })
            .collect();

        let mut next_reference = 1;
        let scopes = ["Locals", "Globals"]
            .iter()
            .map(|name| Scope {
                name: name.to_string(),
                variables: (0..rng.gen_range(4..=NAMES.len()))
                    .map(|i| generate_variable(&mut rng, NAMES[i], &mut next_reference))
                    .collect(),
            })
            .collect();

        DebugSession {
            name: format!("demo (seed {})", self.seed),
            breakpoints,
            frames,
            scopes,
            sources,
        }
    }
}

impl SessionReader for DemoSessionReader {
    fn read(&self, _file_path: &str) -> anyhow::Result<DebugSession> {
        Ok(self.generate())
    }

    fn source_name(&self) -> &'static str {
        "demo session"
    }
}

fn generate_source(rng: &mut StdRng, path: &str) -> String {
    let mut lines = vec![format!("# {}", path), String::new()];
    for function in FUNCTIONS.iter().take(rng.gen_range(2..=4)) {
        lines.push(format!("def {}(arg):", function));
        for _ in 0..rng.gen_range(2..=6) {
            let name = NAMES[rng.gen_range(0..NAMES.len())];
            lines.push(format!("    {} = arg + {}", name, rng.gen_range(0..100)));
        }
        lines.push("    return arg".to_string());
        lines.push(String::new());
    }
    lines.join("\n")
}

fn generate_variable(rng: &mut StdRng, name: &str, next_reference: &mut u64) -> Variable {
    let (type_name, value, children) = match rng.gen_range(0..5) {
        0 => ("int", rng.gen_range(-1000..1000).to_string(), vec![]),
        1 => ("float", format!("{:.3}", rng.gen::<f64>() * 100.0), vec![]),
        2 => ("bool", if rng.gen_bool(0.5) { "True" } else { "False" }.to_string(), vec![]),
        3 => ("str", format!("'{}_{}'", name, rng.gen_range(0..10)), vec![]),
        _ => {
            let len = rng.gen_range(1..=4);
            let children: Vec<Variable> = (0..len)
                .map(|i| Variable {
                    name: i.to_string(),
                    type_name: "int".to_string(),
                    value: rng.gen_range(0..50).to_string(),
                    evaluate_name: format!("{}[{}]", name, i),
                    variables_reference: 0,
                    children: Vec::new(),
                })
                .collect();
            let rendered: Vec<&str> = children.iter().map(|c| c.value.as_str()).collect();
            ("list", format!("[{}]", rendered.join(", ")), children)
        }
    };

    let variables_reference = if children.is_empty() {
        0
    } else {
        let reference = *next_reference;
        *next_reference += 1;
        reference
    };

    Variable {
        name: name.to_string(),
        type_name: type_name.to_string(),
        value,
        evaluate_name: name.to_string(),
        variables_reference,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_session() {
        let a = DemoSessionReader::new().generate();
        let b = DemoSessionReader::new().generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_demo_session_is_consistent() {
        let session = DemoSessionReader::with_seed(7).generate();
        assert_eq!(session.sources.len(), FILES.len());
        assert!(!session.frames.is_empty());
        assert_eq!(session.scopes.len(), 2);

        for bp in &session.breakpoints {
            let source = session.sources.iter().find(|s| s.path == bp.source).unwrap();
            assert!(bp.line as usize <= source.lines().count());
        }
        for frame in &session.frames {
            assert!(session.sources.iter().any(|s| Some(&s.path) == frame.source.as_ref()));
        }
    }
}

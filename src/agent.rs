//! The greeting agent.
//!
//! A pure text-generation callable: every invocation path (HTTP, MCP tool)
//! goes through [`greet`], so identical names produce byte-identical output.

/// Name used when the caller does not supply one.
pub const DEFAULT_NAME: &str = "world";

/// Fixed suffix appended to every greeting.
pub const GREETING_SUFFIX: &str = "— LangChain@1.1.0";

/// Build the greeting for `name`.
///
/// The name is substituted verbatim: no trimming, escaping or length limit.
pub fn greet(name: &str) -> String {
    format!("Hello, {}! {}", name, GREETING_SUFFIX)
}

/// Greeting for [`DEFAULT_NAME`].
pub fn greet_default() -> String {
    greet(DEFAULT_NAME)
}

/// Stateless agent handle shared by the HTTP and tool surfaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloAgent;

impl HelloAgent {
    pub fn new() -> Self {
        Self
    }

    /// Produce the greeting for `name`.
    pub fn greet(&self, name: &str) -> String {
        greet(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet_uses_exact_template() {
        assert_eq!(greet("Ada"), "Hello, Ada! — LangChain@1.1.0");
    }

    #[test]
    fn greet_substitutes_verbatim() {
        let names = [
            "",
            " padded ",
            "{name}",
            "<script>alert(1)</script>",
            "Grüße, 世界",
            "line\nbreak",
            "%s %d {}",
        ];
        for name in names {
            assert_eq!(greet(name), format!("Hello, {}! — LangChain@1.1.0", name));
        }
    }

    #[test]
    fn greet_substitutes_every_char_verbatim() {
        let all: Vec<char> = (0..=0x10FFFFu32).filter_map(char::from_u32).collect();
        for chunk in all.chunks(4096) {
            let name: String = chunk.iter().collect();
            let out = greet(&name);
            assert_eq!(out, ["Hello, ", &name, "! ", GREETING_SUFFIX].concat());
            assert_eq!(&out["Hello, ".len().."Hello, ".len() + name.len()], name);
        }
    }

    #[test]
    fn greet_has_no_length_limit() {
        let long = "x".repeat(100_000);
        let out = greet(&long);
        assert!(out.contains(&long));
        assert_eq!(out.len(), "Hello, ! — LangChain@1.1.0".len() + long.len());
    }

    #[test]
    fn default_is_world() {
        assert_eq!(greet_default(), greet("world"));
        assert_eq!(greet_default(), "Hello, world! — LangChain@1.1.0");
    }

    #[test]
    fn agent_matches_free_function_and_is_idempotent() {
        let agent = HelloAgent::new();
        let first = agent.greet("Ada");
        for _ in 0..10 {
            assert_eq!(agent.greet("Ada"), first);
        }
        assert_eq!(first, greet("Ada"));
    }
}

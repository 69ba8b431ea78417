#![no_main]

use std::error::Error;
use std::fmt;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use loopdiag::{ErrorChain, FormatConfig, LoopPromiseCaughtError, LoopPromiseError, MUST_NOT_THROW};

/// Error value whose Display impl may misbehave.
#[derive(Debug, Arbitrary)]
enum Thrown {
    Text(String),
    Number(i64),
    Fails,
    Empty,
}

impl fmt::Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thrown::Text(text) => f.write_str(text),
            Thrown::Number(n) => write!(f, "{n}"),
            Thrown::Fails => Err(fmt::Error),
            Thrown::Empty => Ok(()),
        }
    }
}

/// One link of a source chain.
#[derive(Debug)]
struct Cause {
    thrown: Thrown,
    inner: Option<Box<Cause>>,
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.thrown.fmt(f)
    }
}

impl Error for Cause {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.as_deref().map(|inner| inner as &(dyn Error + 'static))
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    action_type: String,
    thrown: Thrown,
    owned: LoopPromiseError,
    causes: Vec<Option<i64>>,
    max_source_depth: u8,
}

fuzz_target!(|input: Input| {
    let diagnostic = LoopPromiseCaughtError::new(input.action_type.as_str(), &input.thrown);

    let message = diagnostic.render();
    assert!(message.contains(MUST_NOT_THROW));
    assert!(message.contains(&input.action_type));
    assert_eq!(message, diagnostic.render());

    let owned = input.owned.to_string();
    assert!(owned.contains(&input.owned.exception));

    let depth = input.max_source_depth as usize;
    let total_causes = input.causes.len();
    // Numeric or failing causes only, so no text can imitate the chain layout.
    let mut chain = Cause {
        thrown: Thrown::Number(-1),
        inner: None,
    };
    for cause in input.causes.into_iter().rev() {
        chain.inner = Some(Box::new(Cause {
            thrown: cause.map_or(Thrown::Fails, Thrown::Number),
            inner: chain.inner.take(),
        }));
    }

    let config = FormatConfig::new().with_max_source_depth(depth);
    let rendered = ErrorChain::new(&chain).with_config(config).to_string();
    let listed = (0..total_causes.min(depth))
        .filter(|i| rendered.contains(&format!("\n    {i}: ")))
        .count();
    assert_eq!(listed, total_causes.min(depth));
    if total_causes > depth {
        assert!(!rendered.contains(&format!("\n    {depth}: ")));
    }
    // A zero depth renders the top-level error alone, without the elision line.
    assert_eq!(
        rendered.contains("further causes omitted"),
        depth > 0 && total_causes > depth
    );
});

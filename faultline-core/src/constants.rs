/// Faultline system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base confidence assigned to every pattern match before bonuses.
pub const BASE_CONFIDENCE: f64 = 0.6;

/// Matches longer than this many characters earn the long-match bonus.
pub const LONG_MATCH_CHARS: usize = 50;

/// Confidence bonus for long matches.
pub const LONG_MATCH_BONUS: f64 = 0.2;

/// Matches longer than this many characters earn the medium-match bonus
/// when the long tier does not apply.
pub const MEDIUM_MATCH_CHARS: usize = 20;

/// Confidence bonus for medium matches.
pub const MEDIUM_MATCH_BONUS: f64 = 0.1;

/// Characters of context inspected on each side of a match.
pub const CONTEXT_WINDOW_CHARS: usize = 100;

/// Keywords whose presence near a match raises its confidence.
pub const CONTEXT_KEYWORDS: [&str; 6] =
    ["wrong", "incorrect", "error", "mistake", "false", "inaccurate"];

/// Confidence bonus per distinct context keyword found.
pub const CONTEXT_KEYWORD_BONUS: f64 = 0.05;

/// Saturation cap on the total context bonus.
pub const CONTEXT_BONUS_CAP: f64 = 0.2;

/// Evidence prefix length (characters) used in the deduplication key.
pub const DEDUP_EVIDENCE_CHARS: usize = 50;

/// Weight assumed for a category absent from a taxonomy's weight table.
pub const DEFAULT_CATEGORY_WEIGHT: f64 = 0.5;

/// Multiplier assumed for a severity outside the closed set. Unreachable
/// with the current enum; the fallback for severities added later.
pub const DEFAULT_SEVERITY_MULTIPLIER: f64 = 0.5;

/// Default timeout for a single judgment-model call.
pub const DEFAULT_JUDGMENT_TIMEOUT_MS: u64 = 10_000;

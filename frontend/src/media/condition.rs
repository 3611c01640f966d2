//! Parsed media conditions.
//!
//! Covers the media query grammar `matchMedia` accepts: comma separated
//! query lists, `not`/`only` with a media type, `and`/`or`/`not` over
//! parenthesized conditions, and plain, boolean and range features:
//!
//! ```text
//! (max-width: 640px)
//! (width: 414px) and (height: 896px)
//! only screen and (min-width: 48em)
//! not (hover: hover)
//! (400px <= width < 700px), print
//! ```
//!
//! Features the [`Viewport`] does not model (`hover`, `pointer`,
//! `aspect-ratio`, ...) parse fine but evaluate as unknown, and a query
//! whose result is unknown does not match.

use std::fmt;
use std::str::FromStr;

use crate::media::error::MediaError;

const PX_PER_EM: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduce,
}

/// The environment a condition is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub color_scheme: ColorScheme,
    pub motion: MotionPreference,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            color_scheme: ColorScheme::default(),
            motion: MotionPreference::default(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        if self.height >= self.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Lt,
    Le,
    Eq,
    Ge,
    Gt,
}

impl Comparison {
    fn holds(self, actual: f64, bound: f64) -> bool {
        match self {
            Comparison::Lt => actual < bound,
            Comparison::Le => actual <= bound,
            Comparison::Eq => actual == bound,
            Comparison::Ge => actual >= bound,
            Comparison::Gt => actual > bound,
        }
    }

    /// `640px >= width` reads as `width <= 640px`.
    fn flip(self) -> Self {
        match self {
            Comparison::Lt => Comparison::Gt,
            Comparison::Le => Comparison::Ge,
            Comparison::Eq => Comparison::Eq,
            Comparison::Ge => Comparison::Le,
            Comparison::Gt => Comparison::Lt,
        }
    }

    fn is_lower(self) -> bool {
        matches!(self, Comparison::Lt | Comparison::Le)
    }

    fn is_greater(self) -> bool {
        matches!(self, Comparison::Gt | Comparison::Ge)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    /// Every bound must hold for the viewport dimension.
    Dimension(Axis, Vec<(Comparison, f64)>),
    Orientation(Orientation),
    ColorScheme(ColorScheme),
    Motion(MotionPreference),
    /// Boolean form of a feature that is never `none` on a screen.
    Always,
    /// Well-formed, but not modelled by [`Viewport`].
    Opaque(String),
}

impl Feature {
    fn eval(&self, viewport: &Viewport) -> Option<bool> {
        let holds = match self {
            Feature::Dimension(axis, bounds) => {
                let actual = match axis {
                    Axis::Width => viewport.width,
                    Axis::Height => viewport.height,
                };
                bounds.iter().all(|(cmp, bound)| cmp.holds(actual, *bound))
            }
            Feature::Orientation(orientation) => viewport.orientation() == *orientation,
            Feature::ColorScheme(scheme) => viewport.color_scheme == *scheme,
            Feature::Motion(motion) => viewport.motion == *motion,
            Feature::Always => true,
            Feature::Opaque(_) => return None,
        };
        Some(holds)
    }
}

/// Boolean expression over features, evaluated in three-valued logic:
/// `None` is unknown.
#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Feature(Feature),
    Not(Box<Expr>),
    And(Vec<Expr>),
    Or(Vec<Expr>),
}

impl Expr {
    fn eval(&self, viewport: &Viewport) -> Option<bool> {
        match self {
            Expr::Feature(feature) => feature.eval(viewport),
            Expr::Not(inner) => inner.eval(viewport).map(|holds| !holds),
            Expr::And(terms) => {
                let mut result = Some(true);
                for term in terms {
                    match term.eval(viewport) {
                        Some(false) => return Some(false),
                        None => result = None,
                        Some(true) => {}
                    }
                }
                result
            }
            Expr::Or(terms) => {
                let mut result = Some(false);
                for term in terms {
                    match term.eval(viewport) {
                        Some(true) => return Some(true),
                        None => result = None,
                        Some(false) => {}
                    }
                }
                result
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaType {
    All,
    Screen,
    Print,
    /// Deprecated or unknown types such as `tv`; they match nothing.
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
struct Query {
    negated: bool,
    media_type: MediaType,
    condition: Option<Expr>,
}

impl Query {
    fn matches(&self, viewport: &Viewport) -> bool {
        // Every viewport we evaluate is a screen.
        let type_matches = matches!(self.media_type, MediaType::All | MediaType::Screen);
        let result = if !type_matches {
            Some(false)
        } else {
            self.condition.as_ref().map_or(Some(true), |c| c.eval(viewport))
        };
        result.map(|holds| holds != self.negated).unwrap_or(false)
    }
}

/// An immutable, validated media condition.
///
/// Keeps the trimmed source text, which is what gets handed to the
/// browser's `matchMedia`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    source: String,
    queries: Vec<Query>,
}

impl Condition {
    pub fn parse(source: &str) -> Result<Self, MediaError> {
        let source = source.trim();
        if source.is_empty() {
            return Err(MediaError::descriptor(source, "empty condition"));
        }

        let lowered = source.to_ascii_lowercase();
        let queries = lowered
            .split(',')
            .map(|raw| Parser::new(raw).query())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|reason| MediaError::descriptor(source, reason))?;

        Ok(Self {
            source: source.to_string(),
            queries,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Evaluates the condition against a known viewport.
    pub fn matches(&self, viewport: &Viewport) -> bool {
        self.queries.iter().any(|q| q.matches(viewport))
    }
}

impl FromStr for Condition {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::parse(s)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_ident(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '-' || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Recursive descent over one query of an already lowercased list.
struct Parser<'a> {
    rest: &'a str,
}

impl<'a> Parser<'a> {
    fn new(raw: &'a str) -> Self {
        Self { rest: raw.trim() }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_whitespace();
        match self.rest.strip_prefix(c) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        let rest = self.rest.trim_start();
        rest.strip_prefix(keyword)
            .is_some_and(|after| after.is_empty() || after.starts_with(char::is_whitespace))
    }

    fn keyword(&mut self, keyword: &str) -> bool {
        if !self.at_keyword(keyword) {
            return false;
        }
        self.skip_whitespace();
        self.rest = &self.rest[keyword.len()..];
        true
    }

    fn ident(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        let rest = self.rest;
        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(rest.len());
        let word = &rest[..end];
        if !is_ident(word) {
            return None;
        }
        self.rest = &rest[end..];
        Some(word)
    }

    fn finish(&mut self) -> Result<(), String> {
        self.skip_whitespace();
        if self.rest.is_empty() {
            Ok(())
        } else {
            Err(format!("unexpected `{}`", self.rest))
        }
    }

    fn query(mut self) -> Result<Query, String> {
        if self.rest.is_empty() {
            return Err("empty media query".to_string());
        }

        if self.peek() == Some('(') || (self.at_keyword("not") && self.after_not_is_group()) {
            let condition = self.condition(true)?;
            self.finish()?;
            return Ok(Query {
                negated: false,
                media_type: MediaType::All,
                condition: Some(condition),
            });
        }

        let negated = self.keyword("not");
        if !negated {
            self.keyword("only");
        }
        let media_type = match self.ident() {
            Some(word) => parse_media_type(word)?,
            None => return Err("expected a media type".to_string()),
        };

        let condition = if self.keyword("and") {
            Some(self.condition(false)?)
        } else {
            None
        };
        self.finish()?;

        Ok(Query {
            negated,
            media_type,
            condition,
        })
    }

    fn after_not_is_group(&self) -> bool {
        self.rest.trim_start()["not".len()..].trim_start().starts_with('(')
    }

    /// `not <in-parens>`, or `<in-parens>` joined by only `and` or only `or`.
    fn condition(&mut self, allow_or: bool) -> Result<Expr, String> {
        if self.keyword("not") {
            return Ok(Expr::Not(Box::new(self.in_parens()?)));
        }

        let first = self.in_parens()?;
        let joiner = if self.at_keyword("and") {
            "and"
        } else if self.at_keyword("or") {
            if !allow_or {
                return Err("`or` cannot follow a media type".to_string());
            }
            "or"
        } else {
            return Ok(first);
        };

        let mut terms = vec![first];
        while self.keyword(joiner) {
            terms.push(self.in_parens()?);
        }
        if self.at_keyword("and") || self.at_keyword("or") {
            return Err("mixing `and` and `or` needs parentheses".to_string());
        }
        Ok(if joiner == "and" {
            Expr::And(terms)
        } else {
            Expr::Or(terms)
        })
    }

    fn in_parens(&mut self) -> Result<Expr, String> {
        if !self.eat('(') {
            return Err(match self.rest.split_whitespace().next() {
                Some(word) => format!("expected `(` before `{word}`"),
                None => "expected a feature".to_string(),
            });
        }
        self.skip_whitespace();

        if self.peek() == Some('(') || self.at_keyword("not") {
            let inner = self.condition(true)?;
            if !self.eat(')') {
                return Err("unbalanced parenthesis".to_string());
            }
            return Ok(inner);
        }

        let rest = self.rest;
        let close = rest
            .find(')')
            .ok_or_else(|| "unbalanced parenthesis".to_string())?;
        let body = &rest[..close];
        if body.contains('(') {
            return Err(format!("unexpected `(` in feature `{}`", body.trim()));
        }
        self.rest = &rest[close + 1..];
        parse_feature(body.trim()).map(Expr::Feature)
    }
}

fn parse_media_type(word: &str) -> Result<MediaType, String> {
    match word {
        "all" => Ok(MediaType::All),
        "screen" => Ok(MediaType::Screen),
        "print" => Ok(MediaType::Print),
        "and" | "not" | "only" | "or" | "layer" => Err(format!("unexpected `{word}`")),
        other => Ok(MediaType::Other(other.to_string())),
    }
}

fn parse_feature(body: &str) -> Result<Feature, String> {
    if body.is_empty() {
        return Err("empty feature".to_string());
    }
    if let Some((name, value)) = body.split_once(':') {
        return parse_plain_feature(name.trim(), value.trim());
    }
    if body.contains(['<', '>', '=']) {
        return parse_range_feature(body);
    }
    parse_boolean_feature(body)
}

fn parse_plain_feature(name: &str, value: &str) -> Result<Feature, String> {
    if !is_ident(name) {
        return Err(format!("invalid feature `{name}`"));
    }
    if value.is_empty() {
        return Err(format!("feature `{name}` needs a value"));
    }

    let dimension = |axis: Axis, cmp: Comparison| -> Result<Feature, String> {
        Ok(Feature::Dimension(axis, vec![(cmp, parse_length(value)?)]))
    };
    match name {
        "width" => dimension(Axis::Width, Comparison::Eq),
        "min-width" => dimension(Axis::Width, Comparison::Ge),
        "max-width" => dimension(Axis::Width, Comparison::Le),
        "height" => dimension(Axis::Height, Comparison::Eq),
        "min-height" => dimension(Axis::Height, Comparison::Ge),
        "max-height" => dimension(Axis::Height, Comparison::Le),
        "orientation" => Ok(Feature::Orientation(match value {
            "portrait" => Orientation::Portrait,
            "landscape" => Orientation::Landscape,
            other => return Err(format!("invalid orientation `{other}`")),
        })),
        "prefers-color-scheme" => Ok(Feature::ColorScheme(match value {
            "light" => ColorScheme::Light,
            "dark" => ColorScheme::Dark,
            other => return Err(format!("invalid color scheme `{other}`")),
        })),
        "prefers-reduced-motion" => Ok(Feature::Motion(match value {
            "no-preference" => MotionPreference::NoPreference,
            "reduce" => MotionPreference::Reduce,
            other => return Err(format!("invalid motion preference `{other}`")),
        })),
        other => opaque(other, &[value]),
    }
}

fn parse_boolean_feature(name: &str) -> Result<Feature, String> {
    if !is_ident(name) {
        return Err(format!("invalid feature `{name}`"));
    }
    match name {
        "width" => Ok(Feature::Dimension(Axis::Width, vec![(Comparison::Gt, 0.0)])),
        "height" => Ok(Feature::Dimension(Axis::Height, vec![(Comparison::Gt, 0.0)])),
        "prefers-reduced-motion" => Ok(Feature::Motion(MotionPreference::Reduce)),
        "orientation" | "prefers-color-scheme" => Ok(Feature::Always),
        other if other.starts_with("min-") || other.starts_with("max-") => {
            Err(format!("feature `{other}` needs a value"))
        }
        other => opaque(other, &[]),
    }
}

/// `(width <= 640px)`, `(640px >= width)` or `(400px <= width < 700px)`.
fn parse_range_feature(body: &str) -> Result<Feature, String> {
    let mut operands = Vec::new();
    let mut comparisons = Vec::new();
    let mut rest = body;
    while let Some(at) = rest.find(['<', '>', '=']) {
        operands.push(rest[..at].trim());
        let after = &rest[at..];
        let (cmp, len) = match after.as_bytes() {
            [b'<', b'=', ..] => (Comparison::Le, 2),
            [b'>', b'=', ..] => (Comparison::Ge, 2),
            [b'<', ..] => (Comparison::Lt, 1),
            [b'>', ..] => (Comparison::Gt, 1),
            _ => (Comparison::Eq, 1),
        };
        comparisons.push(cmp);
        rest = &after[len..];
    }
    operands.push(rest.trim());
    if operands.iter().any(|operand| operand.is_empty()) {
        return Err(format!("incomplete range `{body}`"));
    }

    let (name, bounds) = match (operands.as_slice(), comparisons.as_slice()) {
        ([left, right], [cmp]) if is_ident(left) => (*left, vec![(*cmp, *right)]),
        ([left, right], [cmp]) if is_ident(right) => (*right, vec![(cmp.flip(), *left)]),
        ([low, name, high], [first, second])
            if is_ident(name)
                && ((first.is_lower() && second.is_lower())
                    || (first.is_greater() && second.is_greater())) =>
        {
            (*name, vec![(first.flip(), *low), (*second, *high)])
        }
        _ => return Err(format!("invalid range `{body}`")),
    };

    let axis = match name {
        "width" => Axis::Width,
        "height" => Axis::Height,
        "orientation" | "prefers-color-scheme" | "prefers-reduced-motion" => {
            return Err(format!("`{name}` is not a range feature"));
        }
        other if other.starts_with("min-") || other.starts_with("max-") => {
            return Err(format!("`{other}` cannot be used in a range"));
        }
        other => {
            let values: Vec<&str> = bounds.iter().map(|(_, value)| *value).collect();
            return opaque(other, &values);
        }
    };
    let bounds = bounds
        .into_iter()
        .map(|(cmp, value)| parse_length(value).map(|px| (cmp, px)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Feature::Dimension(axis, bounds))
}

/// Accepts a feature the viewport does not model if its values look like
/// media feature values (`coarse`, `16/9`, `2dppx`).
fn opaque(name: &str, values: &[&str]) -> Result<Feature, String> {
    let well_formed = |value: &&str| {
        value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '/' | '+' | ' '))
    };
    match values.iter().find(|value| !well_formed(*value)) {
        Some(value) => Err(format!("invalid value `{value}` for `{name}`")),
        None => Ok(Feature::Opaque(name.to_string())),
    }
}

/// Parses a length into CSS pixels.
fn parse_length(value: &str) -> Result<f64, String> {
    let (number, scale) = if let Some(n) = value.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = value.strip_suffix("rem") {
        (n, PX_PER_EM)
    } else if let Some(n) = value.strip_suffix("em") {
        (n, PX_PER_EM)
    } else if value == "0" {
        ("0", 1.0)
    } else {
        return Err(format!("length `{value}` needs a px, em or rem unit"));
    };

    let parsed: f64 = number
        .trim()
        .parse()
        .map_err(|_| format!("invalid length `{value}`"))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(format!("invalid length `{value}`"));
    }
    Ok(parsed * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds(condition: &str, width: f64, height: f64) -> bool {
        Condition::parse(condition)
            .unwrap()
            .matches(&Viewport::new(width, height))
    }

    #[test]
    fn test_max_width_threshold() {
        assert!(holds("(max-width: 640px)", 500.0, 800.0));
        assert!(holds("(max-width: 640px)", 640.0, 800.0));
        assert!(!holds("(max-width: 640px)", 1024.0, 800.0));
    }

    #[test]
    fn test_min_width_threshold() {
        assert!(holds("(min-width: 769px)", 769.0, 800.0));
        assert!(!holds("(min-width: 769px)", 768.0, 800.0));
    }

    #[test]
    fn test_exact_device_fingerprint() {
        let fingerprint = "(width: 414px) and (height: 896px)";
        assert!(holds(fingerprint, 414.0, 896.0));
        assert!(!holds(fingerprint, 414.0, 897.0));
        assert!(!holds(fingerprint, 415.0, 896.0));
    }

    #[test]
    fn test_em_units() {
        assert!(holds("(min-width: 48em)", 768.0, 500.0));
        assert!(!holds("(min-width: 48rem)", 767.0, 500.0));
    }

    #[test]
    fn test_media_types_and_modifiers() {
        assert!(holds("screen and (max-width: 640px)", 320.0, 600.0));
        assert!(holds("only screen and (max-width: 640px)", 320.0, 600.0));
        assert!(!holds("print", 320.0, 600.0));
        assert!(holds("not print", 320.0, 600.0));
        assert!(!holds("not all and (max-width: 640px)", 320.0, 600.0));
        assert!(holds("all", 1.0, 1.0));
    }

    #[test]
    fn test_query_list_is_any() {
        assert!(holds("print, (max-width: 640px)", 320.0, 600.0));
        assert!(!holds("print, (max-width: 640px)", 1200.0, 600.0));
    }

    #[test]
    fn test_orientation_and_preferences() {
        assert!(holds("(orientation: portrait)", 400.0, 800.0));
        assert!(holds("(orientation: landscape)", 800.0, 400.0));

        let dark = Condition::parse("(prefers-color-scheme: dark)").unwrap();
        let mut viewport = Viewport::new(800.0, 600.0);
        assert!(!dark.matches(&viewport));
        viewport.color_scheme = ColorScheme::Dark;
        assert!(dark.matches(&viewport));

        let reduce = Condition::parse("(prefers-reduced-motion: reduce)").unwrap();
        viewport.motion = MotionPreference::Reduce;
        assert!(reduce.matches(&viewport));
    }

    #[test]
    fn test_source_is_trimmed_and_kept() {
        let condition = Condition::parse("  (Max-Width: 640px) ").unwrap();
        assert_eq!(condition.as_str(), "(Max-Width: 640px)");
        assert_eq!(condition.to_string(), "(Max-Width: 640px)");
        assert!(condition.matches(&Viewport::new(600.0, 600.0)));
    }

    #[test]
    fn test_invalid_descriptors() {
        let bad = [
            "",
            "   ",
            "(max-width 640px)",
            "(max-width: 640)",
            "(max-width: 640vw)",
            "(max-width: -1px)",
            "(max-width: 640px",
            "max-width: 640px)",
            "(max-width: 640px) (min-width: 1px)",
            "(max-width: 640px) and",
            "(orientation: sideways)",
            "(max-width: 640px),",
            "(a) and (b) or (c)",
            "screen and (a) or (b)",
            "only (max-width: 640px)",
            "(width <= )",
            "(width = 640px = 700px)",
            "(400px < width > 700px)",
            "(min-width <= 640px)",
            "(orientation > 1px)",
            "(max-width)",
            "(hover: {x})",
            "()",
        ];
        for source in bad {
            let err = Condition::parse(source).unwrap_err();
            assert!(
                matches!(err, MediaError::Descriptor { .. }),
                "`{source}` should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_negated_condition() {
        assert!(!holds("not (max-width: 640px)", 500.0, 800.0));
        assert!(holds("not (max-width: 640px)", 1024.0, 800.0));
        assert!(holds("screen and not (max-width: 640px)", 1024.0, 800.0));
    }

    #[test]
    fn test_range_syntax() {
        assert!(holds("(width <= 640px)", 640.0, 800.0));
        assert!(!holds("(width < 640px)", 640.0, 800.0));
        assert!(holds("(640px >= width)", 500.0, 800.0));
        assert!(holds("(width = 414px) and (height = 896px)", 414.0, 896.0));
        assert!(holds("(400px <= width < 700px)", 400.0, 800.0));
        assert!(!holds("(400px <= width < 700px)", 700.0, 800.0));
        assert!(holds("(700px > width > 400px)", 500.0, 800.0));
        assert!(holds("(height > 40em)", 500.0, 641.0));
    }

    #[test]
    fn test_or_and_nested_conditions() {
        assert!(holds("(max-width: 400px) or (min-width: 1200px)", 1300.0, 800.0));
        assert!(!holds("(max-width: 400px) or (min-width: 1200px)", 800.0, 800.0));
        assert!(holds("((max-width: 640px))", 500.0, 800.0));
        assert!(holds(
            "((max-width: 640px) and (orientation: portrait)) or (min-width: 1200px)",
            500.0,
            800.0
        ));
        assert!(holds("not ((min-width: 641px) or (orientation: landscape))", 500.0, 800.0));
    }

    #[test]
    fn test_unmodelled_features_parse_but_never_match() {
        for source in [
            "(hover: hover)",
            "(pointer: coarse)",
            "(aspect-ratio: 16/9)",
            "(min-resolution: 2dppx)",
            "(color)",
            "not (hover: hover)",
            "(hover: hover) and (max-width: 640px)",
        ] {
            assert!(!holds(source, 500.0, 800.0), "`{source}` should not match");
        }
        // A known true branch still wins an `or`.
        assert!(holds("(hover: none) or (max-width: 640px)", 500.0, 800.0));
        // A known false branch still decides an `and`.
        assert!(holds("not ((hover: hover) and (min-width: 1200px))", 500.0, 800.0));
    }

    #[test]
    fn test_boolean_features() {
        assert!(holds("(width)", 500.0, 800.0));
        assert!(holds("(orientation)", 500.0, 800.0));
        let reduce = Condition::parse("(prefers-reduced-motion)").unwrap();
        let mut viewport = Viewport::new(800.0, 600.0);
        assert!(!reduce.matches(&viewport));
        viewport.motion = MotionPreference::Reduce;
        assert!(reduce.matches(&viewport));
    }

    #[test]
    fn test_unknown_media_types_match_nothing() {
        assert!(!holds("tv and (max-width: 640px)", 320.0, 600.0));
        assert!(holds("not tv", 320.0, 600.0));
    }

    #[test]
    fn test_error_names_condition() {
        let err = Condition::parse("(orientation: sideways)").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid media condition `(orientation: sideways)`: invalid orientation `sideways`"
        );
        assert_eq!(err.as_label(), "media_descriptor");
    }
}

//! Splitting a stylesheet into base and `max-width` conditional rules.

use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput, Token};

use crate::parser::blocks::{
    drain, parse_rule_block, parse_rule_list, skip_block, skip_stray_token,
};
use crate::rules::{RuleSet, StyleSheet};
use crate::values::px_to_u32;

/// Parse a stylesheet into its base and conditional rule-sets.
///
/// Every `@media` block whose prelude carries a `(max-width: <N>px)`
/// feature becomes conditional rules for threshold `N`. Media blocks
/// without such a feature cannot be evaluated against a viewport width and
/// are discarded. Everything outside media blocks forms the base rules.
///
/// # Example
///
/// ```
/// use tapcheck_style::parser::parse_stylesheet;
///
/// let sheet = parse_stylesheet(
///     ".a { width: 10px; } @media (max-width: 480px) { .a { width: 48px; } }",
/// );
/// assert_eq!(sheet.base.get(".a").unwrap()["width"], "10px");
/// assert_eq!(sheet.conditional(480).unwrap().rules.get(".a").unwrap()["width"], "48px");
/// ```
pub fn parse_stylesheet(css: &str) -> StyleSheet {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut sheet = StyleSheet::new();

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        if skip_stray_token(&mut parser) {
            continue;
        }

        let state = parser.state();
        let is_media = matches!(
            parser.next(),
            Ok(Token::AtKeyword(name)) if name.eq_ignore_ascii_case("media")
        );
        if is_media {
            parse_media_block(&mut parser, &mut sheet);
            continue;
        }

        parser.reset(&state);
        if !parse_rule_block(&mut parser, &mut sheet.base) {
            break;
        }
    }

    tracing::debug!(
        base_rules = sheet.base.len(),
        conditional_sets = sheet.conditionals().count(),
        "Parsed stylesheet"
    );
    sheet
}

/// Parse the remainder of an `@media` rule after its keyword.
fn parse_media_block(parser: &mut Parser<'_, '_>, sheet: &mut StyleSheet) {
    let start = parser.position();
    let threshold = parser
        .parse_until_before(Delimiter::CurlyBracketBlock | Delimiter::Semicolon, |p| {
            Ok::<_, CssParseError<'_, ()>>(max_width_threshold(p))
        })
        .unwrap_or(None);
    let prelude = parser.slice_from(start).trim();

    if !matches!(parser.next(), Ok(Token::CurlyBracketBlock)) {
        tracing::debug!("Ignoring @media statement without a block: {}", prelude);
        return;
    }

    let Some(max_width) = threshold else {
        tracing::debug!("Discarding @media block without a max-width threshold: {}", prelude);
        skip_block(parser);
        return;
    };

    let rules = parser
        .parse_nested_block(|p| {
            let mut rules = RuleSet::new();
            parse_rule_list(p, &mut rules);
            Ok::<_, CssParseError<'_, ()>>(rules)
        })
        .unwrap_or_default();

    tracing::trace!(max_width, rules = rules.len(), "Parsed conditional block");
    sheet.add_conditional(max_width, rules);
}

/// Find the first `(max-width: <N>px)` feature in a media prelude.
fn max_width_threshold(parser: &mut Parser<'_, '_>) -> Option<u32> {
    let mut threshold = None;

    loop {
        match parser.next() {
            Ok(Token::ParenthesisBlock) => {
                let found = parser
                    .parse_nested_block(|p| Ok::<_, CssParseError<'_, ()>>(max_width_feature(p)))
                    .unwrap_or(None);
                threshold = threshold.or(found);
            }
            Ok(_) => {}
            Err(_) => break,
        }
    }

    threshold
}

/// Read a parenthesized media feature, keeping it only if it is `max-width`.
fn max_width_feature(parser: &mut Parser<'_, '_>) -> Option<u32> {
    let is_max_width = matches!(
        parser.next(),
        Ok(Token::Ident(name)) if name.eq_ignore_ascii_case("max-width")
    );

    let value = if is_max_width && parser.expect_colon().is_ok() {
        match parser.next() {
            Ok(Token::Dimension { value, unit, .. }) if unit.eq_ignore_ascii_case("px") => {
                Some(px_to_u32(*value))
            }
            _ => None,
        }
    } else {
        None
    };

    drain(parser);
    value
}

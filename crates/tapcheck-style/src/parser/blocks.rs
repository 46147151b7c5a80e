//! Rule-block parsing using the `cssparser` tokenizer.
//!
//! A rule block is `<selector-list> { <declarations> }`. The selector list is
//! kept as its trimmed source text and each declaration is split on its
//! first colon. Blocks are consumed by nesting depth, so braces inside
//! nested blocks never end a rule early.

use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput, Token};

use crate::rules::{Declarations, RuleSet};

/// Parse every rule block of a CSS fragment into a [`RuleSet`].
///
/// Repeated selectors merge property by property, the later block winning.
/// At-rules are skipped whole.
///
/// # Example
///
/// ```
/// use tapcheck_style::parser::parse_rule_blocks;
///
/// let rules = parse_rule_blocks(".a { width: 10px; } .a { height: 5px }");
/// let a = rules.get(".a").unwrap();
/// assert_eq!(a["width"], "10px");
/// assert_eq!(a["height"], "5px");
/// ```
pub fn parse_rule_blocks(css: &str) -> RuleSet {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = RuleSet::new();
    parse_rule_list(&mut parser, &mut rules);
    rules
}

/// Parse rule blocks until the parser is exhausted.
pub(crate) fn parse_rule_list(parser: &mut Parser<'_, '_>, rules: &mut RuleSet) {
    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        if skip_stray_token(parser) {
            continue;
        }

        if !parse_rule_block(parser, rules) {
            break;
        }
    }
}

/// Consume a stray token between rules.
///
/// HTML comment markers (`<!--`, `-->`) are dropped silently. Unmatched
/// closing brackets are dropped with a debug log so they never leak into
/// the next selector.
pub(crate) fn skip_stray_token(parser: &mut Parser<'_, '_>) -> bool {
    let state = parser.state();
    match parser.next() {
        Ok(Token::CDO) | Ok(Token::CDC) => true,
        Ok(Token::CloseCurlyBracket | Token::CloseParenthesis | Token::CloseSquareBracket) => {
            tracing::debug!("Skipping unmatched closing bracket");
            true
        }
        _ => {
            parser.reset(&state);
            false
        }
    }
}

/// Parse one `selector { declarations }` block into `rules`.
///
/// Statements ending in `;` (such as `@import`) are consumed and ignored.
/// Returns `false` when the remaining input holds no further block.
pub(crate) fn parse_rule_block(parser: &mut Parser<'_, '_>, rules: &mut RuleSet) -> bool {
    let start = parser.position();
    let _ = parser.parse_until_before(Delimiter::CurlyBracketBlock | Delimiter::Semicolon, |p| {
        drain(p);
        Ok::<_, CssParseError<'_, ()>>(())
    });
    let selector = parser.slice_from(start).trim().to_string();

    match parser.next() {
        Ok(Token::CurlyBracketBlock) => {}
        Ok(Token::Semicolon) => {
            tracing::debug!("Skipping statement: {}", selector);
            return true;
        }
        _ => {
            if !selector.is_empty() {
                tracing::debug!("Ignoring trailing CSS text without a block: {:?}", selector);
            }
            return false;
        }
    }

    if selector.starts_with('@') {
        tracing::debug!("Skipping at-rule: {}", selector);
        skip_block(parser);
        return true;
    }

    let declarations = parser
        .parse_nested_block(|block| Ok::<_, CssParseError<'_, ()>>(parse_declarations(block)))
        .unwrap_or_default();

    if selector.is_empty() {
        tracing::debug!("Skipping rule block without a selector");
    } else {
        rules.insert(selector, declarations);
    }
    true
}

/// Parse `property: value` pairs separated by semicolons.
///
/// Statements without a colon or without a property name are skipped.
fn parse_declarations(parser: &mut Parser<'_, '_>) -> Declarations {
    let mut declarations = Declarations::new();

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let start = parser.position();
        let _ = parser.parse_until_after(Delimiter::Semicolon, |p| {
            drain(p);
            Ok::<_, CssParseError<'_, ()>>(())
        });
        let statement = parser.slice_from(start);
        let statement = statement.strip_suffix(';').unwrap_or(statement);

        match statement.split_once(':') {
            Some((name, value)) if !name.trim().is_empty() => {
                declarations.insert(name.trim().to_string(), value.trim().to_string());
            }
            _ => {
                tracing::trace!("Skipping malformed declaration: {:?}", statement.trim());
            }
        }
    }

    declarations
}

/// Consume the contents of the block whose opening token was just read.
pub(crate) fn skip_block(parser: &mut Parser<'_, '_>) {
    let _ = parser.parse_nested_block(|p| {
        drain(p);
        Ok::<_, CssParseError<'_, ()>>(())
    });
}

/// Consume every remaining token at this nesting level.
pub(crate) fn drain(parser: &mut Parser<'_, '_>) {
    while parser.next().is_ok() {}
}

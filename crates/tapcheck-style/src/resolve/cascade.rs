//! Declaration cascading logic.

use crate::rules::Declarations;
use crate::style::EffectiveStyle;
use crate::values::{parse_length, parse_padding};

/// Cascade raw declarations onto an effective style.
///
/// Only properties present in `declarations` touch `target`. A present
/// length that does not normalize to pixels resets the field to `None`.
pub fn cascade_declarations(target: &mut EffectiveStyle, declarations: &Declarations) {
    macro_rules! cascade_length {
        ($($field:ident => $name:literal),+ $(,)?) => {
            $(
                if let Some(raw) = declarations.get($name) {
                    target.$field = parse_length(raw);
                }
            )+
        };
    }

    cascade_length!(
        min_width => "min-width",
        min_height => "min-height",
        width => "width",
        height => "height",
    );

    if let Some(raw) = declarations.get("padding") {
        target.padding = parse_padding(raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::EdgeValues;

    fn decls(pairs: &[(&str, &str)]) -> Declarations {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn cascade_overwrites_present_properties() {
        let mut target = EffectiveStyle::new().with_min_height(70).with_width(30);

        cascade_declarations(&mut target, &decls(&[("min-height", "48px")]));

        assert_eq!(target.min_height, Some(48));
        assert_eq!(target.width, Some(30));
    }

    #[test]
    fn cascade_preserves_absent_properties() {
        let mut target = EffectiveStyle::new().with_padding([10, 20, 10, 20]);

        cascade_declarations(&mut target, &decls(&[("height", "44px"), ("color", "red")]));

        assert_eq!(target.height, Some(44));
        assert_eq!(target.padding, EdgeValues::symmetric(10, 20));
    }

    #[test]
    fn unparseable_length_resets_to_unspecified() {
        let mut target = EffectiveStyle::new().with_min_width(60);

        cascade_declarations(&mut target, &decls(&[("min-width", "auto")]));

        assert_eq!(target.min_width, None);
    }

    #[test]
    fn degenerate_padding_resets_to_zero() {
        let mut target = EffectiveStyle::new().with_padding([5, 5, 5, 5]);

        cascade_declarations(&mut target, &decls(&[("padding", "1px 2px 3px")]));

        assert_eq!(target.padding, EdgeValues::zero());
    }
}

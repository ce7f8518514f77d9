//! Optional coercion of character data to boolean or numeric scalars.

use checkxml_core::Scalar;

/// Coerce character data to a [`Scalar`].
///
/// A finite float wins first, then the boolean spellings
/// `1 t T TRUE true True 0 f F FALSE false False`. `NaN` and infinities
/// stay strings, as does everything else.
pub fn cast_scalar(text: &str) -> Scalar {
    if let Ok(n) = text.parse::<f64>()
        && n.is_finite()
    {
        return Scalar::Number(n);
    }
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Scalar::Bool(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Scalar::Bool(false),
        _ => Scalar::String(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_win_over_bool_spellings() {
        assert_eq!(cast_scalar("1"), Scalar::Number(1.0));
        assert_eq!(cast_scalar("-2.5e3"), Scalar::Number(-2500.0));
    }

    #[test]
    fn bool_spellings() {
        assert_eq!(cast_scalar("true"), Scalar::Bool(true));
        assert_eq!(cast_scalar("F"), Scalar::Bool(false));
        assert_eq!(cast_scalar("yes"), Scalar::String("yes".into()));
    }

    #[test]
    fn non_finite_stays_text() {
        assert_eq!(cast_scalar("NaN"), Scalar::String("NaN".into()));
        assert_eq!(cast_scalar("inf"), Scalar::String("inf".into()));
        assert_eq!(cast_scalar(""), Scalar::String(String::new()));
    }
}

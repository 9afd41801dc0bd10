use chumsky::prelude::*;
use cubekit_core::{Axis, Face};

use crate::{Family, LayerPrefix, ParseError, Token};

type Extra<'src> = extra::Err<Rich<'src, char>>;

/// Trait alias for parser.
trait TokenParser<'src, O>: Clone + Parser<'src, &'src str, O, Extra<'src>> {}
impl<'src, O, T> TokenParser<'src, O> for T where T: Clone + Parser<'src, &'src str, O, Extra<'src>> {}

/// Parses a single move or rotation token, such as `3Rw2'`.
pub fn parse_token(s: &str) -> Result<Token, ParseError> {
    token()
        .then_ignore(end())
        .parse(s)
        .into_result()
        .map_err(|errors| {
            for e in &errors {
                log::debug!("error parsing {s:?}: {e}");
            }
            ParseError::InvalidNotation(s.to_owned())
        })
}

fn token<'src>() -> impl TokenParser<'src, Token> {
    layer_prefix()
        .or_not()
        .then(family())
        .then(count().or_not())
        .then(just('\'').or_not().map(|prime| prime.is_some()))
        .map(|(((prefix, family), count), prime)| Token {
            prefix,
            family,
            count,
            prime,
        })
        .labelled("move")
}

fn layer_prefix<'src>() -> impl TokenParser<'src, LayerPrefix> {
    uint()
        .then(just('-').ignore_then(uint()).or_not())
        .map(|(lo, hi)| match hi {
            Some(hi) => LayerPrefix::Range(lo, hi),
            None => LayerPrefix::Single(lo),
        })
        .labelled("layer prefix")
}

fn family<'src>() -> impl TokenParser<'src, Family> {
    let wide_w = face("RLUDFB")
        .then(just('w').or_not())
        .map(|(face, w)| match w {
            Some(_) => Family::WideW(face),
            None => Family::Face(face),
        });

    choice((
        wide_w,
        face("rludfb").map(Family::WideLower),
        axis("MES").map(Family::Slice),
        axis("mes").map(Family::WideSlice),
        axis("xyz").map(Family::Rotation),
    ))
    .labelled("move family")
}

fn face<'src>(chars: &'static str) -> impl TokenParser<'src, Face> {
    one_of(chars).try_map(|c: char, span| {
        Face::from_symbol(c.to_ascii_uppercase())
            .ok_or_else(|| Rich::custom(span, format!("unknown face: {c}")))
    })
}

fn axis<'src>(chars: &'static str) -> impl TokenParser<'src, Axis> {
    one_of(chars).try_map(|c: char, span| match c {
        'M' | 'm' | 'x' => Ok(Axis::X),
        'E' | 'e' | 'y' => Ok(Axis::Y),
        'S' | 's' | 'z' => Ok(Axis::Z),
        _ => Err(Rich::custom(span, format!("unknown axis: {c}"))),
    })
}

fn count<'src>() -> impl TokenParser<'src, u8> {
    one_of('0'..='9').map(|c: char| c as u8 - b'0')
}

fn uint<'src>() -> impl TokenParser<'src, u8> {
    // allow leading zeros
    one_of('0'..='9')
        .repeated()
        .at_least(1)
        .to_slice()
        .try_map_with(|s: &str, e| s.parse::<u8>().map_err(|err| Rich::custom(e.span(), err)))
}

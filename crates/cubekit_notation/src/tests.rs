use cubekit_core::{Axis, CubeState, LAYER_COUNT_RANGE, LayerMask, Slice, StickerState};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

fn slice(axis: Axis, layers: LayerMask, direction: i32) -> Slice {
    Slice {
        axis,
        layers,
        direction,
    }
}

#[test]
fn test_face_turns() {
    assert_eq!(resolve_move("R", 3), Ok(slice(Axis::X, LayerMask::single(2), -1)));
    assert_eq!(resolve_move("L", 3), Ok(slice(Axis::X, LayerMask::single(0), 1)));
    assert_eq!(resolve_move("U", 3), Ok(slice(Axis::Y, LayerMask::single(2), -1)));
    assert_eq!(resolve_move("D", 3), Ok(slice(Axis::Y, LayerMask::single(0), 1)));
    assert_eq!(resolve_move("F", 3), Ok(slice(Axis::Z, LayerMask::single(2), -1)));
    assert_eq!(resolve_move("B", 3), Ok(slice(Axis::Z, LayerMask::single(0), 1)));

    assert_eq!(resolve_move("R'", 3), Ok(slice(Axis::X, LayerMask::single(2), 1)));
    assert_eq!(resolve_move("R2", 3), Ok(slice(Axis::X, LayerMask::single(2), -2)));
    assert_eq!(resolve_move("R2'", 3), Ok(slice(Axis::X, LayerMask::single(2), 2)));
    // Moves keep their full turn count.
    assert_eq!(resolve_move("R3", 3), Ok(slice(Axis::X, LayerMask::single(2), -3)));
}

#[test]
fn test_layer_prefixes() {
    assert_eq!(resolve_move("2R", 4), Ok(slice(Axis::X, LayerMask::single(2), -1)));
    assert_eq!(resolve_move("2L'", 6), Ok(slice(Axis::X, LayerMask::single(1), -1)));
    assert_eq!(resolve_move("3U", 3), Ok(slice(Axis::Y, LayerMask::single(0), -1)));

    assert_eq!(resolve_move("Rw", 4), Ok(slice(Axis::X, LayerMask::range(2..=3), -1)));
    assert_eq!(resolve_move("r", 4), Ok(slice(Axis::X, LayerMask::range(2..=3), -1)));
    assert_eq!(resolve_move("3Rw", 5), Ok(slice(Axis::X, LayerMask::range(2..=4), -1)));
    assert_eq!(resolve_move("3r2", 5), Ok(slice(Axis::X, LayerMask::range(2..=4), -2)));
    assert_eq!(resolve_move("Dw", 3), Ok(slice(Axis::Y, LayerMask::range(0..=1), 1)));
    assert_eq!(resolve_move("Rw", 2), Ok(slice(Axis::X, LayerMask::range(0..=1), -1)));

    assert_eq!(resolve_move("2-3l'", 5), Ok(slice(Axis::X, LayerMask::range(1..=2), -1)));
    assert_eq!(resolve_move("2-4R", 5), Ok(slice(Axis::X, LayerMask::range(1..=3), -1)));
}

#[test]
fn test_slice_moves() {
    assert_eq!(resolve_move("M", 3), Ok(slice(Axis::X, LayerMask::single(1), 1)));
    assert_eq!(resolve_move("E", 3), Ok(slice(Axis::Y, LayerMask::single(1), 1)));
    assert_eq!(resolve_move("S", 3), Ok(slice(Axis::Z, LayerMask::single(1), -1)));
    assert_eq!(resolve_move("M'", 5), Ok(slice(Axis::X, LayerMask::single(2), -1)));
    assert_eq!(resolve_move("2M", 5), Ok(slice(Axis::X, LayerMask::range(1..=3), 1)));
    assert_eq!(resolve_move("M", 4), Ok(slice(Axis::X, LayerMask::range(1..=2), 1)));
    assert_eq!(resolve_move("2M", 6), Ok(slice(Axis::X, LayerMask::range(1..=4), 1)));

    assert_eq!(resolve_move("m", 5), Ok(slice(Axis::X, LayerMask::range(1..=3), 1)));
    assert_eq!(resolve_move("2m", 7), Ok(slice(Axis::X, LayerMask::range(2..=4), 1)));
    assert_eq!(resolve_move("s'", 4), Ok(slice(Axis::Z, LayerMask::range(1..=2), 1)));

    let out_of_range = |notation: &str, layer_count| ParseError::LayerOutOfRange {
        notation: notation.to_owned(),
        layer_count,
    };
    assert_eq!(resolve_move("M", 2), Err(out_of_range("M", 2)));
    assert_eq!(resolve_move("2M", 3), Err(out_of_range("2M", 3)));
    assert_eq!(resolve_move("m", 2), Err(out_of_range("m", 2)));
    assert_eq!(resolve_move("2m", 4), Err(out_of_range("2m", 4)));
    assert_eq!(
        resolve_move("1-2M", 5),
        Err(ParseError::InvalidNotation("1-2M".to_owned())),
    );
}

#[test]
fn test_rotations() {
    assert_eq!(resolve_rotation("x", 3), Ok(Slice::rotation(Axis::X, -1)));
    assert_eq!(resolve_rotation("y'", 3), Ok(Slice::rotation(Axis::Y, 1)));
    assert_eq!(resolve_rotation("z2", 3), Ok(Slice::rotation(Axis::Z, -2)));
    assert_eq!(resolve_rotation("x3'", 3), Ok(Slice::rotation(Axis::X, 3)));
    // Rotations reduce their turn count.
    assert_eq!(resolve_rotation("y5", 3), Ok(Slice::rotation(Axis::Y, -1)));
    assert_eq!(resolve_rotation("y4", 3), Ok(Slice::rotation(Axis::Y, 0)));

    assert_eq!(resolve("x", 5), resolve_rotation("x", 5));
    assert_eq!(resolve("R", 5), resolve_move("R", 5));
}

#[test]
fn test_notation_errors() {
    let invalid = |s: &str| Err(ParseError::InvalidNotation(s.to_owned()));

    assert_eq!(resolve_move("Q", 3), invalid("Q"));
    assert_eq!(resolve_move("", 3), invalid(""));
    assert_eq!(resolve_move("R''", 3), invalid("R''"));
    assert_eq!(resolve_move("R10", 3), invalid("R10"));
    assert_eq!(resolve_move("R w", 3), invalid("R w"));
    assert_eq!(resolve_move("R0", 3), invalid("R0"));
    assert_eq!(resolve_move("x", 3), invalid("x"));
    assert_eq!(resolve_rotation("R", 3), invalid("R"));
    assert_eq!(resolve_rotation("2x", 3), invalid("2x"));
    assert_eq!(resolve_move("300R", 3), invalid("300R"));
    // Errors echo the text as written.
    assert_eq!(resolve_move("02R0", 3), invalid("02R0"));
    assert_eq!(resolve_rotation("02x", 3), invalid("02x"));

    let out_of_range = |notation: &str| {
        Err(ParseError::LayerOutOfRange {
            notation: notation.to_owned(),
            layer_count: 3,
        })
    };
    assert_eq!(resolve_move("8-9R", 3), out_of_range("8-9R"));
    assert_eq!(resolve_move("3-2R", 3), out_of_range("3-2R"));
    assert_eq!(resolve_move("2-2R", 3), out_of_range("2-2R"));
    assert_eq!(resolve_move("0R", 3), out_of_range("0R"));
    assert_eq!(resolve_move("4R", 3), out_of_range("4R"));
    assert_eq!(resolve_move("4Rw", 3), out_of_range("4Rw"));
    assert_eq!(resolve_move("0Rw", 3), out_of_range("0Rw"));
    assert_eq!(resolve_move("0r", 3), out_of_range("0r"));

    assert!(matches!(resolve_move("R", 8), Err(ParseError::Config(_))));
}

#[test]
fn test_huge_layer_prefixes() {
    for text in ["200m", "255m", "200M", "255Rw", "255r", "200R", "1-255R"] {
        assert_eq!(
            resolve_move(text, 7),
            Err(ParseError::LayerOutOfRange {
                notation: text.to_owned(),
                layer_count: 7,
            }),
        );
    }
}

#[test]
fn test_sequences() {
    let slices = resolve_sequence("  R U\tR'  U' ", 3).unwrap();
    assert_eq!(slices.len(), 4);
    assert_eq!(slices[2], slice(Axis::X, LayerMask::single(2), 1));
    assert_eq!(resolve_sequence("", 3), Ok(vec![]));
    assert_eq!(
        resolve_sequence("R Q U", 3),
        Err(ParseError::InvalidNotation("Q".to_owned())),
    );

    let mut cube = CubeState::new(3).unwrap();
    for slice in resolve_sequence("R U R' U'", 3).unwrap() {
        cube.turn(slice);
    }
    assert_eq!(
        StickerState::capture(&cube).to_kociemba(),
        "UULUUFUUFRRUBRRURRFFDFFUFFFDDRDDDDDDBLLLLLLLLBRRBBBBBB",
    );
}

#[test]
fn test_token_display() {
    for s in ["R", "R'", "R2", "Rw2'", "3Rw", "2-3l'", "M", "2m", "x", "y2'", "S3"] {
        assert_eq!(parse_token(s).unwrap().to_string(), s);
    }
    assert_eq!(
        parse_token("3r2'"),
        Ok(Token {
            prefix: Some(LayerPrefix::Single(3)),
            family: Family::WideLower(cubekit_core::Face::R),
            count: Some(2),
            prime: true,
        }),
    );
}

fn arb_family() -> impl Strategy<Value = Family> {
    use cubekit_core::Face;

    let faces = prop::sample::select(vec![Face::R, Face::L, Face::U, Face::D, Face::F, Face::B]);
    let axes = prop::sample::select(vec![Axis::X, Axis::Y, Axis::Z]);
    prop_oneof![
        faces.clone().prop_map(Family::Face),
        faces.clone().prop_map(Family::WideW),
        faces.prop_map(Family::WideLower),
        axes.clone().prop_map(Family::Slice),
        axes.clone().prop_map(Family::WideSlice),
        axes.prop_map(Family::Rotation),
    ]
}

fn arb_token() -> impl Strategy<Value = Token> {
    let prefix = prop_oneof![
        Just(None),
        (0..=9_u8).prop_map(|k| Some(LayerPrefix::Single(k))),
        (0..=9_u8, 0..=9_u8).prop_map(|(lo, hi)| Some(LayerPrefix::Range(lo, hi))),
    ];
    (prefix, arb_family(), prop::option::of(0..=9_u8), any::<bool>()).prop_map(
        |(prefix, family, count, prime)| Token {
            prefix,
            family,
            count,
            prime,
        },
    )
}

proptest! {
    #[test]
    fn proptest_token_roundtrip(token in arb_token()) {
        prop_assert_eq!(parse_token(&token.to_string()), Ok(token));
    }

    #[test]
    fn proptest_resolved_layers_in_range(token in arb_token(), layer_count in LAYER_COUNT_RANGE) {
        if let Ok(slice) = token.resolve(layer_count) {
            prop_assert!(slice.layers.iter().all(|layer| layer < layer_count));
            prop_assert_eq!(slice.is_rotation(), token.family.is_rotation());
            prop_assert_eq!(slice.layers.is_empty(), token.family.is_rotation());
            prop_assert_eq!(slice.axis, token.family.axis());
        }
    }
}
